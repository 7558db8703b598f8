use clap::{Parser, Subcommand};
use ulsbot::{
    model::api::ReplyDto,
    server::{config::Config, controller::fcc, model::app::AppState, startup},
};

#[derive(Parser, Debug)]
#[command(
    name = "ulsbot",
    about = "Look up FCC amateur radio licenses from a ULS replica",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current license for a call sign
    Call {
        /// Call sign to look up, case-insensitive
        callsign: String,
        /// Print the reply as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show replica freshness and lookup latency
    Status {
        /// Print the reply as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    let state = AppState::from(db);

    let (reply, json) = match cli.command {
        Command::Call { callsign, json } => (fcc::call(&state, &callsign).await, json),
        Command::Status { json } => (fcc::status(&state).await, json),
    };

    print_reply(&reply, json);
}

fn print_reply(reply: &ReplyDto, json: bool) {
    if !json {
        print!("{}", reply);
        return;
    }

    match serde_json::to_string_pretty(reply) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize reply: {}", e);
            std::process::exit(1);
        }
    }
}
