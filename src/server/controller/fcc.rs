use chrono::{NaiveDate, Utc};

use crate::{
    model::{
        api::ReplyDto,
        embed::{EmbedDto, EmbedFieldDto},
    },
    server::{
        error::{Error, IntoReply},
        model::{app::AppState, license::LicenseView, status::SystemStatus},
        service::{
            license::{normalize_callsign, LicenseService},
            status::StatusService,
        },
        util::time::{format_timestamp, format_uls_date},
    },
};

pub static STATUS_TITLE: &str = "ULS Replica Status";

static COLOR_ACTIVE: u32 = 0x007f00;
static COLOR_INACTIVE: u32 = 0xff0000;
static COLOR_TERM_PENDING: u32 = 0xff7f00;
static COLOR_OTHER: u32 = 0x7f7f7f;

/// Look up the current license for a call sign
///
/// # Returns
/// - `ReplyDto::Embed` - The license, rendered by [`render_license`]
/// - `ReplyDto::Text` - No license on file, or the lookup failed
pub async fn call(state: &AppState, callsign: &str) -> ReplyDto {
    let license_service = LicenseService::new(&state.db);

    match license_service.find_by_callsign(callsign).await {
        Ok(Some(view)) => ReplyDto::Embed(render_license(&view, Utc::now().date_naive())),
        Ok(None) => {
            tracing::debug!("No license found for {:?}", callsign);

            ReplyDto::text(format!(
                "No results found for {}.",
                normalize_callsign(callsign)
            ))
        }
        Err(e) => e.into_reply(),
    }
}

/// Report replica freshness and lookup latency
pub async fn status(state: &AppState) -> ReplyDto {
    let status_service = StatusService::new(&state.db);

    status_service
        .get_status()
        .await
        .map(|status| ReplyDto::Embed(render_status(&status)))
        .unwrap_or_else(Error::into_reply)
}

/// Renders a license as an embed.
///
/// `today` decides whether the expiry date is labelled as past or upcoming.
pub fn render_license(view: &LicenseView, today: NaiveDate) -> EmbedDto {
    let record = view.record();
    let status = view.status();

    let mut fields = Vec::new();
    let mut push_date = |name: &str, date: Option<NaiveDate>| {
        if let Some(date) = date {
            fields.push(EmbedFieldDto::inline(name, format_uls_date(date)));
        }
    };

    push_date("Granted:", view.grant_date());
    push_date("Effective:", view.effective_date());
    match view.expire_date() {
        Some(date) if date < today => push_date("Expired:", Some(date)),
        date => push_date("Expires:", date),
    }
    push_date("Canceled:", view.cancel_date());
    push_date("Last Action:", view.last_action_date());

    EmbedDto {
        title: format!(
            "{} ({} {})",
            view.callsign(),
            status,
            view.applicant_type()
        ),
        description: license_description(view),
        color: status_color(status.code()),
        fields,
        footer: Some(format!("FCC Record #{}", record.id)),
    }
}

fn license_description(view: &LicenseView) -> String {
    let record = view.record();

    let mut lines = vec![
        view.name(),
        view.attention_line().unwrap_or_default(),
        trimmed(&record.po_box),
        trimmed(&record.street_address),
    ];

    let city = trimmed(&record.city);
    let state = trimmed(&record.state);
    let zip = view.zip();
    if !(city.is_empty() && state.is_empty() && zip.is_empty()) {
        lines.push(format!("{}, {} {}", city, state, zip).trim().to_string());
    }

    if !trimmed(&record.operator_class_code).is_empty() {
        lines.push(format!("Operator Class: {}", view.operator_class()));
    }

    let trustee_callsign = trimmed(&record.trustee_callsign);
    if !trustee_callsign.is_empty() {
        lines.push(
            format!("Trustee: {} {}", trustee_callsign, trimmed(&record.trustee_name))
                .trim_end()
                .to_string(),
        );
    }

    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn status_color(code: &str) -> u32 {
    match code {
        "A" => COLOR_ACTIVE,
        "C" | "E" | "T" => COLOR_INACTIVE,
        "X" => COLOR_TERM_PENDING,
        _ => COLOR_OTHER,
    }
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().trim().to_string()
}

/// Renders the replica status report as an embed with one field per logical database.
pub fn render_status(status: &SystemStatus) -> EmbedDto {
    let fields = status
        .databases
        .iter()
        .map(|database| {
            let mut lines = vec![format!(
                "Last full update: {}",
                format_timestamp(database.last_full_update)
            )];

            if database.incremental_updates_applied.is_empty() {
                lines.push("No incremental updates applied".to_string());
            } else {
                lines.extend(
                    database
                        .incremental_updates_applied
                        .iter()
                        .map(|update| {
                            format!("{}: {}", update.day, format_timestamp(update.timestamp))
                        }),
                );
            }

            EmbedFieldDto::block(database.database.to_string(), lines.join("\n"))
        })
        .collect();

    EmbedDto {
        title: STATUS_TITLE.to_string(),
        description: format!("Lookup latency: {} ms", status.latency_ms),
        color: COLOR_OTHER,
        fields,
        footer: None,
    }
}
