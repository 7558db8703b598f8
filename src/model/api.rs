use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::embed::EmbedDto;

/// The reply sent back for a command invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyDto {
    /// Rich message
    Embed(EmbedDto),
    /// Plain text message
    Text {
        /// The message content
        content: String,
    },
}

impl ReplyDto {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }
}

impl fmt::Display for ReplyDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embed(embed) => write!(f, "{}", embed),
            Self::Text { content } => writeln!(f, "{}", content),
        }
    }
}
