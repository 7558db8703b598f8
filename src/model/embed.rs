use std::fmt;

use serde::{Deserialize, Serialize};

/// Chat-platform agnostic description of a rich message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedDto {
    pub title: String,
    pub description: String,
    /// RGB color of the message accent
    pub color: u32,
    pub fields: Vec<EmbedFieldDto>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedFieldDto {
    pub name: String,
    pub value: String,
    /// Whether the field may share a row with its neighbours
    pub inline: bool,
}

impl EmbedFieldDto {
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }

    /// Field occupying a full row.
    pub fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Plain-text rendering for terminals and logs.
impl fmt::Display for EmbedDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }

        for field in &self.fields {
            if field.inline {
                writeln!(f, "{} {}", field.name, field.value)?;
            } else {
                writeln!(f, "{}", field.name)?;
                for line in field.value.lines() {
                    writeln!(f, "  {}", line)?;
                }
            }
        }

        if let Some(footer) = &self.footer {
            writeln!(f, "{}", footer)?;
        }

        Ok(())
    }
}
