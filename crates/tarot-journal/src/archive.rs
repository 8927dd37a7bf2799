//! Backup documents: the whole history plus the visual style.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tarot_core::Reading;

use crate::error::{JournalError, JournalResult};
use crate::prefs::VisualStyle;

/// Format version written into new archives.
pub const ARCHIVE_VERSION: &str = "5.2.0";

/// An export/import document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    /// Format version string.
    pub version: String,
    /// Readings, newest first.
    pub history: Vec<Reading>,
    /// When the archive was written.
    pub export_date: Option<DateTime<Utc>>,
    /// Visual style at export time.
    pub visual_style: Option<VisualStyle>,
}

impl Archive {
    /// Snapshot `history` for export.
    pub fn new(history: &[Reading], visual_style: VisualStyle, now: DateTime<Utc>) -> Self {
        Self {
            version: ARCHIVE_VERSION.to_string(),
            history: history.to_vec(),
            export_date: Some(now),
            visual_style: Some(visual_style),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> JournalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and decode an import document.
    ///
    /// The document must be a JSON object with a `history` array whose
    /// entries are readings. Other fields are optional; an unknown visual
    /// style is ignored.
    pub fn parse(text: &str) -> JournalResult<Self> {
        let mut value: Value = serde_json::from_str(text)
            .map_err(|e| JournalError::InvalidImportFormat(format!("not valid JSON: {e}")))?;

        let history = match value.get_mut("history").map(Value::take) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(JournalError::InvalidImportFormat(
                    "`history` is not an array".into(),
                ));
            }
            None => {
                return Err(JournalError::InvalidImportFormat(
                    "missing `history` field".into(),
                ));
            }
        };
        let history: Vec<Reading> = serde_json::from_value(Value::Array(history))
            .map_err(|e| JournalError::InvalidImportFormat(format!("bad reading in history: {e}")))?;

        let version = value
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let export_date = value
            .get("exportDate")
            .and_then(|v| serde_json::from_value(v.clone()).ok());
        let visual_style = value
            .get("visualStyle")
            .and_then(Value::as_str)
            .and_then(VisualStyle::parse);

        log::debug!("parsed archive version '{version}' with {} readings", history.len());

        Ok(Self {
            version,
            history,
            export_date,
            visual_style,
        })
    }
}
