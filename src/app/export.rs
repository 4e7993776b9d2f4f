//! Text renditions of a result for the clipboard and CSV export.

use chrono::{DateTime, Local};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::{ResultBody, ResultEnvelope};
use crate::ports::ExportError;
use crate::result_processor::ProcessedRows;

/// Comma-separated, header first, `\n` line ends. Every field is quoted and
/// inner quotes are doubled, so commas, tabs and line breaks survive.
pub fn to_csv<'a, I>(headers: &[String], rows: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .map_err(|e| ExportError::Encoding(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| ExportError::Encoding(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Encoding(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Encoding(e.to_string()))
}

/// Tab-separated, header first. Tabs and line breaks inside cells become
/// spaces so every row stays on one line.
pub fn to_tsv<'a, I>(headers: &[String], rows: I) -> String
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut lines = vec![tsv_line(headers)];
    lines.extend(rows.into_iter().map(tsv_line));
    lines.join("\n")
}

fn tsv_line(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| c.replace(['\t', '\r', '\n'], " "))
        .collect::<Vec<_>>()
        .join("\t")
}

/// A result captured for copying. Row formatting happens later, off the
/// reducer loop.
#[derive(Debug, Clone)]
pub enum ClipboardPayload {
    Rows(ProcessedRows),
    Message(String),
}

impl ClipboardPayload {
    /// Processed rows for a table (raw executor order when no table is
    /// mounted), the raw text for a message.
    pub fn capture(envelope: &ResultEnvelope, processed: Option<&ProcessedRows>) -> Self {
        match (envelope.body(), processed) {
            (ResultBody::Table(_), Some(rows)) => Self::Rows(rows.clone()),
            (ResultBody::Table(table), None) => {
                Self::Rows(ProcessedRows::unprocessed(std::sync::Arc::clone(table)))
            }
            (ResultBody::Message(text), _) => Self::Message(text.clone()),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Self::Rows(rows) => to_tsv(rows.source().headers(), rows.iter()),
            Self::Message(text) => text.clone(),
        }
    }
}

pub fn export_file_name(at: DateTime<Local>) -> String {
    format!("query_results_{}.csv", at.format("%Y%m%d_%H%M%S"))
}
