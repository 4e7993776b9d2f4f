use std::sync::Arc;

use crate::tabular::TabularResult;

/// Outcome category of a query run, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    Success,
    Loading,
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultBody {
    Table(Arc<TabularResult>),
    Message(String),
}

/// A tabular result or a plain message, tagged with a status.
///
/// Only `Success` may carry a table; the constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEnvelope {
    status: ResultStatus,
    body: ResultBody,
}

impl ResultEnvelope {
    pub fn table(result: impl Into<Arc<TabularResult>>) -> Self {
        Self {
            status: ResultStatus::Success,
            body: ResultBody::Table(result.into()),
        }
    }

    pub fn success_message(message: impl Into<String>) -> Self {
        Self::message(ResultStatus::Success, message)
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self::message(ResultStatus::Loading, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::message(ResultStatus::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::message(ResultStatus::Warning, message)
    }

    pub fn message(status: ResultStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResultBody::Message(message.into()),
        }
    }

    pub fn status(&self) -> ResultStatus {
        self.status
    }

    pub fn body(&self) -> &ResultBody {
        &self.body
    }

    pub fn as_table(&self) -> Option<&Arc<TabularResult>> {
        match &self.body {
            ResultBody::Table(table) => Some(table),
            ResultBody::Message(_) => None,
        }
    }

    pub fn as_message(&self) -> Option<&str> {
        match &self.body {
            ResultBody::Message(msg) => Some(msg),
            ResultBody::Table(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == ResultStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_envelope_is_success() {
        let table = TabularResult::new(vec!["a".to_string()], vec![]).unwrap();

        let envelope = ResultEnvelope::table(table);

        assert_eq!(envelope.status(), ResultStatus::Success);
        assert!(envelope.as_table().is_some());
        assert!(envelope.as_message().is_none());
    }

    #[test]
    fn error_envelope_carries_message_only() {
        let envelope = ResultEnvelope::error("Please enter an SQL query.");

        assert!(envelope.is_error());
        assert_eq!(envelope.as_message(), Some("Please enter an SQL query."));
        assert!(envelope.as_table().is_none());
    }

    #[test]
    fn warning_and_loading_keep_their_status() {
        assert_eq!(
            ResultEnvelope::warning("Please run the query.").status(),
            ResultStatus::Warning
        );
        assert_eq!(
            ResultEnvelope::loading("Loading results...").status(),
            ResultStatus::Loading
        );
    }
}
