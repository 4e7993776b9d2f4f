//! Clipboard and CSV export sub-reducer.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::export::{ClipboardPayload, export_file_name};
use crate::state::AppState;

pub const NOTHING_TO_COPY: &str = "Nothing to copy.";
pub const NOTHING_TO_EXPORT: &str = "No table to export.";
pub const COPIED: &str = "Copied to clipboard.";

pub fn reduce_output(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::CopyResult => {
            let Some(envelope) = state.session.result() else {
                state.feedback.error(NOTHING_TO_COPY, now);
                return Some(vec![]);
            };
            let payload = ClipboardPayload::capture(envelope, state.table.processed());
            Some(vec![Effect::CopyToClipboard { payload }])
        }
        Action::ExportCsv { at } => {
            let Some(rows) = state.table.processed() else {
                state.feedback.error(NOTHING_TO_EXPORT, now);
                return Some(vec![]);
            };
            Some(vec![Effect::ExportCsv {
                rows: rows.clone(),
                file_name: export_file_name(*at),
            }])
        }
        Action::ClipboardWritten => {
            state.feedback.success(COPIED, now);
            Some(vec![])
        }
        Action::ClipboardFailed(reason) => {
            state.feedback.error(format!("Copy failed: {reason}"), now);
            Some(vec![])
        }
        Action::ExportSucceeded(path) => {
            state
                .feedback
                .success(format!("Exported to {}", path.display()), now);
            Some(vec![])
        }
        Action::ExportFailed(reason) => {
            state.feedback.error(format!("Export failed: {reason}"), now);
            Some(vec![])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use chrono::{Local, TimeZone};

    use super::*;
    use crate::domain::TabularResult;
    use crate::feedback::FeedbackKind;
    use crate::ports::ExecutionOutcome;
    use crate::session::RunStart;

    fn with_table(state: &mut AppState) {
        state.session.set_query_input("SELECT * FROM Orders;");
        let RunStart::Started { generation, .. } = state.session.begin_run() else {
            panic!("run should start");
        };
        let table = TabularResult::new(
            vec!["OrderID".to_string(), "CustomerName".to_string()],
            vec![
                vec!["ORD001".to_string(), "Doe, John".to_string()],
                vec!["ORD002".to_string(), "Jane Smith".to_string()],
            ],
        )
        .unwrap();
        state
            .session
            .complete_run(generation, ExecutionOutcome::Table(table), Local::now());
        let source = Arc::clone(state.session.result().unwrap().as_table().unwrap());
        state.table.mount(source);
    }

    #[test]
    fn copy_without_result_reports_error() {
        let mut state = AppState::default();

        let effects = reduce_output(&mut state, &Action::CopyResult, Instant::now()).unwrap();

        assert!(effects.is_empty());
        assert_eq!(state.feedback.text_of(FeedbackKind::Error), Some(NOTHING_TO_COPY));
    }

    #[test]
    fn copy_table_captures_rows_for_tsv() {
        let mut state = AppState::default();
        with_table(&mut state);

        let effects = reduce_output(&mut state, &Action::CopyResult, Instant::now()).unwrap();

        assert!(matches!(
            effects.as_slice(),
            [Effect::CopyToClipboard { payload: payload @ ClipboardPayload::Rows(_) }]
                if payload.text() == "OrderID\tCustomerName\nORD001\tDoe, John\nORD002\tJane Smith"
        ));
    }

    #[test]
    fn copy_message_emits_raw_text() {
        let mut state = AppState::default();
        state.session.select_history("SELECT 1;");

        let effects = reduce_output(&mut state, &Action::CopyResult, Instant::now()).unwrap();

        assert!(matches!(
            effects.as_slice(),
            [Effect::CopyToClipboard { payload: ClipboardPayload::Message(text) }]
                if text == "Please run the query."
        ));
    }

    #[test]
    fn export_captures_processed_rows_with_timestamped_name() {
        let mut state = AppState::default();
        with_table(&mut state);
        let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let effects = reduce_output(&mut state, &Action::ExportCsv { at }, Instant::now()).unwrap();

        assert!(matches!(
            effects.as_slice(),
            [Effect::ExportCsv { rows, file_name }]
                if rows.len() == 2
                    && rows.row(0) == Some(&["ORD001".to_string(), "Doe, John".to_string()][..])
                    && file_name == "query_results_20240102_030405.csv"
        ));
    }

    #[test]
    fn export_without_table_reports_error() {
        let mut state = AppState::default();

        let effects = reduce_output(
            &mut state,
            &Action::ExportCsv { at: Local::now() },
            Instant::now(),
        )
        .unwrap();

        assert!(effects.is_empty());
        assert_eq!(state.feedback.text_of(FeedbackKind::Error), Some(NOTHING_TO_EXPORT));
    }

    #[test]
    fn feedback_actions_set_messages() {
        let mut state = AppState::default();
        let now = Instant::now();

        reduce_output(&mut state, &Action::ClipboardWritten, now);
        assert_eq!(state.feedback.text_of(FeedbackKind::Success), Some(COPIED));

        reduce_output(&mut state, &Action::ClipboardFailed("no display".to_string()), now);
        assert_eq!(
            state.feedback.text_of(FeedbackKind::Error),
            Some("Copy failed: no display")
        );

        reduce_output(
            &mut state,
            &Action::ExportSucceeded(PathBuf::from("/tmp/out.csv")),
            now,
        );
        assert_eq!(
            state.feedback.text_of(FeedbackKind::Success),
            Some("Exported to /tmp/out.csv")
        );
    }
}
