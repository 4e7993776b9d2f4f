//! Executes side effects returned by the reducer.
//!
//! Slow work (query execution, page fetches, file and clipboard I/O) runs on
//! spawned tasks and reports back through the action channel. Only rendering
//! happens inline, since it needs the state.
//!
//! Persistence goes through a single writer task, so snapshots land in the
//! order the reducer produced them.

use std::sync::Arc;

use chrono::Local;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::action::Action;
use crate::domain::{HistoryEntry, SavedQuery};
use crate::effect::Effect;
use crate::export::to_csv;
use crate::ports::{
    ClipboardWriter, QueryExecutor, Renderer, ResultExporter, SessionStore, StoreError,
};
use crate::state::AppState;
use crate::table_view::PageRequest;

enum PersistJob {
    History(Vec<HistoryEntry>),
    SavedQueries(Vec<SavedQuery>),
}

impl PersistJob {
    fn label(&self) -> &'static str {
        match self {
            Self::History(_) => "history",
            Self::SavedQueries(_) => "saved queries",
        }
    }

    fn write(self, store: &dyn SessionStore) -> Result<(), StoreError> {
        match self {
            Self::History(entries) => store.save_history(&entries),
            Self::SavedQueries(queries) => store.save_saved_queries(&queries),
        }
    }
}

/// Writes jobs one at a time until every sender is gone.
fn spawn_persist_writer(store: Arc<dyn SessionStore>) -> mpsc::UnboundedSender<PersistJob> {
    let (tx, mut rx) = mpsc::unbounded_channel::<PersistJob>();
    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            let label = job.label();
            let store = Arc::clone(&store);
            let result = tokio::task::spawn_blocking(move || job.write(store.as_ref())).await;
            log_persist_failure(label, result);
        }
    });
    tx
}

pub struct EffectRunner {
    query_executor: Arc<dyn QueryExecutor>,
    persist_tx: mpsc::UnboundedSender<PersistJob>,
    clipboard: Arc<dyn ClipboardWriter>,
    exporter: Arc<dyn ResultExporter>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(
        query_executor: Arc<dyn QueryExecutor>,
        session_store: Arc<dyn SessionStore>,
        clipboard: Arc<dyn ClipboardWriter>,
        exporter: Arc<dyn ResultExporter>,
        action_tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            query_executor,
            persist_tx: spawn_persist_writer(session_store),
            clipboard,
            exporter,
            action_tx,
        }
    }

    pub async fn run<R: Renderer>(
        &self,
        effects: Vec<Effect>,
        renderer: &mut R,
        state: &mut AppState,
    ) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Sequence(seq_effects) => {
                    for seq_effect in seq_effects {
                        self.run_single(seq_effect, renderer, state).await?;
                    }
                }
                single_effect => self.run_single(single_effect, renderer, state).await?,
            }
        }
        Ok(())
    }

    async fn run_single<R: Renderer>(
        &self,
        effect: Effect,
        renderer: &mut R,
        state: &mut AppState,
    ) -> Result<()> {
        match effect {
            Effect::Render => {
                let output = renderer.draw(state)?;
                if let Some((width, height)) = output.result_viewport
                    && (width, height) != state.table.viewport_size()
                {
                    self.dispatch(Action::ViewportMeasured { width, height })
                        .await;
                }
                Ok(())
            }
            Effect::ExecuteQuery { query, generation } => {
                self.spawn_query(query, generation);
                Ok(())
            }
            Effect::FetchPage(request) => {
                self.spawn_page_fetch(request);
                Ok(())
            }
            Effect::PersistHistory(entries) => {
                self.enqueue_persist(PersistJob::History(entries));
                Ok(())
            }
            Effect::PersistSavedQueries(queries) => {
                self.enqueue_persist(PersistJob::SavedQueries(queries));
                Ok(())
            }
            Effect::CopyToClipboard { payload } => {
                let clipboard = Arc::clone(&self.clipboard);
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let result =
                        tokio::task::spawn_blocking(move || clipboard.write(&payload.text())).await;
                    let action = match result {
                        Ok(Ok(())) => Action::ClipboardWritten,
                        Ok(Err(e)) => Action::ClipboardFailed(e.to_string()),
                        Err(e) => Action::ClipboardFailed(format!("Task panicked: {e}")),
                    };
                    let _ = tx.send(action).await;
                });
                Ok(())
            }
            Effect::ExportCsv { rows, file_name } => {
                let exporter = Arc::clone(&self.exporter);
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let result = tokio::task::spawn_blocking(move || {
                        let contents = to_csv(rows.source().headers(), rows.iter())?;
                        exporter.export_csv(&contents, &file_name)
                    })
                    .await;
                    let action = match result {
                        Ok(Ok(path)) => Action::ExportSucceeded(path),
                        Ok(Err(e)) => Action::ExportFailed(e.to_string()),
                        Err(e) => Action::ExportFailed(format!("Task panicked: {e}")),
                    };
                    let _ = tx.send(action).await;
                });
                Ok(())
            }
            Effect::DispatchActions(actions) => {
                for action in actions {
                    self.dispatch(action).await;
                }
                Ok(())
            }
            Effect::Sequence(effects) => {
                for effect in effects {
                    Box::pin(self.run_single(effect, renderer, state)).await?;
                }
                Ok(())
            }
        }
    }

    fn enqueue_persist(&self, job: PersistJob) {
        let label = job.label();
        if self.persist_tx.send(job).is_err() {
            warn!("persist writer stopped, dropping {label} snapshot");
        }
    }

    async fn dispatch(&self, action: Action) {
        if self.action_tx.send(action).await.is_err() {
            debug!("action channel closed, dropping action");
        }
    }

    fn spawn_query(&self, query: String, generation: u64) {
        let executor = Arc::clone(&self.query_executor);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = executor.execute(&query).await;
            let _ = tx
                .send(Action::QueryCompleted {
                    generation,
                    outcome,
                    executed_at: Local::now(),
                })
                .await;
        });
    }

    fn spawn_page_fetch(&self, request: PageRequest) {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let generation = request.generation;
            let fetch = tokio::spawn(async move {
                request.fetcher.fetch_page_async(request.page).await
            });
            let action = match fetch.await {
                Ok(page) => Action::PageLoaded { generation, page },
                Err(e) => {
                    warn!(generation, error = %e, "page fetch task failed");
                    Action::PageFailed { generation }
                }
            };
            let _ = tx.send(action).await;
        });
    }
}

fn log_persist_failure<E: std::fmt::Display>(
    what: &str,
    result: Result<Result<(), E>, tokio::task::JoinError>,
) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "failed to persist {what}"),
        Err(e) => warn!(error = %e, "persist task for {what} panicked"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use std::sync::Mutex;

    use super::*;
    use crate::domain::TabularResult;
    use crate::export::ClipboardPayload;
    use crate::pagination::PageFetcher;
    use crate::result_processor::ProcessedRows;
    use crate::ports::{
        ClipboardError, ExecutionOutcome, ExportError, MockClipboardWriter, MockQueryExecutor,
        MockResultExporter, MockSessionStore, RenderOutput, StoreError,
    };

    struct RecordingRenderer {
        draws: usize,
        viewport: Option<(u16, u16)>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, _state: &mut AppState) -> Result<RenderOutput> {
            self.draws += 1;
            Ok(RenderOutput {
                result_viewport: self.viewport,
            })
        }
    }

    fn renderer() -> RecordingRenderer {
        RecordingRenderer {
            draws: 0,
            viewport: None,
        }
    }

    struct Ports {
        executor: MockQueryExecutor,
        store: MockSessionStore,
        clipboard: MockClipboardWriter,
        exporter: MockResultExporter,
    }

    impl Ports {
        fn new() -> Self {
            Self {
                executor: MockQueryExecutor::new(),
                store: MockSessionStore::new(),
                clipboard: MockClipboardWriter::new(),
                exporter: MockResultExporter::new(),
            }
        }

        fn into_runner(self) -> (EffectRunner, mpsc::Receiver<Action>) {
            let (tx, rx) = mpsc::channel(16);
            let runner = EffectRunner::new(
                Arc::new(self.executor),
                Arc::new(self.store),
                Arc::new(self.clipboard),
                Arc::new(self.exporter),
                tx,
            );
            (runner, rx)
        }
    }

    fn id_rows() -> ProcessedRows {
        let source = TabularResult::new(vec!["ID".to_string()], vec![vec!["E001".to_string()]])
            .unwrap();
        ProcessedRows::unprocessed(Arc::new(source))
    }

    async fn next_action(rx: &mut mpsc::Receiver<Action>) -> Action {
        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("action should arrive")
            .expect("channel open")
    }

    mod render {
        use super::*;

        #[tokio::test]
        async fn draws_and_reports_new_viewport() {
            let (runner, mut rx) = Ports::new().into_runner();
            let mut renderer = RecordingRenderer {
                draws: 0,
                viewport: Some((80, 20)),
            };
            let mut state = AppState::default();

            runner
                .run(vec![Effect::Render], &mut renderer, &mut state)
                .await
                .unwrap();

            assert_eq!(renderer.draws, 1);
            assert_eq!(
                next_action(&mut rx).await,
                Action::ViewportMeasured {
                    width: 80,
                    height: 20
                }
            );
        }

        #[tokio::test]
        async fn unchanged_viewport_sends_nothing() {
            let (runner, mut rx) = Ports::new().into_runner();
            let mut renderer = RecordingRenderer {
                draws: 0,
                viewport: Some((80, 20)),
            };
            let mut state = AppState::default();
            state.table.measure(80, 20);

            runner
                .run(vec![Effect::Render], &mut renderer, &mut state)
                .await
                .unwrap();

            assert!(rx.try_recv().is_err());
        }
    }

    #[tokio::test]
    async fn execute_query_reports_completion_with_generation() {
        let mut ports = Ports::new();
        ports
            .executor
            .expect_execute()
            .withf(|q| q == "SELECT 1;")
            .times(1)
            .returning(|_| ExecutionOutcome::Empty);
        let (runner, mut rx) = ports.into_runner();

        runner
            .run(
                vec![Effect::ExecuteQuery {
                    query: "SELECT 1;".to_string(),
                    generation: 7,
                }],
                &mut renderer(),
                &mut AppState::default(),
            )
            .await
            .unwrap();

        let action = next_action(&mut rx).await;
        assert!(matches!(
            action,
            Action::QueryCompleted {
                generation: 7,
                outcome: ExecutionOutcome::Empty,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn fetch_page_sends_loaded_page() {
        let (runner, mut rx) = Ports::new().into_runner();
        let rows = (0..150)
            .map(|i| vec![format!("ITEM-{i:05}")])
            .collect::<Vec<_>>();
        let source = Arc::new(TabularResult::new(vec!["ID".to_string()], rows).unwrap());
        let fetcher = Arc::new(PageFetcher::new(ProcessedRows::unprocessed(source), 100));

        runner
            .run(
                vec![Effect::FetchPage(PageRequest {
                    fetcher,
                    generation: 3,
                    page: 1,
                })],
                &mut renderer(),
                &mut AppState::default(),
            )
            .await
            .unwrap();

        match next_action(&mut rx).await {
            Action::PageLoaded { generation, page } => {
                assert_eq!(generation, 3);
                assert_eq!(page.rows.len(), 50);
                assert!(!page.has_more);
            }
            other => panic!("expected PageLoaded, got {other:?}"),
        }
    }

    mod clipboard {
        use super::*;

        #[tokio::test]
        async fn success_reports_written() {
            let mut ports = Ports::new();
            ports
                .clipboard
                .expect_write()
                .withf(|c| c == "ID\nE001")
                .times(1)
                .returning(|_| Ok(()));
            let (runner, mut rx) = ports.into_runner();

            runner
                .run(
                    vec![Effect::CopyToClipboard {
                        payload: ClipboardPayload::Rows(id_rows()),
                    }],
                    &mut renderer(),
                    &mut AppState::default(),
                )
                .await
                .unwrap();

            assert_eq!(next_action(&mut rx).await, Action::ClipboardWritten);
        }

        #[tokio::test]
        async fn failure_reports_reason() {
            let mut ports = Ports::new();
            ports
                .clipboard
                .expect_write()
                .returning(|_| Err(ClipboardError::Unavailable("no display".to_string())));
            let (runner, mut rx) = ports.into_runner();

            runner
                .run(
                    vec![Effect::CopyToClipboard {
                        payload: ClipboardPayload::Message("x".to_string()),
                    }],
                    &mut renderer(),
                    &mut AppState::default(),
                )
                .await
                .unwrap();

            assert_eq!(
                next_action(&mut rx).await,
                Action::ClipboardFailed("Clipboard unavailable: no display".to_string())
            );
        }
    }

    mod export {
        use super::*;

        #[tokio::test]
        async fn success_reports_path() {
            let mut ports = Ports::new();
            ports
                .exporter
                .expect_export_csv()
                .withf(|contents, name| contents == "\"ID\"\n\"E001\"\n" && name == "out.csv")
                .returning(|_, name| Ok(PathBuf::from("/data").join(name)));
            let (runner, mut rx) = ports.into_runner();

            runner
                .run(
                    vec![Effect::ExportCsv {
                        rows: id_rows(),
                        file_name: "out.csv".to_string(),
                    }],
                    &mut renderer(),
                    &mut AppState::default(),
                )
                .await
                .unwrap();

            assert_eq!(
                next_action(&mut rx).await,
                Action::ExportSucceeded(PathBuf::from("/data/out.csv"))
            );
        }

        #[tokio::test]
        async fn failure_reports_reason() {
            let mut ports = Ports::new();
            ports.exporter.expect_export_csv().returning(|_, _| {
                Err(ExportError::DirectoryUnavailable("read-only".to_string()))
            });
            let (runner, mut rx) = ports.into_runner();

            runner
                .run(
                    vec![Effect::ExportCsv {
                        rows: id_rows(),
                        file_name: "out.csv".to_string(),
                    }],
                    &mut renderer(),
                    &mut AppState::default(),
                )
                .await
                .unwrap();

            assert_eq!(
                next_action(&mut rx).await,
                Action::ExportFailed("Export directory unavailable: read-only".to_string())
            );
        }
    }

    #[tokio::test]
    async fn persist_failure_does_not_fail_the_run() {
        let mut ports = Ports::new();
        let (done_tx, mut done_rx) = mpsc::channel(1);
        ports.store.expect_save_history().times(1).returning(move |_| {
            let _ = done_tx.try_send(());
            Err(StoreError::WriteError("disk full".to_string()))
        });
        let (runner, _rx) = ports.into_runner();

        let result = runner
            .run(
                vec![Effect::PersistHistory(Vec::new())],
                &mut renderer(),
                &mut AppState::default(),
            )
            .await;

        assert!(result.is_ok());
        tokio::time::timeout(Duration::from_secs(1), done_rx.recv())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn persists_land_in_dispatch_order() {
        let mut ports = Ports::new();
        let written = Arc::new(Mutex::new(Vec::new()));
        let (done_tx, mut done_rx) = mpsc::channel(8);
        let log = Arc::clone(&written);
        ports.store.expect_save_history().times(5).returning(move |entries| {
            // Slow first write: a later snapshot must still wait for it.
            if entries[0].id == 0 {
                std::thread::sleep(Duration::from_millis(50));
            }
            log.lock().unwrap().push(entries[0].id);
            let _ = done_tx.try_send(());
            Ok(())
        });
        let (runner, _rx) = ports.into_runner();
        let effects = (0..5)
            .map(|id| {
                Effect::PersistHistory(vec![HistoryEntry::new(
                    id,
                    format!("SELECT {id};"),
                    Local::now(),
                )])
            })
            .collect();

        runner
            .run(effects, &mut renderer(), &mut AppState::default())
            .await
            .unwrap();
        for _ in 0..5 {
            tokio::time::timeout(Duration::from_secs(2), done_rx.recv())
                .await
                .unwrap();
        }

        assert_eq!(*written.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn sequence_and_dispatch_keep_order() {
        let (runner, mut rx) = Ports::new().into_runner();
        let mut renderer = renderer();

        runner
            .run(
                vec![Effect::Sequence(vec![
                    Effect::Render,
                    Effect::DispatchActions(vec![Action::RunQuery, Action::Render]),
                ])],
                &mut renderer,
                &mut AppState::default(),
            )
            .await
            .unwrap();

        assert_eq!(renderer.draws, 1);
        assert_eq!(next_action(&mut rx).await, Action::RunQuery);
        assert_eq!(next_action(&mut rx).await, Action::Render);
    }
}
