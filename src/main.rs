use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio::time::sleep_until;
use tracing::info;

use sqlpad::app::action::Action;
use sqlpad::app::effect::Effect;
use sqlpad::app::effect_runner::EffectRunner;
use sqlpad::app::reducer::reduce;
use sqlpad::app::render_schedule::next_animation_deadline;
use sqlpad::app::session::SessionState;
use sqlpad::app::state::AppState;
use sqlpad::infra::adapters::{JsonSessionStore, SimulatedExecutor};
use sqlpad::infra::catalog;
use sqlpad::infra::clipboard::ArboardClipboard;
use sqlpad::infra::config::paths::{default_config_file, default_data_dir, default_export_dir};
use sqlpad::infra::config::{Settings, SettingsOverrides};
use sqlpad::infra::export::CsvFileExporter;
use sqlpad::ui::adapters::TuiAdapter;
use sqlpad::ui::event::handler::handle_event;
use sqlpad::ui::tui::TuiRunner;
use sqlpad::{error, logging};

/// Terminal SQL scratchpad over built-in sample tables
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (default: <config dir>/sqlpad/config.toml)
    #[arg(long, env = "SQLPAD_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for history, saved queries and logs
    #[arg(long, env = "SQLPAD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Simulated query latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Rows fetched per page of the result table
    #[arg(long)]
    page_size: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    let config_path = args.config.clone().or_else(default_config_file);
    let settings = match &config_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_overrides(SettingsOverrides {
        latency_ms: args.latency_ms,
        page_size: args.page_size,
        data_dir: args.data_dir,
    });

    let data_dir = match settings.data_dir.clone() {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let export_dir = settings
        .export_dir
        .clone()
        .unwrap_or_else(|| default_export_dir(&data_dir));
    let _log_guard = logging::init(&data_dir, &settings.log_filter);
    info!(
        data_dir = %data_dir.display(),
        latency_ms = settings.latency_ms,
        page_size = settings.page_size,
        "starting"
    );

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);

    let session_store = Arc::new(JsonSessionStore::new(data_dir));
    let session = SessionState::load(session_store.as_ref());

    let effect_runner = EffectRunner::new(
        Arc::new(SimulatedExecutor::new(Duration::from_millis(settings.latency_ms))),
        session_store,
        Arc::new(ArboardClipboard::new()),
        Arc::new(CsvFileExporter::new(export_dir)),
        action_tx.clone(),
    );

    let mut state = AppState::new(session, catalog::sample_schema(), settings.page_size);

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let initial_size = tui.terminal().size()?;
    state.ui.terminal_width = initial_size.width;
    state.ui.terminal_height = initial_size.height;

    loop {
        let now = Instant::now();
        let deadline = next_animation_deadline(&state, now);

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, &state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(&mut state, action, now);

                if state.render_dirty {
                    state.clear_expired_timers(now);
                    effects.push(Effect::Render);
                }

                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &mut state).await?;
                state.clear_dirty();
            }
            // Animation deadline reached (spinner, search debounce, message timeout)
            () = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let now = Instant::now();
                state.clear_expired_timers(now);
                let effects = reduce(&mut state, Action::Render, now);
                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &mut state).await?;
                state.clear_dirty();
            }
        }

        if let Some(debounce_until) = state.table.search_debounce()
            && Instant::now() >= debounce_until
        {
            let _ = action_tx.send(Action::ApplySearch).await;
        }

        if state.should_quit {
            break;
        }
    }

    info!("shutting down");
    tui.exit()?;
    Ok(())
}
