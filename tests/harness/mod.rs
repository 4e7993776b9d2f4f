pub mod fixtures;

use std::sync::OnceLock;
use std::time::Instant;

use chrono::{DateTime, Local, TimeZone};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use sqlpad::app::action::Action;
use sqlpad::app::effect::Effect;
use sqlpad::app::ports::ExecutionOutcome;
use sqlpad::app::reducer::reduce;
use sqlpad::app::state::AppState;
use sqlpad::ui::components::layout::MainLayout;

pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 30;

/// Every dispatch and draw in a test uses this instant, so spinner frames
/// and debounce deadlines are the same on every run.
pub fn fixed_instant() -> Instant {
    static BASE: OnceLock<Instant> = OnceLock::new();
    *BASE.get_or_init(Instant::now)
}

/// Wall-clock time stamped on history entries.
pub fn fixed_datetime() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
}

pub fn create_test_state() -> AppState {
    let mut state = AppState::new(
        Default::default(),
        sqlpad::infra::catalog::sample_schema(),
        100,
    );
    state.ui.terminal_width = TEST_WIDTH;
    state.ui.terminal_height = TEST_HEIGHT;
    state
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

/// Reduces `action`, then resolves page fetches and dispatched actions
/// synchronously until nothing is left.
pub fn dispatch(state: &mut AppState, action: Action) {
    let effects = reduce(state, action, fixed_instant());
    settle(state, effects);
}

fn settle(state: &mut AppState, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::FetchPage(request) => {
                let page = request.fetcher.fetch_page(request.page);
                dispatch(
                    state,
                    Action::PageLoaded {
                        generation: request.generation,
                        page,
                    },
                );
            }
            Effect::DispatchActions(actions) => {
                for action in actions {
                    dispatch(state, action);
                }
            }
            Effect::Sequence(inner) => settle(state, inner),
            _ => {}
        }
    }
}

/// Types `query` into the editor and starts it, leaving it loading.
pub fn start_query(state: &mut AppState, query: &str) {
    dispatch(state, Action::SetQueryInput(query.to_string()));
    dispatch(state, Action::RunQuery);
}

/// Runs `query` and completes it with `outcome`.
pub fn run_query(state: &mut AppState, query: &str, outcome: ExecutionOutcome) {
    start_query(state, query);
    let generation = state.session.run_generation();
    dispatch(
        state,
        Action::QueryCompleted {
            generation,
            outcome,
            executed_at: fixed_datetime(),
        },
    );
}

/// Draws one frame and feeds the measured table viewport back, the way the
/// effect runner does after a real render.
pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &mut AppState) -> String {
    let mut measured = None;
    terminal
        .draw(|frame| {
            measured = MainLayout::render(frame, state, fixed_instant()).result_viewport;
        })
        .unwrap();

    if let Some((width, height)) = measured
        && (width, height) != state.table.viewport_size()
    {
        dispatch(state, Action::ViewportMeasured { width, height });
        return render_to_string(terminal, state);
    }

    buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}
