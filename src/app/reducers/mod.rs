mod navigation;
mod output;
mod session;
mod table;

pub use navigation::reduce_navigation;
pub use output::reduce_output;
pub use session::reduce_session;
pub use table::reduce_table;

use crate::effect::Effect;
use crate::table_view::PageRequest;

/// Turns an optional page request into the effect list a sub-reducer returns.
fn page_effects(request: Option<PageRequest>) -> Vec<Effect> {
    request.map(Effect::from).into_iter().collect()
}
