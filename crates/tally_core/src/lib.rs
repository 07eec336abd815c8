//! Tally core: pure contest model, presentation rules, and the results-store
//! state machine.
mod curated;
mod effect;
mod model;
mod msg;
mod order;
mod state;
mod update;
mod view;
mod view_model;

pub use curated::{curate, curated_position, single_measure_letter, CURATED_ORDER, MEASURE_PREFIX};
pub use effect::Effect;
pub use model::{Candidate, Contest, Snapshot};
pub use msg::Msg;
pub use order::{compare_contests, order};
pub use state::AppState;
pub use update::update;
pub use view::{select_view, ViewKind};
pub use view_model::BoardViewModel;
