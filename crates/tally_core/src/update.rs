use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        // Every tick requests a cycle. There is no skip-if-busy guard, so a
        // fetch outlasting the poll interval overlaps the next cycle.
        Msg::Tick => vec![Effect::FetchFeed],
        Msg::FeedLoaded { races, report_time } => {
            state.apply_success(races, report_time);
            Vec::new()
        }
        Msg::FeedFailed { message } => {
            state.apply_failure(message);
            Vec::new()
        }
    };

    (state, effects)
}
