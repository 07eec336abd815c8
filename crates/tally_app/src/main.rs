//! Tallyboard: live terminal viewer for municipal election results.
mod logging;
mod render;

use std::env;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tally_core::ViewKind;
use tally_engine::{HttpFeedClient, PollerHandle};
use tally_logging::tally_info;

/// Published results feed for the current election cycle.
const RESULTS_URL: &str = "https://sfelections.org/results/20241105/data/summary.json";

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    // The view token is read once at startup; it is not re-evaluated later.
    let token = env::args().nth(1);
    let view = ViewKind::from_token(token.as_deref());
    tally_info!("starting tallyboard, view {view:?}");

    let client = HttpFeedClient::new(RESULTS_URL)?;
    let handle = PollerHandle::spawn(Arc::new(client), view);

    // Presentation: redraw whenever the poller publishes a new snapshot. The
    // store is only read here, never written.
    render::render(&handle.view());
    loop {
        if let Some(board) = handle.take_dirty_view() {
            render::render(&board);
        }
        thread::sleep(Duration::from_millis(250));
    }
}
