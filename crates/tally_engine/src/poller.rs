use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tally_core::{
    curate, order, select_view, update, AppState, BoardViewModel, Effect, Msg, ViewKind,
};
use tally_logging::{tally_info, tally_warn};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::fetch::{FeedClient, FetchError};
use crate::normalize::{normalize, FeedReport, ParseError};

/// Fixed polling cadence. The first cycle starts immediately on spawn.
pub const POLL_INTERVAL: Duration = Duration::from_millis(15_000);

/// Message shown to the consumer for any failed cycle. The underlying cause
/// is logged, not exposed.
pub const FAILURE_MESSAGE: &str = "failed to load election results";

/// Either failure of one poll cycle, collapsed at the poller boundary.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Handle to the running poller and the results store it owns.
pub struct PollerHandle {
    state: Arc<Mutex<AppState>>,
    cancel: CancellationToken,
    thread: Option<thread::JoinHandle<()>>,
}

impl PollerHandle {
    /// Starts polling on a dedicated runtime thread. The first cycle begins
    /// immediately; subsequent cycles fire every [`POLL_INTERVAL`] regardless
    /// of how long the previous one takes.
    pub fn spawn(client: Arc<dyn FeedClient>, view: ViewKind) -> Self {
        let state = Arc::new(Mutex::new(AppState::new()));
        let cancel = CancellationToken::new();

        let loop_state = state.clone();
        let loop_cancel = cancel.clone();
        let thread = thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            runtime.block_on(poll_loop(client, view, loop_state, loop_cancel));
        });

        Self {
            state,
            cancel,
            thread: Some(thread),
        }
    }

    /// Current board state for presentation.
    pub fn view(&self) -> BoardViewModel {
        self.state.lock().expect("lock results store").view()
    }

    /// Returns the board state only if it changed since the last call.
    pub fn take_dirty_view(&self) -> Option<BoardViewModel> {
        let mut guard = self.state.lock().expect("lock results store");
        if guard.consume_dirty() {
            Some(guard.view())
        } else {
            None
        }
    }

    /// Stops scheduling cycles and discards any in-flight result.
    pub fn stop(mut self) {
        self.cancel.cancel();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn poll_loop(
    client: Arc<dyn FeedClient>,
    view: ViewKind,
    state: Arc<Mutex<AppState>>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    let mut cycle: u64 = 0;
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }
        cycle += 1;
        for effect in dispatch(&state, Msg::Tick) {
            match effect {
                Effect::FetchFeed => {
                    // Cycles run independently; a fetch outlasting the
                    // interval overlaps the next one, and the later-resolving
                    // cycle wins the store.
                    tokio::spawn(run_cycle(
                        cycle,
                        client.clone(),
                        view,
                        state.clone(),
                        cancel.clone(),
                    ));
                }
            }
        }
    }
}

async fn run_cycle(
    cycle: u64,
    client: Arc<dyn FeedClient>,
    view: ViewKind,
    state: Arc<Mutex<AppState>>,
    cancel: CancellationToken,
) {
    let msg = match poll_once(client.as_ref(), view).await {
        Ok(report) => {
            tally_info!(
                "cycle {cycle}: {} contests as of {}",
                report.races.len(),
                report.report_time
            );
            Msg::FeedLoaded {
                races: report.races,
                report_time: report.report_time,
            }
        }
        Err(err) => {
            tally_warn!("cycle {cycle} failed: {err}");
            Msg::FeedFailed {
                message: FAILURE_MESSAGE.to_string(),
            }
        }
    };

    // A result arriving after stop() must not touch the torn-down store.
    if cancel.is_cancelled() {
        return;
    }
    dispatch(&state, msg);
}

/// Runs one full pipeline pass: fetch, normalize, view-select, curate, order.
pub async fn poll_once(client: &dyn FeedClient, view: ViewKind) -> Result<FeedReport, CycleError> {
    let body = client.fetch().await?;
    let report = normalize(&body)?;
    let races = order(curate(select_view(report.races, view)));

    Ok(FeedReport {
        races,
        report_time: report.report_time,
    })
}

fn dispatch(state: &Arc<Mutex<AppState>>, msg: Msg) -> Vec<Effect> {
    let mut guard = state.lock().expect("lock results store");
    let current = std::mem::take(&mut *guard);
    let (next, effects) = update(current, msg);
    *guard = next;
    effects
}
