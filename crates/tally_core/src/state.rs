use crate::model::{Contest, Snapshot};
use crate::view_model::BoardViewModel;

/// Results store: the latest snapshot plus a render-dirty flag.
///
/// The snapshot is only ever replaced wholesale; failed cycles discard the
/// previous races instead of keeping them visible next to the error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    snapshot: Snapshot,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> BoardViewModel {
        BoardViewModel {
            races: self.snapshot.races.clone(),
            last_updated: self.snapshot.last_updated.clone(),
            loading: self.snapshot.loading,
            error: self.snapshot.error.clone(),
        }
    }

    /// Returns the dirty flag and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn apply_success(&mut self, races: Vec<Contest>, report_time: String) {
        self.snapshot = Snapshot {
            races,
            last_updated: Some(report_time),
            loading: false,
            error: None,
        };
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.snapshot = Snapshot {
            races: Vec::new(),
            last_updated: None,
            loading: false,
            error: Some(message),
        };
        self.dirty = true;
    }
}
