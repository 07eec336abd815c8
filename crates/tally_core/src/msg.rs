use crate::model::Contest;

/// Events applied to the results store.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Poll timer fired; time to request a fetch cycle.
    Tick,
    /// A poll cycle completed with a fresh, already-ordered contest list.
    FeedLoaded {
        races: Vec<Contest>,
        report_time: String,
    },
    /// A poll cycle failed in fetch or parse; carries the user-visible message.
    FeedFailed { message: String },
}
