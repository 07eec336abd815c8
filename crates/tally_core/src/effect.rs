/// Side effects requested by the pure update function and run by the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run one fetch-normalize-filter-sort cycle.
    FetchFeed,
}
