//! Tally engine: feed IO, normalization, and the polling loop.
mod feed;
mod fetch;
mod normalize;
mod poller;

pub use fetch::{FeedClient, FetchError, HttpFeedClient};
pub use normalize::{normalize, FeedReport, ParseError};
pub use poller::{poll_once, CycleError, PollerHandle, FAILURE_MESSAGE, POLL_INTERVAL};
