/// One option within a contest, carrying vote totals and a derived percentage.
///
/// `total_votes` is assumed to be roughly `election_day + vote_by_mail`; the
/// feed is trusted on this, nothing re-checks it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    /// Share of the vote, 0.0 to 100.0, as reported by the feed.
    pub percentage: f64,
    pub total_votes: u64,
    pub election_day: u64,
    pub vote_by_mail: u64,
}

/// One electoral race or ballot measure. `contest_id` is the sole identity
/// key; uniqueness within a feed snapshot is assumed, not verified.
///
/// Candidates keep the feed's own ranking; index 0 is the current leader.
#[derive(Debug, Clone, PartialEq)]
pub struct Contest {
    pub contest_id: String,
    pub candidates: Vec<Candidate>,
}

/// The unit of state exposed to presentation: races, freshness timestamp,
/// loading/error status. Replaced wholesale each poll cycle, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub races: Vec<Contest>,
    pub last_updated: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            races: Vec::new(),
            last_updated: None,
            loading: true,
            error: None,
        }
    }
}
