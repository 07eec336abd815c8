use crate::curated::MEASURE_PREFIX;
use crate::model::Contest;

/// External selector narrowing which contests are considered, independent of
/// the curated allow-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    All,
    Mayor,
    Measures,
    Supervisors,
}

impl ViewKind {
    /// Maps the startup view token. Absent or unrecognized tokens are `All`.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("mayor") => ViewKind::Mayor,
            Some("measures") => ViewKind::Measures,
            Some("supervisors") => ViewKind::Supervisors,
            _ => ViewKind::All,
        }
    }
}

/// Narrows `races` to the requested view. Runs before the curated filter.
pub fn select_view(races: Vec<Contest>, view: ViewKind) -> Vec<Contest> {
    match view {
        ViewKind::All => races,
        ViewKind::Mayor => races
            .into_iter()
            .filter(|race| race.contest_id == "MAYOR")
            .collect(),
        ViewKind::Measures => races
            .into_iter()
            .filter(|race| race.contest_id.starts_with(MEASURE_PREFIX))
            .collect(),
        ViewKind::Supervisors => races
            .into_iter()
            .filter(|race| race.contest_id.contains("BOARD OF SUPERVISORS"))
            .collect(),
    }
}
