use serde_json::Value;
use thiserror::Error;

use tally_core::{Candidate, Contest};

use crate::feed::{RawCandidate, RawContestGroup, RawDocument};

/// Output of one normalized feed document: the uniform contest model plus the
/// report timestamp, still unfiltered and unsorted.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedReport {
    pub races: Vec<Contest>,
    pub report_time: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("document is not valid JSON: {0}")]
    Syntax(String),
    #[error("missing required field {0}")]
    MissingField(&'static str),
    #[error("field {field} is not numeric: {value}")]
    NonNumeric { field: &'static str, value: String },
}

// Dotted paths reported for missing structural levels.
const PATH_REPORT: &str = "Report";
const PATH_TIMESTAMP: &str = "Report.Title.Report.Textbox9";
const PATH_CONTESTS: &str = "Report.ElectionSummarySubReport.Report.contestList.ContestIdGroup";
const PATH_CONTEST_ID: &str = "ContestIdGroup.contestId";
const PATH_CANDIDATES: &str = "ContestIdGroup.candidates";

/// Parses the raw results document into the contest/candidate model. This is
/// the only place that knows the feed's concrete shape.
pub fn normalize(raw: &str) -> Result<FeedReport, ParseError> {
    let document: RawDocument =
        serde_json::from_str(raw).map_err(|err| ParseError::Syntax(err.to_string()))?;

    let report = document.report.ok_or(ParseError::MissingField(PATH_REPORT))?;

    let report_time = text_of(
        report
            .title
            .and_then(|title| title.report)
            .and_then(|inner| inner.generated_at)
            .ok_or(ParseError::MissingField(PATH_TIMESTAMP))?,
    );

    let groups = report
        .summary
        .and_then(|summary| summary.report)
        .and_then(|inner| inner.contest_list)
        .and_then(|list| list.contests)
        .ok_or(ParseError::MissingField(PATH_CONTESTS))?;

    let races = groups
        .into_iter()
        .map(normalize_contest)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeedReport { races, report_time })
}

fn normalize_contest(group: RawContestGroup) -> Result<Contest, ParseError> {
    let contest_id = group
        .contest_id
        .ok_or(ParseError::MissingField(PATH_CONTEST_ID))?;
    let candidates = group
        .candidates
        .ok_or(ParseError::MissingField(PATH_CANDIDATES))?
        .into_iter()
        .map(normalize_candidate)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Contest {
        contest_id,
        candidates,
    })
}

fn normalize_candidate(raw: RawCandidate) -> Result<Candidate, ParseError> {
    Ok(Candidate {
        name: raw.name.ok_or(ParseError::MissingField("candidate.name"))?,
        percentage: coerce_f64("candidate.percentage", raw.percentage)?,
        total_votes: coerce_u64("candidate.totalVotes", raw.total_votes)?,
        election_day: coerce_u64("candidate.electionDay", raw.election_day)?,
        vote_by_mail: coerce_u64("candidate.voteByMail", raw.vote_by_mail)?,
    })
}

fn text_of(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

// The upstream report is text-valued; a re-serialization may carry real JSON
// numbers. Both spellings are accepted here.
fn coerce_f64(field: &'static str, value: Option<Value>) -> Result<f64, ParseError> {
    let value = value.ok_or(ParseError::MissingField(field))?;
    match &value {
        Value::Number(number) => number.as_f64().ok_or_else(|| non_numeric(field, &value)),
        Value::String(text) => text.trim().parse().map_err(|_| non_numeric(field, &value)),
        _ => Err(non_numeric(field, &value)),
    }
}

fn coerce_u64(field: &'static str, value: Option<Value>) -> Result<u64, ParseError> {
    let value = value.ok_or(ParseError::MissingField(field))?;
    match &value {
        Value::Number(number) => number.as_u64().ok_or_else(|| non_numeric(field, &value)),
        Value::String(text) => text.trim().parse().map_err(|_| non_numeric(field, &value)),
        _ => Err(non_numeric(field, &value)),
    }
}

fn non_numeric(field: &'static str, value: &Value) -> ParseError {
    ParseError::NonNumeric {
        field,
        value: value.to_string(),
    }
}
