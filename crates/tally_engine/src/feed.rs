use serde::Deserialize;
use serde_json::Value;

/// Raw results document, mirroring the summary report's fixed nesting:
/// `Report.ElectionSummarySubReport.Report.contestList.ContestIdGroup` for the
/// contests and `Report.Title.Report.Textbox9` for the report timestamp.
///
/// Every level is optional so the normalizer can name the missing path in its
/// error instead of failing on the whole document.
#[derive(Debug, Deserialize)]
pub struct RawDocument {
    #[serde(rename = "Report")]
    pub report: Option<RawReport>,
}

#[derive(Debug, Deserialize)]
pub struct RawReport {
    #[serde(rename = "Title")]
    pub title: Option<RawTitle>,
    #[serde(rename = "ElectionSummarySubReport")]
    pub summary: Option<RawSummarySubReport>,
}

#[derive(Debug, Deserialize)]
pub struct RawTitle {
    #[serde(rename = "Report")]
    pub report: Option<RawTitleReport>,
}

#[derive(Debug, Deserialize)]
pub struct RawTitleReport {
    /// Report generation time. The feed names it after a report-layout textbox.
    #[serde(rename = "Textbox9")]
    pub generated_at: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawSummarySubReport {
    #[serde(rename = "Report")]
    pub report: Option<RawSummaryReport>,
}

#[derive(Debug, Deserialize)]
pub struct RawSummaryReport {
    #[serde(rename = "contestList")]
    pub contest_list: Option<RawContestList>,
}

#[derive(Debug, Deserialize)]
pub struct RawContestList {
    #[serde(rename = "ContestIdGroup")]
    pub contests: Option<Vec<RawContestGroup>>,
}

#[derive(Debug, Deserialize)]
pub struct RawContestGroup {
    #[serde(rename = "contestId")]
    pub contest_id: Option<String>,
    pub candidates: Option<Vec<RawCandidate>>,
}

/// Candidate entry. Numeric fields arrive as numbers or as numeric strings
/// depending on how the upstream serialized the report, hence `Value`.
#[derive(Debug, Deserialize)]
pub struct RawCandidate {
    pub name: Option<String>,
    pub percentage: Option<Value>,
    #[serde(rename = "totalVotes")]
    pub total_votes: Option<Value>,
    #[serde(rename = "electionDay")]
    pub election_day: Option<Value>,
    #[serde(rename = "voteByMail")]
    pub vote_by_mail: Option<Value>,
}
