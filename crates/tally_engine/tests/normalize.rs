use pretty_assertions::assert_eq;
use tally_engine::{normalize, ParseError};

const SUMMARY: &str = r#"{
  "Report": {
    "Title": {
      "Report": { "Textbox9": "2024-11-06T08:45:12-08:00" }
    },
    "ElectionSummarySubReport": {
      "Report": {
        "contestList": {
          "ContestIdGroup": [
            {
              "contestId": "MAYOR",
              "candidates": [
                {
                  "name": "London Breed",
                  "percentage": "43.9",
                  "totalVotes": "104211",
                  "electionDay": "30125",
                  "voteByMail": "74086"
                },
                {
                  "name": "Daniel Lurie",
                  "percentage": "56.1",
                  "totalVotes": "133174",
                  "electionDay": "38541",
                  "voteByMail": "94633"
                }
              ]
            },
            {
              "contestId": "MEASURE A",
              "candidates": [
                {
                  "name": "Yes",
                  "percentage": 71.2,
                  "totalVotes": 160482,
                  "electionDay": 44921,
                  "voteByMail": 115561
                },
                {
                  "name": "No",
                  "percentage": 28.8,
                  "totalVotes": 64894,
                  "electionDay": 18166,
                  "voteByMail": 46728
                }
              ]
            }
          ]
        }
      }
    }
  }
}"#;

#[test]
fn walks_the_nested_document_into_the_contest_model() {
    let report = normalize(SUMMARY).expect("valid document");

    assert_eq!(report.report_time, "2024-11-06T08:45:12-08:00");
    assert_eq!(report.races.len(), 2);

    let mayor = &report.races[0];
    assert_eq!(mayor.contest_id, "MAYOR");
    assert_eq!(mayor.candidates.len(), 2);
    // The feed's own ranking is preserved; index 0 is the current leader.
    assert_eq!(mayor.candidates[0].name, "London Breed");
    assert_eq!(mayor.candidates[0].percentage, 43.9);
    assert_eq!(mayor.candidates[0].total_votes, 104_211);
    assert_eq!(mayor.candidates[0].election_day, 30_125);
    assert_eq!(mayor.candidates[0].vote_by_mail, 74_086);
}

#[test]
fn accepts_numbers_as_well_as_numeric_strings() {
    let report = normalize(SUMMARY).expect("valid document");
    let measure = &report.races[1];

    assert_eq!(measure.contest_id, "MEASURE A");
    assert_eq!(measure.candidates[0].percentage, 71.2);
    assert_eq!(measure.candidates[0].total_votes, 160_482);
}

#[test]
fn rejects_a_document_that_is_not_json() {
    let err = normalize("<Report></Report>").unwrap_err();
    assert!(matches!(err, ParseError::Syntax(_)), "{err:?}");
}

#[test]
fn reports_the_missing_root() {
    let err = normalize(r#"{"NotAReport": {}}"#).unwrap_err();
    assert_eq!(err, ParseError::MissingField("Report"));
}

#[test]
fn reports_the_missing_timestamp_path() {
    let err = normalize(
        r#"{"Report": {"ElectionSummarySubReport": {"Report": {"contestList": {"ContestIdGroup": []}}}}}"#,
    )
    .unwrap_err();
    assert_eq!(err, ParseError::MissingField("Report.Title.Report.Textbox9"));
}

#[test]
fn reports_the_missing_contest_list_path() {
    let err = normalize(r#"{"Report": {"Title": {"Report": {"Textbox9": "t"}}}}"#).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingField("Report.ElectionSummarySubReport.Report.contestList.ContestIdGroup")
    );
}

#[test]
fn reports_a_contest_without_an_identifier() {
    let err = normalize(
        r#"{"Report": {
            "Title": {"Report": {"Textbox9": "t"}},
            "ElectionSummarySubReport": {"Report": {"contestList": {"ContestIdGroup": [
                {"candidates": []}
            ]}}}
        }}"#,
    )
    .unwrap_err();
    assert_eq!(err, ParseError::MissingField("ContestIdGroup.contestId"));
}

#[test]
fn reports_a_non_numeric_vote_field() {
    let err = normalize(
        r#"{"Report": {
            "Title": {"Report": {"Textbox9": "t"}},
            "ElectionSummarySubReport": {"Report": {"contestList": {"ContestIdGroup": [
                {"contestId": "MAYOR", "candidates": [
                    {"name": "A", "percentage": "n/a", "totalVotes": "1", "electionDay": "1", "voteByMail": "0"}
                ]}
            ]}}}
        }}"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ParseError::NonNumeric {
            field: "candidate.percentage",
            value: "\"n/a\"".to_string(),
        }
    );
}

#[test]
fn an_empty_contest_list_is_a_valid_document() {
    let report = normalize(
        r#"{"Report": {
            "Title": {"Report": {"Textbox9": "t"}},
            "ElectionSummarySubReport": {"Report": {"contestList": {"ContestIdGroup": []}}}
        }}"#,
    )
    .expect("valid document");
    assert!(report.races.is_empty());
}
