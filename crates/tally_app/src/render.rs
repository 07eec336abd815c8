//! Terminal rendering of the board. A trivial consumer: the snapshot arrives
//! already filtered and sorted, and nothing here feeds back into the poller.

use chrono::DateTime;
use tally_core::{BoardViewModel, Contest};

pub fn render(board: &BoardViewModel) {
    if let Some(message) = &board.error {
        println!("\n{message}");
        return;
    }
    if board.loading {
        println!("\nLoading election results...");
        return;
    }

    println!("\nSF ELECTION RESULTS");
    if let Some(updated) = &board.last_updated {
        println!("Last updated: {}", format_timestamp(updated));
    }
    for race in &board.races {
        render_contest(race);
    }
}

fn render_contest(race: &Contest) {
    println!("\n{}", race.contest_id);
    for (index, candidate) in race.candidates.iter().enumerate() {
        // The feed ranks candidates; the first row is the current leader.
        let leader = if index == 0 { "  *" } else { "" };
        println!("  {:5.1}%  {}{leader}", candidate.percentage, candidate.name);
        println!(
            "          total {}  election day {}  mail {}",
            candidate.total_votes, candidate.election_day, candidate.vote_by_mail
        );
    }
}

/// RFC 3339 timestamps are reformatted for display; anything else is shown as
/// the feed sent it.
fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%B %-d, %Y %-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}
