//! Display functions for filter results

use super::formatters::{candidate_count, format_score, score_bar, used_date};
use crate::core::ConstraintState;
use crate::filter::FilterResponse;
use chrono::NaiveDate;
use colored::Colorize;

/// Print a filter response
///
/// `limit` caps the number of candidate lines; the count line always
/// reports the full response.
pub fn print_filter_response(
    state: &ConstraintState,
    response: &FilterResponse<'_, '_>,
    today: NaiveDate,
    limit: Option<usize>,
) {
    println!("\n{}", "─".repeat(60).cyan());
    print_clues(state);
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\nPossible Solutions ({}):",
        candidate_count(response.unused_count(today), response.len())
            .bright_yellow()
            .bold()
    );

    if response.is_empty() {
        println!("{}", "No words match these clues.".red().bold());
        return;
    }

    let shown = limit.unwrap_or(usize::MAX);
    for entry in response.iter().take(shown) {
        let word = entry.candidate.word.text();
        let mut line = if entry.candidate.is_past_used(today) {
            format!("  {}", word.bright_black())
        } else {
            format!("  {}", word.bright_white().bold())
        };

        if let Some(score) = entry.score {
            line.push_str(&format!(
                "  {} {}",
                score_bar(score, 20).green(),
                format_score(score).bright_yellow()
            ));
        }

        if let Some(date) = used_date(entry.candidate, today) {
            line.push_str(&format!("  📅 {}", date.bright_black()));
        }

        println!("{line}");
    }

    if response.len() > shown {
        println!(
            "  {}",
            format!("… {} more", response.len() - shown).bright_black()
        );
    }
}

fn print_clues(state: &ConstraintState) {
    let known: String = state
        .known
        .iter()
        .map(|letter| letter.map_or('_', char::from))
        .collect();
    let hints: Vec<String> = state.hints.iter().map(ToString::to_string).collect();

    println!("Known:  {}", known.bright_green().bold());
    println!("Hints:  {}", hints.join(",").yellow());
    println!("Banned: {}", state.banned.to_string().bright_black());
}
