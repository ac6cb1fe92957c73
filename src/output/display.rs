//! Display functions for command results

use super::formatters::{create_progress_bar, letter_badge, points_label};
use crate::commands::{CheckResult, SolutionsResult};
use crate::core::Outcome;
use colored::Colorize;

/// Print the verdict of a one-shot check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}    Word: {}",
        result.root.to_uppercase().bright_yellow().bold(),
        result.word.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (word, rejection) in &result.skipped_used {
        println!(
            "{} {} ({})",
            "⚠️  Ignoring used word".yellow(),
            word.bright_white(),
            rejection.title().to_lowercase()
        );
    }

    match &result.outcome {
        Outcome::Ignored => {
            println!("{}", "Nothing submitted.".bright_black());
        }
        Outcome::Accepted { word, points } => {
            println!(
                "{} {} {}",
                "✅ Accepted:".green().bold(),
                word,
                points_label(*points).green()
            );
            println!(
                "   Score: {} → {}",
                result.score_before,
                result.score_after.to_string().bright_cyan().bold()
            );
        }
        Outcome::Rejected(rejection) => {
            println!("{} {}", "❌".red(), rejection.title().red().bold());
            println!("   {}", rejection.message());
        }
    }
}

/// Print every acceptable word for a root, longest first
pub fn print_solutions_result(result: &SolutionsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} words found among {} dictionary entries ({:.2}s)",
        result.words.len().to_string().bright_yellow().bold(),
        result.scanned,
        result.duration.as_secs_f64()
    );
    println!(
        "   Maximum score: {}",
        result.max_score.to_string().bright_cyan().bold()
    );

    if result.words.is_empty() {
        return;
    }

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    let longest = result.words.first().map_or(0, |w| w.chars().count());
    let total = result.words.len();
    for len in (1..=longest).rev() {
        let count = result
            .words
            .iter()
            .filter(|w| w.chars().count() == len)
            .count();
        if count == 0 {
            continue;
        }
        let bar = create_progress_bar(count as f64, total as f64, 30);
        println!("   {len:2}: {} {count:4}", bar.green());
    }

    println!();
    let shown = limit.unwrap_or(total).min(total);
    for word in result.words.iter().take(shown) {
        println!("   {} {}", letter_badge(word).bright_black(), word);
    }
    if shown < total {
        println!("   … and {} more", total - shown);
    }
}
