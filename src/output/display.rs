//! Display functions for command results

use super::formatters::{decision_line, length_badge, score_line};
use crate::commands::CheckResult;
use crate::core::Decision;
use colored::Colorize;

/// Print the result of a batch check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        match &step.decision {
            None => println!("{turn:>3}. {}", "(blank, ignored)".bright_black()),
            Some(decision @ Decision::Accepted(_)) => println!(
                "{turn:>3}. {} {}",
                decision_line(decision, &result.root).green().bold(),
                format!("→ {}", step.score_after).green()
            ),
            Some(decision @ Decision::Rejected(_)) => println!(
                "{turn:>3}. {} {}",
                decision_line(decision, &result.root).red(),
                format!("[{}]", step.input.trim()).bright_black()
            ),
        }
    }

    println!("\n{}", "Used words:".bright_cyan().bold());
    print_used_words(&result.used_words);

    println!();
    println!(
        "{}",
        format!(
            "{} ({} of {} accepted)",
            score_line(result.score),
            result.accepted_count(),
            result.steps.len()
        )
        .bright_yellow()
        .bold()
    );
}

/// Print used words most recent first, each with its length badge
pub fn print_used_words(words: &[String]) {
    if words.is_empty() {
        println!("   {}", "none yet".bright_black());
        return;
    }

    for word in words {
        println!("   {} {}", length_badge(word).cyan(), word);
    }
}
