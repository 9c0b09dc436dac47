//! Display functions for command results

use super::formatters::{count_badge, create_progress_bar, letter_tiles};
use crate::commands::CheckResult;
use crate::core::Verdict;
use colored::Colorize;

/// Print the (title, message) pair for a verdict
pub fn print_verdict(verdict: Verdict, word: &str, root: &str) {
    let message = verdict.message(word, root);
    if verdict.is_accepted() {
        println!("  {} {}\n", "✅".green(), message.green());
    } else {
        println!(
            "  {} {}: {}\n",
            "❌".red(),
            verdict.title().red().bold(),
            message
        );
    }
}

/// Print the accepted words, newest first, with letter-count badges
pub fn print_used_words(used: &[String]) {
    if used.is_empty() {
        println!("  No words yet.\n");
        return;
    }

    println!("\n  {} ({})", "Your words".bright_cyan().bold(), used.len());
    for word in used {
        println!(
            "    {} {}",
            count_badge(word.chars().count()).bright_cyan(),
            word.bright_white()
        );
    }
    println!();
}

/// Print the result of checking a single word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root:  {}",
        letter_tiles(&result.root).bright_yellow().bold()
    );
    println!("Word:  {}", letter_tiles(&result.word).bright_white().bold());
    println!("{}", "─".repeat(60).cyan());

    if let Some(ref leftover) = result.leftover {
        let total = result.root.chars().count();
        let used = total - leftover.chars().count();
        println!(
            "\n📊 Letters used: [{}] {used}/{total}",
            create_progress_bar(used as f64, total as f64, 20).green()
        );
        if !leftover.is_empty() {
            println!("   Left over:    {}", letter_tiles(leftover).bright_black());
        }
    }

    println!();
    print_verdict(result.verdict, &result.word, &result.root);
}
