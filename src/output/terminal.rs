// Colored terminal output for query answers.
//
// One display function per query. main.rs picks between these and JSON.

use colored::Colorize;

use crate::prepare::PrepareReport;
use crate::queries::{Mentions, Report};

/// Longest word list printed in full before it gets summarized.
const MAX_LISTED: usize = 60;

fn header(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

/// Print a word list, wrapping long ones and summarizing huge ones.
fn display_words(words: &[String], empty_message: &str) {
    if words.is_empty() {
        println!("  {}", empty_message.dimmed());
        return;
    }

    let shown = &words[..words.len().min(MAX_LISTED)];
    for chunk in shown.chunks(8) {
        println!("  {}", chunk.join(", "));
    }
    if words.len() > MAX_LISTED {
        println!(
            "  {}",
            format!("... and {} more (use --json for the full list)", words.len() - MAX_LISTED).dimmed()
        );
    }
}

pub fn display_prepare(report: &PrepareReport) {
    header(&format!("Prepared {} speeches", report.documents));
    println!("  Authors: {}", report.authors.join(", ").bold());
}

pub fn display_least_important(words: &[String]) {
    header(&format!("Least important words ({})", words.len()));
    display_words(words, "Every word scores above zero somewhere.");
}

pub fn display_highest(words: &[String]) {
    header("Highest TF-IDF score");
    display_words(words, "The corpus has no words.");
}

pub fn display_most_repeated(author: &str, words: &[String]) {
    header(&format!("Most repeated by {author}"));
    if words.is_empty() {
        println!("  {}", format!("No speech by {author} found.").dimmed());
    } else {
        display_words(words, "");
    }
}

pub fn display_mentions(mentions: &Mentions) {
    header(&format!("Mentions of \"{}\"", mentions.term));
    if mentions.authors.is_empty() {
        println!("  {}", "Nobody mentions it.".dimmed());
        return;
    }

    for entry in &mentions.authors {
        let name = if mentions.most.contains(&entry.author) {
            entry.author.green().bold()
        } else {
            entry.author.normal()
        };
        println!("  {:<24} {:>4}", name, entry.count);
    }
    println!("\n  Most: {}", mentions.most.join(", ").green().bold());
}

pub fn display_first_mention(keywords: &[String], author: Option<&str>) {
    header(&format!("First to mention {}", keywords.join(" / ")));
    match author {
        Some(author) => println!("  {}", author.bold()),
        None => println!("  {}", "No speech mentions any of them.".dimmed()),
    }
}

pub fn display_common(words: &[String]) {
    header(&format!("Words used by every speaker ({})", words.len()));
    display_words(words, "No word appears in every speech.");
}

/// Display every answer of a full report.
pub fn display_report(report: &Report) {
    println!(
        "{}",
        format!("{} documents, {} distinct words", report.documents, report.terms).dimmed()
    );
    display_least_important(&report.least_important);
    display_highest(&report.highest_tfidf);
    display_most_repeated(&report.focus_author, &report.most_repeated);
    display_mentions(&report.mentions);
    display_first_mention(&report.keywords, report.first_mention.as_deref());
    display_common(&report.common);
}
