//! Report formatting and printing utilities.
//!
//! Commands return plain summaries; everything user-facing is printed here so
//! the commands can be reused as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, PhraseStatus, RenderSummary, StatusSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Width of the widest phrase kind name ("StringArray").
const KIND_WIDTH: usize = 11;

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut O, err: &mut E) {
    match &result.summary {
        CommandSummary::Render(summary) => print_render(summary, verbose, out, err),
        CommandSummary::Status(summary) => print_status(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn print_render<O: Write, E: Write>(summary: &RenderSummary, verbose: bool, out: &mut O, err: &mut E) {
    match &summary.output {
        Some(path) => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Rendered {} from {} to {}",
                    plural(summary.exported_count, "phrase"),
                    plural(summary.document_count, "document"),
                    path.display()
                )
                .green()
            );
        }
        None => {
            let _ = write!(out, "{}", summary.content);
            if verbose {
                let _ = writeln!(
                    err,
                    "Rendered {} from {} as {}",
                    plural(summary.exported_count, "phrase"),
                    plural(summary.document_count, "document"),
                    summary.format
                );
            }
        }
    }

    if !summary.skipped.is_empty() {
        let _ = writeln!(
            err,
            "{} skipped {} with no {} rendering: {}",
            "warning:".bold().yellow(),
            plural(summary.skipped.len(), "phrase"),
            summary.format,
            summary.skipped.join(", ")
        );
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn print_status<O: Write>(summary: &StatusSummary, out: &mut O) {
    let key_width = summary
        .documents
        .iter()
        .flat_map(|doc| &doc.phrases)
        .map(|phrase| phrase.key.width())
        .max()
        .unwrap_or(0);

    for document in &summary.documents {
        let _ = writeln!(out, "{}", document.path.bold());
        for phrase in &document.phrases {
            print_phrase_status(phrase, key_width, out);
        }
    }

    let total = summary.phrase_count();
    let below = summary.below_threshold_count();
    let _ = writeln!(out);
    if below > 0 {
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} of {} below {:.0}% completeness",
                below,
                plural(total, "phrase"),
                summary.threshold * 100.0
            )
            .red()
        );
    } else {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} in {}, {} complete",
                plural(total, "phrase"),
                plural(summary.documents.len(), "document"),
                summary.complete_count()
            )
            .green()
        );
    }
}

fn print_phrase_status<O: Write>(phrase: &PhraseStatus, key_width: usize, out: &mut O) {
    let mark = if phrase.below_threshold {
        FAILURE_MARK.red()
    } else if phrase.completeness.is_complete() {
        SUCCESS_MARK.green()
    } else {
        " ".normal()
    };
    let _ = writeln!(
        out,
        "  {} {}  {}  {:>7}  {:>5.1}%",
        mark,
        pad(&phrase.key, key_width),
        pad(&phrase.kind.to_string(), KIND_WIDTH),
        phrase.completeness.to_string(),
        phrase.completeness.ratio() * 100.0
    );
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if let Some(error) = &summary.error {
        let _ = writeln!(err, "Error: {}", error);
    } else if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
