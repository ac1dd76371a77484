use std::path::PathBuf;

use crate::cli::ExitStatus;
use crate::core::{Completeness, OutputFormat, PhraseKind};

#[derive(Debug)]
pub enum CommandSummary {
    Render(RenderSummary),
    Status(StatusSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct RenderSummary {
    pub format: OutputFormat,
    /// Rendered resource file.
    pub content: String,
    /// Where the content was written, or None for stdout.
    pub output: Option<PathBuf>,
    pub document_count: usize,
    pub exported_count: usize,
    /// Keys of phrases with no rendering in `format`.
    pub skipped: Vec<String>,
}

#[derive(Debug)]
pub struct StatusSummary {
    pub threshold: f64,
    pub documents: Vec<DocumentStatus>,
}

impl StatusSummary {
    pub fn phrase_count(&self) -> usize {
        self.documents.iter().map(|doc| doc.phrases.len()).sum()
    }

    pub fn below_threshold_count(&self) -> usize {
        self.documents
            .iter()
            .flat_map(|doc| &doc.phrases)
            .filter(|phrase| phrase.below_threshold)
            .count()
    }

    pub fn complete_count(&self) -> usize {
        self.documents
            .iter()
            .flat_map(|doc| &doc.phrases)
            .filter(|phrase| phrase.completeness.is_complete())
            .count()
    }
}

#[derive(Debug)]
pub struct DocumentStatus {
    pub path: String,
    pub phrases: Vec<PhraseStatus>,
}

#[derive(Debug)]
pub struct PhraseStatus {
    pub key: String,
    pub kind: PhraseKind,
    pub completeness: Completeness,
    pub below_threshold: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Render(_) => ExitStatus::Success,
            CommandSummary::Status(summary) if summary.below_threshold_count() > 0 => {
                ExitStatus::Failure
            }
            CommandSummary::Status(_) => ExitStatus::Success,
            CommandSummary::Init(summary) if summary.error.is_some() => ExitStatus::Failure,
            CommandSummary::Init(_) => ExitStatus::Success,
        }
    }
}
