use anyhow::{Result, bail};

use super::helper::{collect_document_paths, current_config, load_documents};
use super::{CommandResult, CommandSummary, DocumentStatus, PhraseStatus, StatusSummary};
use crate::cli::args::StatusArgs;
use crate::core::{PhraseDocument, PhraseValue};

pub fn status(args: StatusArgs) -> Result<CommandResult> {
    let config = current_config()?;
    let threshold = args.min_completeness.unwrap_or(config.min_completeness);
    if !(0.0..=1.0).contains(&threshold) {
        bail!("--min-completeness must be between 0.0 and 1.0, got {}", threshold);
    }

    let paths = collect_document_paths(&args.common.paths, &config.ignore_patterns())?;
    let documents = load_documents(&paths)?
        .into_iter()
        .map(|(path, document)| DocumentStatus {
            path: path.display().to_string(),
            phrases: phrase_statuses(&document, threshold),
        })
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Status(StatusSummary {
            threshold,
            documents,
        }),
    })
}

fn phrase_statuses(document: &PhraseDocument, threshold: f64) -> Vec<PhraseStatus> {
    document
        .phrases()
        .iter()
        .map(|phrase| {
            let completeness = phrase.completeness();
            PhraseStatus {
                key: phrase.key().to_string(),
                kind: phrase.kind(),
                completeness,
                below_threshold: completeness.ratio() < threshold,
            }
        })
        .collect()
}
