use std::fs;

use anyhow::{Context, Result};

use super::helper::{collect_document_paths, current_config, load_documents};
use super::{CommandResult, CommandSummary, RenderSummary};
use crate::cli::args::RenderArgs;
use crate::core::{ExportOptions, PhraseDocument, StandardEscaper};

/// Merge the given documents in order and export them as one resource file.
pub fn render(args: RenderArgs) -> Result<CommandResult> {
    let config = current_config()?;
    let paths = collect_document_paths(&args.common.paths, &config.ignore_patterns())?;
    let format = args.format.unwrap_or(config.format);
    let options = ExportOptions {
        plural_default: args.plural_default.or(config.plural_default),
    };

    // Later documents override earlier ones by phrase key.
    let mut merged = PhraseDocument::new();
    for (_, document) in load_documents(&paths)? {
        merged.merge(document);
    }

    let result = merged.export(format, &StandardEscaper, &options)?;

    if let Some(path) = &args.output {
        fs::write(path, &result.content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Render(RenderSummary {
            format,
            content: result.content,
            output: args.output,
            document_count: paths.len(),
            exported_count: result.exported,
            skipped: result.skipped,
        }),
    })
}
