//! Phrase documents: ordered collections of phrases stored as one JSON file.
//!
//! A document maps phrase keys to payload objects, in file order:
//!
//! ```json
//! {
//!   "songs": { "class": "Plurals", "values": { "one": "%d song", "other": "%d songs" } },
//!   "planets": { "class": "StringArray", "values": ["Mercury", "Venus"] }
//! }
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{
    Completeness, ImportMode, Payload, Phrase, PhraseBase, PhraseId, PhraseValue,
    render::{Escaper, OutputFormat, Renderer},
};
use crate::error::PhraseError;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n";
const XML_FOOTER: &str = "</resources>\n";

/// Export settings that do not depend on the output format.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Value used for empty plural quantities. Phrases are filled on a copy,
    /// the document itself is not modified.
    pub plural_default: Option<String>,
}

/// Result of exporting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub content: String,
    pub exported: usize,
    /// Keys of phrases that have no rendering in the requested format.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseDocument {
    phrases: Vec<Phrase>,
}

impl PhraseDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document. Ids are assigned in file order, starting at 1.
    ///
    /// A key repeated inside one file keeps its first position and its last
    /// value, the same as the JSON object it came from.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: Map<String, Value> = serde_json::from_str(content)
            .context("Document root must be a JSON object of phrase key to payload")?;

        let mut document = Self::new();
        for (key, value) in root {
            let payload: Payload = serde_json::from_value(value)
                .map_err(PhraseError::Decode)
                .with_context(|| format!("Invalid payload for phrase '{}'", key))?;
            let base = PhraseBase::new(document.next_id(), key);
            document.push(Phrase::from_payload(base, payload, ImportMode::Full)?);
        }
        Ok(document)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        let document = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse document: {}", path.display()))?;
        debug!(path = %path.display(), phrases = document.len(), "loaded phrase document");
        Ok(document)
    }

    /// Serialize back to the document format, keys in phrase order.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut root = Map::new();
        for phrase in &self.phrases {
            let payload = serde_json::to_value(phrase.payload())
                .map_err(PhraseError::Encode)
                .with_context(|| format!("Failed to encode phrase '{}'", phrase.key()))?;
            root.insert(phrase.key().to_string(), payload);
        }
        serde_json::to_string_pretty(&Value::Object(root)).context("Failed to serialize document")
    }

    fn next_id(&self) -> PhraseId {
        PhraseId(self.phrases.len() as u64 + 1)
    }

    /// Insert a phrase, keyed by [`PhraseValue::key`].
    ///
    /// A new key is appended with the next free id. An existing key is replaced
    /// in place and keeps its id. Returns the replaced phrase, if any.
    pub fn push(&mut self, mut phrase: Phrase) -> Option<Phrase> {
        match self.phrases.iter().position(|p| p.key() == phrase.key()) {
            Some(index) => {
                phrase.base_mut().id = self.phrases[index].base().id;
                Some(std::mem::replace(&mut self.phrases[index], phrase))
            }
            None => {
                phrase.base_mut().id = self.next_id();
                self.phrases.push(phrase);
                None
            }
        }
    }

    /// Merge `other` into this document in order. Phrases whose key already
    /// exists override the earlier one; ids stay unique.
    pub fn merge(&mut self, other: PhraseDocument) {
        for phrase in other.phrases {
            let key = phrase.key().to_string();
            if self.push(phrase).is_some() {
                debug!(key = %key, "phrase overridden by a later document");
            }
        }
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn get(&self, key: &str) -> Option<&Phrase> {
        self.phrases.iter().find(|phrase| phrase.key() == key)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn completeness(&self) -> Completeness {
        self.phrases.iter().map(PhraseValue::completeness).sum()
    }

    /// Render the whole document as a resource file.
    ///
    /// Phrases without a rendering for `format` (string arrays outside XML) are
    /// skipped and reported in [`ExportResult::skipped`].
    pub fn export(
        &self,
        format: OutputFormat,
        escaper: &dyn Escaper,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        let renderer = Renderer::new(format, escaper);
        let mut fragments = Vec::with_capacity(self.phrases.len());
        let mut skipped = Vec::new();

        for phrase in &self.phrases {
            let rendered = match (phrase, &options.plural_default) {
                (Phrase::Plurals(plurals), Some(default)) => {
                    let mut filled = plurals.clone();
                    filled.fill_with_default(default);
                    filled.render(&renderer)
                }
                _ => phrase.render(&renderer),
            };

            match rendered {
                Ok(fragment) => fragments.push(fragment),
                Err(PhraseError::UnsupportedFormat { kind, format }) => {
                    debug!(key = phrase.key(), %kind, %format, "skipping phrase");
                    skipped.push(phrase.key().to_string());
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("Failed to render '{}'", phrase.key()));
                }
            }
        }

        Ok(ExportResult {
            exported: fragments.len(),
            content: wrap_fragments(format, &fragments),
            skipped,
        })
    }
}

fn wrap_fragments(format: OutputFormat, fragments: &[String]) -> String {
    match format {
        OutputFormat::AndroidXml | OutputFormat::AndroidXmlEscapedHtml => {
            let mut out = String::from(XML_HEADER);
            for fragment in fragments {
                out.push_str(fragment);
                if !fragment.ends_with('\n') {
                    out.push('\n');
                }
            }
            out.push_str(XML_FOOTER);
            out
        }
        OutputFormat::Json => {
            if fragments.is_empty() {
                "{\n}\n".to_string()
            } else {
                format!("{{\n{}\n}}\n", fragments.join(",\n"))
            }
        }
        OutputFormat::Plaintext => {
            if fragments.is_empty() {
                String::new()
            } else {
                format!("{}\n", fragments.join("\n"))
            }
        }
    }
}
