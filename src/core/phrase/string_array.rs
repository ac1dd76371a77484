use tracing::debug;

use super::{PhraseBase, PhraseId, PhraseKind, PhraseValue};
use crate::core::{
    Completeness, ImportMode, Payload,
    render::{Renderer, StandardEscaper, string_array_xml},
};
use crate::error::{PhraseError, Result};

/// A phrase whose value is an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringArrayPhrase {
    base: PhraseBase,
    values: Vec<String>,
}

impl StringArrayPhrase {
    pub fn new(id: PhraseId, key: impl Into<String>) -> Self {
        Self::from_base(PhraseBase::new(id, key))
    }

    pub fn from_base(base: PhraseBase) -> Self {
        Self {
            base,
            values: Vec::new(),
        }
    }

    pub fn set_values(&mut self, values: Vec<String>) {
        self.values = values;
    }

    /// Append a value. Duplicates are kept.
    pub fn add_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn phrase_values(&self) -> &[String] {
        &self.values
    }

    /// Android XML `<string-array>` block.
    pub fn output(&self) -> String {
        string_array_xml(&self.base.key, &self.values, &StandardEscaper)
    }
}

impl PhraseValue for StringArrayPhrase {
    fn base(&self) -> &PhraseBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PhraseBase {
        &mut self.base
    }

    fn kind(&self) -> PhraseKind {
        PhraseKind::StringArray
    }

    fn payload(&self) -> Payload {
        Payload::StringArray(self.values.clone())
    }

    /// Keys-only import keeps one empty slot per decoded entry, so the skeleton
    /// has the same length and positions as the source array.
    fn apply_payload(&mut self, payload: Payload, mode: ImportMode) -> Result<()> {
        let values = match payload {
            Payload::StringArray(values) => values,
            other => {
                return Err(PhraseError::ClassMismatch {
                    expected: PhraseKind::StringArray,
                    found: other.kind(),
                });
            }
        };

        self.base.is_empty = mode.marks_empty(values.iter().any(|value| !value.is_empty()));
        self.values = match mode {
            ImportMode::KeysOnly => vec![String::new(); values.len()],
            ImportMode::Full | ImportMode::DefaultFallback => values,
        };
        debug!(
            key = %self.base.key,
            ?mode,
            len = self.values.len(),
            is_empty = self.base.is_empty,
            "imported string-array payload"
        );
        Ok(())
    }

    fn render(&self, renderer: &Renderer<'_>) -> Result<String> {
        renderer.string_array(&self.base.key, &self.values)
    }

    fn completeness(&self) -> Completeness {
        Completeness::of(self.values.iter().map(String::as_str))
    }
}
