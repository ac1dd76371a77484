//! Phrase shapes and their shared capability set.
//!
//! ## Module Structure
//!
//! - `base`: PhraseBase (identity, key, enabled and empty flags)
//! - `plurals`: PluralsPhrase and its fixed-key PluralValues
//! - `string_array`: StringArrayPhrase

pub mod base;
pub mod plurals;
pub mod string_array;

use std::fmt;

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

pub use base::{PhraseBase, PhraseId};
pub use plurals::{PluralValues, PluralsPhrase};
pub use string_array::StringArrayPhrase;

use crate::core::{Completeness, ImportMode, Payload, render::Renderer};
use crate::error::Result;

/// Shape of a phrase value. Displays as the payload class tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhraseKind {
    Plurals,
    StringArray,
}

impl fmt::Display for PhraseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhraseKind::Plurals => write!(f, "Plurals"),
            PhraseKind::StringArray => write!(f, "StringArray"),
        }
    }
}

/// Capabilities shared by every phrase shape: payload codec, rendering and
/// completeness. Uses `enum_dispatch` so [`Phrase`] forwards without boxing.
#[enum_dispatch]
pub trait PhraseValue {
    fn base(&self) -> &PhraseBase;

    fn base_mut(&mut self) -> &mut PhraseBase;

    fn kind(&self) -> PhraseKind;

    /// Current value as a payload.
    fn payload(&self) -> Payload;

    /// Replace the value with an already decoded payload.
    ///
    /// Fails with `ClassMismatch` if the payload belongs to another shape.
    /// Nothing is modified on failure.
    fn apply_payload(&mut self, payload: Payload, mode: ImportMode) -> Result<()>;

    /// Render for the renderer's format.
    fn render(&self, renderer: &Renderer<'_>) -> Result<String>;

    fn completeness(&self) -> Completeness;

    fn key(&self) -> &str {
        &self.base().key
    }

    fn is_empty(&self) -> bool {
        self.base().is_empty
    }

    /// Serialized payload, see [`Payload`].
    fn get_payload(&self) -> Result<String> {
        self.payload().to_json()
    }

    /// Decode `json` and import it with `mode`.
    fn set_payload(&mut self, json: &str, mode: ImportMode) -> Result<()> {
        let payload = Payload::from_json(json)?;
        self.apply_payload(payload, mode)
    }

    fn import_full(&mut self, json: &str) -> Result<()> {
        self.set_payload(json, ImportMode::Full)
    }

    fn import_keys_only(&mut self, json: &str) -> Result<()> {
        self.set_payload(json, ImportMode::KeysOnly)
    }

    fn import_as_default_fallback(&mut self, json: &str) -> Result<()> {
        self.set_payload(json, ImportMode::DefaultFallback)
    }
}

/// A phrase of any shape.
#[enum_dispatch(PhraseValue)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phrase {
    Plurals(PluralsPhrase),
    StringArray(StringArrayPhrase),
}

impl Phrase {
    /// Empty phrase of the given shape.
    pub fn new(kind: PhraseKind, base: PhraseBase) -> Self {
        match kind {
            PhraseKind::Plurals => Phrase::Plurals(PluralsPhrase::from_base(base)),
            PhraseKind::StringArray => Phrase::StringArray(StringArrayPhrase::from_base(base)),
        }
    }

    /// Build the phrase shape named by the payload's class and import it.
    pub fn from_payload(base: PhraseBase, payload: Payload, mode: ImportMode) -> Result<Self> {
        let mut phrase = Self::new(payload.kind(), base);
        phrase.apply_payload(payload, mode)?;
        Ok(phrase)
    }

    pub fn from_payload_str(base: PhraseBase, json: &str, mode: ImportMode) -> Result<Self> {
        Self::from_payload(base, Payload::from_json(json)?, mode)
    }

    pub fn as_plurals_mut(&mut self) -> Option<&mut PluralsPhrase> {
        match self {
            Phrase::Plurals(phrase) => Some(phrase),
            Phrase::StringArray(_) => None,
        }
    }
}
