use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque phrase identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhraseId(pub u64);

impl fmt::Display for PhraseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State shared by every phrase shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseBase {
    pub id: PhraseId,
    /// Phrase key, unique within a project. Used as the output element name.
    pub key: String,
    pub enabled_for_translation: bool,
    /// True while the phrase has no authored content. Updated on payload import.
    pub is_empty: bool,
}

impl PhraseBase {
    pub fn new(id: PhraseId, key: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            enabled_for_translation: true,
            is_empty: true,
        }
    }

    pub fn with_enabled_for_translation(mut self, enabled: bool) -> Self {
        self.enabled_for_translation = enabled;
        self
    }
}
