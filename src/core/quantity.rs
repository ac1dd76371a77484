use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PhraseError;

/// Plural category used to select among plural-form translations.
///
/// The set is closed. Declaration order is the catalog order used for
/// every traversal, so output never depends on insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl Quantity {
    /// All categories in catalog order.
    pub const ALL: [Quantity; 6] = [
        Quantity::Zero,
        Quantity::One,
        Quantity::Two,
        Quantity::Few,
        Quantity::Many,
        Quantity::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::Zero => "zero",
            Quantity::One => "one",
            Quantity::Two => "two",
            Quantity::Few => "few",
            Quantity::Many => "many",
            Quantity::Other => "other",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quantity {
    type Err = PhraseError;

    /// Case-sensitive: `"One"` is not a quantity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::ALL
            .into_iter()
            .find(|quantity| quantity.as_str() == s)
            .ok_or_else(|| PhraseError::UnknownQuantity(s.to_string()))
    }
}
