//! Persistence payload for phrase values.
//!
//! A payload is a JSON object tagged with the phrase class:
//!
//! ```json
//! { "class": "Plurals", "values": { "zero": "", "one": "", "two": "", "few": "", "many": "", "other": "" } }
//! { "class": "StringArray", "values": ["v0", "v1"] }
//! ```
//!
//! Older stores wrote `Phrase_Android_Plurals` / `Phrase_Android_StringArray` as the
//! class; both are accepted on decode, encoding always writes the short tag.

use serde::{Deserialize, Serialize};

use crate::core::{PhraseKind, PluralValues};
use crate::error::{PhraseError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "class", content = "values")]
pub enum Payload {
    #[serde(alias = "Phrase_Android_Plurals")]
    Plurals(PluralValues),
    #[serde(alias = "Phrase_Android_StringArray")]
    StringArray(Vec<String>),
}

impl Payload {
    /// Decode a payload. Malformed JSON, a missing `class` or `values` field, an
    /// unknown quantity key or a non-string value are all decode errors.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(PhraseError::Decode)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(PhraseError::Encode)
    }

    pub fn kind(&self) -> PhraseKind {
        match self {
            Payload::Plurals(_) => PhraseKind::Plurals,
            Payload::StringArray(_) => PhraseKind::StringArray,
        }
    }

    /// Returns true if at least one decoded value is non-empty.
    pub fn has_content(&self) -> bool {
        match self {
            Payload::Plurals(values) => values.has_content(),
            Payload::StringArray(values) => values.iter().any(|value| !value.is_empty()),
        }
    }
}

/// How an imported payload becomes the phrase's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Take the decoded content as an authored translation.
    #[default]
    Full,
    /// Build the phrase skeleton only: keep the decoded structure, drop the content.
    KeysOnly,
    /// Take the decoded content, but it is borrowed from the default language.
    DefaultFallback,
}

impl ImportMode {
    /// Whether the phrase counts as untranslated after importing with this mode.
    pub fn marks_empty(&self, has_content: bool) -> bool {
        match self {
            ImportMode::Full => !has_content,
            ImportMode::KeysOnly | ImportMode::DefaultFallback => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Quantity;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_plurals_in_catalog_order() {
        let values: PluralValues = [(Quantity::Other, "many"), (Quantity::One, "one")]
            .into_iter()
            .collect();
        let json = Payload::Plurals(values).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"class":"Plurals","values":{"zero":"","one":"one","two":"","few":"","many":"","other":"many"}}"#
        );
    }

    #[test]
    fn test_encode_string_array() {
        let payload = Payload::StringArray(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"class":"StringArray","values":["a","b"]}"#
        );
    }

    #[test]
    fn test_decode_fills_missing_quantities() {
        let payload = Payload::from_json(r#"{"class":"Plurals","values":{"one":"x"}}"#).unwrap();
        let Payload::Plurals(values) = payload else {
            panic!("expected plurals payload");
        };
        assert_eq!(values.get(Quantity::One), "x");
        assert_eq!(values.get(Quantity::Zero), "");
        assert_eq!(values.get(Quantity::Other), "");
    }

    #[test]
    fn test_decode_legacy_class_names() {
        let plurals = Payload::from_json(r#"{"class":"Phrase_Android_Plurals","values":{}}"#);
        assert_eq!(plurals.unwrap().kind(), PhraseKind::Plurals);

        let array =
            Payload::from_json(r#"{"class":"Phrase_Android_StringArray","values":["a"]}"#);
        assert_eq!(
            array.unwrap(),
            Payload::StringArray(vec!["a".to_string()])
        );
    }

    #[test]
    fn test_decode_accepts_values_before_class() {
        let payload = Payload::from_json(r#"{"values":["a"],"class":"StringArray"}"#).unwrap();
        assert_eq!(payload.kind(), PhraseKind::StringArray);
    }

    #[test]
    fn test_decode_errors() {
        let cases = [
            "not json",
            r#"{"class":"Plurals"}"#,
            r#"{"values":{"one":"x"}}"#,
            r#"{"class":"Strings","values":[]}"#,
            r#"{"class":"Plurals","values":{"several":"x"}}"#,
            r#"{"class":"Plurals","values":{"one":1}}"#,
            r#"{"class":"StringArray","values":"a"}"#,
        ];
        for json in cases {
            let result = Payload::from_json(json);
            assert!(
                matches!(result, Err(PhraseError::Decode(_))),
                "expected decode error for {json}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_has_content() {
        assert!(!Payload::StringArray(vec![String::new()]).has_content());
        assert!(Payload::StringArray(vec![String::new(), "b".to_string()]).has_content());
        assert!(!Payload::Plurals(PluralValues::default()).has_content());
    }

    #[test]
    fn test_marks_empty() {
        assert!(ImportMode::Full.marks_empty(false));
        assert!(!ImportMode::Full.marks_empty(true));
        assert!(ImportMode::KeysOnly.marks_empty(true));
        assert!(ImportMode::DefaultFallback.marks_empty(true));
    }
}
