use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{PhraseBase, PhraseId, PhraseKind, PhraseValue};
use crate::core::{
    Completeness, ImportMode, OutputFormat, Payload, Quantity,
    render::{Renderer, StandardEscaper},
};
use crate::error::{PhraseError, Result};

/// One string per plural quantity.
///
/// Every quantity is always present; absent content is the empty string.
/// Serializes as a JSON object with keys in catalog order. On decode, missing
/// quantities default to `""` and unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluralValues {
    zero: String,
    one: String,
    two: String,
    few: String,
    many: String,
    other: String,
}

impl PluralValues {
    pub fn get(&self, quantity: Quantity) -> &str {
        match quantity {
            Quantity::Zero => &self.zero,
            Quantity::One => &self.one,
            Quantity::Two => &self.two,
            Quantity::Few => &self.few,
            Quantity::Many => &self.many,
            Quantity::Other => &self.other,
        }
    }

    fn slot_mut(&mut self, quantity: Quantity) -> &mut String {
        match quantity {
            Quantity::Zero => &mut self.zero,
            Quantity::One => &mut self.one,
            Quantity::Two => &mut self.two,
            Quantity::Few => &mut self.few,
            Quantity::Many => &mut self.many,
            Quantity::Other => &mut self.other,
        }
    }

    pub fn set(&mut self, quantity: Quantity, value: impl Into<String>) {
        *self.slot_mut(quantity) = value.into();
    }

    /// Iterate `(quantity, value)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Quantity, &str)> + '_ {
        Quantity::ALL
            .into_iter()
            .map(move |quantity| (quantity, self.get(quantity)))
    }

    pub fn has_content(&self) -> bool {
        self.iter().any(|(_, value)| !value.is_empty())
    }
}

impl<S: Into<String>> FromIterator<(Quantity, S)> for PluralValues {
    fn from_iter<I: IntoIterator<Item = (Quantity, S)>>(iter: I) -> Self {
        let mut values = Self::default();
        for (quantity, value) in iter {
            values.set(quantity, value);
        }
        values
    }
}

/// A phrase whose value is selected by plural quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralsPhrase {
    base: PhraseBase,
    values: PluralValues,
}

impl PluralsPhrase {
    pub fn new(id: PhraseId, key: impl Into<String>) -> Self {
        Self::from_base(PhraseBase::new(id, key))
    }

    pub fn from_base(base: PhraseBase) -> Self {
        Self {
            base,
            values: PluralValues::default(),
        }
    }

    pub fn phrase_values(&self) -> &PluralValues {
        &self.values
    }

    pub fn get(&self, quantity: Quantity) -> &str {
        self.values.get(quantity)
    }

    pub fn set(&mut self, quantity: Quantity, value: impl Into<String>) {
        self.values.set(quantity, value);
    }

    /// Set the value for a quantity given by name.
    ///
    /// Fails with [`PhraseError::UnknownSubKey`] if `sub_key` is not a quantity;
    /// the values are left untouched in that case.
    pub fn set_phrase_value(&mut self, sub_key: &str, value: impl Into<String>) -> Result<()> {
        let quantity: Quantity = sub_key
            .parse()
            .map_err(|_| PhraseError::UnknownSubKey(sub_key.to_string()))?;
        self.set(quantity, value);
        Ok(())
    }

    /// Same contract as [`set_phrase_value`](Self::set_phrase_value), reporting
    /// [`PhraseError::UnknownQuantity`] on an invalid quantity.
    pub fn add_value(&mut self, value: impl Into<String>, quantity: &str) -> Result<()> {
        let quantity: Quantity = quantity.parse()?;
        self.set(quantity, value);
        Ok(())
    }

    /// Fill every empty quantity with `default_value`.
    pub fn fill_with_default(&mut self, default_value: &str) {
        let mut filled = 0;
        for quantity in Quantity::ALL {
            let slot = self.values.slot_mut(quantity);
            if slot.is_empty() {
                *slot = default_value.to_string();
                filled += 1;
            }
        }
        debug!(key = %self.base.key, filled, "filled plural quantities with default");
    }

    fn output_with(&self, format: OutputFormat) -> String {
        Renderer::new(format, &StandardEscaper).plurals(&self.base.key, &self.values)
    }

    pub fn output_android_xml(&self) -> String {
        self.output_with(OutputFormat::AndroidXml)
    }

    pub fn output_android_xml_escaped_html(&self) -> String {
        self.output_with(OutputFormat::AndroidXmlEscapedHtml)
    }

    pub fn output_json(&self) -> String {
        self.output_with(OutputFormat::Json)
    }

    pub fn output_plaintext(&self) -> String {
        self.output_with(OutputFormat::Plaintext)
    }
}

impl PhraseValue for PluralsPhrase {
    fn base(&self) -> &PhraseBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PhraseBase {
        &mut self.base
    }

    fn kind(&self) -> PhraseKind {
        PhraseKind::Plurals
    }

    fn payload(&self) -> Payload {
        Payload::Plurals(self.values.clone())
    }

    fn apply_payload(&mut self, payload: Payload, mode: ImportMode) -> Result<()> {
        let values = match payload {
            Payload::Plurals(values) => values,
            other => {
                return Err(PhraseError::ClassMismatch {
                    expected: PhraseKind::Plurals,
                    found: other.kind(),
                });
            }
        };

        self.base.is_empty = mode.marks_empty(values.has_content());
        self.values = match mode {
            ImportMode::KeysOnly => PluralValues::default(),
            ImportMode::Full | ImportMode::DefaultFallback => values,
        };
        debug!(key = %self.base.key, ?mode, is_empty = self.base.is_empty, "imported plurals payload");
        Ok(())
    }

    fn render(&self, renderer: &Renderer<'_>) -> Result<String> {
        Ok(renderer.plurals(&self.base.key, &self.values))
    }

    fn completeness(&self) -> Completeness {
        Completeness::of(self.values.iter().map(|(_, value)| value))
    }
}
