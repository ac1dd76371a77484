//! Output rendering for phrases.
//!
//! Every renderer goes through [`render_entries`]: one ordered traversal, one
//! escape call per value, and a [`Layout`] that decides how the block and each
//! entry look. Plurals are always traversed in [`Quantity::ALL`] order.
//!
//! ## Module Structure
//!
//! - `escape`: Escaper trait and the standard escaping rules
//! - `format`: OutputFormat enum

pub mod escape;
pub mod format;

pub use escape::{Escaper, StandardEscaper};

use escape::escape_key;
pub use format::OutputFormat;

use crate::core::{PhraseKind, PluralValues, Quantity};
use crate::error::{PhraseError, Result};

/// Block and entry shape for one kind of phrase in one format family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    PluralsXml,
    PluralsJson,
    PluralsPlaintext,
    StringArrayXml,
}

impl Layout {
    fn open(&self, key: &str) -> String {
        match self {
            Layout::PluralsXml => format!("\t<plurals name=\"{}\">\n", key),
            Layout::PluralsJson => format!(
                "\t\"{}\" : {{ \"type\" : \"plurals\", \"content\" : {{\n",
                key
            ),
            Layout::PluralsPlaintext => String::new(),
            Layout::StringArrayXml => format!("\t<string-array name=\"{}\">\n", key),
        }
    }

    fn entry(&self, key: &str, label: Option<&str>, value: &str) -> String {
        let label = label.unwrap_or_default();
        match self {
            Layout::PluralsXml => format!("\t\t<item quantity=\"{}\">{}</item>", label, value),
            Layout::PluralsJson => format!("\t\t\"{}\" : \"{}\"", label, value),
            Layout::PluralsPlaintext => format!("{};plurals;{};{}", key, label, value),
            Layout::StringArrayXml => format!("\t\t<item>{}</item>\n", value),
        }
    }

    fn separator(&self) -> &'static str {
        match self {
            Layout::PluralsXml | Layout::PluralsPlaintext => "\n",
            Layout::PluralsJson => ",\n",
            Layout::StringArrayXml => "",
        }
    }

    fn close(&self) -> &'static str {
        match self {
            Layout::PluralsXml => "\n\t</plurals>",
            Layout::PluralsJson => "\n\t} }",
            Layout::PluralsPlaintext => "",
            Layout::StringArrayXml => "\t</string-array>\n",
        }
    }
}

/// Shared traversal: entries are emitted exactly in the order given.
///
/// `key` must already be escaped for the layout's format.
fn render_entries<'a>(
    layout: Layout,
    key: &str,
    entries: impl IntoIterator<Item = (Option<&'a str>, &'a str)>,
    escape: impl Fn(&str) -> String,
) -> String {
    let body: Vec<String> = entries
        .into_iter()
        .map(|(label, value)| layout.entry(key, label, &escape(value)))
        .collect();

    let mut out = layout.open(key);
    out.push_str(&body.join(layout.separator()));
    out.push_str(layout.close());
    out
}

/// Renders phrase values for one output format with one escaper.
pub struct Renderer<'a> {
    format: OutputFormat,
    escaper: &'a dyn Escaper,
}

impl<'a> Renderer<'a> {
    pub fn new(format: OutputFormat, escaper: &'a dyn Escaper) -> Self {
        Self { format, escaper }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn plurals(&self, key: &str, values: &PluralValues) -> String {
        let layout = match self.format {
            OutputFormat::AndroidXml | OutputFormat::AndroidXmlEscapedHtml => Layout::PluralsXml,
            OutputFormat::Json => Layout::PluralsJson,
            OutputFormat::Plaintext => Layout::PluralsPlaintext,
        };
        let entries = Quantity::ALL
            .iter()
            .map(|quantity| (Some(quantity.as_str()), values.get(*quantity)));
        render_entries(layout, &escape_key(key, self.format), entries, |value| {
            self.escaper.escape(value, self.format)
        })
    }

    /// String arrays only exist as Android XML. Both XML flavours produce the
    /// same block, escaped with the plain Android XML rules.
    pub fn string_array(&self, key: &str, values: &[String]) -> Result<String> {
        if !self.format.is_xml() {
            return Err(PhraseError::UnsupportedFormat {
                kind: PhraseKind::StringArray,
                format: self.format,
            });
        }
        Ok(string_array_xml(key, values, self.escaper))
    }
}

/// `<string-array>` block. Android XML is the only format a string array has,
/// so this cannot fail.
pub(crate) fn string_array_xml(key: &str, values: &[String], escaper: &dyn Escaper) -> String {
    let entries = values.iter().map(|value| (None, value.as_str()));
    render_entries(
        Layout::StringArrayXml,
        &escape_key(key, OutputFormat::AndroidXml),
        entries,
        |value| escaper.escape(value, OutputFormat::AndroidXml),
    )
}
