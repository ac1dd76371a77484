//! Format-aware encoding of raw phrase values.
//!
//! Renderers never escape values themselves; they call an [`Escaper`] with the
//! target format. [`StandardEscaper`] covers the common rules and can be swapped
//! for a project-specific implementation.

use serde_json::Value;

use super::OutputFormat;

/// Encodes a raw value so it is safe to embed in the given output format.
pub trait Escaper {
    fn escape(&self, raw: &str, format: OutputFormat) -> String;
}

/// Default escaping rules for every [`OutputFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEscaper;

impl Escaper for StandardEscaper {
    fn escape(&self, raw: &str, format: OutputFormat) -> String {
        match format {
            OutputFormat::AndroidXml => escape_android(raw, false),
            OutputFormat::AndroidXmlEscapedHtml => escape_android(raw, true),
            OutputFormat::Json => escape_json(raw),
            OutputFormat::Plaintext => escape_plaintext(raw),
        }
    }
}

/// Android string resource escaping.
///
/// A leading `@` or `?` would be read as a resource reference, so it is escaped.
fn escape_android(raw: &str, escape_html: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        match c {
            '&' => out.push_str("&amp;"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '<' if escape_html => out.push_str("&lt;"),
            '>' if escape_html => out.push_str("&gt;"),
            '@' | '?' if i == 0 => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escape a phrase key for where each format puts it: an XML attribute value,
/// a JSON object key, or the first plaintext column.
pub(crate) fn escape_key(key: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::AndroidXml | OutputFormat::AndroidXmlEscapedHtml => escape_attribute(key),
        OutputFormat::Json => escape_json(key),
        OutputFormat::Plaintext => escape_plaintext(key),
    }
}

fn escape_attribute(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON string body, without the surrounding quotes.
fn escape_json(raw: &str) -> String {
    let quoted = Value::String(raw.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

fn escape_plaintext(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
