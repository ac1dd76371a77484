use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Target output format for rendered phrases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Android resource XML; HTML markup in values passes through.
    #[default]
    AndroidXml,
    /// Android resource XML with HTML markup escaped as entities.
    AndroidXmlEscapedHtml,
    /// JSON resource fragment.
    Json,
    /// `key;type;sub-key;value` line records.
    Plaintext,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::AndroidXml => "android-xml",
            OutputFormat::AndroidXmlEscapedHtml => "android-xml-escaped-html",
            OutputFormat::Json => "json",
            OutputFormat::Plaintext => "plaintext",
        }
    }

    /// Returns true for both Android XML flavours.
    pub fn is_xml(&self) -> bool {
        matches!(
            self,
            OutputFormat::AndroidXml | OutputFormat::AndroidXmlEscapedHtml
        )
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
