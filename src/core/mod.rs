//! Phrase core: value shapes, payload codec, rendering and completeness.
//!
//! Everything here is synchronous and free of I/O except [`document`], which
//! reads phrase documents from disk.
//!
//! ## Module Structure
//!
//! - `quantity`: the fixed plural quantity catalog
//! - `phrase`: PluralsPhrase, StringArrayPhrase and the PhraseValue capability trait
//! - `payload`: tagged persistence payload and import modes
//! - `render`: output formats, escaping and the shared renderer
//! - `completeness`: filled-vs-total counts
//! - `document`: ordered phrase collections and resource file export

pub mod completeness;
pub mod document;
pub mod payload;
pub mod phrase;
pub mod quantity;
pub mod render;

pub use completeness::Completeness;
pub use document::{ExportOptions, ExportResult, PhraseDocument};
pub use payload::{ImportMode, Payload};
pub use phrase::{
    Phrase, PhraseBase, PhraseId, PhraseKind, PhraseValue, PluralValues, PluralsPhrase,
    StringArrayPhrase,
};
pub use quantity::Quantity;
pub use render::{Escaper, OutputFormat, Renderer, StandardEscaper};
