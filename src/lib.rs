//! Phrasekit - typed localizable phrases for Android-style resources
//!
//! Phrasekit models a single localizable phrase in one of two shapes: a plurals
//! phrase with one value per plural quantity, and an ordered string array. Each
//! phrase converts to and from a tagged JSON payload, renders as Android XML,
//! JSON or plaintext, and reports how complete its translation is.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (render, status, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Phrase shapes, payload codec, renderers and documents
//! - `error`: Typed errors raised by the phrase core

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use error::PhraseError;
