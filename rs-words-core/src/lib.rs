//! Incremental word-statistics library.
//!
//! This crate provides an in-memory text indexing engine including:
//! - Whitespace tokenization with case folding and punctuation stripping
//! - Word frequencies with deterministic top-N ranking
//! - Prefix completion over every known word
//! - Next-word prediction from observed adjacent pairs
//! - Related words from sentence-level co-occurrence
//!
//! The `Engine` facade is the entry point. It owns all structures behind a
//! single lock so that every ingested sentence is applied atomically.

/// Word index structures and the `Engine` facade.
pub mod model;

/// Text to word tokenization.
pub mod tokenizer;

/// Errors raised while loading a corpus file.
pub mod error;

/// I/O utilities (corpus file loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::CorpusError;
pub use model::engine::{Engine, EngineStats};
