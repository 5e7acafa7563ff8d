//! Word index structures.
//!
//! This module provides:
//! - An insertion-ordered counter shared by several structures (`Tally`)
//! - Word frequencies (`FrequencyTable`)
//! - Frequency-ranked prefix completion (`PrefixIndex`)
//! - Next-word prediction (`TransitionModel`)
//! - Sentence co-occurrence (`CoOccurrenceGraph`)
//! - The facade tying them together (`Engine`)

/// Thread-safe facade over every index structure.
///
/// Applies each sentence atomically and dispatches queries.
pub mod engine;

/// Word occurrence counts with deterministic top-N ranking.
pub mod frequency_table;

/// Character trie over known words, ranked by live frequency.
pub mod prefix_index;

/// Successor counts per word and next-word prediction.
pub mod transition_model;

/// Undirected weighted graph of words sharing a sentence.
pub mod cooccurrence_graph;

/// Insertion-ordered word counter.
pub mod tally;
