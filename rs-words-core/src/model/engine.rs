use std::panic;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread;

use log::{debug, info, warn};
use serde::Serialize;

use super::cooccurrence_graph::CoOccurrenceGraph;
use super::frequency_table::FrequencyTable;
use super::prefix_index::PrefixIndex;
use super::transition_model::TransitionModel;
use crate::error::CorpusError;
use crate::io::read_lines;
use crate::tokenizer::{normalize, tokenize};

/// Number of corpus chunks per CPU when loading in parallel.
const CHUNK_FACTOR: usize = 8;

/// Counters describing the engine content.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
	/// Distinct words.
	pub words: usize,
	/// Non-empty sentences ingested.
	pub sentences: u64,
	/// Total tokens ingested.
	pub tokens: u64,
	/// Distinct (predecessor, successor) pairs.
	pub transitions: usize,
	/// Distinct co-occurrence edges.
	pub edges: usize,
}

/// Every structure updated by one ingestion, guarded as a single unit.
///
/// ## Invariants
/// - `prefixes` holds a terminal node for a word iff `frequencies` counts it
/// - All four structures reflect exactly the same sentences
#[derive(Clone, Debug, Default)]
struct Index {
	frequencies: FrequencyTable,
	prefixes: PrefixIndex,
	transitions: TransitionModel,
	cooccurrences: CoOccurrenceGraph,
	sentences: u64,
}

impl Index {
	/// Applies one tokenized, non-empty sentence to every structure, in order.
	fn apply(&mut self, words: &[String]) {
		for word in words {
			let id = self.frequencies.increment(word);
			self.prefixes.insert(word, id);
		}
		self.transitions.observe(words);
		self.cooccurrences.observe(words);
		self.sentences += 1;
	}

	/// Tokenizes and applies `text`. Returns the number of tokens applied.
	fn ingest(&mut self, text: &str) -> usize {
		let words = tokenize(text);
		if !words.is_empty() {
			self.apply(&words);
		}
		words.len()
	}

	/// Merges an index built from later sentences into this one.
	fn merge(&mut self, other: &Self) {
		self.frequencies.merge(&other.frequencies);
		for (word, _) in other.frequencies.iter() {
			if let Some(id) = self.frequencies.id(word) {
				self.prefixes.insert(word, id);
			}
		}
		self.transitions.merge(&other.transitions);
		self.cooccurrences.merge(&other.cooccurrences);
		self.sentences += other.sentences;
	}

	/// Builds an index from many sentences using every CPU.
	///
	/// Sentences are split into consecutive chunks, each chunk is indexed on
	/// its own thread, and partial indexes are merged back in chunk order.
	/// The result is identical to ingesting the sentences one by one.
	fn build(sentences: &[String]) -> Self {
		let chunks = num_cpus::get() * CHUNK_FACTOR;
		let chunk_size = sentences.len().div_ceil(chunks).max(1);

		thread::scope(|scope| {
			let handles: Vec<_> = sentences
				.chunks(chunk_size)
				.map(|chunk| {
					scope.spawn(move || {
						let mut partial = Index::default();
						for sentence in chunk {
							partial.ingest(sentence);
						}
						partial
					})
				})
				.collect();

			let mut merged = Index::default();
			for handle in handles {
				match handle.join() {
					Ok(partial) => merged.merge(&partial),
					Err(payload) => panic::resume_unwind(payload),
				}
			}
			merged
		})
	}

	fn stats(&self) -> EngineStats {
		EngineStats {
			words: self.frequencies.len(),
			sentences: self.sentences,
			tokens: self.frequencies.tokens(),
			transitions: self.transitions.pairs(),
			edges: self.cooccurrences.edges(),
		}
	}
}

/// The word-statistics engine.
///
/// Owns a frequency table, a prefix index, a transition model and a
/// co-occurrence graph behind one `RwLock`. Each `ingest` holds the write
/// lock for the whole sentence, so readers never see a sentence applied to
/// some structures and not to others. Queries share the read lock.
///
/// The engine is a plain value: create one, then share it by reference
/// (ex. inside an `Arc` or `actix_web::web::Data`).
///
/// Every operation is infallible. Unknown words, unknown prefixes and
/// empty input yield empty results.
#[derive(Debug, Default)]
pub struct Engine {
	index: RwLock<Index>,
}

impl Engine {
	/// Creates an empty engine.
	pub fn new() -> Self {
		Self::default()
	}

	fn read(&self) -> RwLockReadGuard<'_, Index> {
		self.index.read().unwrap_or_else(|poisoned| {
			warn!("engine lock poisoned, recovering");
			PoisonError::into_inner(poisoned)
		})
	}

	fn write(&self) -> RwLockWriteGuard<'_, Index> {
		self.index.write().unwrap_or_else(|poisoned| {
			warn!("engine lock poisoned, recovering");
			PoisonError::into_inner(poisoned)
		})
	}

	/// Ingests one sentence.
	///
	/// Tokenizes `text` and, if any word remains, updates the frequency
	/// table, the prefix index, the transition model and the co-occurrence
	/// graph, in that order, as one atomic update. Empty or whitespace-only
	/// text is a no-op.
	///
	/// Returns the number of words ingested.
	pub fn ingest(&self, text: &str) -> usize {
		let words = tokenize(text);
		if words.is_empty() {
			return 0;
		}
		self.write().apply(&words);
		debug!("ingested sentence of {} words", words.len());
		words.len()
	}

	/// Ingests many sentences under a single write lock.
	///
	/// Returns the number of non-empty sentences ingested.
	pub fn ingest_all<I, S>(&self, sentences: I) -> usize
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut index = self.write();
		sentences
			.into_iter()
			.filter(|sentence| index.ingest(sentence.as_ref()) > 0)
			.count()
	}

	/// Loads a text file, one sentence per line.
	///
	/// The file is indexed in parallel off-lock, then merged into the engine
	/// as a single update. Results are the same as calling `ingest` on every
	/// line in order.
	///
	/// # Errors
	/// Returns an error if the file cannot be read.
	pub fn load_corpus<P: AsRef<Path>>(&self, path: P) -> Result<u64, CorpusError> {
		let lines = read_lines(&path)?;
		let corpus = Index::build(&lines);
		self.write().merge(&corpus);
		info!(
			"loaded corpus {}: {} sentences, {} distinct words",
			path.as_ref().display(),
			corpus.sentences,
			corpus.frequencies.len()
		);
		Ok(corpus.sentences)
	}

	/// Returns the `n` most frequent words with their counts.
	///
	/// Equal counts are ordered by first ingestion.
	pub fn top_words(&self, n: usize) -> Vec<(String, u64)> {
		self.read().frequencies.top_n(n)
	}

	/// Returns every known word starting with `prefix`.
	///
	/// `prefix` is normalized like an ingested token. If nothing is left after
	/// normalization, returns an empty list rather than every word.
	pub fn completions(&self, prefix: &str) -> Vec<String> {
		let Some(prefix) = normalize(prefix) else {
			return Vec::new();
		};
		let index = self.read();
		index.prefixes.completions(&prefix, &index.frequencies)
	}

	/// Predicts the word most often seen right after `word`.
	///
	/// Ties go to the successor observed first. Returns `None` when there is
	/// no prediction.
	pub fn predict_next(&self, word: &str) -> Option<String> {
		let word = normalize(word)?;
		self.read().transitions.predict_next(&word).map(str::to_owned)
	}

	/// Returns up to `n` likely successors of `word` with their counts.
	pub fn predict_top(&self, word: &str, n: usize) -> Vec<(String, u64)> {
		match normalize(word) {
			Some(word) => self.read().transitions.predict_top(&word, n),
			None => Vec::new(),
		}
	}

	/// Returns up to `n` words most often sharing a sentence with `word`.
	///
	/// Ordered by number of shared sentences, then lexically.
	pub fn related(&self, word: &str, n: usize) -> Vec<String> {
		match normalize(word) {
			Some(word) => self.read().cooccurrences.related(&word, n),
			None => Vec::new(),
		}
	}

	/// Returns how many times `word` was ingested (0 if never).
	pub fn frequency(&self, word: &str) -> u64 {
		normalize(word).map_or(0, |word| self.read().frequencies.count(&word))
	}

	/// Returns the current content counters.
	pub fn stats(&self) -> EngineStats {
		self.read().stats()
	}
}
