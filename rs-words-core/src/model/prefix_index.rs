use std::collections::BTreeMap;

use super::frequency_table::{FrequencyTable, WordId};

/// Index of the root node in `PrefixIndex::nodes`.
const ROOT: usize = 0;

#[derive(Clone, Debug, Default)]
struct TrieNode {
	/// Child node indices keyed by the next character.
	children: BTreeMap<char, usize>,
	/// Set when the path from the root spells a known word.
	word: Option<WordId>,
}

/// A character trie over every known word.
///
/// Nodes live in a flat arena and point to their children by index. Terminal
/// nodes hold the `WordId` of their word rather than its count, so rankings
/// always read the live count from the `FrequencyTable`.
///
/// # Invariants
/// - `nodes[ROOT]` always exists
/// - The path to each terminal node spells exactly one word
/// - A word has a terminal node iff it was inserted
#[derive(Clone, Debug)]
pub struct PrefixIndex {
	nodes: Vec<TrieNode>,
	words: usize,
}

impl Default for PrefixIndex {
	fn default() -> Self {
		Self::new()
	}
}

impl PrefixIndex {
	/// Creates an index holding only the root node.
	pub fn new() -> Self {
		Self { nodes: vec![TrieNode::default()], words: 0 }
	}

	/// Inserts `word` and marks its terminal node with `id`.
	///
	/// Idempotent: inserting a known word changes nothing. Returns `true` if
	/// the word was new.
	pub fn insert(&mut self, word: &str, id: WordId) -> bool {
		let mut node = ROOT;
		for c in word.chars() {
			node = match self.nodes[node].children.get(&c) {
				Some(&child) => child,
				None => {
					let child = self.nodes.len();
					self.nodes.push(TrieNode::default());
					self.nodes[node].children.insert(c, child);
					child
				}
			};
		}

		if self.nodes[node].word.is_some() {
			return false;
		}
		self.nodes[node].word = Some(id);
		self.words += 1;
		true
	}

	/// Returns `true` if `word` was inserted.
	pub fn contains(&self, word: &str) -> bool {
		self.find(word).is_some_and(|node| self.nodes[node].word.is_some())
	}

	/// Number of distinct words indexed.
	pub fn len(&self) -> usize {
		self.words
	}

	pub fn is_empty(&self) -> bool {
		self.words == 0
	}

	/// Walks down the trie along `prefix`.
	fn find(&self, prefix: &str) -> Option<usize> {
		let mut node = ROOT;
		for c in prefix.chars() {
			node = *self.nodes[node].children.get(&c)?;
		}
		Some(node)
	}

	/// Returns every known word starting with `prefix`.
	///
	/// Words are ordered by descending frequency, then lexically. `prefix`
	/// must already be normalized. An empty prefix returns every word, an
	/// unknown prefix returns nothing.
	pub fn completions(&self, prefix: &str, frequencies: &FrequencyTable) -> Vec<String> {
		let Some(start) = self.find(prefix) else {
			return Vec::new();
		};

		let mut found: Vec<(&str, u64)> = Vec::new();
		let mut stack = vec![start];
		while let Some(node) = stack.pop() {
			let node = &self.nodes[node];
			if let Some(id) = node.word {
				if let Some(word) = frequencies.word(id) {
					found.push((word, frequencies.count_by_id(id)));
				}
			}
			stack.extend(node.children.values().copied());
		}

		found.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		found.into_iter().map(|(word, _)| word.to_owned()).collect()
	}
}
