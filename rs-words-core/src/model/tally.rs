use std::collections::HashMap;

/// An insertion-ordered word counter.
///
/// A `Tally` records how many times each word was observed and remembers the
/// order in which words were first seen. That order is the tie-breaker for
/// every ranking, which keeps results deterministic across runs.
///
/// ## Responsibilities:
/// - Accumulate word occurrences
/// - Hand out a stable position per word (its first-seen index)
/// - Rank words by count, earliest first on ties
/// - Merge with another tally (ex. parallel corpus loading)
///
/// ## Invariants
/// - `index[word] == i` iff `entries[i].0 == word`
/// - Each occurrence count is strictly positive
#[derive(Clone, Debug, Default)]
pub struct Tally {
	/// Words with their counts, in first-seen order.
	entries: Vec<(String, u64)>,
	/// Word to position in `entries`.
	index: HashMap<String, usize>,
}

impl Tally {
	/// Creates a new empty tally.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `word` and returns its position.
	///
	/// - If the word already exists, its count is increased.
	/// - Otherwise it is appended with a count of 1.
	pub fn add(&mut self, word: &str) -> usize {
		match self.index.get(word) {
			Some(&position) => {
				self.entries[position].1 += 1;
				position
			}
			None => self.push(word, 1),
		}
	}

	/// Appends a new word with a strictly positive count.
	fn push(&mut self, word: &str, count: u64) -> usize {
		debug_assert!(count > 0);
		let position = self.entries.len();
		self.entries.push((word.to_owned(), count));
		self.index.insert(word.to_owned(), position);
		position
	}

	/// Adds `count` occurrences of `word` and returns its position.
	///
	/// A zero count never creates an entry: it returns the position of a
	/// known word and `None` for an unknown one.
	fn add_count(&mut self, word: &str, count: u64) -> Option<usize> {
		if let Some(&position) = self.index.get(word) {
			self.entries[position].1 += count;
			return Some(position);
		}
		if count == 0 {
			return None;
		}
		Some(self.push(word, count))
	}

	/// Returns how many times `word` was observed (0 if never).
	pub fn count(&self, word: &str) -> u64 {
		self.index.get(word).map_or(0, |&position| self.entries[position].1)
	}

	/// Returns the count stored at `position` (0 if out of range).
	pub fn count_at(&self, position: usize) -> u64 {
		self.entries.get(position).map_or(0, |(_, count)| *count)
	}

	/// Returns the position of `word`, if known.
	pub fn position(&self, word: &str) -> Option<usize> {
		self.index.get(word).copied()
	}

	/// Returns the word and count stored at `position`.
	pub fn get(&self, position: usize) -> Option<(&str, u64)> {
		self.entries.get(position).map(|(word, count)| (word.as_str(), *count))
	}

	/// Returns the word with the highest count.
	///
	/// On a tie the word seen first wins. Returns `None` if the tally is empty.
	pub fn best(&self) -> Option<(&str, u64)> {
		let mut best: Option<(&str, u64)> = None;
		for (word, count) in &self.entries {
			if best.map_or(true, |(_, top)| *count > top) {
				best = Some((word.as_str(), *count));
			}
		}
		best
	}

	/// Returns up to `n` words sorted by count descending.
	///
	/// The sort is stable over first-seen order, so equal counts keep the
	/// earliest word first.
	pub fn ranked(&self, n: usize) -> Vec<(String, u64)> {
		if n == 0 {
			return Vec::new();
		}
		let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
		ranked.sort_by(|a, b| b.1.cmp(&a.1));
		ranked.into_iter().take(n).cloned().collect()
	}

	/// Iterates over `(word, count)` in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.entries.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Sum of all counts.
	pub fn total(&self) -> u64 {
		self.entries.iter().map(|(_, count)| count).sum()
	}

	/// Merges another tally into this one.
	///
	/// Counts are summed. Words unknown to `self` are appended in the order
	/// `other` first saw them, so merging the tallies of consecutive chunks in
	/// chunk order gives the same ranking as counting everything in one pass.
	pub fn merge(&mut self, other: &Self) {
		for (word, count) in &other.entries {
			self.add_count(word, *count);
		}
	}
}
