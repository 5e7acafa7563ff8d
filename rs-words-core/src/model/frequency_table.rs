use super::tally::Tally;

/// Stable identifier of a word: its first-insertion index in the table.
pub type WordId = usize;

/// Word occurrence counts.
///
/// # Responsibilities
/// - Count every ingested word
/// - Answer top-N queries, ties broken by first-insertion order
/// - Give each word a stable `WordId` that other structures can hold
///
/// # Invariants
/// - Every word present has a count >= 1; absence means 0
/// - Counts never decrease
/// - A `WordId` never changes once assigned
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
	words: Tally,
}

impl FrequencyTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one occurrence of `word` and returns its id.
	pub fn increment(&mut self, word: &str) -> WordId {
		self.words.add(word)
	}

	/// Current count of `word`, 0 if unknown.
	pub fn count(&self, word: &str) -> u64 {
		self.words.count(word)
	}

	/// Current count of the word identified by `id`.
	pub fn count_by_id(&self, id: WordId) -> u64 {
		self.words.count_at(id)
	}

	pub fn id(&self, word: &str) -> Option<WordId> {
		self.words.position(word)
	}

	pub fn word(&self, id: WordId) -> Option<&str> {
		self.words.get(id).map(|(word, _)| word)
	}

	/// Returns the `n` most frequent words with their counts.
	///
	/// Equal counts keep first-insertion order. Fewer than `n` words yields
	/// all of them, `n == 0` yields nothing.
	pub fn top_n(&self, n: usize) -> Vec<(String, u64)> {
		self.words.ranked(n)
	}

	/// Iterates over `(word, count)` in first-insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.words.iter()
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Total number of counted tokens.
	pub fn tokens(&self) -> u64 {
		self.words.total()
	}

	/// Merges another table into this one, summing counts.
	pub fn merge(&mut self, other: &Self) {
		self.words.merge(&other.words);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_and_ids() {
		let mut table = FrequencyTable::new();
		let the = table.increment("the");
		let cat = table.increment("cat");
		assert_eq!(table.increment("the"), the);
		assert_ne!(the, cat);
		assert_eq!(table.count("the"), 2);
		assert_eq!(table.count_by_id(cat), 1);
		assert_eq!(table.count("dog"), 0);
		assert_eq!(table.word(cat), Some("cat"));
		assert_eq!(table.len(), 2);
		assert_eq!(table.tokens(), 3);
	}

	#[test]
	fn top_n_ties_follow_insertion() {
		let mut table = FrequencyTable::new();
		for word in ["the", "quick", "fox", "the", "quick", "dog"] {
			table.increment(word);
		}
		assert_eq!(
			table.top_n(2),
			vec![("the".to_owned(), 2), ("quick".to_owned(), 2)]
		);
		assert_eq!(table.top_n(4)[2], ("fox".to_owned(), 1));
		assert!(table.top_n(0).is_empty());
	}

	#[test]
	fn top_n_on_empty_table() {
		assert!(FrequencyTable::new().top_n(3).is_empty());
	}
}
