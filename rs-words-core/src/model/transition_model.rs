use std::collections::HashMap;

use super::tally::Tally;

/// First-order word transition model.
///
/// For each word seen as a predecessor, stores a `Tally` of the words that
/// directly followed it. Conceptually, this is a Markov chain where outgoing
/// edges are weighted by their number of observations.
///
/// # Responsibilities
/// - Count adjacent pairs within a single sentence, left to right
/// - Predict the most likely successor, ties broken by first observation
/// - Merge with another model (ex. parallel corpus loading)
///
/// # Invariants
/// - Pairs are only counted inside one sentence, never across sentences
/// - Each successor count is strictly positive
#[derive(Clone, Debug, Default)]
pub struct TransitionModel {
	/// Predecessor to its successors.
	successors: HashMap<String, Tally>,
	/// Number of distinct (predecessor, successor) pairs.
	pairs: usize,
}

impl TransitionModel {
	pub fn new() -> Self {
		Self::default()
	}

	/// Counts every adjacent pair `(words[i], words[i + 1])`.
	///
	/// Sequences shorter than two words are ignored.
	pub fn observe(&mut self, words: &[String]) {
		for pair in words.windows(2) {
			let tally = self.successors.entry(pair[0].clone()).or_default();
			let position = tally.add(&pair[1]);
			if tally.count_at(position) == 1 {
				self.pairs += 1;
			}
		}
	}

	/// Returns the most frequent successor of `word`.
	///
	/// Returns `None` if `word` was never followed by anything.
	pub fn predict_next(&self, word: &str) -> Option<&str> {
		self.successors.get(word)?.best().map(|(next, _)| next)
	}

	/// Returns up to `n` successors of `word` with their counts, best first.
	pub fn predict_top(&self, word: &str, n: usize) -> Vec<(String, u64)> {
		self.successors.get(word).map_or_else(Vec::new, |tally| tally.ranked(n))
	}

	/// How many times `next` directly followed `word`.
	pub fn count(&self, word: &str, next: &str) -> u64 {
		self.successors.get(word).map_or(0, |tally| tally.count(next))
	}

	/// Number of distinct observed pairs.
	pub fn pairs(&self) -> usize {
		self.pairs
	}

	/// Merges another model into this one.
	///
	/// Successor counts are summed per predecessor; successors new to `self`
	/// keep the order in which `other` first observed them.
	pub fn merge(&mut self, other: &Self) {
		for (word, tally) in &other.successors {
			let existing = self.successors.entry(word.clone()).or_default();
			let before = existing.len();
			existing.merge(tally);
			self.pairs += existing.len() - before;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn words(text: &str) -> Vec<String> {
		text.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn predicts_observed_successor() {
		let mut model = TransitionModel::new();
		model.observe(&words("the cat sat"));
		assert_eq!(model.predict_next("the"), Some("cat"));
		assert_eq!(model.predict_next("cat"), Some("sat"));
		assert_eq!(model.predict_next("sat"), None);
		assert_eq!(model.predict_next("dog"), None);
	}

	#[test]
	fn ties_go_to_first_observed() {
		let mut model = TransitionModel::new();
		model.observe(&words("quick fox quick dog"));
		assert_eq!(model.predict_next("quick"), Some("fox"));
		model.observe(&words("quick dog"));
		assert_eq!(model.predict_next("quick"), Some("dog"));
		assert_eq!(
			model.predict_top("quick", 5),
			vec![("dog".to_owned(), 2), ("fox".to_owned(), 1)]
		);
	}

	#[test]
	fn does_not_link_across_sentences() {
		let mut model = TransitionModel::new();
		model.observe(&words("a b"));
		model.observe(&words("c d"));
		assert_eq!(model.count("b", "c"), 0);
		assert_eq!(model.pairs(), 2);
	}

	#[test]
	fn single_word_is_ignored() {
		let mut model = TransitionModel::new();
		model.observe(&words("alone"));
		model.observe(&[]);
		assert_eq!(model.pairs(), 0);
		assert!(model.predict_top("alone", 3).is_empty());
	}

	#[test]
	fn merge_sums_counts() {
		let mut left = TransitionModel::new();
		left.observe(&words("a b a c"));
		let mut right = TransitionModel::new();
		right.observe(&words("a c a d"));
		left.merge(&right);

		assert_eq!(left.count("a", "c"), 2);
		assert_eq!(left.count("a", "b"), 1);
		assert_eq!(left.count("a", "d"), 1);
		assert_eq!(left.predict_next("a"), Some("c"));
		assert_eq!(left.pairs(), 5);
	}
}
