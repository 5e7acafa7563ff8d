use std::collections::{HashMap, HashSet};

/// Undirected weighted graph of words sharing a sentence.
///
/// The weight of edge `{a, b}` is the number of sentences in which both
/// words appeared. Adjacency is stored in both directions so that either
/// endpoint can be queried directly.
///
/// # Invariants
/// - No self-loops
/// - `weight(a, b) == weight(b, a)`, and is >= 1 for every stored edge
/// - A sentence adds at most 1 to any edge, however often its words repeat
#[derive(Clone, Debug, Default)]
pub struct CoOccurrenceGraph {
	neighbors: HashMap<String, HashMap<String, u64>>,
	/// Number of distinct undirected edges.
	edges: usize,
}

impl CoOccurrenceGraph {
	pub fn new() -> Self {
		Self::default()
	}

	/// Links every pair of distinct words of one sentence.
	pub fn observe(&mut self, words: &[String]) {
		let mut seen = HashSet::new();
		let distinct: Vec<&str> = words
			.iter()
			.map(String::as_str)
			.filter(|word| seen.insert(*word))
			.collect();

		for (i, a) in distinct.iter().enumerate() {
			for b in &distinct[i + 1..] {
				self.link(a, b, 1);
			}
		}
	}

	/// Adds `weight` to the edge `{a, b}` on both sides.
	///
	/// Owned keys are only allocated when the edge is new.
	fn link(&mut self, a: &str, b: &str, weight: u64) {
		if self.bump(a, b, weight) {
			self.bump(b, a, weight);
			return;
		}
		self.insert(a, b, weight);
		self.insert(b, a, weight);
		self.edges += 1;
	}

	/// Adds `weight` to the existing directed entry `from -> to`.
	///
	/// Returns `false` if the entry does not exist yet.
	fn bump(&mut self, from: &str, to: &str, weight: u64) -> bool {
		match self.neighbors.get_mut(from).and_then(|neighbors| neighbors.get_mut(to)) {
			Some(existing) => {
				*existing += weight;
				true
			}
			None => false,
		}
	}

	fn insert(&mut self, from: &str, to: &str, weight: u64) {
		if let Some(neighbors) = self.neighbors.get_mut(from) {
			neighbors.insert(to.to_owned(), weight);
			return;
		}
		self.neighbors.entry(from.to_owned()).or_default().insert(to.to_owned(), weight);
	}

	/// Returns up to `n` neighbors of `word`, heaviest first, then lexically.
	pub fn related(&self, word: &str, n: usize) -> Vec<String> {
		self.related_weighted(word, n)
			.into_iter()
			.map(|(neighbor, _)| neighbor)
			.collect()
	}

	/// Same as `related` but keeps the edge weights.
	pub fn related_weighted(&self, word: &str, n: usize) -> Vec<(String, u64)> {
		let Some(neighbors) = self.neighbors.get(word) else {
			return Vec::new();
		};
		if n == 0 {
			return Vec::new();
		}

		let mut ranked: Vec<(&String, &u64)> = neighbors.iter().collect();
		ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
		ranked
			.into_iter()
			.take(n)
			.map(|(neighbor, weight)| (neighbor.clone(), *weight))
			.collect()
	}

	/// Weight of the edge `{a, b}`, 0 if absent.
	pub fn weight(&self, a: &str, b: &str) -> u64 {
		self.neighbors
			.get(a)
			.and_then(|neighbors| neighbors.get(b))
			.copied()
			.unwrap_or(0)
	}

	/// Number of distinct undirected edges.
	pub fn edges(&self) -> usize {
		self.edges
	}

	/// Merges another graph into this one, summing edge weights.
	pub fn merge(&mut self, other: &Self) {
		for (a, neighbors) in &other.neighbors {
			for (b, weight) in neighbors {
				// Each edge is stored twice, take it from one side only.
				if a < b {
					self.link(a, b, *weight);
				}
			}
		}
	}
}
