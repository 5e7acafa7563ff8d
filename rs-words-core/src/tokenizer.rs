//! Whitespace tokenizer.
//!
//! A word is a whitespace-delimited token, lower-cased, with every leading
//! and trailing non-alphanumeric character removed. Tokens that end up empty
//! are dropped. Inner punctuation is kept (`"don't"` stays `"don't"`).

/// Normalizes a single raw token into a word.
///
/// Returns `None` when nothing alphanumeric is left.
///
/// Normalizing an already normalized word returns it unchanged, so callers
/// can pass either raw user input or stored words.
pub fn normalize(token: &str) -> Option<String> {
	let lowered = token.to_lowercase();
	let word = lowered.trim_matches(|c: char| !c.is_alphanumeric());
	if word.is_empty() {
		None
	} else {
		Some(word.to_owned())
	}
}

/// Splits `text` into normalized words, preserving left-to-right order.
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().filter_map(normalize).collect()
}

/// Returns the last whitespace-delimited token of `text`, not normalized.
///
/// `None` if `text` is empty or only whitespace.
pub fn last_token(text: &str) -> Option<&str> {
	text.split_whitespace().next_back()
}
