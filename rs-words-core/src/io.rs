use std::fs;
use std::path::Path;

use crate::error::CorpusError;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Blank lines are kept, the engine skips them on ingestion
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, CorpusError> {
	let path = filename.as_ref();
	let contents = fs::read_to_string(path).map_err(|source| CorpusError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(contents.lines().map(str::to_owned).collect())
}
