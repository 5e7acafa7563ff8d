use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading a corpus file for `Engine::load_corpus`.
///
/// Ingestion and queries never fail; reading the file is the only
/// fallible step.
#[derive(Debug, Error)]
pub enum CorpusError {
	#[error("failed to read corpus {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}
