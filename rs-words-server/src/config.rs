use std::path::PathBuf;

use clap::Parser;

/// Command line and environment configuration of the HTTP server.
#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP front for the word-statistics engine", long_about = None)]
pub struct Config {
	/// Address to bind
	#[arg(long, env = "RS_WORDS_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to bind
	#[arg(long, env = "RS_WORDS_PORT", default_value_t = 10000)]
	pub port: u16,

	/// Number of most frequent words returned by `/chat`
	#[arg(long, env = "RS_WORDS_TOP_WORDS", default_value_t = 3)]
	pub top_words: usize,

	/// Number of related words returned by `/chat`
	#[arg(long, env = "RS_WORDS_RELATED", default_value_t = 5)]
	pub related: usize,

	/// Largest accepted JSON request body, in bytes
	#[arg(long, env = "RS_WORDS_MAX_BODY_BYTES", default_value_t = 16 * 1024)]
	pub max_body_bytes: usize,

	/// Longest message accepted by `/chat`, in words
	#[arg(long, env = "RS_WORDS_MAX_WORDS", default_value_t = 256)]
	pub max_words: usize,

	/// Text file preloaded at startup, one sentence per line
	#[arg(long, env = "RS_WORDS_CORPUS")]
	pub corpus: Option<PathBuf>,

	/// Number of HTTP workers (defaults to the number of CPUs)
	#[arg(long, env = "RS_WORDS_WORKERS")]
	pub workers: Option<usize>,
}
