use std::io;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::{error, info};

use rs_words_core::Engine;

mod config;
mod routes;

use config::Config;
use routes::AppState;

/// Main entry point for the server.
///
/// Builds the engine, optionally preloads a corpus, and starts an Actix-web
/// HTTP server sharing the engine across workers. CORS is open to any origin.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let config = Config::parse();

	let engine = Engine::new();
	if let Some(corpus) = &config.corpus {
		if let Err(e) = engine.load_corpus(corpus) {
			error!("{e}");
			return Err(io::Error::other(e));
		}
	}

	let shared = web::Data::new(AppState::new(
		engine,
		config.top_words,
		config.related,
		config.max_words,
	));
	let max_body_bytes = config.max_body_bytes;

	let mut server = HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.wrap(Logger::default())
			.app_data(shared.clone())
			.app_data(routes::json_config(max_body_bytes))
			.configure(routes::configure)
	});
	if let Some(workers) = config.workers {
		server = server.workers(workers);
	}

	info!("listening on {}:{}", config.host, config.port);
	server.bind((config.host.as_str(), config.port))?.run().await
}
