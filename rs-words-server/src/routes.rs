use actix_web::http::StatusCode;
use actix_web::{error, get, post, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use rs_words_core::tokenizer::last_token;
use rs_words_core::Engine;

/// Engine shared by every worker, with the response sizes.
pub struct AppState {
	pub engine: Engine,
	pub top_words: usize,
	pub related: usize,
	/// Longest message accepted by `/chat`, in whitespace-delimited words.
	/// Co-occurrence work grows with the square of this number and runs
	/// under the engine write lock.
	pub max_words: usize,
}

impl AppState {
	pub fn new(engine: Engine, top_words: usize, related: usize, max_words: usize) -> Self {
		Self { engine, top_words, related, max_words }
	}

	/// Returns `true` if `message` has more words than `max_words`.
	fn too_long(&self, message: &str) -> bool {
		message.split_whitespace().nth(self.max_words).is_some()
	}

	/// Ingests `message`, then queries the engine with its last token.
	fn respond(&self, message: &str) -> ChatResponse {
		if !message.trim().is_empty() {
			self.engine.ingest(message);
		}

		let top_words = self.engine.top_words(self.top_words);
		let Some(last_word) = last_token(message) else {
			return ChatResponse { top_words, ..ChatResponse::default() };
		};

		ChatResponse {
			top_words,
			suggestions: self.engine.completions(last_word),
			next_word: self.engine.predict_next(last_word).unwrap_or_default(),
			related_words: self.engine.related(last_word, self.related),
		}
	}
}

/// Body of `POST /chat`
#[derive(Deserialize)]
struct ChatRequest {
	message: String,
}

/// Reply of `POST /chat`
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ChatResponse {
	pub top_words: Vec<(String, u64)>,
	pub suggestions: Vec<String>,
	pub next_word: String,
	pub related_words: Vec<String>,
}

/// Query parameters of `/v1/top`
#[derive(Deserialize)]
struct TopParams {
	n: Option<i64>,
}

/// HTTP POST endpoint `/chat`
///
/// Learns from the message and returns the frequent words, the completions,
/// the predicted next word and the related words of its last token.
/// Messages longer than `max_words` are rejected with a 413 and not learned.
#[post("/chat")]
async fn chat(data: web::Data<AppState>, request: web::Json<ChatRequest>) -> impl Responder {
	if data.too_long(&request.message) {
		return HttpResponse::PayloadTooLarge().json(json!({
			"error": format!("message exceeds {} words", data.max_words)
		}));
	}
	HttpResponse::Ok().json(data.respond(&request.message))
}

#[get("/")]
async fn status() -> impl Responder {
	HttpResponse::Ok().json(json!({
		"status": "ok",
		"message": "Word statistics engine is running"
	}))
}

#[get("/v1/stats")]
async fn stats(data: web::Data<AppState>) -> impl Responder {
	HttpResponse::Ok().json(data.engine.stats())
}

/// HTTP GET endpoint `/v1/top`
///
/// A negative `n` yields an empty list.
#[get("/v1/top")]
async fn top(data: web::Data<AppState>, query: web::Query<TopParams>) -> impl Responder {
	let n = match query.n {
		Some(n) => usize::try_from(n).unwrap_or(0),
		None => data.top_words,
	};
	HttpResponse::Ok().json(data.engine.top_words(n))
}

/// JSON extractor settings: bodies above `limit` bytes get a 413, malformed
/// bodies a 400, both with a JSON error.
pub fn json_config(limit: usize) -> web::JsonConfig {
	web::JsonConfig::default()
		.limit(limit)
		.error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
			let status_code = match &err {
				error::JsonPayloadError::Overflow { .. }
				| error::JsonPayloadError::OverflowKnownLength { .. } => StatusCode::PAYLOAD_TOO_LARGE,
				_ => StatusCode::BAD_REQUEST,
			};
			let body = json!({ "error": err.to_string() });
			error::InternalError::from_response(err, HttpResponse::build(status_code).json(body)).into()
		})
}

/// Registers every endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(chat).service(status).service(stats).service(top);
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::{test, App};
	use rs_words_core::EngineStats;

	fn state() -> web::Data<AppState> {
		web::Data::new(AppState::new(Engine::new(), 3, 5, 64))
	}

	fn owned(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
		pairs.iter().map(|(word, count)| (word.to_string(), *count)).collect()
	}

	#[actix_web::test]
	async fn chat_returns_engine_summary() {
		let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

		let req = test::TestRequest::post()
			.uri("/chat")
			.set_json(json!({ "message": "the quick fox the quick" }))
			.to_request();
		let body: ChatResponse = test::call_and_read_body_json(&app, req).await;

		assert_eq!(
			body,
			ChatResponse {
				top_words: owned(&[("the", 2), ("quick", 2), ("fox", 1)]),
				suggestions: vec!["quick".to_owned()],
				next_word: "fox".to_owned(),
				related_words: vec!["fox".to_owned(), "the".to_owned()],
			}
		);
	}

	#[actix_web::test]
	async fn chat_state_persists_between_requests() {
		let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

		for message in ["good morning", "good night", "good morning"] {
			let req = test::TestRequest::post()
				.uri("/chat")
				.set_json(json!({ "message": message }))
				.to_request();
			test::call_service(&app, req).await;
		}

		let req = test::TestRequest::post()
			.uri("/chat")
			.set_json(json!({ "message": "Good" }))
			.to_request();
		let body: ChatResponse = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body.top_words[0], ("good".to_owned(), 4));
		assert_eq!(body.suggestions, vec!["good"]);
		assert_eq!(body.next_word, "morning");
		assert_eq!(body.related_words, vec!["morning", "night"]);
	}

	#[actix_web::test]
	async fn blank_message_only_reports_top_words() {
		let data = state();
		data.engine.ingest("hello there");
		let app = test::init_service(App::new().app_data(data.clone()).configure(configure)).await;

		let req = test::TestRequest::post()
			.uri("/chat")
			.set_json(json!({ "message": "   " }))
			.to_request();
		let body: ChatResponse = test::call_and_read_body_json(&app, req).await;

		assert_eq!(body.top_words, owned(&[("hello", 1), ("there", 1)]));
		assert!(body.suggestions.is_empty());
		assert_eq!(body.next_word, "");
		assert!(body.related_words.is_empty());
		assert_eq!(data.engine.stats().sentences, 1);
	}

	#[actix_web::test]
	async fn malformed_body_is_rejected() {
		let app = test::init_service(
			App::new().app_data(state()).app_data(json_config(1024)).configure(configure),
		)
		.await;

		let req = test::TestRequest::post()
			.uri("/chat")
			.set_json(json!({ "text": "wrong field" }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn oversized_body_is_rejected() {
		let data = state();
		let app = test::init_service(
			App::new().app_data(data.clone()).app_data(json_config(1024)).configure(configure),
		)
		.await;

		let message = "word ".repeat(400);
		let req = test::TestRequest::post()
			.uri("/chat")
			.set_json(json!({ "message": message }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
		assert_eq!(data.engine.stats().sentences, 0);
	}

	#[actix_web::test]
	async fn message_over_word_limit_is_not_learned() {
		let data = state();
		let app = test::init_service(
			App::new().app_data(data.clone()).app_data(json_config(1 << 16)).configure(configure),
		)
		.await;

		let words: Vec<String> = (0..65).map(|i| format!("w{i}")).collect();
		let req = test::TestRequest::post()
			.uri("/chat")
			.set_json(json!({ "message": words.join(" ") }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
		assert_eq!(data.engine.stats(), EngineStats::default());

		let req = test::TestRequest::post()
			.uri("/chat")
			.set_json(json!({ "message": words[..64].join(" ") }))
			.to_request();
		let body: ChatResponse = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body.suggestions, vec!["w63"]);
		assert_eq!(data.engine.stats().edges, 64 * 63 / 2);
	}

	#[actix_web::test]
	async fn top_and_stats_endpoints() {
		let data = state();
		data.engine.ingest("a b b c c c");
		let app = test::init_service(App::new().app_data(data).configure(configure)).await;

		let req = test::TestRequest::get().uri("/v1/top?n=2").to_request();
		let body: Vec<(String, u64)> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body, owned(&[("c", 3), ("b", 2)]));

		let req = test::TestRequest::get().uri("/v1/top?n=-4").to_request();
		let body: Vec<(String, u64)> = test::call_and_read_body_json(&app, req).await;
		assert!(body.is_empty());

		let req = test::TestRequest::get().uri("/v1/top").to_request();
		let body: Vec<(String, u64)> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body.len(), 3);

		let req = test::TestRequest::get().uri("/v1/stats").to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		let expected = EngineStats { words: 3, sentences: 1, tokens: 6, transitions: 4, edges: 3 };
		assert_eq!(body, serde_json::to_value(expected).unwrap());
	}

	#[actix_web::test]
	async fn status_endpoint() {
		let app = test::init_service(App::new().configure(configure)).await;
		let req = test::TestRequest::get().uri("/").to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["status"], "ok");
	}
}
