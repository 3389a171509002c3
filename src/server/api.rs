use std::error::Error;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    extract::State,
    http::HeaderValue,
    Json,
};
use tower_http::cors::{ AllowHeaders, AllowMethods, CorsLayer };
use log::info;

use crate::analysis::ConversationAnalyzer;
use crate::models::{
    AnalyzeRequest,
    AnalyzeResponse,
    ChatRequest,
    ChatResponse,
    HealthResponse,
    RootResponse,
};
use crate::sentiment::{ SentimentAnalyzer, SentimentLabel };

const POSITIVE_REPLIES: [&str; 3] = [
    "That's wonderful to hear! I'm really glad things are going well for you.",
    "I love your positive energy! Tell me more about what's making you feel this way.",
    "That sounds great! It's always nice to share the good moments.",
];

const NEGATIVE_REPLIES: [&str; 3] = [
    "I'm sorry you're feeling this way. I'm here to listen if you want to talk about it.",
    "That sounds really tough. Would you like to tell me more about what's going on?",
    "I hear you, and your feelings are completely valid. How can I support you right now?",
];

const NEUTRAL_REPLIES: [&str; 3] = [
    "Thanks for sharing that. What else is on your mind?",
    "I see. Could you tell me a little more about that?",
    "Got it. How does that make you feel?",
];

/// Pure template pick: the seed comes from the request, never from ambient
/// randomness, so responses are reproducible under test.
fn pick_reply(label: SentimentLabel, seed: usize) -> &'static str {
    let templates = match label {
        SentimentLabel::Positive => &POSITIVE_REPLIES,
        SentimentLabel::Negative => &NEGATIVE_REPLIES,
        SentimentLabel::Neutral => &NEUTRAL_REPLIES,
    };
    templates[seed % templates.len()]
}

#[derive(Clone)]
pub struct AppState {
    pub sentiment: Arc<SentimentAnalyzer>,
    pub analyzer: Arc<ConversationAnalyzer>,
}

pub fn build_router(
    state: AppState,
    cors_origin: &str,
) -> Result<Router, Box<dyn Error + Send + Sync>> {
    // Single configured origin with credentials; methods and headers mirror
    // the request because wildcards are invalid alongside credentials.
    let cors = CorsLayer::new()
        .allow_origin(cors_origin.parse::<HeaderValue>()?)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/analyze", post(analyze_handler))
        .layer(cors)
        .with_state(state);

    Ok(app)
}

async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "LiaPlus Backend API is running".to_string(),
    })
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let result = state.sentiment.score(&req.text);
    info!("Chat message scored {:.4} ({:?})", result.score, result.label);

    let bot_text = pick_reply(result.label, req.text.chars().count());
    Json(ChatResponse {
        bot_text: bot_text.to_string(),
        sentiment: result.label,
    })
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    info!("Analyze request with {} messages", req.history.len());
    let summary = state.analyzer.summarize(&req.history).await;
    Json(AnalyzeResponse { summary })
}
