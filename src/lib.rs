pub mod analysis;
pub mod cli;
pub mod llm;
pub mod models;
pub mod sentiment;
pub mod server;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use log::{ info, warn };

use analysis::ConversationAnalyzer;
use cli::Args;
use llm::{ ChatClient, GeminiChatClient };
use sentiment::SentimentAnalyzer;
use server::{ AppState, Server };

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("CORS Origin: {}", args.cors_origin);
    info!("Chat Model: {}", args.chat_model);
    info!("Gemini API Key Configured: {}", !args.gemini_api_key.is_empty());
    info!("Request Timeout (secs): {}", args.request_timeout_secs);
    info!("-------------------------");

    let sentiment = Arc::new(SentimentAnalyzer::new());

    let chat_client: Option<Arc<dyn ChatClient>> = if args.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set; /analyze will return a configuration notice");
        None
    } else {
        let client = GeminiChatClient::new(
            args.gemini_api_key.clone(),
            Some(args.chat_model.clone()),
            args.chat_base_url.clone(),
            Duration::from_secs(args.request_timeout_secs),
        )?;
        info!(
            "Conversation analysis via {} at {}",
            client.get_model(),
            client.get_base_url().unwrap_or_default()
        );
        Some(Arc::new(client))
    };
    let analyzer = Arc::new(ConversationAnalyzer::new(chat_client));

    let state = AppState { sentiment, analyzer };
    let server = Server::new(args.server_addr.clone(), state, args.cors_origin.clone());
    server.run().await
}
