//! Whole-conversation analysis delegated to the remote LLM.
//!
//! The analyzer never fails: a missing credential and any remote error are
//! both folded into the returned string, so the HTTP layer can always answer
//! with a 200 and readable text.

mod markdown;

use std::sync::Arc;
use log::{ error, info };

use crate::llm::{ ChatClient, LlmError };
use crate::models::Message;

pub use self::markdown::strip_markdown;

pub const MISSING_KEY_MESSAGE: &str =
    "Gemini API key not configured. Please add GEMINI_API_KEY to .env file.";

pub struct ConversationAnalyzer {
    client: Option<Arc<dyn ChatClient>>,
}

impl ConversationAnalyzer {
    /// `None` means no credential was configured at startup; `summarize`
    /// then short-circuits without any remote call being possible.
    pub fn new(client: Option<Arc<dyn ChatClient>>) -> Self {
        Self { client }
    }

    pub async fn summarize(&self, history: &[Message]) -> String {
        let Some(client) = &self.client else {
            return MISSING_KEY_MESSAGE.to_string();
        };

        match self.run(client.as_ref(), history).await {
            Ok(text) => text,
            Err(e) => {
                error!("Conversation analysis failed: {}", e);
                format!("Error generating analysis: {}", e)
            }
        }
    }

    async fn run(&self, client: &dyn ChatClient, history: &[Message]) -> Result<String, LlmError> {
        let transcript = format_transcript(history);
        let prompt = build_prompt(&transcript);
        info!("Analyzing conversation of {} messages", history.len());

        let completion = client.complete(&prompt).await?;
        Ok(strip_markdown(&completion.response))
    }
}

/// One line per message, `"<Sender>: <text>"`, in input order.
pub fn format_transcript(history: &[Message]) -> String {
    history
        .iter()
        .map(|msg| format!("{}: {}", msg.sender, msg.text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(transcript: &str) -> String {
    format!(
        "You are an empathetic AI assistant analyzing a conversation between a user and a chatbot.\n\
        \n\
        Read this conversation transcript:\n\
        \n\
        {}\n\
        \n\
        Please provide a comprehensive analysis including:\n\
        1. A summary of the user's emotional journey throughout the conversation\n\
        2. The overall sentiment (Positive, Negative, Neutral, or Mixed)\n\
        3. Key topics or themes discussed\n\
        4. Any notable emotional shifts or patterns\n\
        \n\
        Provide your analysis in a clear, empathetic tone.",
        transcript
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::llm::CompletionResponse;
    use crate::models::Sender;

    /// Records every prompt it receives; replies with a canned completion
    /// or a canned provider error.
    struct RecordingClient {
        prompts: Mutex<Vec<String>>,
        reply: Result<String, String>,
    }

    impl RecordingClient {
        fn replying(text: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply: Ok(text.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply: Err(message.to_string()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatClient for RecordingClient {
        async fn complete(&self, prompt: &str) -> Result<CompletionResponse, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(CompletionResponse { response: text.clone() }),
                Err(body) => Err(LlmError::Api {
                    status: 500,
                    body: body.clone(),
                }),
            }
        }

        fn get_model(&self) -> String {
            "recording".to_string()
        }

        fn get_base_url(&self) -> Option<String> {
            None
        }
    }

    fn history() -> Vec<Message> {
        vec![
            Message {
                id: 1,
                text: "Hello!".to_string(),
                sender: Sender::User,
                sentiment: None,
            },
            Message {
                id: 2,
                text: "Hi there!".to_string(),
                sender: Sender::Bot,
                sentiment: Some("Positive".to_string()),
            },
        ]
    }

    #[test]
    fn transcript_lines_are_capitalized_and_ordered() {
        assert_eq!(format_transcript(&history()), "User: Hello!\nBot: Hi there!");
    }

    #[test]
    fn empty_history_yields_empty_transcript() {
        assert_eq!(format_transcript(&[]), "");
    }

    #[test]
    fn prompt_embeds_transcript_and_instructions() {
        let prompt = build_prompt("User: Hello!");
        assert!(prompt.contains("User: Hello!"));
        assert!(prompt.contains("emotional journey"));
        assert!(prompt.contains("Positive, Negative, Neutral, or Mixed"));
        assert!(prompt.contains("Key topics or themes"));
        assert!(prompt.contains("emotional shifts"));
        assert!(prompt.contains("empathetic tone"));
    }

    #[tokio::test]
    async fn missing_credential_short_circuits() {
        let analyzer = ConversationAnalyzer::new(None);
        let summary = analyzer.summarize(&history()).await;
        assert_eq!(summary, MISSING_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn configured_analyzer_calls_remote_exactly_once() {
        let client = Arc::new(RecordingClient::replying("The user seemed upbeat."));
        let analyzer = ConversationAnalyzer::new(Some(client.clone()));

        let summary = analyzer.summarize(&history()).await;
        assert_eq!(summary, "The user seemed upbeat.");

        let prompts = client.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("User: Hello!\nBot: Hi there!"));
    }

    #[tokio::test]
    async fn empty_history_still_produces_a_summary() {
        let client = Arc::new(RecordingClient::replying("Nothing was said."));
        let analyzer = ConversationAnalyzer::new(Some(client));
        let summary = analyzer.summarize(&[]).await;
        assert_eq!(summary, "Nothing was said.");
    }

    #[tokio::test]
    async fn remote_failure_becomes_error_text() {
        let client = Arc::new(RecordingClient::failing("quota exceeded"));
        let analyzer = ConversationAnalyzer::new(Some(client));

        let summary = analyzer.summarize(&history()).await;
        assert!(summary.starts_with("Error generating analysis: "));
        assert!(summary.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn markdown_is_stripped_from_remote_reply() {
        let client = Arc::new(
            RecordingClient::replying("## Summary\nThe user felt **heard** and *calm*.")
        );
        let analyzer = ConversationAnalyzer::new(Some(client));

        let summary = analyzer.summarize(&history()).await;
        assert_eq!(summary, "Summary\nThe user felt heard and calm.");
    }
}
