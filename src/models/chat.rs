use serde::{ Serialize, Deserialize };
use std::fmt;

use crate::sentiment::SentimentLabel;

/// A single message in the conversation, as supplied by the frontend.
/// Nothing here is stored server-side; the history lives only for the
/// duration of one analysis request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub text: String,
    pub sender: Sender,
    #[serde(default)]
    pub sentiment: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "User"),
            Sender::Bot => write!(f, "Bot"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub bot_text: String,
    pub sentiment: SentimentLabel,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub history: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_deserializes_from_lowercase() {
        let msg: Message = serde_json::from_str(
            r#"{"id": 1, "text": "Hello!", "sender": "user", "sentiment": null}"#
        ).unwrap();
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.sentiment, None);
    }

    #[test]
    fn sender_displays_capitalized() {
        assert_eq!(Sender::User.to_string(), "User");
        assert_eq!(Sender::Bot.to_string(), "Bot");
    }

    #[test]
    fn message_tolerates_missing_sentiment_field() {
        let msg: Message = serde_json::from_str(
            r#"{"id": 2, "text": "Hi there!", "sender": "bot"}"#
        ).unwrap();
        assert_eq!(msg.sentiment, None);
    }
}
