pub mod chat;

pub use self::chat::{
    AnalyzeRequest,
    AnalyzeResponse,
    ChatRequest,
    ChatResponse,
    HealthResponse,
    Message,
    RootResponse,
    Sender,
};
