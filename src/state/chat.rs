//! State for the AI symptom chat widget.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Conversation state for the chatbot dialog.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A prompt is in flight and the reply has not arrived yet.
    pub busy: bool,
    pub error: Option<String>,
}

/// A single chat exchange entry.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    /// `"user"` or `"assistant"`.
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: "user".to_owned(),
            content,
        }
    }

    pub fn assistant(content: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: "assistant".to_owned(),
            content,
        }
    }
}
