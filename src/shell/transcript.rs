use chrono::{DateTime, Utc};
use serde::Serialize;

pub const GREETING: &str = "Hello! I'm your AI calculator assistant. I can help you with \
    calculations and navigate between different calculators. Try asking me something like \
    'Convert 10 USD to EUR' or 'Open the BMI calculator'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_error: bool,
}

/// Chat history of the assistant overlay, always opened by the greeting
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.push(Role::Assistant, GREETING.to_string(), false);
        transcript
    }

    pub fn push(&mut self, role: Role, content: String, is_error: bool) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            role,
            content,
            timestamp: Utc::now(),
            is_error,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Back to just the greeting
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.messages().len(), 1);
        let greeting = &transcript.messages()[0];
        assert_eq!(greeting.role, Role::Assistant);
        assert_eq!(greeting.content, GREETING);
    }

    #[test]
    fn test_ids_increase_and_clear_resets() {
        let mut transcript = Transcript::new();
        let first = transcript.push(Role::User, "hi".to_string(), false).id;
        let second = transcript
            .push(Role::Assistant, "oops".to_string(), true)
            .id;
        assert!(second > first);
        assert!(transcript.last().unwrap().is_error);

        transcript.clear();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].content, GREETING);
    }
}
