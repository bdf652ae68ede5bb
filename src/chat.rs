//! Chat transcript types and the canned assistant reply.
//!
//! The demo has no model behind it: every user message gets the same
//! hardcoded answer after a simulated backend delay.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// What the assistant always says.
pub const ASSISTANT_REPLY: &str = "I am a hardcoded response. The database connection has been removed for testing purposes. You can modify this response in the chat module.";

/// Simulated backend latency before the reply comes back.
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The reply the demo backend returns for any user message.
pub fn assistant_reply() -> Message {
    Message::assistant(ASSISTANT_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_is_canned() {
        assert_eq!(assistant_reply().content, ASSISTANT_REPLY);
        assert_eq!(assistant_reply().role, Role::Assistant);
    }

    #[test]
    fn test_message_ids_are_unique() {
        assert_ne!(Message::user("hi").id, Message::user("hi").id);
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let value = serde_json::to_value(assistant_reply()).unwrap();
        assert_eq!(value["role"], "assistant");
        let value = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(value["role"], "user");
    }
}
