//! Common types passed between pipeline stages

use serde::{Deserialize, Serialize};

/// One similarity-search hit, in the order the index ranked it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedPassage {
    pub content: String,
    pub page_label: String,
    pub source_path: String,
    /// Similarity score reported by the index, kept for logging only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl RetrievedPassage {
    pub fn new(
        content: impl Into<String>,
        page_label: impl Into<String>,
        source_path: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            page_label: page_label.into(),
            source_path: source_path.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// The fixed two-message conversation sent to the chat model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub system: ChatMessage,
    pub user: ChatMessage,
}

impl Conversation {
    /// Messages in wire order: system first, then user
    pub fn messages(&self) -> [&ChatMessage; 2] {
        [&self.system, &self.user]
    }
}
