use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    /// Text the reader highlighted. Empty means no selection.
    #[serde(default)]
    pub selected_text: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selected_text: String::new(),
        }
    }

    pub fn with_selection(mut self, selected_text: impl Into<String>) -> Self {
        self.selected_text = selected_text.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    SelectedText,
    KnowledgeBase,
    None,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::SelectedText => "selected_text",
            AnswerSource::KnowledgeBase => "knowledge_base",
            AnswerSource::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub source: AnswerSource,
}

/// A keyword and its canned answer. Matching is substring on the lowercased query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub key: String,
    pub answer: String,
}

impl Topic {
    pub fn new(key: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    pub status: String,
    pub topics: usize,
}
