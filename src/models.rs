use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Uniform body returned by every JSON route: `status`, `message`, and an
/// optional `content` map echoing the request's path parameters.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

impl Envelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            content: None,
        }
    }

    pub fn success_with(message: impl Into<String>, content: Value) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            content: Some(content),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            content: None,
        }
    }
}
