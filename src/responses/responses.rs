use serde::Serialize;

/// Body of every 4xx/5xx answer: `{"message": "..."}`.
#[derive(Serialize, Clone, Debug)]
pub struct MessageResponse {
    pub(crate) message: String,
}

impl MessageResponse {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
