use serde::Deserialize;

/// A decoded API response. `request` carries the `Location` header that
/// mutating calls return, pointing at the status of the provisioning request.
#[derive(Debug)]
pub struct Response<T> {
    pub data: Option<T>,
    pub request: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Credentials {
    Token(String),
    Basic { username: String, password: String },
    None,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub http_status: Option<u16>,
    #[serde(default)]
    pub messages: Vec<ErrorMessage>,
}

impl ErrorResponse {
    pub fn message(&self) -> Option<String> {
        if self.messages.is_empty() {
            return None;
        }

        Some(
            self.messages
                .iter()
                .map(|m| m.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
