//! Client error types

/// Failure of a call to the document API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    /// Build a request error from a JS exception value
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Request(message)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
