use thiserror::Error;

/// Errors returned by the `YouTube` Data API client.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a `{"error": {...}}` envelope.
    #[error("YouTube API error on {resource} (HTTP {status}): {message}")]
    Api {
        resource: String,
        status: u16,
        reason: Option<String>,
        message: String,
    },

    /// Non-2xx response whose body is not a `YouTube` error envelope.
    #[error("unexpected HTTP status {status} from {resource}")]
    UnexpectedStatus { resource: String, status: u16 },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field was present but its value could not be interpreted.
    #[error("invalid field in {context}: {reason}")]
    InvalidField { context: String, reason: String },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl YoutubeError {
    /// `true` when the API itself answered, as opposed to the request never
    /// completing.
    #[must_use]
    pub fn is_api_response(&self) -> bool {
        matches!(
            self,
            YoutubeError::Api { .. }
                | YoutubeError::UnexpectedStatus { .. }
                | YoutubeError::Deserialize { .. }
        )
    }
}
