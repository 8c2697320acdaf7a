/// Failure of a single API call. Every variant renders as a message fit to
/// show the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Spoonacular API key not found! Please set SPOONACULAR_API_KEY environment variable.")]
    MissingApiKey,

    #[error("API quota exceeded. Please try again later or upgrade your Spoonacular plan.")]
    QuotaExceeded,

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(err) if err.is_timeout())
    }
}
