use thesaurus_core::{ModelError, ResultSet};

pub mod oxford;

pub use oxford::{ClientConfig, OxfordClient};

/// Remote thesaurus provider
#[async_trait::async_trait]
pub trait ThesaurusSource: Send + Sync {
    /// Raw response body for `word`
    async fn fetch(&self, word: &str) -> Result<Vec<u8>, LookupError>;

    /// Fetch and decode `word`. An empty result set is reported exactly like
    /// an upstream "not found".
    async fn lookup(&self, word: &str) -> Result<ResultSet, LookupError> {
        let body = self.fetch(word).await?;
        Ok(thesaurus_core::decode(word, &body)?)
    }

    /// Provider metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No results found for '{word}'")]
    NotFound { word: String },

    #[error("Authentication failed, check your app id and app key")]
    Authentication,

    #[error("Missing credentials, set an app id and app key")]
    MissingCredentials,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response document: {0}")]
    Decode(serde_json::Error),
}

impl From<ModelError> for LookupError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::NotFound { word } => LookupError::NotFound { word },
            ModelError::Schema(e) => LookupError::Decode(e),
        }
    }
}
