/// Failures while turning an upstream document into a [`ResultSet`](crate::ResultSet)
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid response document: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("No results found for '{word}'")]
    NotFound { word: String },
}
