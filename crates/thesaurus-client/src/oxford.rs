use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};

use thesaurus_config::Config;
use thesaurus_config::network::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECONDS};

use crate::{LookupError, SourceMetadata, ThesaurusSource};

const APP_ID_HEADER: &str = "app_id";
const APP_KEY_HEADER: &str = "app_key";
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub language: String,
    pub app_id: String,
    pub app_key: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(app_id: String, app_key: String) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            app_id,
            app_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Credentials and network settings from a resolved [`Config`]
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.network.base_url.clone(),
            language: config.network.language.clone(),
            app_id: config.oxford.app_id.clone(),
            app_key: config.oxford.app_key.clone(),
            timeout: Duration::from_secs(config.network.timeout_seconds),
        }
    }
}

/// Oxford Dictionaries thesaurus endpoint
#[derive(Clone)]
pub struct OxfordClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl OxfordClient {
    pub fn new(config: ClientConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// `{base_url}/thesaurus/{language}/{word}`, the word escaped as a single
    /// path segment
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", self.config.base_url, e)))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| LookupError::InvalidUrl(self.config.base_url.clone()))?;
            segments
                .pop_if_empty()
                .push("thesaurus")
                .push(&self.config.language)
                .push(word);
        }

        Ok(url)
    }
}

#[async_trait]
impl ThesaurusSource for OxfordClient {
    async fn fetch(&self, word: &str) -> Result<Vec<u8>, LookupError> {
        if self.config.app_id.is_empty() || self.config.app_key.is_empty() {
            return Err(LookupError::MissingCredentials);
        }

        let url = self.entry_url(word)?;
        tracing::debug!("Requesting {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON_MIME_TYPE)
            .header(APP_ID_HEADER, &self.config.app_id)
            .header(APP_KEY_HEADER, &self.config.app_key)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound {
                word: word.to_string(),
            });
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LookupError::Authentication);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited);
        }

        if !status.is_success() {
            return Err(LookupError::Api(format!("HTTP {}", status)));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Oxford Dictionaries".to_string(),
            requires_api_key: true,
        }
    }
}
