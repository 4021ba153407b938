use serde::{Deserialize, Serialize};

pub const APP_ID_ENV: &str = "OXFORD_DICTIONARY_APP_ID";
pub const APP_KEY_ENV: &str = "OXFORD_DICTIONARY_APP_KEY";

/// Oxford Dictionaries API credentials
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OxfordConfig {
    #[serde(rename = "AppID")]
    pub app_id: String,
    #[serde(rename = "AppKey")]
    pub app_key: String,
}

impl OxfordConfig {
    /// Credentials from the environment, only when the app id variable is set
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let app_id = lookup(APP_ID_ENV)?;
        let app_key = lookup(APP_KEY_ENV).unwrap_or_default();
        Some(Self { app_id, app_key })
    }

    pub fn is_complete(&self) -> bool {
        !self.app_id.is_empty() && !self.app_key.is_empty()
    }
}
