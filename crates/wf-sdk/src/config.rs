//! Assistant client configuration.

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_MAPS_MODEL: &str = "gemini-2.5-flash";

/// Endpoint, credentials and model names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// API key sent as `x-goog-api-key`. `None` disables remote calls.
    pub api_key: Option<String>,
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Model for traffic, triage, route advice and notifications.
    pub text_model: String,
    /// Model for maps-grounded nearby search.
    pub maps_model: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            maps_model: DEFAULT_MAPS_MODEL.to_string(),
        }
    }
}

impl AssistantConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable           | Default                                             |
    /// |--------------------|-----------------------------------------------------|
    /// | `GEMINI_API_KEY`   | falls back to `API_KEY`, else none                  |
    /// | `WF_ASSISTANT_URL` | `https://generativelanguage.googleapis.com/v1beta`  |
    /// | `WF_TEXT_MODEL`    | `gemini-3-flash-preview`                            |
    /// | `WF_MAPS_MODEL`    | `gemini-2.5-flash`                                  |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            base_url: non_empty("WF_ASSISTANT_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            text_model: non_empty("WF_TEXT_MODEL").unwrap_or(defaults.text_model),
            maps_model: non_empty("WF_MAPS_MODEL").unwrap_or(defaults.maps_model),
        }
    }

    /// A configuration pointing at `base_url` with a key, for local servers.
    pub fn with_endpoint(base_url: &str, api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()),
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// `{base}/models/{model}:generateContent`
    pub fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }
}
