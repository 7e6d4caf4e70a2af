//! Vision analysis API configuration.
//!
//! Passed explicitly into the vision client at construction time; there is
//! no ambient global credential state.

use serde::{Deserialize, Serialize};

/// External vision-completion API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Bearer token for the completion API. Empty means not configured;
    /// analysis soft-fails per request rather than preventing startup.
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the completion API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Vision-capable model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Output-length cap for the model response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Network timeout for a single analysis request, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4-vision-preview".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_timeout() -> u64 {
    60
}
