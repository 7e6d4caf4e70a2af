//! OpenAI-compatible vision-completion client.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use visionhub_core::config::vision::VisionConfig;
use visionhub_core::error::AppError;
use visionhub_core::result::AppResult;
use visionhub_core::traits::analyzer::{AnalysisError, VisionAnalyzer};

/// Instruction prompt sent with every image.
const ANALYSIS_PROMPT: &str = "Analyze this image and provide a detailed description. Include:\n\
    1. What objects, people, or scenes are visible\n\
    2. Colors, lighting, and composition\n\
    3. Any text that appears in the image\n\
    4. The overall mood or atmosphere\n\
    5. Any interesting or notable details\n\
    \n\
    Please provide a comprehensive analysis in a clear, structured format.";

/// Client for a vision-capable chat-completion endpoint.
pub struct OpenAiVisionClient {
    http: Client,
    config: VisionConfig,
}

impl OpenAiVisionClient {
    /// Build a client with the configured request timeout.
    pub fn new(config: VisionConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { http, config })
    }

    fn build_request(&self, base64_image: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: ANALYSIS_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{base64_image}"),
                        },
                    },
                ],
            }],
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl VisionAnalyzer for OpenAiVisionClient {
    async fn analyze(&self, image_path: &Path) -> Result<String, AnalysisError> {
        if self.config.api_key.is_empty() {
            return Err(AnalysisError::MissingCredential);
        }

        let image_data = tokio::fs::read(image_path)
            .await
            .map_err(|_| AnalysisError::FileMissing(image_path.display().to_string()))?;

        let base64_image = BASE64.encode(&image_data);
        debug!(
            path = %image_path.display(),
            bytes = image_data.len(),
            encoded_len = base64_image.len(),
            model = %self.config.model,
            "Sending vision analysis request"
        );

        let body = self.build_request(&base64_image);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalysisError::Timeout
                } else {
                    AnalysisError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                AnalysisError::MalformedResponse("response contained no choices".to_string())
            })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
