//! Chat-completions client for the analysis model

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AnalyzerError;

/// Request timeout; analysis of a large log can take a while
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint
pub struct AnalysisClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AnalysisClient {
    /// Create a client for the given endpoint and model
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, AnalyzerError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Send the prompt and return the model's completion text
    pub async fn query(&self, prompt: String) -> Result<String, AnalyzerError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, "Sending analysis request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(AnalyzerError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn query_returns_completion_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "## Summary\nAll good." } }
                ]
            })))
            .mount(&server)
            .await;

        let client = AnalysisClient::new(server.uri(), "sk-test", "gpt-4o-mini").unwrap();
        let result = client.query("analyze this".to_string()).await.unwrap();
        assert_eq!(result, "## Summary\nAll good.");
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let client = AnalysisClient::new(server.uri(), "sk-bad", "gpt-4o-mini").unwrap();
        let result = client.query("analyze".to_string()).await;
        assert!(matches!(
            result,
            Err(AnalyzerError::Api { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let client = AnalysisClient::new(server.uri(), "sk-test", "gpt-4o-mini").unwrap();
        let result = client.query("analyze".to_string()).await;
        assert!(matches!(result, Err(AnalyzerError::EmptyCompletion)));
    }
}
