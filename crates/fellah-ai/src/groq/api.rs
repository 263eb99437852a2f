//! AiClient trait implementation for GroqClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message};

use super::client::GroqClient;

#[async_trait]
impl AiClient for GroqClient {
    async fn send_message(
        &self,
        messages: &[Message],
        context: &str,
    ) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages, context);

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "Groq API request"
        );

        let response = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let parsed = self.parse_response(json)?;
        debug!(
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "Groq API response"
        );
        Ok(parsed)
    }
}
