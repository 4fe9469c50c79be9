//! Google Gemini LLM service adapter
//!
//! Implements the LlmServicePort for Google's Gemini `generateContent` API.

use crate::error::{AppError, Result};
use crate::ports::llm::{LlmConfig, LlmServicePort};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GOOGLE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini service implementation
pub struct GoogleService {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GoogleService {
    /// Create a new Google Gemini service with the given API key
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, GOOGLE_API_BASE)
    }

    /// Same as `new`, against a different API root
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    fn model_path(model: &str) -> String {
        // "models/gemini-pro" and "gemini-pro" both refer to the same model
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        }
    }
}

#[async_trait]
impl LlmServicePort for GoogleService {
    async fn generate_text(&self, prompt: &str, config: &LlmConfig) -> Result<String> {
        if !self.is_configured() {
            return Err(AppError::Llm("Google API key is not configured".to_string()));
        }

        let generation_config = if config.temperature.is_some() || config.max_tokens.is_some() {
            Some(GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_tokens,
            })
        } else {
            None
        };

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config,
        };

        let model_name = Self::model_path(&config.model);
        log::info!("Calling Google generateContent with model: {}", model_name);

        let response = self
            .client
            .post(format!("{}/{}:generateContent", self.base_url, model_name))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                AppError::Llm(format!("GenerateContent request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Llm(format!(
                "GenerateContent failed ({}): {}",
                status, error_text
            )));
        }

        let content_response: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::Llm(format!("Failed to parse content response: {}", e.without_url()))
        })?;

        let candidate = content_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Llm("No candidates returned".to_string()))?;

        let text = candidate
            .content
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::Llm(format!(
                "Empty response (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        log::info!(
            "Google completion successful, generated {} characters",
            text.len()
        );

        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        });

        format!("http://{}/v1beta", addr)
    }

    async fn capture_request() -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let body = r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            String::from_utf8_lossy(&buf[..n]).to_string()
        });

        (format!("http://{}/v1beta", addr), handle)
    }

    #[test]
    fn test_google_service_creation() {
        let service = GoogleService::new("test_api_key".to_string()).unwrap();
        assert_eq!(service.provider_name(), "google");
        assert!(service.is_configured());
    }

    #[test]
    fn test_google_service_not_configured() {
        let service = GoogleService::new("".to_string()).unwrap();
        assert!(!service.is_configured());
    }

    #[test]
    fn test_model_path() {
        assert_eq!(GoogleService::model_path("gemini-3-pro"), "models/gemini-3-pro");
        assert_eq!(GoogleService::model_path("models/gemini-pro"), "models/gemini-pro");
    }

    #[tokio::test]
    async fn test_returns_first_candidate_text() {
        let base = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"Council weighs housing and transit."}],"role":"model"},"finishReason":"STOP"}]}"#,
        )
        .await;
        let service = GoogleService::with_base_url("key".to_string(), base).unwrap();

        let text = service
            .generate_text("prompt", &LlmConfig::default())
            .await
            .unwrap();
        assert_eq!(text, "Council weighs housing and transit.");
    }

    #[tokio::test]
    async fn test_auth_rejection_is_error() {
        let base = serve_once("403 Forbidden", r#"{"error":{"message":"API key not valid"}}"#).await;
        let service = GoogleService::with_base_url("bad".to_string(), base).unwrap();

        let err = service
            .generate_text("prompt", &LlmConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_error() {
        let base = serve_once("200 OK", r#"{"candidates":[]}"#).await;
        let service = GoogleService::with_base_url("key".to_string(), base).unwrap();

        assert!(service
            .generate_text("prompt", &LlmConfig::default())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_unconfigured_service_does_not_call_out() {
        let service =
            GoogleService::with_base_url(String::new(), "http://127.0.0.1:9".to_string()).unwrap();
        let err = service
            .generate_text("prompt", &LlmConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_key_sent_as_header_not_in_url() {
        let (base, request) = capture_request().await;
        let service = GoogleService::with_base_url("SECRET_KEY_123".to_string(), base).unwrap();

        service
            .generate_text("prompt", &LlmConfig::default())
            .await
            .unwrap();

        let request = request.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert!(!request_line.contains("SECRET_KEY_123"));
        assert!(request
            .to_ascii_lowercase()
            .contains("x-goog-api-key: secret_key_123"));
    }

    #[tokio::test]
    async fn test_transport_error_does_not_expose_key() {
        let service =
            GoogleService::with_base_url("SECRET_KEY_123".to_string(), "http://127.0.0.1:9").unwrap();

        let err = service
            .generate_text("prompt", &LlmConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Llm(_)));
        assert!(!err.to_string().contains("SECRET_KEY_123"));
    }
}
