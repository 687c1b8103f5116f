//! Remote token-classification over HTTP.
//!
//! Speaks the Hugging Face inference request shape: `{"inputs": text}` with
//! aggregation disabled, so the response is one record per sub-word token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::RawToken;

use super::{ClassifierError, TokenClassifier};

/// Configuration for the HTTP classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Inference endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Bearer token sent with each request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    aggregation_strategy: &'static str,
}

/// Response shapes seen from token-classification endpoints.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Flat(Vec<RawToken>),
    Batched(Vec<Vec<RawToken>>),
}

/// Parse a classifier response body into tokens.
///
/// Accepts a flat token array or a batch holding exactly one sequence.
pub fn parse_response(body: &str) -> Result<Vec<RawToken>, ClassifierError> {
    let parsed: InferenceResponse =
        serde_json::from_str(body).map_err(|e| ClassifierError::Parse(e.to_string()))?;

    match parsed {
        InferenceResponse::Flat(tokens) => Ok(tokens),
        InferenceResponse::Batched(mut batch) => match batch.len() {
            0 => Ok(Vec::new()),
            1 => Ok(batch.remove(0)),
            n => Err(ClassifierError::Parse(format!(
                "expected one token sequence, got {}",
                n
            ))),
        },
    }
}

/// Classifier backed by a remote inference endpoint.
pub struct HttpClassifier {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or(ClassifierError::NotConfigured)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClassifierError::Connection(e.to_string()))?;

        Ok(Self {
            endpoint,
            api_key: config.api_key.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TokenClassifier for HttpClassifier {
    fn backend_id(&self) -> &str {
        "http"
    }

    async fn classify(&self, text: &str) -> Result<Vec<RawToken>, ClassifierError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                aggregation_strategy: "none",
            },
        };

        debug!("POST {} ({} chars)", self.endpoint, text.len());
        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| ClassifierError::Connection(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ClassifierError::Connection(e.to_string()))?;

        if !status.is_success() {
            return Err(ClassifierError::Api(format!("HTTP {}: {}", status, text.trim())));
        }

        parse_response(&text)
    }
}
