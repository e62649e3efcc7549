use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when asking the suggestion oracle for names
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// Free-text member name suggestions
///
/// Results are not guaranteed to name real members and the same query may
/// yield different suggestions on each call.
#[async_trait]
pub trait SuggestionOracle: Send + Sync {
    async fn suggest(&self, query: &str) -> Result<Vec<String>, OracleError>;
}

/// Oracle used when suggestions are switched off
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledOracle;

#[async_trait]
impl SuggestionOracle for DisabledOracle {
    async fn suggest(&self, _query: &str) -> Result<Vec<String>, OracleError> {
        Ok(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
struct SuggestionPayload {
    #[serde(default)]
    suggestions: Vec<String>,
}

/// Language-model backed oracle speaking the OpenAI chat-completions protocol
pub struct HttpSuggestionOracle {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl HttpSuggestionOracle {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, OracleError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            model,
            client,
        })
    }

    fn prompt(query: &str) -> String {
        format!(
            "Suggest similar member names for the following search query:\n\n{}\n\n\
             Return a list of names that are similar to the query, considering potential \
             typos or partial names. Respond with a JSON object of the form \
             {{\"suggestions\": [\"name\", ...]}} and nothing else.",
            query
        )
    }

    fn request_body(&self, query: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": Self::prompt(query) }
            ],
            "response_format": { "type": "json_object" },
        })
    }
}

#[async_trait]
impl SuggestionOracle for HttpSuggestionOracle {
    async fn suggest(&self, query: &str) -> Result<Vec<String>, OracleError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        tracing::debug!("Requesting name suggestions for query: {}", query);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(query))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OracleError::ApiError(format!(
                "Failed to fetch suggestions: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let content = json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.pointer("/message/content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| OracleError::InvalidResponse("Missing message content".into()))?;

        let payload: SuggestionPayload = serde_json::from_str(content)
            .map_err(|e| OracleError::InvalidResponse(format!("Failed to parse suggestions: {}", e)))?;

        tracing::debug!("Oracle returned {} suggestions", payload.suggestions.len());

        Ok(payload.suggestions)
    }
}
