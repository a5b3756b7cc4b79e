use log::debug;
use serde::{Deserialize, Serialize};

use crate::clients::errors::{Error, Result};

/// Cohere API root.
pub const BASE_URL: &str = "https://api.cohere.com/v1";

/// Embedding model used for lyrics.
pub const DEFAULT_MODEL: &str = "embed-english-v2.0";

#[derive(Serialize, Debug)]
struct EmbedRequest<'a> {
    model: &'a str,
    texts: &'a [String],
}

#[derive(Deserialize, Debug)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

pub struct CohereClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CohereClient {
    pub fn new(api_key: String) -> Self {
        CohereClient {
            http: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    // Create a CohereClient from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        let api_key = std::env::var("COHERE_API_KEY")?;
        Ok(CohereClient::new(api_key))
    }

    /// Embed a batch of texts in one request.
    ///
    /// The response carries one vector per input text, in input order. A
    /// response with a different count is rejected, so callers can zip the
    /// vectors back onto their inputs.
    pub async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        debug!("Embedding {} texts with model {}", texts.len(), self.model);

        let request = EmbedRequest {
            model: &self.model,
            texts,
        };

        let response = self
            .http
            .post(format!("{}/embed", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::CohereUnexpectedResponse(format!(
                "HTTP {status}: {body}"
            )));
        }

        let parsed: EmbedResponse = response.json().await?;

        if parsed.embeddings.len() != texts.len() {
            return Err(Error::EmbeddingCountMismatch {
                requested: texts.len(),
                received: parsed.embeddings.len(),
            });
        }

        Ok(parsed.embeddings)
    }
}
