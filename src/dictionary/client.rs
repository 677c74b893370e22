use reqwest::{Url, header::ACCEPT};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::query::{AudioQuery, DefinitionsQuery, FrequencyQuery, Params};
use super::types::{DictionaryDefinition, FrequencySummary};
use crate::config::DictionaryConfig;
use crate::error::{Error, Result};

/// Keyed HTTP/JSON client for the dictionary API (`word.json/{word}/...`).
#[derive(Clone)]
pub struct DictionaryClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl DictionaryClient {
    pub fn new(config: &DictionaryConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| anyhow::anyhow!("Invalid dictionary base URL {:?}: {}", config.base_url, e))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Dictionary base URL {:?} cannot carry a path", config.base_url);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build dictionary HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    pub async fn definitions(
        &self,
        word: &str,
        query: &DefinitionsQuery,
    ) -> Result<Vec<DictionaryDefinition>> {
        self.get_json(word, "definitions", query.params()).await
    }

    pub async fn frequency(&self, word: &str, query: &FrequencyQuery) -> Result<FrequencySummary> {
        self.get_json(word, "frequency", query.params()).await
    }

    /// Raw audio listing; its shape is checked by the caller.
    pub async fn audio(&self, word: &str, query: &AudioQuery) -> Result<Value> {
        self.get_json(word, "audio", query.params()).await
    }

    /// `{base}word.json/{word}/{resource}`, with the word percent-encoded as
    /// a single path segment.
    pub fn endpoint(&self, word: &str, resource: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["word.json", word, resource]);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        word: &str,
        resource: &str,
        mut params: Params,
    ) -> Result<T> {
        let url = self.endpoint(word, resource);
        debug!(path = url.path(), "Dictionary API request");

        params.push(("api_key", self.api_key.clone()));
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamStatus { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
