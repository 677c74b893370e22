use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dictionary::{AudioFile, AudioQuery, DictionaryClient};
use crate::error::{Error, Result};

pub const NOT_FOUND_MESSAGE: &str = "No pronunciation found";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationResult {
    pub file_url: Option<String>,
}

impl PronunciationResult {
    /// Take the first audio file of an upstream listing. An empty listing or
    /// anything that is not a list means there is no pronunciation; a first
    /// entry without a URL is still a result.
    pub fn from_listing(listing: Value) -> Result<Self> {
        let first = match listing {
            Value::Array(items) => items.into_iter().next(),
            _ => None,
        }
        .ok_or_else(|| Error::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        let audio: AudioFile = serde_json::from_value(first)?;
        Ok(Self {
            file_url: audio.file_url,
        })
    }
}

#[derive(Clone)]
pub struct PronunciationService {
    client: DictionaryClient,
}

impl PronunciationService {
    pub fn new(client: DictionaryClient) -> Self {
        Self { client }
    }

    pub async fn lookup(&self, word: &str, query: &AudioQuery) -> Result<PronunciationResult> {
        let listing = self.client.audio(word, query).await?;
        PronunciationResult::from_listing(listing)
    }
}
