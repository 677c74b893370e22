use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dictionary::{DictionaryClient, FrequencyEntry, FrequencyQuery};
use crate::error::Result;

/// Occurrence count per year. Serialized with the years as object keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyResult {
    pub frequencies: BTreeMap<i64, i64>,
}

impl FrequencyResult {
    /// Collapse upstream entries into one mapping; a repeated year keeps the
    /// count of its last entry.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = FrequencyEntry>,
    {
        let frequencies = entries
            .into_iter()
            .map(|entry| (entry.year, entry.count))
            .collect();
        Self { frequencies }
    }
}

#[derive(Clone)]
pub struct FrequencyService {
    client: DictionaryClient,
}

impl FrequencyService {
    pub fn new(client: DictionaryClient) -> Self {
        Self { client }
    }

    pub async fn lookup(&self, word: &str, query: &FrequencyQuery) -> Result<FrequencyResult> {
        let summary = self.client.frequency(word, query).await?;
        Ok(FrequencyResult::from_entries(summary.frequency))
    }
}
