use crate::dictionary::{DefinitionsQuery, DictionaryClient, DictionaryDefinition};
use crate::error::Result;

/// Raw definitions passthrough: upstream order and content, no filtering.
#[derive(Clone)]
pub struct FrontService {
    client: DictionaryClient,
}

impl FrontService {
    pub fn new(client: DictionaryClient) -> Self {
        Self { client }
    }

    pub async fn lookup(
        &self,
        word: &str,
        query: &DefinitionsQuery,
    ) -> Result<Vec<DictionaryDefinition>> {
        self.client.definitions(word, query).await
    }
}
