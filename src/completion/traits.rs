use async_trait::async_trait;

use super::schema::DefinitionResult;
use crate::error::Result;

/// Anything that can produce a structured definition for a word, optionally
/// disambiguated by the text it was found in.
#[async_trait]
pub trait DefinitionProvider: Send + Sync {
    async fn define(&self, word: &str, context: Option<&str>) -> Result<DefinitionResult>;

    /// Identifier of the backing model, for logs.
    fn model_name(&self) -> &str;
}
