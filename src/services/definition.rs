use std::sync::Arc;

use crate::completion::{DefinitionProvider, DefinitionResult, prompt::normalize_context};
use crate::error::Result;

pub struct DefinitionService {
    provider: Arc<dyn DefinitionProvider>,
}

impl DefinitionService {
    pub fn new(provider: Arc<dyn DefinitionProvider>) -> Self {
        Self { provider }
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Blank context is treated the same as no context.
    pub async fn lookup(&self, word: &str, context: Option<&str>) -> Result<DefinitionResult> {
        self.provider.define(word, normalize_context(context)).await
    }
}
