use axum::{Router, routing::get};
use std::sync::Arc;

use super::{cors::cors_layer, definition, frequency, front, health, pronunciation};
use crate::{
    completion::{CompletionClient, DefinitionProvider},
    config::Config,
    dictionary::DictionaryClient,
    services::{DefinitionService, FrequencyService, FrontService, PronunciationService},
};

/// Services shared by every handler. Nothing in here is mutable; requests
/// never see each other.
#[derive(Clone)]
pub struct AppState {
    pub definition: Arc<DefinitionService>,
    pub frequency: Arc<FrequencyService>,
    pub pronunciation: Arc<PronunciationService>,
    pub front: Arc<FrontService>,
}

impl AppState {
    pub fn new(provider: Arc<dyn DefinitionProvider>, dictionary: DictionaryClient) -> Self {
        Self {
            definition: Arc::new(DefinitionService::new(provider)),
            frequency: Arc::new(FrequencyService::new(dictionary.clone())),
            pronunciation: Arc::new(PronunciationService::new(dictionary.clone())),
            front: Arc::new(FrontService::new(dictionary)),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = Arc::new(CompletionClient::new(&config.completion)?);
        let dictionary = DictionaryClient::new(&config.dictionary)?;
        Ok(Self::new(provider, dictionary))
    }
}

pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(health::health_check))
        .route("/front/:word", get(front::get_word_definitions))
        .route("/definition/:word", get(definition::get_definition))
        .route("/frequency/:word", get(frequency::get_frequency))
        .route("/pronunciation/:word", get(pronunciation::get_pronunciation))
        .layer(cors_layer(&config.server.allowed_origins))
        .with_state(state)
}
