use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::Json,
};
use serde::Deserialize;
use std::time::Instant;
use uuid::Uuid;

use super::routes::AppState;
use crate::{completion::DefinitionResult, errors::AppError};

#[derive(Debug, Default, Deserialize)]
pub struct DefinitionParams {
    /// Text surrounding the selected word, used to pick the right sense.
    pub context: Option<String>,
}

pub async fn get_definition(
    State(state): State<AppState>,
    Path(word): Path<String>,
    query: Result<Query<DefinitionParams>, QueryRejection>,
) -> Result<Json<DefinitionResult>, AppError> {
    let Query(params) = query?;
    let request_id = Uuid::new_v4().to_string();
    let started = Instant::now();

    tracing::info!(
        request_id = %request_id,
        word = %word,
        has_context = params.context.is_some(),
        model = state.definition.model_name(),
        "Received definition request"
    );

    let result = state
        .definition
        .lookup(&word, params.context.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(request_id = %request_id, kind = %e.kind(), "Definition lookup failed: {}", e);
            AppError::from(e)
        })?;

    tracing::info!(
        request_id = %request_id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Definition request completed"
    );
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::DefinitionProvider;
    use crate::config::Config;
    use crate::dictionary::DictionaryClient;
    use crate::error::{Error, Result};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    struct CannedProvider;

    #[async_trait]
    impl DefinitionProvider for CannedProvider {
        async fn define(&self, word: &str, context: Option<&str>) -> Result<DefinitionResult> {
            if word == "zzzz" {
                return Err(Error::ShapeMismatch("no such word".to_string()));
            }
            let definition = match context {
                Some(_) => "The side of a river.",
                None => "A place that keeps money.",
            };
            Ok(DefinitionResult {
                word: word.to_string(),
                part_of_speech: "noun".to_string(),
                definition: definition.to_string(),
                example: format!("They walked to the {word}."),
            })
        }

        fn model_name(&self) -> &str {
            "canned"
        }
    }

    fn test_state() -> AppState {
        let dictionary = DictionaryClient::new(&Config::default().dictionary).unwrap();
        AppState::new(Arc::new(CannedProvider), dictionary)
    }

    #[tokio::test]
    async fn test_get_definition_handler() {
        let result = get_definition(
            State(test_state()),
            Path("bank".to_string()),
            Ok(Query(DefinitionParams::default())),
        )
        .await
        .unwrap();
        assert_eq!(result.0.definition, "A place that keeps money.");

        let result = get_definition(
            State(test_state()),
            Path("bank".to_string()),
            Ok(Query(DefinitionParams {
                context: Some("down by the river".to_string()),
            })),
        )
        .await
        .unwrap();
        assert_eq!(result.0.definition, "The side of a river.");
        assert!(!result.0.part_of_speech.is_empty());
    }

    #[tokio::test]
    async fn test_get_definition_failure_is_server_error() {
        let err = get_definition(
            State(test_state()),
            Path("zzzz".to_string()),
            Ok(Query(DefinitionParams::default())),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
