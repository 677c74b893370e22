use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::routes::AppState;
use crate::{
    dictionary::{AudioQuery, Flag},
    error::ErrorKind,
    errors::AppError,
    services::PronunciationResult,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationParams {
    pub use_canonical: Option<Flag>,
}

pub async fn get_pronunciation(
    State(state): State<AppState>,
    Path(word): Path<String>,
    query: Result<Query<PronunciationParams>, QueryRejection>,
) -> Result<Json<PronunciationResult>, AppError> {
    let Query(params) = query?;
    let request_id = Uuid::new_v4().to_string();
    let query = AudioQuery {
        use_canonical: params.use_canonical.unwrap_or_default(),
    };

    tracing::info!(request_id = %request_id, word = %word, "Received pronunciation request");

    let result = state.pronunciation.lookup(&word, &query).await.map_err(|e| {
        // A missing recording is an ordinary outcome, not a fault.
        match e.kind() {
            ErrorKind::NotFound => {
                tracing::info!(request_id = %request_id, "No pronunciation for {}", word)
            }
            _ => tracing::error!(request_id = %request_id, kind = %e.kind(), "Pronunciation lookup failed: {}", e),
        }
        AppError::from(e)
    })?;

    tracing::info!(request_id = %request_id, has_audio = result.file_url.is_some(), "Pronunciation request completed");
    Ok(Json(result))
}
