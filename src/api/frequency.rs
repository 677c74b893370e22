use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::routes::AppState;
use crate::{
    dictionary::{Flag, FrequencyQuery},
    errors::AppError,
    services::FrequencyResult,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyParams {
    pub use_canonical: Option<Flag>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl From<FrequencyParams> for FrequencyQuery {
    fn from(params: FrequencyParams) -> Self {
        Self {
            use_canonical: params.use_canonical.unwrap_or_default(),
            start_year: params.start_year,
            end_year: params.end_year,
        }
    }
}

pub async fn get_frequency(
    State(state): State<AppState>,
    Path(word): Path<String>,
    query: Result<Query<FrequencyParams>, QueryRejection>,
) -> Result<Json<FrequencyResult>, AppError> {
    let Query(params) = query?;
    let request_id = Uuid::new_v4().to_string();
    let query = FrequencyQuery::from(params);

    tracing::info!(
        request_id = %request_id,
        word = %word,
        start_year = ?query.start_year,
        end_year = ?query.end_year,
        "Received frequency request"
    );

    let result = state.frequency.lookup(&word, &query).await.map_err(|e| {
        tracing::error!(request_id = %request_id, kind = %e.kind(), "Frequency lookup failed: {}", e);
        AppError::from(e)
    })?;

    tracing::info!(request_id = %request_id, years = result.frequencies.len(), "Frequency request completed");
    Ok(Json(result))
}
