use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::Json,
};
use uuid::Uuid;

use super::routes::AppState;
use crate::{
    dictionary::{DefinitionsQuery, DictionaryDefinition, Flag},
    errors::AppError,
};

/// Build the definitions filter from raw query pairs. Pairs are used instead
/// of a struct so `sourceDictionaries` can repeat; unknown keys are ignored.
pub fn definitions_query_from_pairs(pairs: Vec<(String, String)>) -> Result<DefinitionsQuery, AppError> {
    let mut query = DefinitionsQuery::default();

    for (key, value) in pairs {
        match key.as_str() {
            "limit" => {
                query.limit = value.trim().parse().map_err(|_| {
                    AppError::BadRequest(format!("limit must be an integer, got {value:?}"))
                })?;
            }
            "partOfSpeech" => {
                query.part_of_speech = Some(value).filter(|v| !v.trim().is_empty());
            }
            "includeRelated" => query.include_related = parse_flag(&key, &value)?,
            "useCanonical" => query.use_canonical = parse_flag(&key, &value)?,
            "includeTags" => query.include_tags = parse_flag(&key, &value)?,
            "sourceDictionaries" => query.source_dictionaries.push(value),
            _ => {}
        }
    }

    Ok(query)
}

fn parse_flag(key: &str, value: &str) -> Result<Flag, AppError> {
    Flag::parse(value).ok_or_else(|| {
        AppError::BadRequest(format!("{key} must be \"true\" or \"false\", got {value:?}"))
    })
}

pub async fn get_word_definitions(
    State(state): State<AppState>,
    Path(word): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<DictionaryDefinition>>, AppError> {
    let Query(pairs) = query?;
    let request_id = Uuid::new_v4().to_string();
    let query = definitions_query_from_pairs(pairs)?;

    tracing::info!(
        request_id = %request_id,
        word = %word,
        limit = query.limit,
        source_dictionaries = %query.source_dictionaries_param(),
        "Received front definitions request"
    );

    let definitions = state.front.lookup(&word, &query).await.map_err(|e| {
        tracing::error!(request_id = %request_id, kind = %e.kind(), "Definitions lookup failed: {}", e);
        AppError::from(e)
    })?;

    tracing::info!(request_id = %request_id, count = definitions.len(), "Front definitions request completed");
    Ok(Json(definitions))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_no_parameters() {
        let query = definitions_query_from_pairs(Vec::new()).unwrap();
        assert_eq!(query, DefinitionsQuery::default());
        assert_eq!(query.limit, 3);
    }

    #[test]
    fn test_repeated_source_dictionaries() {
        let query = definitions_query_from_pairs(pairs(&[
            ("sourceDictionaries", "century"),
            ("sourceDictionaries", "ahd"),
            ("includeRelated", "true"),
            ("limit", "10"),
            ("partOfSpeech", "noun,verb"),
        ]))
        .unwrap();

        assert_eq!(query.source_dictionaries_param(), "century,ahd");
        assert_eq!(query.include_related, Flag(true));
        assert_eq!(query.limit, 10);
        assert_eq!(query.part_of_speech.as_deref(), Some("noun,verb"));
    }

    #[test]
    fn test_malformed_values_are_bad_requests() {
        let err = definitions_query_from_pairs(pairs(&[("limit", "three")])).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);

        let err = definitions_query_from_pairs(pairs(&[("includeTags", "sometimes")])).unwrap_err();
        assert!(err.to_string().contains("includeTags"));
    }

    #[test]
    fn test_negative_limit_kept_as_given() {
        let query = definitions_query_from_pairs(pairs(&[("limit", "-1")])).unwrap();
        assert_eq!(query.limit, -1);
        assert!(query.params().contains(&("limit", "-1".to_string())));
    }

    #[test]
    fn test_numeric_flags_rejected() {
        let err = definitions_query_from_pairs(pairs(&[("useCanonical", "1")])).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
