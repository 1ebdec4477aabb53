use crate::{query, AppState};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct WordsParams {
    /// Comma separated substrings, e.g. `a,b,th`
    pub chars: Option<String>,
    pub length: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WordsResponse {
    pub words: Vec<String>,
}

/// Fetch words for a language filtered by `chars`, `length` and `limit`
pub async fn get_words(
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
    params: Result<Query<WordsParams>, QueryRejection>,
) -> Result<Json<WordsResponse>, query::QueryError> {
    let Query(params) =
        params.map_err(|rejection| query::QueryError::MalformedQuery(rejection.body_text()))?;

    let words = query::query(
        &state.dictionaries,
        &language,
        params.chars.as_deref(),
        params.length.as_deref(),
        params.limit.as_deref(),
        &mut rand::rng(),
    )?;

    Ok(Json(WordsResponse { words }))
}
