use crate::{dictionary::Language, AppState};
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct LanguageStatus {
    pub language: Language,
    /// False when the word list was missing at startup
    pub loaded: bool,
    pub words: usize,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageStatus>,
}

/// List every supported language with its load status and word count
pub async fn list_languages(State(state): State<Arc<AppState>>) -> Json<LanguagesResponse> {
    let languages = Language::ALL
        .into_iter()
        .map(|language| {
            let count = state.dictionaries.len(language);
            LanguageStatus {
                language,
                loaded: count.is_some(),
                words: count.unwrap_or(0),
            }
        })
        .collect();

    Json(LanguagesResponse { languages })
}
