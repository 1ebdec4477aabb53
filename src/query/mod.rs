pub mod error;
pub mod params;
pub mod sampler;

pub use error::QueryError;
pub use params::WordFilter;

use rand::Rng;

use crate::dictionary::{language::UnknownLanguage, DictionaryStore, Language};

/// Look up words for `language` matching the raw query values.
///
/// Validation order is fixed: language, dictionary presence, chars, length,
/// limit. The first failure is returned. When more words match than `limit`
/// allows, a uniform random subset is drawn from `rng`.
pub fn query<R: Rng + ?Sized>(
    store: &DictionaryStore,
    language: &str,
    chars_raw: Option<&str>,
    length_raw: Option<&str>,
    limit_raw: Option<&str>,
    rng: &mut R,
) -> Result<Vec<String>, QueryError> {
    let lang: Language = language
        .parse()
        .map_err(|UnknownLanguage(name)| QueryError::UnsupportedLanguage(name))?;

    let words = store
        .lookup(lang)
        .ok_or(QueryError::DictionaryUnavailable(lang))?;

    let filter = WordFilter::parse(chars_raw, length_raw, limit_raw)?;

    let candidates: Vec<String> = words
        .iter()
        .filter(|word| filter.matches(word))
        .cloned()
        .collect();

    tracing::debug!(
        language = %lang,
        candidates = candidates.len(),
        limit = filter.limit,
        "Filtered word list"
    );

    Ok(sampler::sample(candidates, filter.limit, rng))
}
