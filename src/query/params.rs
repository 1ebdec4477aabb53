use std::num::IntErrorKind;

use super::error::QueryError;

/// Number of words returned when the caller gives no `limit`
pub const DEFAULT_LIMIT: usize = 10;

/// Filter parameters after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFilter {
    /// Lowercased substrings; a word matches if it contains any of them
    pub chars: Vec<String>,
    /// Exact character count, if restricted
    pub length: Option<usize>,
    pub limit: usize,
}

impl WordFilter {
    /// Validate raw query values. Checks run chars, then length, then limit,
    /// and the first failure is returned.
    pub fn parse(
        chars_raw: Option<&str>,
        length_raw: Option<&str>,
        limit_raw: Option<&str>,
    ) -> Result<Self, QueryError> {
        let chars_raw = non_empty(chars_raw).ok_or(QueryError::MissingCharsParam)?;
        let chars = parse_chars(chars_raw);
        if chars.is_empty() {
            return Err(QueryError::InvalidCharsParam);
        }

        let length = match non_empty(length_raw) {
            Some(raw) => Some(parse_positive(raw).ok_or(QueryError::InvalidLengthParam)?),
            None => None,
        };

        let limit = match non_empty(limit_raw) {
            Some(raw) => parse_positive(raw).ok_or(QueryError::InvalidLimitParam)?,
            None => DEFAULT_LIMIT,
        };

        Ok(Self {
            chars,
            length,
            limit,
        })
    }

    /// Whether `word` passes both the chars and length filters
    pub fn matches(&self, word: &str) -> bool {
        if let Some(length) = self.length {
            if word.chars().count() != length {
                return false;
            }
        }

        let lower = word.to_lowercase();
        self.chars.iter().any(|token| lower.contains(token.as_str()))
    }
}

// An empty query value is treated the same as a missing one
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// Split on commas, trim and lowercase each token, drop empties and repeats
fn parse_chars(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in raw.split(',') {
        let token = token.trim().to_lowercase();
        if !token.is_empty() && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// Strict base-10 parse of an integer greater than zero. Values too large
/// for `usize` saturate to `usize::MAX`.
fn parse_positive(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match raw.parse::<usize>() {
        Ok(n) => Some(n).filter(|n| *n > 0),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(usize::MAX),
        Err(_) => None,
    }
}
