use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Languages the service has word lists for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Korean,
    English,
    Italian,
    French,
    German,
    Spanish,
}

impl Language {
    /// Every supported language, in the order used for listings and error messages
    pub const ALL: [Language; 6] = [
        Language::Korean,
        Language::English,
        Language::Italian,
        Language::French,
        Language::German,
        Language::Spanish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Korean => "korean",
            Language::English => "english",
            Language::Italian => "italian",
            Language::French => "french",
            Language::German => "german",
            Language::Spanish => "spanish",
        }
    }

    /// Name of the word list file backing this language
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.as_str())
    }

    /// Comma separated list of supported names, e.g. "korean, english, ..."
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(Language::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_language() {
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn test_parse_is_exact_match() {
        // Path segments are matched verbatim, not case-folded
        assert!("English".parse::<Language>().is_err());
        assert!(" english".parse::<Language>().is_err());
        assert_eq!(
            "xx".parse::<Language>(),
            Err(UnknownLanguage("xx".to_string()))
        );
    }

    #[test]
    fn test_supported_list_order() {
        assert_eq!(
            Language::supported_list(),
            "korean, english, italian, french, german, spanish"
        );
    }

    #[test]
    fn test_file_name() {
        assert_eq!(Language::German.file_name(), "german.txt");
    }
}
