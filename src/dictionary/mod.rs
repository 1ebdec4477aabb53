pub mod language;

pub use language::Language;

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Read-only word lists keyed by language, built once at startup
#[derive(Debug, Default)]
pub struct DictionaryStore {
    words: HashMap<Language, Vec<String>>,
}

impl DictionaryStore {
    /// Load every supported language's word list from `dir`.
    ///
    /// A missing file only leaves that language absent from the store; any
    /// other read failure aborts the load. Invalid UTF-8 is decoded lossily.
    pub async fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut store = Self::empty();

        for lang in Language::ALL {
            let path = dir.join(lang.file_name());
            match fs::read(&path).await {
                Ok(bytes) => {
                    let content = String::from_utf8_lossy(&bytes);
                    if matches!(content, Cow::Owned(_)) {
                        tracing::warn!(
                            "Dictionary file for {} is not valid UTF-8; invalid bytes replaced",
                            lang
                        );
                    }
                    let words = parse_words(&content);
                    tracing::info!("Loaded {} words for {}", words.len(), lang);
                    store.words.insert(lang, words);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::warn!(
                        "Dictionary file for {} not found: {}",
                        lang,
                        path.display()
                    );
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to read dictionary for {} at {}", lang, path.display())
                    });
                }
            }
        }

        Ok(store)
    }

    /// Create an empty store (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Builder form of [`DictionaryStore::insert`]
    pub fn with_words<I, S>(mut self, lang: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(lang, words);
        self
    }

    /// Replace the word list for `lang`, trimming entries and dropping blanks
    pub fn insert<I, S>(&mut self, lang: Language, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();
        self.words.insert(lang, words);
    }

    /// Words for `lang`, or `None` if its list was never loaded
    pub fn lookup(&self, lang: Language) -> Option<&[String]> {
        self.words.get(&lang).map(Vec::as_slice)
    }

    /// Number of words loaded for `lang`
    pub fn len(&self, lang: Language) -> Option<usize> {
        self.words.get(&lang).map(Vec::len)
    }

    /// Languages with a loaded list, in enumeration order
    pub fn loaded_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.words.contains_key(lang))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split newline-delimited word list content into trimmed, non-empty words,
/// keeping source order
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "word-lookup-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_empty_store() {
        let store = DictionaryStore::empty();
        assert!(store.is_empty());
        assert!(store.lookup(Language::English).is_none());
        assert!(store.loaded_languages().is_empty());
    }

    #[test]
    fn test_parse_words_trims_and_drops_blanks() {
        let words = parse_words("  apple \n\ngrape\r\n\t\nplum\n   \nape");
        assert_eq!(words, vec!["apple", "grape", "plum", "ape"]);
        assert!(words.iter().all(|w| !w.is_empty() && w.trim() == w));
    }

    #[test]
    fn test_insert_normalizes_words() {
        let store = DictionaryStore::empty().with_words(Language::French, [" chat", "", "chien "]);
        assert_eq!(
            store.lookup(Language::French),
            Some(&["chat".to_string(), "chien".to_string()][..])
        );
        assert_eq!(store.len(Language::French), Some(2));
    }

    #[test]
    fn test_present_but_empty_list_is_not_absent() {
        let store = DictionaryStore::empty().with_words(Language::German, Vec::<String>::new());
        assert_eq!(store.lookup(Language::German), Some(&[][..]));
    }

    #[tokio::test]
    async fn test_load_skips_missing_files() {
        let dir = scratch_dir("load-missing");
        std::fs::write(dir.join("english.txt"), "apple\ngrape\n\n  plum  \n").unwrap();
        std::fs::write(dir.join("korean.txt"), "사과\n포도\n").unwrap();

        let store = DictionaryStore::load(&dir).await.unwrap();

        assert_eq!(
            store.lookup(Language::English).unwrap(),
            &["apple", "grape", "plum"]
        );
        assert_eq!(store.lookup(Language::Korean).unwrap(), &["사과", "포도"]);
        assert!(store.lookup(Language::Spanish).is_none());
        assert_eq!(
            store.loaded_languages(),
            vec![Language::Korean, Language::English]
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_load_from_missing_directory_yields_empty_store() {
        let dir = std::env::temp_dir().join(format!("word-lookup-nowhere-{}", std::process::id()));
        let store = DictionaryStore::load(&dir).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_load_decodes_invalid_utf8_lossily() {
        let dir = scratch_dir("load-lossy");
        std::fs::write(dir.join("italian.txt"), b"casa\n\xffcane\nmela\n").unwrap();

        let store = DictionaryStore::load(&dir).await.unwrap();

        assert_eq!(
            store.lookup(Language::Italian).unwrap(),
            &["casa", "\u{FFFD}cane", "mela"]
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_load_fails_on_unreadable_entry() {
        let dir = scratch_dir("load-unreadable");
        // A directory where the word list should be cannot be read as a file
        std::fs::create_dir_all(dir.join("italian.txt")).unwrap();

        let err = DictionaryStore::load(&dir).await.unwrap_err();
        assert!(err.to_string().contains("italian"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
