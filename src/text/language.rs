use crate::error::{IqcheckError, Result};
use deunicode::deunicode;
use std::collections::HashSet;
use std::fmt;

/// Languages for which both a stop-word list and a Snowball stemmer exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Portuguese,
    English,
    Spanish,
    French,
    Italian,
    German,
}

impl Language {
    // Declaration order doubles as the detection tie-break order: the
    // first entry wins when stop-word overlaps are equal, so statements
    // with no overlap at all fall back to Portuguese.
    pub const ALL: [Language; 6] = [
        Language::Portuguese,
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::German,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::Portuguese => "portuguese",
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::Italian => "italian",
            Language::German => "german",
        }
    }

    pub fn from_name(name: &str) -> Result<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.name() == name.trim().to_lowercase())
            .ok_or_else(|| IqcheckError::UnsupportedLanguage(name.to_string()))
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Language::Portuguese => 0,
            Language::English => 1,
            Language::Spanish => 2,
            Language::French => 3,
            Language::Italian => 4,
            Language::German => 5,
        }
    }

    fn stop_words_id(self) -> stop_words::LANGUAGE {
        match self {
            Language::Portuguese => stop_words::LANGUAGE::Portuguese,
            Language::English => stop_words::LANGUAGE::English,
            Language::Spanish => stop_words::LANGUAGE::Spanish,
            Language::French => stop_words::LANGUAGE::French,
            Language::Italian => stop_words::LANGUAGE::Italian,
            Language::German => stop_words::LANGUAGE::German,
        }
    }

    pub fn algorithm(self) -> rust_stemmers::Algorithm {
        match self {
            Language::Portuguese => rust_stemmers::Algorithm::Portuguese,
            Language::English => rust_stemmers::Algorithm::English,
            Language::Spanish => rust_stemmers::Algorithm::Spanish,
            Language::French => rust_stemmers::Algorithm::French,
            Language::Italian => rust_stemmers::Algorithm::Italian,
            Language::German => rust_stemmers::Algorithm::German,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stop-word sets for every supported language, loaded once per engine.
///
/// Uses the NLTK word lists: the ISO lists are too aggressive and would
/// swallow domain terms such as "pontos". Entries are transliterated to
/// ASCII so they compare equal to tokens coming out of the normalizer.
pub struct Stopwords {
    sets: Vec<HashSet<String>>,
}

impl Stopwords {
    pub fn load() -> Self {
        let sets = Language::ALL
            .iter()
            .map(|language| {
                stop_words::get(language.stop_words_id())
                    .into_iter()
                    .map(|word| deunicode(&word.to_lowercase()))
                    .collect()
            })
            .collect();
        Self { sets }
    }

    pub fn set(&self, language: Language) -> &HashSet<String> {
        &self.sets[language.index()]
    }

    pub fn contains(&self, language: Language, token: &str) -> bool {
        self.set(language).contains(token)
    }

    /// Picks the language whose stop-word set overlaps the token set the
    /// most. Ties keep the earlier language in `Language::ALL` order.
    pub fn detect(&self, tokens: &[String]) -> Language {
        let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let mut best = Language::ALL[0];
        let mut best_overlap = 0usize;
        for &language in &Language::ALL {
            let overlap = token_set
                .iter()
                .filter(|token| self.contains(language, token))
                .count();
            if overlap > best_overlap {
                best = language;
                best_overlap = overlap;
            }
        }
        tracing::debug!(language = best.name(), overlap = best_overlap, "detected statement language");
        best
    }

    /// Drops stop-words, preserving the relative order of survivors.
    pub fn filter(&self, tokens: &[String], language: Language) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.contains(language, token))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_supported_languages() {
        assert_eq!(
            Language::from_name("Portuguese").expect("language should resolve"),
            Language::Portuguese
        );
        assert_eq!(
            Language::from_name("english").expect("language should resolve"),
            Language::English
        );
    }

    #[test]
    fn from_name_rejects_unknown_language() {
        let err = Language::from_name("klingon").expect_err("language should be rejected");
        assert!(err.to_string().contains("unsupported statement language"));
    }

    #[test]
    fn detect_prefers_language_with_largest_stopword_overlap() {
        let stopwords = Stopwords::load();

        let portuguese = ["de", "dois", "para", "soma", "valor"]
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>();
        assert_eq!(stopwords.detect(&portuguese), Language::Portuguese);

        let english = ["the", "with", "board", "should", "from"]
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>();
        assert_eq!(stopwords.detect(&english), Language::English);
    }

    #[test]
    fn detect_falls_back_to_first_language_without_overlap() {
        let stopwords = Stopwords::load();
        let tokens = vec!["xyzzy".to_string(), "plugh".to_string()];
        assert_eq!(stopwords.detect(&tokens), Language::Portuguese);
    }

    #[test]
    fn filter_removes_stopwords_and_keeps_order() {
        let stopwords = Stopwords::load();
        let tokens = ["soma", "de", "resultado", "para", "linha"]
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>();
        let kept = stopwords.filter(&tokens, Language::Portuguese);
        assert_eq!(kept, vec!["soma", "resultado", "linha"]);
    }
}
