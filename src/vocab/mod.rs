pub mod tagger;

use crate::text::stem::Stemmer;
use std::collections::HashSet;

/// Canonical set of domain terms derived from one problem statement.
///
/// Built once per grading run and read-only afterwards. The stem of
/// every entry is precomputed so the matcher's four-way fuzzy equality
/// stays a pair of set lookups per term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: HashSet<String>,
    stems: HashSet<String>,
}

impl Vocabulary {
    pub fn from_terms<I>(terms: I, stemmer: &Stemmer) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let entries: HashSet<String> = terms.into_iter().collect();
        let stems = entries.iter().map(|entry| stemmer.stem(entry)).collect();
        Self { entries, stems }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains(term)
    }

    pub fn contains_stem(&self, stem: &str) -> bool {
        self.stems.contains(stem)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in sorted order, for reports and deterministic output.
    pub fn sorted_terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.entries.iter().cloned().collect();
        terms.sort();
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::language::Language;

    #[test]
    fn vocabulary_deduplicates_and_precomputes_stems() {
        let stemmer = Stemmer::new(Language::Portuguese);
        let vocabulary = Vocabulary::from_terms(
            ["soma".to_string(), "soma".to_string(), "resultado".to_string()],
            &stemmer,
        );

        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("soma"));
        assert!(vocabulary.contains_stem(&stemmer.stem("resultado")));
        assert!(!vocabulary.contains("tabuleiro"));
    }

    #[test]
    fn sorted_terms_are_stable() {
        let stemmer = Stemmer::new(Language::Portuguese);
        let vocabulary = Vocabulary::from_terms(
            ["linha".to_string(), "coluna".to_string()],
            &stemmer,
        );
        assert_eq!(vocabulary.sorted_terms(), vec!["coluna", "linha"]);
    }
}
