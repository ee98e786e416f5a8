pub mod scorer;

use crate::error::{IqcheckError, Result};
use crate::ident::{decompose, NamingConvention};
use crate::text::stem::Stemmer;
use crate::vocab::Vocabulary;
use std::collections::HashSet;

/// How the fragments of a composite identifier combine into a verdict.
///
/// `AnyFragment` is the permissive union used by default: one fragment
/// from the problem is enough. `AllFragments` is the strict
/// intersection kept from an earlier revision of the heuristic; both
/// are deliberate design points, selected by configuration rather than
/// silently merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    #[default]
    AnyFragment,
    AllFragments,
}

impl MatchPolicy {
    pub fn from_name(name: &str) -> Result<MatchPolicy> {
        match name.trim().to_lowercase().as_str() {
            "any" => Ok(MatchPolicy::AnyFragment),
            "all" => Ok(MatchPolicy::AllFragments),
            other => Err(IqcheckError::ConfigParse(format!(
                "unsupported matching.policy: {other} (expected \"any\" or \"all\")"
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchPolicy::AnyFragment => "any",
            MatchPolicy::AllFragments => "all",
        }
    }
}

/// Decides, per identifier, whether it comes from the problem
/// vocabulary. Borrows the run's read-only resources; verdicts are
/// case-insensitive throughout.
pub struct Matcher<'a> {
    vocabulary: &'a Vocabulary,
    stemmer: &'a Stemmer,
    stopwords: &'a HashSet<String>,
    policy: MatchPolicy,
}

impl<'a> Matcher<'a> {
    pub fn new(
        vocabulary: &'a Vocabulary,
        stemmer: &'a Stemmer,
        stopwords: &'a HashSet<String>,
        policy: MatchPolicy,
    ) -> Self {
        Self {
            vocabulary,
            stemmer,
            stopwords,
            policy,
        }
    }

    pub fn is_from_problem(&self, identifier: &str) -> bool {
        let convention = NamingConvention::classify(identifier);
        let mut fragments = decompose(identifier, convention);
        if convention != NamingConvention::Simple {
            // stop-word fragments only arise between the parts of a
            // composite; a simple identifier is compared whole
            fragments.retain(|fragment| !self.stopwords.contains(fragment));
        }
        if fragments.is_empty() {
            // nothing survivable to compare
            return false;
        }
        match self.policy {
            MatchPolicy::AnyFragment => fragments.iter().any(|f| self.term_matches(f)),
            MatchPolicy::AllFragments => fragments.iter().all(|f| self.term_matches(f)),
        }
    }

    // Four-way fuzzy equality: exact, stem-vs-raw, raw-vs-stem and
    // stem-vs-stem against the vocabulary.
    fn term_matches(&self, term: &str) -> bool {
        if self.vocabulary.contains(term) || self.vocabulary.contains_stem(term) {
            return true;
        }
        let stem = self.stemmer.stem(term);
        self.vocabulary.contains(&stem) || self.vocabulary.contains_stem(&stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::language::{Language, Stopwords};

    struct Fixture {
        vocabulary: Vocabulary,
        stemmer: Stemmer,
        stopwords: Stopwords,
    }

    impl Fixture {
        fn new(terms: &[&str]) -> Self {
            let stemmer = Stemmer::new(Language::Portuguese);
            let vocabulary =
                Vocabulary::from_terms(terms.iter().map(|t| t.to_string()), &stemmer);
            Self {
                vocabulary,
                stemmer,
                stopwords: Stopwords::load(),
            }
        }

        fn matcher(&self, policy: MatchPolicy) -> Matcher<'_> {
            Matcher::new(
                &self.vocabulary,
                &self.stemmer,
                self.stopwords.set(Language::Portuguese),
                policy,
            )
        }
    }

    #[test]
    fn union_policy_matches_on_a_single_fragment() {
        let fixture = Fixture::new(&["tabuleiro", "linha", "coluna", "pontos"]);
        let matcher = fixture.matcher(MatchPolicy::AnyFragment);

        assert!(matcher.is_from_problem("tamanho_tabuleiro"));
        assert!(matcher.is_from_problem("pontos_xis"));
        assert!(!matcher.is_from_problem("simbolo"));
    }

    #[test]
    fn intersection_policy_requires_every_fragment() {
        let fixture = Fixture::new(&["tabuleiro", "linha", "coluna", "pontos"]);
        let matcher = fixture.matcher(MatchPolicy::AllFragments);

        // "tamanho" is not in the vocabulary, so the strict variant fails
        assert!(!matcher.is_from_problem("tamanho_tabuleiro"));
        assert!(matcher.is_from_problem("linha_coluna"));
    }

    #[test]
    fn camelcase_identifier_matches_through_decomposition() {
        let fixture = Fixture::new(&["resultado"]);
        let matcher = fixture.matcher(MatchPolicy::AnyFragment);
        assert!(matcher.is_from_problem("resultadoFinal"));
    }

    #[test]
    fn stem_fuzzy_equality_matches_inflected_variants() {
        let fixture = Fixture::new(&["numeros"]);
        let matcher = fixture.matcher(MatchPolicy::AnyFragment);
        // singular identifier against plural vocabulary entry
        assert!(matcher.is_from_problem("numero"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let fixture = Fixture::new(&["soma"]);
        let matcher = fixture.matcher(MatchPolicy::AnyFragment);
        assert!(matcher.is_from_problem("soma"));
        assert!(matcher.is_from_problem("Soma"));
        assert!(matcher.is_from_problem("SOMA"));
    }

    #[test]
    fn simple_identifier_is_compared_whole_even_when_it_is_a_stopword() {
        // "para" is a stop-word, but its stem collides with the stem of
        // the vocabulary entry, so as a whole identifier it matches
        let fixture = Fixture::new(&["parada"]);
        let matcher = fixture.matcher(MatchPolicy::AnyFragment);
        assert!(matcher.is_from_problem("para"));
        // inside a composite the same fragment is dropped as a connective
        assert!(!matcher.is_from_problem("para_xis"));
    }

    #[test]
    fn identifier_with_no_survivable_fragments_is_negative() {
        let fixture = Fixture::new(&["soma"]);
        let matcher = fixture.matcher(MatchPolicy::AnyFragment);
        // fragments are single letters and stop-words only
        assert!(!matcher.is_from_problem("a_e_o"));
        assert!(!matcher.is_from_problem("x_y"));
    }

    #[test]
    fn vocabulary_entries_are_reflexively_matched() {
        let fixture = Fixture::new(&["tabuleiro", "linha", "pontos"]);
        let matcher = fixture.matcher(MatchPolicy::AnyFragment);
        for term in fixture.vocabulary.sorted_terms() {
            assert!(matcher.is_from_problem(&term), "{term} should match itself");
        }
    }

    #[test]
    fn policy_names_round_trip() {
        assert_eq!(
            MatchPolicy::from_name("any").expect("policy should parse"),
            MatchPolicy::AnyFragment
        );
        assert_eq!(
            MatchPolicy::from_name("ALL").expect("policy should parse"),
            MatchPolicy::AllFragments
        );
        assert!(MatchPolicy::from_name("most").is_err());
    }
}
