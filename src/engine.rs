use crate::error::Result;
use crate::matching::{scorer, MatchPolicy, Matcher};
use crate::text::language::{Language, Stopwords};
use crate::text::stem::Stemmer;
use crate::text::Normalizer;
use crate::types::config::IqcheckConfig;
use crate::types::report::ScoreReport;
use crate::vocab::tagger::{PosTag, PosTagger, SuffixTagger};
use crate::vocab::Vocabulary;
use std::collections::BTreeSet;

/// Engine settings resolved from config and command-line overrides.
pub struct EngineSettings {
    pub policy: MatchPolicy,
    pub statement_language: Option<Language>,
    pub extra_denylist: Vec<String>,
}

impl EngineSettings {
    pub fn from_config(config: Option<&IqcheckConfig>) -> Result<Self> {
        match config {
            Some(cfg) => Ok(Self {
                policy: cfg.policy()?,
                statement_language: cfg.statement_language()?,
                extra_denylist: cfg.denylist().to_vec(),
            }),
            None => Ok(Self::default()),
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::default(),
            statement_language: None,
            extra_denylist: Vec::new(),
        }
    }
}

/// The grading engine: holds every expensive read-only resource
/// (stop-word sets, one stemmer per language, the tagger, compiled
/// normalizer patterns) loaded once and reused across scoring runs.
pub struct Engine {
    normalizer: Normalizer,
    stopwords: Stopwords,
    stemmers: Vec<Stemmer>,
    tagger: Box<dyn PosTagger>,
    policy: MatchPolicy,
    statement_language: Option<Language>,
}

impl Engine {
    pub fn new(settings: EngineSettings) -> Self {
        Self::with_tagger(settings, Box::new(SuffixTagger))
    }

    pub fn with_tagger(settings: EngineSettings, tagger: Box<dyn PosTagger>) -> Self {
        let stemmers = Language::ALL.iter().map(|&l| Stemmer::new(l)).collect();
        Self {
            normalizer: Normalizer::new(&settings.extra_denylist),
            stopwords: Stopwords::load(),
            stemmers,
            tagger,
            policy: settings.policy,
            statement_language: settings.statement_language,
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    fn stemmer(&self, language: Language) -> &Stemmer {
        &self.stemmers[language.index()]
    }

    /// Derives the canonical vocabulary from a statement text: normalize,
    /// detect the language (unless forced), filter stop-words, then keep
    /// nouns verbatim and fold everything else to its stem.
    pub fn build_vocabulary(&self, statement_text: &str) -> (Vocabulary, Language) {
        let tokens = self.normalizer.normalize(statement_text);
        let language = self
            .statement_language
            .unwrap_or_else(|| self.stopwords.detect(&tokens));
        let kept = self.stopwords.filter(&tokens, language);
        let stemmer = self.stemmer(language);

        let terms = kept.into_iter().map(|word| {
            match self.tagger.tag(&word, language) {
                PosTag::Noun => word,
                PosTag::Other => stemmer.stem(&word),
            }
        });
        let vocabulary = Vocabulary::from_terms(terms, stemmer);
        tracing::debug!(
            language = language.name(),
            terms = vocabulary.len(),
            "built statement vocabulary"
        );
        (vocabulary, language)
    }

    pub fn matcher<'a>(&'a self, vocabulary: &'a Vocabulary, language: Language) -> Matcher<'a> {
        Matcher::new(
            vocabulary,
            self.stemmer(language),
            self.stopwords.set(language),
            self.policy,
        )
    }

    pub fn score(
        &self,
        vocabulary: &Vocabulary,
        language: Language,
        identifiers: &BTreeSet<String>,
    ) -> Result<ScoreReport> {
        let matcher = self.matcher(vocabulary, language);
        scorer::score(&matcher, identifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATEMENT: &str = "Calcule a soma de dois numeros e imprima o resultado.";

    fn engine() -> Engine {
        Engine::new(EngineSettings::default())
    }

    #[test]
    fn build_vocabulary_detects_portuguese_and_drops_stopwords() {
        let (vocabulary, language) = engine().build_vocabulary(STATEMENT);
        assert_eq!(language, Language::Portuguese);
        for stopword in ["a", "de", "e", "o"] {
            assert!(!vocabulary.contains(stopword), "{stopword} should be filtered");
        }
        assert!(!vocabulary.is_empty());
    }

    #[test]
    fn build_vocabulary_is_idempotent() {
        let engine = engine();
        let (first, _) = engine.build_vocabulary(STATEMENT);
        let (second, _) = engine.build_vocabulary(STATEMENT);
        assert_eq!(first, second);
    }

    #[test]
    fn statement_words_are_matchable_against_the_vocabulary() {
        let engine = engine();
        let (vocabulary, language) = engine.build_vocabulary(STATEMENT);
        let matcher = engine.matcher(&vocabulary, language);

        for identifier in ["soma", "numeros", "numero", "resultado", "resultadoFinal"] {
            assert!(
                matcher.is_from_problem(identifier),
                "{identifier} should come from the problem"
            );
        }
        assert!(!matcher.is_from_problem("tabuleiro"));
    }

    #[test]
    fn vocabulary_entries_match_reflexively() {
        let engine = engine();
        let (vocabulary, language) = engine.build_vocabulary(STATEMENT);
        let matcher = engine.matcher(&vocabulary, language);
        for term in vocabulary.sorted_terms() {
            assert!(matcher.is_from_problem(&term), "{term} should match itself");
        }
    }

    #[test]
    fn forced_language_skips_detection() {
        let settings = EngineSettings {
            statement_language: Some(Language::English),
            ..EngineSettings::default()
        };
        let engine = Engine::new(settings);
        let (_, language) = engine.build_vocabulary(STATEMENT);
        assert_eq!(language, Language::English);
    }

    #[test]
    fn score_flows_through_the_full_pipeline() {
        let engine = engine();
        let (vocabulary, language) = engine.build_vocabulary(STATEMENT);
        let identifiers: BTreeSet<String> = ["soma", "valor_da_soma", "contador"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let report = engine
            .score(&vocabulary, language, &identifiers)
            .expect("score should succeed");
        assert_eq!(report.total_identifiers, 3);
        assert_eq!(report.negative_identifiers, vec!["contador"]);
        assert_eq!(report.ratio, 0.67);
    }
}
