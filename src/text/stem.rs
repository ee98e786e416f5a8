use crate::text::language::Language;
use rust_stemmers::Stemmer as Snowball;

/// Thin adapter over one Snowball stemmer instance.
///
/// Constructed once per language per engine; `stem` is pure and expects
/// lowercase input, which every caller in the pipeline guarantees.
pub struct Stemmer {
    inner: Snowball,
}

impl Stemmer {
    pub fn new(language: Language) -> Self {
        Self {
            inner: Snowball::create(language.algorithm()),
        }
    }

    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}
