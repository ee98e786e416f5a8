use crate::text::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Other,
}

/// Part-of-speech seam for the vocabulary builder.
///
/// Nouns survive as surface words (domain entities should match
/// verbatim); everything else is folded to its stem so inflected
/// variants in student identifiers still match.
pub trait PosTagger {
    fn tag(&self, word: &str, language: Language) -> PosTag;
}

/// Default tagger: noun-suffix heuristics per language.
///
/// Words are already lowercase ASCII when they reach the tagger, so the
/// suffix tables are ASCII too.
pub struct SuffixTagger;

impl SuffixTagger {
    fn suffixes(language: Language) -> &'static [&'static str] {
        match language {
            Language::Portuguese => &[
                "cao", "coes", "dade", "dades", "agem", "agens", "mento", "mentos", "eiro",
                "eira", "ismo", "ista", "ura", "or", "ores",
            ],
            Language::English => &[
                "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "ism", "ist",
                "er", "or",
            ],
            Language::Spanish => &[
                "cion", "ciones", "dad", "dades", "miento", "mientos", "ismo", "ista", "ura",
                "dor", "dora",
            ],
            Language::French => &["tion", "ment", "eur", "euse", "esse", "age", "isme", "iste"],
            Language::Italian => &["zione", "zioni", "mento", "menti", "ore", "ismo", "ista", "ita"],
            Language::German => &["ung", "heit", "keit", "schaft", "tum", "nis", "chen"],
        }
    }
}

impl PosTagger for SuffixTagger {
    fn tag(&self, word: &str, language: Language) -> PosTag {
        let noun = Self::suffixes(language)
            .iter()
            .any(|suffix| word.len() > suffix.len() && word.ends_with(suffix));
        if noun {
            PosTag::Noun
        } else {
            PosTag::Other
        }
    }
}
