pub mod language;
pub mod stem;

use deunicode::deunicode;
use regex::Regex;
use std::collections::HashSet;

/// Filler words that carry no domain meaning in a problem statement.
pub const DEFAULT_DENYLIST: &[&str] = &["python", "programa", "voce", "usuario", "obs"];

/// Source-file extension suffix; tokens like `arquivopy` are leftovers of
/// file names once the dot delimiter is stripped.
const FILE_EXTENSION_SUFFIX: &str = "py";

// Markup noise stripped from statements before tokenizing. The first
// group is deleted outright, the second is replaced by a space so the
// surrounding words do not fuse together.
const DELETED_DELIMITERS: &[&str] = &["r$", "%", "*", "$", "#", "_", "(", ")", ".", "-se", "`"];
const SPACED_DELIMITERS: &[&str] = &["/", "<", ">"];

/// Multi-stage statement-text cleaner.
///
/// `normalize` is a pure function of its input: lowercase, strip
/// delimiters, tokenize, transliterate to ASCII, run the noise filter
/// chain, deduplicate keeping first-seen order.
pub struct Normalizer {
    word: Regex,
    letters_then_digits: Regex,
    denylist: HashSet<String>,
}

impl Normalizer {
    pub fn new(extra_denylist: &[String]) -> Self {
        let denylist = DEFAULT_DENYLIST
            .iter()
            .map(|word| word.to_string())
            .chain(extra_denylist.iter().map(|word| word.to_lowercase()))
            .collect();
        Self {
            word: Regex::new(r"\p{L}\w*").expect("word pattern should compile"),
            letters_then_digits: Regex::new(r"^[a-z]+[0-9]+")
                .expect("letters-then-digits pattern should compile"),
            denylist,
        }
    }

    pub fn normalize(&self, raw_text: &str) -> Vec<String> {
        let mut text = raw_text.to_lowercase().replace('\n', " ");
        for delimiter in SPACED_DELIMITERS {
            text = text.replace(delimiter, " ");
        }
        for delimiter in DELETED_DELIMITERS {
            text = text.replace(delimiter, "");
        }

        let mut seen = HashSet::new();
        let mut tokens = Vec::new();
        for found in self.word.find_iter(&text) {
            let token = deunicode(found.as_str());
            if self.keeps(&token) && seen.insert(token.clone()) {
                tokens.push(token);
            }
        }
        tokens
    }

    fn keeps(&self, token: &str) -> bool {
        !starts_with_repeated_letter(token)
            && !token.starts_with(|c: char| c.is_ascii_digit())
            && !self.letters_then_digits.is_match(token)
            && !token.ends_with(FILE_EXTENSION_SUFFIX)
            && token.chars().count() > 2
            && !self.denylist.contains(token)
            && !is_html_tag_like(token)
    }
}

// Noise heuristic: a token opening with a doubled letter (aa, ll, ...)
// is garbage far more often than prose.
fn starts_with_repeated_letter(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => first == second && first.is_ascii_alphabetic(),
        _ => false,
    }
}

fn is_html_tag_like(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('/') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}
