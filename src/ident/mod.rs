pub mod extract;

/// Lexical style of a composite identifier. Classification is purely
/// structural and first-match-wins in the order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingConvention {
    Underscored,
    PrepositionalCompound,
    CamelCase,
    Simple,
}

// Connective fragments seen in "x_de_y" / "x_of_y" style identifiers.
const PREPOSITIONS: &[&str] = &["de", "da", "do", "das", "dos", "of", "for"];

impl NamingConvention {
    /// All-uppercase constants carry no structural hint, so they fall
    /// through to `Simple` and match on their lowercase form.
    pub fn classify(identifier: &str) -> NamingConvention {
        if identifier.contains('_') {
            let prepositional = identifier
                .split('_')
                .any(|segment| PREPOSITIONS.contains(&segment.to_lowercase().as_str()));
            if prepositional {
                NamingConvention::PrepositionalCompound
            } else {
                NamingConvention::Underscored
            }
        } else if identifier != identifier.to_lowercase()
            && identifier != identifier.to_uppercase()
        {
            NamingConvention::CamelCase
        } else {
            NamingConvention::Simple
        }
    }
}

/// Splits an identifier into lowercase fragments under its convention.
/// Empty and single-character fragments are discarded; prepositional
/// connectives are dropped from compounds.
pub fn decompose(identifier: &str, convention: NamingConvention) -> Vec<String> {
    match convention {
        NamingConvention::Simple => vec![identifier.to_lowercase()],
        NamingConvention::Underscored => split_underscored(&identifier.to_lowercase()),
        NamingConvention::PrepositionalCompound => {
            split_underscored(&identifier.to_lowercase())
                .into_iter()
                .filter(|fragment| !PREPOSITIONS.contains(&fragment.as_str()))
                .collect()
        }
        NamingConvention::CamelCase => split_underscored(&camel_to_snake(identifier).to_lowercase()),
    }
}

fn split_underscored(identifier: &str) -> Vec<String> {
    identifier
        .split('_')
        .filter(|fragment| fragment.chars().count() > 1)
        .map(|fragment| fragment.to_string())
        .collect()
}

// Boundary before an uppercase letter that is followed by lowercase, and
// before an uppercase letter preceded by lowercase-or-digit. This keeps
// acronym runs together: HTTPServer -> http server.
fn camel_to_snake(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut out = String::with_capacity(identifier.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && ch.is_uppercase() {
            let prev = chars[i - 1];
            let followed_by_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || followed_by_lower {
                out.push('_');
            }
        }
        out.push(ch);
    }
    out
}
