use crate::error::{IqcheckError, Result};
use crate::matching::Matcher;
use crate::types::report::ScoreReport;
use std::collections::BTreeSet;

/// Runs the matcher over every distinct identifier and folds the
/// verdicts into a coverage report. Zero identifiers is the distinct
/// "no identifiers to check" condition, never a division failure.
pub fn score(matcher: &Matcher<'_>, identifiers: &BTreeSet<String>) -> Result<ScoreReport> {
    if identifiers.is_empty() {
        return Err(IqcheckError::EmptyProgram);
    }

    let negative_identifiers: Vec<String> = identifiers
        .iter()
        .filter(|identifier| !matcher.is_from_problem(identifier))
        .cloned()
        .collect();

    let total = identifiers.len();
    let matched = total - negative_identifiers.len();
    let ratio = round_ratio(matched as f64 / total as f64);

    Ok(ScoreReport {
        total_identifiers: total,
        negative_identifiers,
        ratio,
    })
}

fn round_ratio(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
