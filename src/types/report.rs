use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-program outcome of the scorer: the identifiers judged not to come
/// from the problem, and the coverage ratio rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub total_identifiers: usize,
    pub negative_identifiers: Vec<String>,
    pub ratio: f64,
}

impl ScoreReport {
    pub fn positive_count(&self) -> usize {
        self.total_identifiers - self.negative_identifiers.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramReport {
    pub path: String,
    #[serde(flatten)]
    pub score: ScoreReport,
}

/// Full output of one `check` invocation, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub generated_at: DateTime<Utc>,
    pub statement_digest: String,
    pub language: String,
    pub vocabulary_size: usize,
    pub policy: String,
    pub programs: Vec<ProgramReport>,
}

/// Output of the `vocab` subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct VocabReport {
    pub statement_digest: String,
    pub language: String,
    pub terms: Vec<String>,
}
