use crate::types::report::{CheckReport, VocabReport};

pub fn check_to_json(report: &CheckReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn vocab_to_json(report: &VocabReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
