use crate::types::report::{CheckReport, VocabReport};

pub fn check_to_text(report: &CheckReport) -> String {
    let mut output = String::new();
    output.push_str("# Identifier Check\n\n");
    output.push_str(&format!("statement language: {}\n", report.language));
    output.push_str(&format!("statement digest: {}\n", report.statement_digest));
    output.push_str(&format!("vocabulary terms: {}\n", report.vocabulary_size));
    output.push_str(&format!("matching policy: {}\n", report.policy));

    for program in &report.programs {
        output.push_str(&format!("\n## {}\n\n", program.path));
        output.push_str(&format!(
            "identifiers: {} ({} from problem)\ncoverage: {:.2}\n",
            program.score.total_identifiers,
            program.score.positive_count(),
            program.score.ratio
        ));
        if program.score.negative_identifiers.is_empty() {
            output.push_str("not from problem: none\n");
        } else {
            output.push_str("not from problem:\n");
            for identifier in &program.score.negative_identifiers {
                output.push_str(&format!("- {identifier}\n"));
            }
        }
    }

    output
}

pub fn vocab_to_text(report: &VocabReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "language: {}\nterms: {}\n",
        report.language,
        report.terms.len()
    ));
    for term in &report.terms {
        output.push_str(&format!("- {term}\n"));
    }
    output
}
