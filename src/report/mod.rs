pub mod json;
pub mod text;

use crate::error::IqcheckError;
use crate::types::report::{CheckReport, VocabReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render_check(report: &CheckReport, format: OutputFormat) -> Result<String, IqcheckError> {
    match format {
        OutputFormat::Json => json::check_to_json(report).map_err(IqcheckError::Json),
        OutputFormat::Text => Ok(text::check_to_text(report)),
    }
}

pub fn render_vocab(report: &VocabReport, format: OutputFormat) -> Result<String, IqcheckError> {
    match format {
        OutputFormat::Json => json::vocab_to_json(report).map_err(IqcheckError::Json),
        OutputFormat::Text => Ok(text::vocab_to_text(report)),
    }
}
