use crate::error::{IqcheckError, Result};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Raw problem-statement text, immutable input of a grading run.
///
/// Statement documents are mappings with at least a `text` field;
/// anything else in the document is ignored. Files with no structured
/// extension are read as plain text.
#[derive(Debug, Clone, Deserialize)]
pub struct Statement {
    pub text: String,
}

impl Statement {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load(path: &Path) -> Result<Statement> {
        if !path.exists() {
            return Err(IqcheckError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match extension {
            "json" => {
                let document: serde_json::Value = serde_json::from_str(&content)?;
                text_field(document.get("text").and_then(|v| v.as_str()), path)
            }
            "toml" => {
                let document: toml::Value = toml::from_str(&content)?;
                text_field(document.get("text").and_then(|v| v.as_str()), path)
            }
            _ => Ok(Statement::from_text(content)),
        }
    }

    /// SHA-256 of the raw text, so reports from the same problem
    /// revision can be correlated.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

fn text_field(value: Option<&str>, path: &Path) -> Result<Statement> {
    value
        .map(Statement::from_text)
        .ok_or_else(|| IqcheckError::MalformedStatement(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_reads_text_field_from_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("problem.json");
        fs::write(&path, r#"{"text": "Calcule a soma.", "title": "soma"}"#)
            .expect("statement should write");

        let statement = Statement::load(&path).expect("statement should load");
        assert_eq!(statement.text, "Calcule a soma.");
    }

    #[test]
    fn load_reads_text_field_from_toml() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("problem.toml");
        fs::write(&path, "text = \"Calcule a soma.\"\n").expect("statement should write");

        let statement = Statement::load(&path).expect("statement should load");
        assert_eq!(statement.text, "Calcule a soma.");
    }

    #[test]
    fn load_fails_fast_when_text_field_is_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("problem.json");
        fs::write(&path, r#"{"title": "soma"}"#).expect("statement should write");

        let err = Statement::load(&path).expect_err("missing text should fail");
        assert!(err.to_string().contains("missing its text field"));
    }

    #[test]
    fn load_treats_other_extensions_as_plain_text() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("problem.md");
        fs::write(&path, "Calcule a soma de dois numeros.").expect("statement should write");

        let statement = Statement::load(&path).expect("statement should load");
        assert!(statement.text.starts_with("Calcule"));
    }

    #[test]
    fn digest_is_stable_per_text() {
        let a = Statement::from_text("Calcule a soma.");
        let b = Statement::from_text("Calcule a soma.");
        let c = Statement::from_text("Imprima o resultado.");
        assert_eq!(a.digest(), b.digest());
        assert_ne!(a.digest(), c.digest());
    }
}
