use crate::error::{IqcheckError, Result};
use crate::matching::MatchPolicy;
use crate::text::language::Language;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IqcheckConfig {
    pub matching: Option<MatchingConfig>,
    pub language: Option<LanguageConfig>,
    pub normalizer: Option<NormalizerConfig>,
    pub thresholds: Option<ThresholdsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    pub policy: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    /// Forces the statement language instead of detecting it.
    pub statement: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub denylist: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    pub min_coverage: Option<f64>,
}

impl IqcheckConfig {
    pub fn policy(&self) -> Result<MatchPolicy> {
        match self.matching.as_ref().and_then(|m| m.policy.as_deref()) {
            Some(name) => MatchPolicy::from_name(name),
            None => Ok(MatchPolicy::default()),
        }
    }

    pub fn statement_language(&self) -> Result<Option<Language>> {
        self.language
            .as_ref()
            .and_then(|l| l.statement.as_deref())
            .map(Language::from_name)
            .transpose()
    }

    pub fn denylist(&self) -> &[String] {
        self.normalizer
            .as_ref()
            .map(|n| n.denylist.as_slice())
            .unwrap_or(&[])
    }

    /// Coverage below this warns on `check`; 0.0 disables the gate.
    pub fn min_coverage(&self) -> f64 {
        self.thresholds
            .as_ref()
            .and_then(|t| t.min_coverage)
            .unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<()> {
        self.policy()?;
        self.statement_language()?;

        if let Some(min_coverage) = self.thresholds.as_ref().and_then(|t| t.min_coverage) {
            if !(0.0..=1.0).contains(&min_coverage) {
                return Err(IqcheckError::ConfigParse(
                    "thresholds.min_coverage must be between 0.0 and 1.0".to_string(),
                ));
            }
        }

        if self.denylist().iter().any(|word| word.trim().is_empty()) {
            return Err(IqcheckError::ConfigParse(
                "normalizer.denylist entries must be non-empty words".to_string(),
            ));
        }

        Ok(())
    }
}
