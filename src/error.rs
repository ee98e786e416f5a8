use thiserror::Error;

#[derive(Error, Debug)]
pub enum IqcheckError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("statement is missing its text field: {0}")]
    MalformedStatement(String),

    #[error("unsupported statement language: {0}")]
    UnsupportedLanguage(String),

    #[error("no identifiers to check")]
    EmptyProgram,

    #[error("no program files found: {0}")]
    NoPrograms(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("source parse error: {0}")]
    SourceParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IqcheckError>;
