use thiserror::Error;

#[derive(Error, Debug)]
pub enum LdgenError {
    #[error("Invalid @context: {0}")]
    InvalidContext(String),

    #[error("Invalid @graph: {0}")]
    InvalidGraph(String),

    #[error("Invalid graph entity: {0}")]
    InvalidEntity(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),
}

impl LdgenError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LdgenError::InvalidContext(_) => Some(
                "JSON-LD documents must declare \"@context\": \"https://schema.org\""
            ),
            LdgenError::InvalidGraph(_) => Some(
                "Wrap entities in a \"@graph\" array, or regenerate with:\n  ldgen generate <file>"
            ),
            LdgenError::InvalidEntity(_) => Some(
                "Every @graph member must be an object with a string \"@type\""
            ),
            LdgenError::UrlParseError(_) => Some(
                "Page URLs must be absolute, e.g. --url https://example.com/page"
            ),
            LdgenError::ConfigError(_) | LdgenError::TomlError(_) => Some(
                "Check ~/.config/ldgen/config.toml, or point LDGEN_CONFIG at another file"
            ),
            LdgenError::InputError(_) => Some(
                "Pass a file path, or pipe content on stdin:\n  cat page.md | ldgen detect"
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LdgenError>;
