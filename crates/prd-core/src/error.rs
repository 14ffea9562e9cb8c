use thiserror::Error;

/// First invariant a document fails, in the order `Document::validate` checks them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("at least one entry required: {0}")]
    EmptyCollection(&'static str),

    #[error("invalid status: {0}")]
    InvalidStatus(String),
}

impl ValidationError {
    /// Dotted path of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField(f) | ValidationError::EmptyCollection(f) => f,
            ValidationError::InvalidStatus(_) => "status",
        }
    }
}

#[derive(Debug, Error)]
pub enum PrdError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("template '{0}' not found. Available: basic, feature, epic")]
    TemplateNotFound(String),

    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("unsupported export format: {0} (expected markdown or html)")]
    UnsupportedFormat(String),
}

impl PrdError {
    pub fn is_parse(&self) -> bool {
        matches!(self, PrdError::Parse(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, PrdError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, PrdError>;
