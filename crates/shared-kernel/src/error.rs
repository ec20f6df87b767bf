// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum OrdStatsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<OrdStatsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl OrdStatsError {
    /// Innermost error once every `Context` layer is peeled off.
    pub fn root(&self) -> &OrdStatsError {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn is_file_not_found(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::FileNotFound { .. }))
    }

    pub fn is_malformed_row(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::MalformedRow { .. }))
    }

    pub fn is_insufficient_input(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::InsufficientInput { .. }))
    }
}

pub type Result<T> = std::result::Result<T, OrdStatsError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("At least 2 statistics sets are required for a comparison, got {provided}")]
    InsufficientInput { provided: usize },

    #[error("Label count {labels} does not match statistics set count {sets}")]
    LabelMismatch { sets: usize, labels: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to merge input files: {reason}")]
    MergeFailed {
        reason: String,
        #[source]
        source: Option<Box<OrdStatsError>>,
    },

    #[error("Failed to load transactions: {reason}")]
    LoadFailed {
        reason: String,
        #[source]
        source: Option<Box<OrdStatsError>>,
    },

    #[error("Failed to write report: {reason}")]
    ReportFailed {
        reason: String,
        #[source]
        source: Option<Box<OrdStatsError>>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Input file does not exist: '{path}'")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed statistics row in '{path}' at line {line}: {reason}")]
    MalformedStatRow { path: PathBuf, line: u64, reason: String },

    #[error("Failed to encode {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Invalid input pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for OrdStatsError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<OrdStatsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| OrdStatsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| OrdStatsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
