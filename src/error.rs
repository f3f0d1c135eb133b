// src/error.rs
use thiserror::Error;

use crate::value_objects::ParseMode;

/// Root error type for the crate.
#[derive(Debug, Error)]
pub enum KernelVersionError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<KernelVersionError>,
    },

    #[error(transparent)]
    Parse(#[from] VersionParseError),
}

pub type Result<T> = std::result::Result<T, KernelVersionError>;

/// Failure to read a version out of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("invalid version: {input}")]
    InvalidFormat { input: String, mode: ParseMode },
}

impl VersionParseError {
    pub fn invalid_format(input: impl Into<String>, mode: ParseMode) -> Self {
        Self::InvalidFormat { input: input.into(), mode }
    }

    /// The text that was rejected.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. } => input,
        }
    }
}

pub type ParseResult<T> = std::result::Result<T, VersionParseError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<KernelVersionError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| KernelVersionError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| KernelVersionError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
