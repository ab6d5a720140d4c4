//! Error types for the LinkML Browser library.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for browser generation.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema inference was asked to work on zero records.
    #[error("Cannot infer schema from empty data")]
    EmptyInput,

    /// Input content does not have the expected shape.
    #[error("Invalid format in '{path}': {message}")]
    InvalidFormat { path: PathBuf, message: String },

    /// Output directory exists and overwriting was not requested.
    #[error("Output directory '{0}' already exists. Use force to overwrite.")]
    OutputExists(PathBuf),

    /// One or more gallery artifacts are missing or malformed.
    #[error("{}", IssueReport(.0))]
    GalleryCheck(Vec<ArtifactIssue>),

    /// A LinkML schema references something that cannot be resolved.
    #[error("LinkML error: {0}")]
    Linkml(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl BrowserError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BrowserError::Io {
            path: path.into(),
            source,
        }
    }

    /// Build an [`BrowserError::InvalidFormat`] for a path.
    pub fn invalid_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        BrowserError::InvalidFormat {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A single problem found while checking a gallery folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactIssue {
    /// The artifact file does not exist.
    Missing { artifact: String, path: PathBuf },
    /// The artifact exists but its payload could not be read as expected.
    Malformed { artifact: String, message: String },
}

impl fmt::Display for ArtifactIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactIssue::Missing { artifact, path } => {
                write!(f, "Missing {} at {}", artifact, path.display())
            }
            ArtifactIssue::Malformed { artifact, message } => {
                write!(f, "{} error: {}", artifact, message)
            }
        }
    }
}

/// One issue per line.
struct IssueReport<'a>(&'a [ArtifactIssue]);

impl fmt::Display for IssueReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Result type alias for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
