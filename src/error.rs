//! Error types with fix suggestions

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Which file a read failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Cert,
    Key,
    Binding,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Cert => write!(f, "certificate"),
            InputKind::Key => write!(f, "private key"),
            InputKind::Binding => write!(f, "binding"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CertBindError {
    #[error("Hostname must not be empty")]
    EmptyHost,

    #[error("Cannot read {kind} file '{}': {source}", .path.display())]
    ReadInput {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output file '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid binding file '{}': {source}", .path.display())]
    InvalidBinding {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FixSuggestion for CertBindError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            CertBindError::EmptyHost => Some("Pass the hostname with --host <HOST>"),
            CertBindError::ReadInput { .. } => Some("Check file path and permissions"),
            CertBindError::WriteOutput { .. } => {
                Some("Check that the output directory exists and is writable")
            }
            CertBindError::Encode(_) => None,
            CertBindError::InvalidBinding { .. } => {
                Some("Expected a JSON object with exactly the string fields host, cert and key")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CertBindError>;
