//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ImportError {
    IoError(std::io::Error),
    InputMalformedError(String),
    BadIntError(std::num::ParseIntError),
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> ImportError {
        ImportError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for ImportError {
    fn from(e: std::num::ParseIntError) -> ImportError {
        ImportError::BadIntError(e)
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "Import: IoError: {}", e),
            Self::InputMalformedError(msg) => write!(f, "Import: Input is malformed: {}", msg),
            Self::BadIntError(e) => write!(f, "Import: Integer is malformed: {}", e),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            Self::BadIntError(e) => Some(e),
            Self::InputMalformedError(_) => None,
        }
    }
}

#[derive(Debug)]
pub enum ProcessingError {
    InvalidParameter(String),
    /// A returned set does not dominate the graph.
    InvalidSolution(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Self::InvalidSolution(msg) => write!(f, "InvalidSolution: {}", msg),
        }
    }
}

impl Error for ProcessingError {}

#[derive(Debug)]
pub enum BatchError {
    /// The path does not exist or is not a directory.
    InvalidDirectory(PathBuf),
    Import { file: PathBuf, source: ImportError },
    Processing { file: PathBuf, source: ProcessingError },
    IoError(std::io::Error),
}

impl From<std::io::Error> for BatchError {
    fn from(e: std::io::Error) -> BatchError {
        BatchError::IoError(e)
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirectory(path) => write!(f, "{} doesn't exist", path.display()),
            Self::Import { file, source } => write!(f, "{}: {}", file.display(), source),
            Self::Processing { file, source } => write!(f, "{}: {}", file.display(), source),
            Self::IoError(e) => write!(f, "Batch: IoError: {}", e),
        }
    }
}

impl Error for BatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Import { source, .. } => Some(source),
            Self::Processing { source, .. } => Some(source),
            Self::IoError(e) => Some(e),
            Self::InvalidDirectory(_) => None,
        }
    }
}
