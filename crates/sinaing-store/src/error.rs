//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the log path and the operation        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in console app) ← "Unable to open file for writing."        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The log could not be opened (permissions, missing directory).
    #[error("Unable to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending a record failed part-way.
    #[error("Unable to write to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the log failed while scanning.
    #[error("Unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be turned into JSON.
    #[error("Unable to encode customer record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            StoreError::Open { path, .. }
            | StoreError::Write { path, .. }
            | StoreError::Read { path, .. } => Some(path),
            StoreError::Encode(_) => None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
