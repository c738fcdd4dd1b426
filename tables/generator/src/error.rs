// Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating the lookup tables
#[derive(Error, Debug)]
pub enum TablesError {
    /// The input header could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The generated source could not be written
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Too many AFBC bitmask symbols to enumerate every combination
    #[error("{count} AFBC bitmask symbols found, at most {max} are supported")]
    TooManyBitmaskSymbols { count: usize, max: usize },
}

/// Result type for table generation
pub type TablesResult<T> = std::result::Result<T, TablesError>;
