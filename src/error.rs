//! Error types for envlink loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a load.
///
/// Malformed lines never produce an error; they are skipped during parsing.
/// The only terminal conditions are whole-file I/O failure and an inclusion
/// cycle, both of which abort the entire load chain.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Failed to read env file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Inclusion cycle detected: {path} is already being loaded")]
    IncludeCycle { path: PathBuf },
}
