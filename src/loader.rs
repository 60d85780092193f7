//! Loading env source files, including chained files.
//!
//! [`load`] reads one file line by line and accumulates entries into an
//! [`Env`]. A line whose key is [`LOAD_KEY`] names another env file, which is
//! loaded recursively with the same overwrite flag and merged into the
//! accumulator. Relative inclusion targets resolve against the process
//! working directory.
//!
//! Within a single file, a later assignment to a key always replaces an
//! earlier one; the overwrite flag governs only what happens when a chained
//! file's entries meet keys that already exist in the accumulator.

use crate::env::Env;
use crate::error::EnvError;
use crate::parser::{classify, Line};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reserved key that chains another env source file.
///
/// The value is treated as a path to load recursively. The entry is also
/// stored verbatim, so the sentinel remains a visible key in the result.
pub const LOAD_KEY: &str = "__ENV_LOAD";

/// Load environment variables from the env file at `path`.
///
/// `overwrite` controls merge behavior for chained files: when a key from a
/// chained file already exists in the accumulated store, it replaces the
/// existing value only if `overwrite` is true.
///
/// Returns an error if `path` (or any chained file) cannot be read, or if
/// the inclusion chain revisits a file it is already loading.
pub fn load(path: impl AsRef<Path>, overwrite: bool) -> Result<Env, EnvError> {
    let mut loading = HashSet::new();
    load_chain(path.as_ref(), overwrite, &mut loading)
}

/// Recursive worker. `loading` holds the canonical paths of files on the
/// active inclusion chain; re-entering one of them is a cycle. A file may
/// still appear twice along independent branches of the chain.
fn load_chain(
    path: &Path,
    overwrite: bool,
    loading: &mut HashSet<PathBuf>,
) -> Result<Env, EnvError> {
    // Canonicalize for cycle tracking only; a nonexistent file falls through
    // to the read below, which reports the I/O error with the caller's path.
    let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !loading.insert(canonical.clone()) {
        return Err(EnvError::IncludeCycle {
            path: path.to_path_buf(),
        });
    }

    let result = load_file(path, overwrite, loading);
    loading.remove(&canonical);
    result
}

fn load_file(
    path: &Path,
    overwrite: bool,
    loading: &mut HashSet<PathBuf>,
) -> Result<Env, EnvError> {
    let contents = fs::read_to_string(path).map_err(|source| EnvError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let env = Env::new();
    for line in contents.lines() {
        match classify(line) {
            Line::Blank | Line::Comment => continue,
            Line::Skip => {
                debug!(line, "skipping malformed line");
            }
            Line::Entry { key, value } => {
                if key == LOAD_KEY {
                    debug!(source = value, "loading chained env file");
                    let sub = load_chain(Path::new(value), overwrite, loading)?;
                    env.merge(&sub, overwrite);
                }
                // Direct assignment always wins within the same file, and
                // keeps the sentinel key itself visible in the result.
                env.set(key, value);
            }
        }
    }

    Ok(env)
}
