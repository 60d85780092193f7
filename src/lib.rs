//! Envlink: Chained .env File Loading
//!
//! Loads key-value pairs from ".env"-style source files into an [`Env`]
//! store that is safe for concurrent access from multiple threads. Source
//! files can chain other files through the reserved [`loader::LOAD_KEY`]
//! entry, with a caller-controlled policy for whether chained values
//! overwrite existing ones. The host process environment is never read or
//! written.
//!
//! ```no_run
//! let env = envlink::load(".env", false)?;
//! let missing = env.check_required(&["API_KEY", "DB_URL"]);
//! # Ok::<(), envlink::EnvError>(())
//! ```

pub mod cli;
pub mod env;
pub mod error;
pub mod loader;
pub mod logging;
pub mod parser;

pub use env::Env;
pub use error::EnvError;
pub use loader::{load, LOAD_KEY};
