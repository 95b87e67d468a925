//! Shared utilities
//!
//! Logging setup and environment-driven configuration used by the binaries
//! of this workspace.

pub mod config;
pub mod logging;

pub use config::{Config, LogFormat, load_dotenv};
pub use logging::init_tracing_with;
