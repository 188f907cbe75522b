//! Configuration file loading for oneword
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ONEWORD_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./oneword.toml` or `./.oneword.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/oneword/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
