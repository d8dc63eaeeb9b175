//! Configuration file loading for learnpal
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `LEARNPAL_<SECTION>__<KEY>` (e.g. `LEARNPAL_SERVICE__ENDPOINT`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./learnpal.toml` or `./.learnpal.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/learnpal/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileReplConfig, FileServiceConfig,
};
pub use loader::ConfigLoader;
