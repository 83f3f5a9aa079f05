//! Configuration file loading for slap-the-world
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment: `SLAPWORLD_<SECTION>__<KEY>`
//! 3. Project root: `./slapworld.toml` or `./.slapworld.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/slap-the-world/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_DATA_BASE, FileConfig, FileDataConfig, FileGameConfig,
    FileRenderConfig,
};
pub use loader::ConfigLoader;
