//! Common infrastructure shared by the fuzzyheat binary and the TUI:
//! logging setup, configuration loading, translation lookup.

pub mod config;
pub mod errors;
pub mod format;
pub mod i18n;
pub mod logging;

pub use config::{AppConfig, FunctionConfig, VariableConfig};
pub use errors::{ConfigError, ConfigResult};
pub use format::format_membership;
pub use i18n::Translator;
pub use logging::{init_logging, LoggingConfig};
