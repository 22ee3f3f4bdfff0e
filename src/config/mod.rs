//! This module holds the immutable configuration the terminal is built from.
//!
//! The profile content (who the terminal presents) and the timing of the
//! scripted transitions are loaded once at startup and handed to the engine.
mod error;
mod profile;
mod timing;

pub use error::ConfigError;
pub use profile::ProfileConfig;
pub use timing::TimingConfig;
