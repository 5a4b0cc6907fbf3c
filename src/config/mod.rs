//! Configuration module for textseal
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SealPaths;
pub use settings::{LogFormat, PasswordPolicy, Settings};
