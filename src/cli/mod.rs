//! CLI command handlers
//!
//! Bridges clap argument parsing with the library API.

pub mod config;
pub mod seal;

pub use config::{handle_config_command, handle_init_command};
pub use seal::{handle_decrypt_command, handle_encrypt_command, DecryptArgs, EncryptArgs};
