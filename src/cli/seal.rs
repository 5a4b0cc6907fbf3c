//! Encrypt/decrypt CLI commands
//!
//! Thin glue over [`SealCodec`]: resolve the password, call the codec,
//! print the result on stdout.

use clap::Args;
use tracing::debug;

use crate::codec::SealCodec;
use crate::config::settings::Settings;
use crate::crypto::SecureString;
use crate::error::{SealError, SealResult};

/// Arguments for `textseal encrypt`
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Text to encrypt
    pub text: String,

    /// Password to encrypt with
    #[arg(required_unless_present = "ask_password")]
    pub password: Option<String>,

    /// Prompt for the password instead of taking it as an argument
    #[arg(short = 'p', long, conflicts_with = "password")]
    pub ask_password: bool,
}

/// Arguments for `textseal decrypt`
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Sealed text produced by `textseal encrypt`
    pub sealed: String,

    /// Password the text was encrypted with
    #[arg(required_unless_present = "ask_password")]
    pub password: Option<String>,

    /// Prompt for the password instead of taking it as an argument
    #[arg(short = 'p', long, conflicts_with = "password")]
    pub ask_password: bool,
}

/// Handle `textseal encrypt`
pub fn handle_encrypt_command(settings: &Settings, args: EncryptArgs) -> SealResult<()> {
    let password = match args.password {
        Some(password) => SecureString::from(password),
        None => prompt_new_password(settings)?,
    };
    settings.password_policy.check(&password)?;

    let sealed = SealCodec::new().encrypt(&args.text, &password)?;
    debug!(sealed_len = sealed.len(), "encrypt command finished");

    println!("{}", sealed);
    Ok(())
}

/// Handle `textseal decrypt`
pub fn handle_decrypt_command(args: DecryptArgs) -> SealResult<()> {
    let password = match args.password {
        Some(password) => SecureString::from(password),
        None => prompt_password("Password: ")?,
    };

    let plaintext = SecureString::from(SealCodec::new().decrypt(args.sealed.trim(), &password)?);
    debug!("decrypt command finished");

    println!("{}", plaintext.as_str());
    Ok(())
}

/// Prompt for a new password with confirmation
fn prompt_new_password(settings: &Settings) -> SealResult<SecureString> {
    let first = prompt_password("Password: ")?;
    settings.password_policy.check(&first)?;

    let second = prompt_password("Confirm password: ")?;
    if first != second {
        return Err(SealError::invalid_parameter("Passwords do not match"));
    }

    Ok(first)
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> SealResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| SealError::Io(format!("Failed to read password: {}", e)))
}
