//! Configuration CLI commands

use tracing::info;

use crate::config::{paths::SealPaths, settings::Settings};
use crate::crypto::{NONCE_LEN, PBKDF2_ITERATIONS, SALT_LEN, TAG_LEN};
use crate::error::SealResult;

/// Handle `textseal config`: show paths, settings and the fixed cipher suite
pub fn handle_config_command(paths: &SealPaths, settings: &Settings) -> SealResult<()> {
    println!("textseal Configuration");
    println!("======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!(
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" }
    );
    println!();
    println!("Settings:");
    println!("  Log level:          {}", settings.log_level);
    println!("  Log format:         {:?}", settings.log_format);
    println!("  Min password chars: {}", settings.password_policy.min_length);
    println!();
    println!("Cipher suite:");
    println!("  Key derivation: PBKDF2-HMAC-SHA-256, {} iterations", PBKDF2_ITERATIONS);
    println!("  Cipher:         AES-256-GCM");
    println!("  Salt:           {} bytes", SALT_LEN);
    println!("  Nonce:          {} bytes", NONCE_LEN);
    println!("  Tag:            {} bytes", TAG_LEN);

    Ok(())
}

/// Handle `textseal init`: write the settings file
pub fn handle_init_command(paths: &SealPaths, settings: &Settings) -> SealResult<()> {
    if paths.is_initialized() {
        println!("Settings file already exists: {}", paths.settings_file().display());
        return Ok(());
    }

    settings.save(paths)?;
    info!(path = %paths.settings_file().display(), "wrote settings file");

    println!("Wrote settings to {}", paths.settings_file().display());
    Ok(())
}
