use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::warn;

use textseal::cli::{
    handle_config_command, handle_decrypt_command, handle_encrypt_command, handle_init_command,
    DecryptArgs, EncryptArgs,
};
use textseal::config::{paths::SealPaths, settings::Settings};
use textseal::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "textseal",
    version,
    about = "Password-based authenticated encryption for short text",
    long_about = "textseal encrypts text under a password with AES-256-GCM \
                  (PBKDF2-HMAC-SHA-256 key derivation) and prints a single \
                  salt.nonce.ciphertext string that decrypts with the same password."
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a password
    #[command(alias = "enc")]
    Encrypt(EncryptArgs),

    /// Decrypt sealed text with a password
    #[command(alias = "dec")]
    Decrypt(DecryptArgs),

    /// Show current configuration and paths
    Config,

    /// Write the default settings file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SealPaths::new();
    let loaded = paths
        .as_ref()
        .map_err(|e| e.to_string())
        .and_then(|paths| Settings::load_or_create(paths).map_err(|e| e.to_string()));
    let (settings, load_error) = match loaded {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    init_logging(&settings, cli.verbose)?;

    // Encrypt/decrypt need no configuration; run them on defaults
    if let Some(e) = load_error {
        warn!(error = %e, "using default settings");
    }

    match cli.command {
        Commands::Encrypt(args) => handle_encrypt_command(&settings, args)?,
        Commands::Decrypt(args) => handle_decrypt_command(args)?,
        Commands::Config => handle_config_command(&paths?, &settings)?,
        Commands::Init => handle_init_command(&paths?, &settings)?,
    }

    Ok(())
}
