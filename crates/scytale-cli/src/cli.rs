use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use scytale_core::VERSION;

/// Scytale - textbook Caesar, Columnar Transposition and Vigenère ciphers
#[derive(Parser)]
#[command(name = "scytale")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "SCYTALE_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt text
    Encrypt(TransformArgs),

    /// Decrypt text
    Decrypt(TransformArgs),

    /// Answer a JSON request ({"userInput", "key", "encryptFlag"})
    Request(RequestArgs),

    /// List the available cipher methods
    Methods,

    /// Validate a key and show its normalized form
    Key(KeyArgs),

    /// Print the Vigenère square
    Square,

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `encrypt` and `decrypt` commands
#[derive(Args)]
pub struct TransformArgs {
    /// Text to transform (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Cipher method (e.g. ceasar_cipher, columnar, vigenere)
    #[arg(short, long, value_name = "METHOD")]
    pub method: Option<String>,

    /// Cipher key
    #[arg(short, long, value_name = "KEY", allow_hyphen_values = true)]
    pub key: String,
}

/// Arguments for the `request` command
#[derive(Args)]
pub struct RequestArgs {
    /// Cipher method the request is addressed to
    #[arg(short, long, value_name = "METHOD")]
    pub method: Option<String>,

    /// Read the request body from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,
}

/// Arguments for the `key` command
#[derive(Args)]
pub struct KeyArgs {
    /// Raw key to validate
    #[arg(value_name = "KEY", allow_hyphen_values = true)]
    pub key: String,

    /// Cipher method whose rules apply
    #[arg(short, long, value_name = "METHOD")]
    pub method: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
