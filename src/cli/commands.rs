// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze password strength (prompts when no password is given)
    Analyze {
        /// Password to analyze
        password: Option<String>,
    },

    /// Encrypt a message and decrypt it again
    Caesar {
        /// Shift value (prompted when omitted)
        #[arg(long, short, allow_negative_numbers = true)]
        shift: Option<i64>,

        /// Message to encrypt (prompted when omitted)
        message: Option<String>,
    },

    /// Encrypt a message with a Caesar shift
    Encrypt {
        /// Shift value
        #[arg(long, short, required = true, allow_negative_numbers = true)]
        shift: i64,

        /// Message to encrypt
        #[arg(required = true)]
        message: String,
    },

    /// Decrypt a message with a Caesar shift
    Decrypt {
        /// Shift value
        #[arg(long, short, required = true, allow_negative_numbers = true)]
        shift: i64,

        /// Message to decrypt
        #[arg(required = true)]
        message: String,
    },

    /// Interactive menu
    Menu,
}
