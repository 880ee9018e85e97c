// src/cli/menu.rs
use console::style;
use inquire::{CustomType, InquireError, Password, Select, Text};
use std::io::{self, Write};

use super::handlers::write_analysis_with;
use super::{CliError, Result};
use crate::analyzer::{PasswordAnalysis, PasswordAnalyzer, Strength};
use crate::cipher::CaesarCipher;
use crate::core::Config;
use crate::utils::truncate_bytes;

const ANALYZE: &str = "🔐  Analyze a password";
const ENCRYPT: &str = "🔒  Encrypt a message";
const DECRYPT: &str = "🔓  Decrypt a message";
const EXIT: &str = "❌  Exit";

fn styled_strength(strength: Strength) -> String {
    match strength {
        Strength::Weak => style(strength).red().bold().to_string(),
        Strength::Medium => style(strength).yellow().bold().to_string(),
        Strength::Strong => style(strength).green().bold().to_string(),
    }
}

fn print_analysis<W: Write>(out: &mut W, analysis: &PasswordAnalysis) -> Result<()> {
    write_analysis_with(out, analysis, styled_strength(analysis.strength))
}

fn prompt_shift() -> std::result::Result<i64, InquireError> {
    CustomType::<i64>::new("Shift value:")
        .with_default(3)
        .with_error_message("Please enter a whole number")
        .with_help_message("Any integer; it is reduced modulo 26")
        .prompt()
}

fn prompt_message(config: &Config) -> std::result::Result<String, InquireError> {
    let message = Text::new("Message:").prompt()?;
    Ok(truncate_bytes(&message, config.max_message_length).0.to_string())
}

// Esc and Ctrl+C leave the menu instead of surfacing as errors
fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn run_selection(selection: &str, config: &Config) -> Result<()> {
    match selection {
        ANALYZE => {
            let password = Password::new("Enter your password:")
                .with_display_mode(inquire::PasswordDisplayMode::Masked)
                .without_confirmation()
                .prompt()?;
            let password = truncate_bytes(&password, config.max_password_length).0;
            let analysis = PasswordAnalyzer::new().analyze(password);
            print_analysis(&mut io::stdout().lock(), &analysis)?;
        }
        ENCRYPT => {
            let message = prompt_message(config)?;
            let cipher = CaesarCipher::new(prompt_shift()?);
            println!("Encrypted message: {}", style(cipher.encrypt(&message)).cyan());
        }
        DECRYPT => {
            let message = prompt_message(config)?;
            let cipher = CaesarCipher::new(prompt_shift()?);
            println!("Decrypted message: {}", style(cipher.decrypt(&message)).cyan());
        }
        _ => {}
    }
    Ok(())
}

pub fn run_cli_menu(config: &Config) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 CYBERKIT TOOLBOX          ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let options = vec![ANALYZE, ENCRYPT, DECRYPT, EXIT];

        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable()
        {
            Ok(Some(EXIT)) | Ok(None) => break,
            Ok(Some(selection)) => selection,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        log::debug!("Menu selection: {}", selection);

        match run_selection(selection, config) {
            Ok(()) => println!(),
            Err(CliError::Prompt(e)) if is_cancel(&e) => {
                println!("{}", style("Cancelled").dim());
            }
            Err(e) => return Err(e),
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
