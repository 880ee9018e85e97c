// src/cli/handlers.rs
use serde::Serialize;
use std::fmt::Display;
use std::io::{BufRead, Write};

use super::{OutputFormat, Result};
use crate::analyzer::{PasswordAnalysis, PasswordAnalyzer};
use crate::core::Config;
use crate::models::{CipherReport, Direction, TransformReport};
use crate::utils::{self, yes_no};

pub const PASSWORD_PROMPT: &str = "Enter your password: ";
pub const MESSAGE_PROMPT: &str = "Enter the message: ";
pub const SHIFT_PROMPT: &str = "Enter the shift value: ";

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

// Write `text` and terminate the line unless it already ends with one
fn write_line_terminated<W: Write>(out: &mut W, label: &str, text: &str) -> Result<()> {
    write!(out, "{}{}", label, text)?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_analysis<W: Write>(out: &mut W, analysis: &PasswordAnalysis) -> Result<()> {
    write_analysis_with(out, analysis, analysis.strength)
}

/// Write the analysis block with a caller-rendered verdict label.
pub fn write_analysis_with<W: Write, D: Display>(
    out: &mut W,
    analysis: &PasswordAnalysis,
    strength: D,
) -> Result<()> {
    writeln!(out, "Password Analysis:")?;
    writeln!(out, "Length: {}", analysis.length)?;
    writeln!(out, "Contains Uppercase: {}", yes_no(analysis.has_uppercase()))?;
    writeln!(out, "Contains Lowercase: {}", yes_no(analysis.has_lowercase()))?;
    writeln!(out, "Contains Digit: {}", yes_no(analysis.has_digit()))?;
    writeln!(out, "Contains Special Character: {}", yes_no(analysis.has_special()))?;
    writeln!(out, "Password Strength: {}", strength)?;
    Ok(())
}

pub fn write_cipher_report<W: Write>(out: &mut W, report: &CipherReport) -> Result<()> {
    write_line_terminated(out, "Encrypted message: ", &report.encrypted)?;
    write_line_terminated(out, "Decrypted message: ", &report.decrypted)?;
    Ok(())
}

/// Analyze `password`, or prompt for one on `input` when it is `None`.
pub fn handle_analyze<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &Config,
    format: OutputFormat,
    password: Option<&str>,
) -> Result<PasswordAnalysis> {
    let password = match password {
        Some(password) => utils::truncate_bytes(password, config.max_password_length).0.to_string(),
        None => {
            if format == OutputFormat::Text {
                utils::prompt(out, PASSWORD_PROMPT)?;
            }
            utils::read_token(input, config.max_password_length)?
        }
    };

    let analysis = PasswordAnalyzer::new().analyze(&password);
    log::info!("Password analysis complete: {}", analysis.strength);

    match format {
        OutputFormat::Text => write_analysis(out, &analysis)?,
        OutputFormat::Json => write_json(out, &analysis)?,
    }

    Ok(analysis)
}

/// The `password-check` flow: prompt, read one token, print the analysis.
pub fn handle_password_check<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &Config,
) -> Result<PasswordAnalysis> {
    handle_analyze(input, out, config, OutputFormat::Text, None)
}

/// Encrypt then decrypt a message, prompting for whatever wasn't supplied.
pub fn handle_caesar<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &Config,
    format: OutputFormat,
    shift: Option<i64>,
    message: Option<&str>,
) -> Result<CipherReport> {
    let interactive = format == OutputFormat::Text;
    let mut prompted = false;

    let message = match message {
        Some(message) => utils::truncate_bytes(message, config.max_message_length).0.to_string(),
        None => {
            if interactive {
                utils::prompt(out, MESSAGE_PROMPT)?;
            }
            prompted = true;
            utils::read_message(input, config.max_message_length)?
        }
    };

    let shift = match shift {
        Some(shift) => shift,
        None => {
            if interactive {
                utils::prompt(out, SHIFT_PROMPT)?;
            }
            prompted = true;
            utils::read_shift(input)?
        }
    };

    let report = CipherReport::run(&message, shift);
    log::info!("Caesar round trip complete with shift {}", shift);

    match format {
        OutputFormat::Text => {
            if prompted {
                writeln!(out)?;
            }
            write_cipher_report(out, &report)?;
        }
        OutputFormat::Json => write_json(out, &report)?,
    }

    Ok(report)
}

/// The `caesar-cipher` flow: prompt for message and shift, print both directions.
pub fn handle_caesar_cipher<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &Config,
) -> Result<CipherReport> {
    handle_caesar(input, out, config, OutputFormat::Text, None, None)
}

pub fn handle_transform<W: Write>(
    out: &mut W,
    format: OutputFormat,
    direction: Direction,
    message: &str,
    shift: i64,
) -> Result<TransformReport> {
    let report = TransformReport::run(direction, message, shift);

    match format {
        OutputFormat::Text => {
            let label = match direction {
                Direction::Encrypt => "Encrypted message: ",
                Direction::Decrypt => "Decrypted message: ",
            };
            write_line_terminated(out, label, &report.output)?;
        }
        OutputFormat::Json => write_json(out, &report)?,
    }

    Ok(report)
}
