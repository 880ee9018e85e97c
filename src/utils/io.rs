// src/utils/io.rs
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, InputError>;

/// Write a prompt without a trailing newline and flush it.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

// Read one raw line, replacing invalid UTF-8. Returns None at end of input.
fn read_raw_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Read the first whitespace-delimited token, skipping blank lines.
///
/// Only ASCII whitespace separates tokens. End of input without a token
/// yields an empty string.
pub fn read_token<R: BufRead>(reader: &mut R, max_bytes: usize) -> Result<String> {
    while let Some(line) = read_raw_line(reader)? {
        if let Some(token) = line.split(super::is_c_space).find(|t| !t.is_empty()) {
            let (token, truncated) = super::truncate_bytes(token, max_bytes);
            if truncated {
                log::warn!("Input token truncated to {} bytes", max_bytes);
            }
            return Ok(token.to_string());
        }
    }

    log::debug!("End of input before any token");
    Ok(String::new())
}

/// Read one full line, keeping its line terminator.
pub fn read_message<R: BufRead>(reader: &mut R, max_bytes: usize) -> Result<String> {
    let line = match read_raw_line(reader)? {
        Some(line) => line,
        None => {
            log::debug!("End of input before message");
            return Ok(String::new());
        }
    };

    let (message, truncated) = super::truncate_bytes(&line, max_bytes);
    if truncated {
        log::warn!("Message truncated to {} bytes", max_bytes);
    }
    Ok(message.to_string())
}

/// Parse a shift the way `%d` would: skip leading whitespace, accept an
/// optional sign, then take the longest run of digits. Trailing text is
/// ignored.
pub fn parse_shift(input: &str) -> Option<i64> {
    let trimmed = input.trim_start_matches(super::is_c_space);
    let sign_len = match trimmed.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Read the shift value. Missing, malformed or out-of-range input becomes 0.
pub fn read_shift<R: BufRead>(reader: &mut R) -> Result<i64> {
    while let Some(line) = read_raw_line(reader)? {
        if line.chars().all(super::is_c_space) {
            continue;
        }
        return Ok(match parse_shift(&line) {
            Some(shift) => shift,
            None => {
                log::warn!("Invalid shift value {:?}, using 0", line.trim());
                0
            }
        });
    }

    log::warn!("No shift value provided, using 0");
    Ok(0)
}
