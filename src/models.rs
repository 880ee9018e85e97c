// src/models.rs
use serde::Serialize;

use crate::cipher::CaesarCipher;

/// Outcome of one encrypt-then-decrypt run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherReport {
    pub shift: i64,
    pub encrypted: String,
    pub decrypted: String,
}

impl CipherReport {
    /// Encrypt `message`, then decrypt the ciphertext again.
    pub fn run(message: &str, shift: i64) -> Self {
        let cipher = CaesarCipher::new(shift);
        let encrypted = cipher.encrypt(message);
        let decrypted = cipher.decrypt(&encrypted);

        Self { shift, encrypted, decrypted }
    }
}

// Which direction a one-way transform goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    pub direction: Direction,
    pub shift: i64,
    pub output: String,
}

impl TransformReport {
    pub fn run(direction: Direction, message: &str, shift: i64) -> Self {
        let cipher = CaesarCipher::new(shift);
        let output = match direction {
            Direction::Encrypt => cipher.encrypt(message),
            Direction::Decrypt => cipher.decrypt(message),
        };

        Self { direction, shift, output }
    }
}
