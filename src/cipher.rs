// src/cipher.rs

/// Size of the alphabet the cipher rotates through.
pub const ALPHABET_LEN: i64 = 26;

/// Reduce any shift into `[0, 26)`.
pub fn normalize_shift(shift: i64) -> i64 {
    shift.rem_euclid(ALPHABET_LEN)
}

/// Rotate a single ASCII letter by `shift`, leaving everything else alone.
pub fn shift_char(c: char, shift: i64) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }

    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    // Reducing the shift first keeps the sum far away from i64 overflow.
    let offset = (c as u8 - base) as i64 + normalize_shift(shift);
    (base + offset.rem_euclid(ALPHABET_LEN) as u8) as char
}

pub fn encrypt(message: &str, shift: i64) -> String {
    message.chars().map(|c| shift_char(c, shift)).collect()
}

/// Undo [`encrypt`] by encrypting again with the complementary shift.
///
/// A shift that is a multiple of 26 yields a complementary shift of 26,
/// which is itself a full rotation.
pub fn decrypt(message: &str, shift: i64) -> String {
    encrypt(message, ALPHABET_LEN - normalize_shift(shift))
}

/// Caesar cipher bound to a fixed shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipher {
    shift: i64,
}

impl CaesarCipher {
    pub fn new(shift: i64) -> Self {
        CaesarCipher { shift }
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }

    pub fn encrypt(&self, message: &str) -> String {
        log::debug!("Encrypting {} chars with shift {}", message.chars().count(), self.shift);
        encrypt(message, self.shift)
    }

    pub fn decrypt(&self, message: &str) -> String {
        log::debug!("Decrypting {} chars with shift {}", message.chars().count(), self.shift);
        decrypt(message, self.shift)
    }
}
