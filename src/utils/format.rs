// src/utils/format.rs

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Whitespace as the C locale's `isspace` sees it.
pub fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Cut a string down to at most `max_bytes` bytes, backing off to the
/// previous char boundary so the result stays valid UTF-8.
///
/// Returns the kept prefix and whether anything was dropped.
pub fn truncate_bytes(s: &str, max_bytes: usize) -> (&str, bool) {
    if s.len() <= max_bytes {
        return (s, false);
    }

    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    (&s[..end], true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_byte_budget() {
        assert_eq!(truncate_bytes("hello", 3), ("hel", true));
        assert_eq!(truncate_bytes("hi", 2), ("hi", false));
        assert_eq!(truncate_bytes("", 5), ("", false));
    }

    #[test]
    fn truncation_backs_off_to_char_boundary() {
        // 'é' occupies bytes 1..3
        assert_eq!(truncate_bytes("héllo", 2), ("h", true));
        assert_eq!(truncate_bytes("héllo", 3), ("hé", true));
        assert_eq!(truncate_bytes("éé", 1), ("", true));
    }

    #[test]
    fn c_space_is_ascii_only() {
        assert!(is_c_space(' '));
        assert!(is_c_space('\x0B'));
        assert!(!is_c_space('\u{00a0}'));
        assert!(!is_c_space('\u{2003}'));
    }

    #[test]
    fn yes_no_labels() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
