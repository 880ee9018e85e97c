// src/analyzer/mod.rs
use serde::Serialize;
use std::fmt;

/// Password strength verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Decide the verdict from the password length and the number of
    /// character classes it contains.
    ///
    /// The branches are evaluated in order. Anything the first three rules
    /// don't claim (e.g. 10+ characters with only two or three classes)
    /// lands on MEDIUM.
    pub fn evaluate(length: usize, criteria: u8) -> Self {
        if length < 6 || criteria < 2 {
            Strength::Weak
        } else if (6..10).contains(&length) && criteria >= 3 {
            Strength::Medium
        } else if length >= 10 && criteria == 4 {
            Strength::Strong
        } else {
            Strength::Medium
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "WEAK"),
            Strength::Medium => write!(f, "MEDIUM"),
            Strength::Strong => write!(f, "STRONG"),
        }
    }
}

/// Character classes seen at least once in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharacterClasses {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl CharacterClasses {
    /// Classify every byte once, in order. Each byte sets exactly one flag,
    /// so every byte of a multi-byte character counts as special. Flags are
    /// never cleared.
    pub fn scan(password: &str) -> Self {
        let mut classes = CharacterClasses::default();

        for b in password.bytes() {
            if b.is_ascii_uppercase() {
                classes.has_uppercase = true;
            } else if b.is_ascii_lowercase() {
                classes.has_lowercase = true;
            } else if b.is_ascii_digit() {
                classes.has_digit = true;
            } else {
                classes.has_special = true;
            }
        }

        classes
    }

    pub fn criteria_count(&self) -> u8 {
        [self.has_uppercase, self.has_lowercase, self.has_digit, self.has_special]
            .iter()
            .filter(|&&flag| flag)
            .count() as u8
    }
}

/// Result of analyzing a single password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordAnalysis {
    /// Length in bytes.
    pub length: usize,
    #[serde(flatten)]
    pub classes: CharacterClasses,
    pub criteria_count: u8,
    pub strength: Strength,
}

impl PasswordAnalysis {
    pub fn has_uppercase(&self) -> bool {
        self.classes.has_uppercase
    }

    pub fn has_lowercase(&self) -> bool {
        self.classes.has_lowercase
    }

    pub fn has_digit(&self) -> bool {
        self.classes.has_digit
    }

    pub fn has_special(&self) -> bool {
        self.classes.has_special
    }
}

pub struct PasswordAnalyzer;

impl PasswordAnalyzer {
    pub fn new() -> Self {
        PasswordAnalyzer
    }

    pub fn analyze(&self, password: &str) -> PasswordAnalysis {
        analyze(password)
    }
}

impl Default for PasswordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn analyze(password: &str) -> PasswordAnalysis {
    let length = password.len();
    let classes = CharacterClasses::scan(password);
    let criteria_count = classes.criteria_count();
    let strength = Strength::evaluate(length, criteria_count);

    log::debug!(
        "Analyzed password: length={} criteria={} strength={}",
        length,
        criteria_count,
        strength
    );

    PasswordAnalysis {
        length,
        classes,
        criteria_count,
        strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_password_is_weak() {
        let analysis = analyze("");
        assert_eq!(analysis.length, 0);
        assert_eq!(analysis.classes, CharacterClasses::default());
        assert_eq!(analysis.criteria_count, 0);
        assert_eq!(analysis.strength, Strength::Weak);
    }

    #[test]
    fn short_password_is_weak() {
        let analysis = analyze("ab");
        assert_eq!(analysis.length, 2);
        assert_eq!(analysis.strength, Strength::Weak);

        // two classes but only five characters
        assert_eq!(analyze("abcDE").strength, Strength::Weak);
        assert_eq!(analyze("abcde").strength, Strength::Weak);
    }

    #[test]
    fn single_class_is_weak_at_any_length() {
        assert_eq!(analyze("abcdefghijklmnop").strength, Strength::Weak);
        assert_eq!(analyze("1234567890").strength, Strength::Weak);
    }

    #[test]
    fn two_classes_at_six_falls_back_to_medium() {
        let analysis = analyze("abcdEF");
        assert_eq!(analysis.length, 6);
        assert_eq!(analysis.criteria_count, 2);
        assert_eq!(analysis.strength, Strength::Medium);
    }

    #[test]
    fn all_classes_under_ten_is_medium() {
        let analysis = analyze("Abcdef1!");
        assert_eq!(analysis.length, 8);
        assert_eq!(analysis.criteria_count, 4);
        assert_eq!(analysis.strength, Strength::Medium);
    }

    #[test]
    fn all_classes_from_ten_is_strong() {
        let analysis = analyze("Abcdefghij1!");
        assert_eq!(analysis.length, 12);
        assert_eq!(analysis.strength, Strength::Strong);
        assert_eq!(analyze("Abcdefg1!x").strength, Strength::Strong);
    }

    #[test]
    fn long_password_missing_a_class_is_medium() {
        assert_eq!(analyze("Abcdefghij12").strength, Strength::Medium);
        assert_eq!(analyze("abcdefghij").strength, Strength::Weak);
        assert_eq!(analyze("abcdefghi1").strength, Strength::Medium);
    }

    #[test]
    fn evaluate_boundaries() {
        assert_eq!(Strength::evaluate(5, 4), Strength::Weak);
        assert_eq!(Strength::evaluate(6, 1), Strength::Weak);
        assert_eq!(Strength::evaluate(6, 3), Strength::Medium);
        assert_eq!(Strength::evaluate(9, 4), Strength::Medium);
        assert_eq!(Strength::evaluate(10, 3), Strength::Medium);
        assert_eq!(Strength::evaluate(10, 4), Strength::Strong);
        assert_eq!(Strength::evaluate(99, 2), Strength::Medium);
    }

    #[test]
    fn whitespace_and_non_ascii_count_as_special() {
        let classes = CharacterClasses::scan(" ");
        assert!(classes.has_special);

        let analysis = analyze("pässwörd");
        assert_eq!(analysis.length, 10);
        assert!(analysis.has_lowercase());
        assert!(analysis.has_special());
        assert!(!analysis.has_uppercase());
        assert!(!analysis.has_digit());
    }

    #[test]
    fn length_is_counted_in_bytes() {
        // five characters, seven bytes
        let analysis = analyze("ééaB1");
        assert_eq!(analysis.length, 7);
        assert_eq!(analysis.criteria_count, 4);
        assert_eq!(analysis.strength, Strength::Medium);

        // nine characters, ten bytes: crosses into STRONG
        assert_eq!(analyze("Abcdefg1é").length, 10);
        assert_eq!(analyze("Abcdefg1é").strength, Strength::Strong);
    }

    #[test]
    fn strength_display_is_uppercase() {
        assert_eq!(Strength::Weak.to_string(), "WEAK");
        assert_eq!(Strength::Medium.to_string(), "MEDIUM");
        assert_eq!(Strength::Strong.to_string(), "STRONG");
    }

    #[test]
    fn analysis_serializes_flat() {
        let json = serde_json::to_value(analyze("Abcdef1!")).unwrap();
        assert_eq!(json["length"], 8);
        assert_eq!(json["has_uppercase"], true);
        assert_eq!(json["has_special"], true);
        assert_eq!(json["criteria_count"], 4);
        assert_eq!(json["strength"], "MEDIUM");
    }

    proptest! {
        #[test]
        fn criteria_count_matches_flags(password in "\\PC{0,40}") {
            let analysis = analyze(&password);
            let flags = [
                analysis.has_uppercase(),
                analysis.has_lowercase(),
                analysis.has_digit(),
                analysis.has_special(),
            ];
            prop_assert_eq!(
                analysis.criteria_count as usize,
                flags.iter().filter(|&&f| f).count()
            );
        }

        #[test]
        fn reordering_does_not_change_classes(password in "[ -~]{0,40}") {
            let reversed: String = password.chars().rev().collect();
            let mut sorted: Vec<char> = password.chars().collect();
            sorted.sort_unstable();
            let sorted: String = sorted.into_iter().collect();

            let original = analyze(&password);
            prop_assert_eq!(original.classes, analyze(&reversed).classes);
            prop_assert_eq!(original.classes, analyze(&sorted).classes);
            prop_assert_eq!(original.strength, analyze(&sorted).strength);
        }
    }
}
