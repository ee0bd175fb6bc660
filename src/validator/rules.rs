//! Validator implementations
//!
//! A name passes when every validator in the chain accepts it.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::NameRules;
use crate::error::{EntityKind, VfsError};

/// Letters, digits, underscore and hyphen.
static STRICT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("strict name pattern is valid"));

/// The strict class plus `.`.
static DOTTED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("dotted name pattern is valid"));

/// A pure predicate over a candidate name.
pub trait Validator {
    fn validate(&self, input: &str) -> bool;
}

/// Accepts names whose character count lies in `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct LengthValidator {
    min: usize,
    max: usize,
}

impl LengthValidator {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Validator for LengthValidator {
    fn validate(&self, input: &str) -> bool {
        let length = input.chars().count();
        length >= self.min && length <= self.max
    }
}

/// Accepts names matched in full by a regular expression.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
}

impl PatternValidator {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Validator for PatternValidator {
    fn validate(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

/// The length and character-class checks shared by every entity level.
#[derive(Debug, Clone)]
pub struct NameValidator {
    length: LengthValidator,
    pattern: PatternValidator,
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::from_rules(&NameRules::default())
    }
}

impl NameValidator {
    pub fn from_rules(rules: &NameRules) -> Self {
        let pattern = if rules.allow_dot {
            DOTTED_NAME.clone()
        } else {
            STRICT_NAME.clone()
        };

        Self {
            length: LengthValidator::new(rules.min_length, rules.max_length),
            pattern: PatternValidator::new(pattern),
        }
    }

    /// Validates `name` for an entity of the given kind.
    pub fn check(&self, kind: EntityKind, name: &str) -> Result<(), VfsError> {
        if self.validate(name) {
            Ok(())
        } else {
            Err(VfsError::invalid_name(kind, name))
        }
    }
}

impl Validator for NameValidator {
    fn validate(&self, input: &str) -> bool {
        self.length.validate(input) && self.pattern.validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validator() {
        let v = LengthValidator::new(1, 50);
        assert!(!v.validate(""));
        assert!(v.validate("a"));
        assert!(v.validate(&"a".repeat(50)));
        assert!(!v.validate(&"a".repeat(51)));
    }

    #[test]
    fn test_pattern_validator() {
        let v = PatternValidator::new(STRICT_NAME.clone());
        assert!(v.validate("valid_name-123"));
        assert!(!v.validate("invalid@name"));
        assert!(!v.validate("with space"));
        assert!(!v.validate("file.txt"));
        assert!(!v.validate(""));
    }

    #[test]
    fn test_default_name_rules() {
        let v = NameValidator::default();
        for name in ["validfolder", "folder123", "valid_folder", "valid-folder", "MiXeD"] {
            assert!(v.check(EntityKind::Folder, name).is_ok(), "{name} should pass");
        }
        for name in ["", "invalid@folder", "a.b", "über"] {
            assert_eq!(
                v.check(EntityKind::Folder, name),
                Err(VfsError::invalid_name(EntityKind::Folder, name))
            );
        }
        assert!(v.check(EntityKind::File, &"x".repeat(51)).is_err());
    }

    #[test]
    fn test_dot_rules() {
        let rules = NameRules {
            allow_dot: true,
            ..NameRules::default()
        };
        let v = NameValidator::from_rules(&rules);
        assert!(v.validate("report.txt"));
        assert!(!v.validate("report@txt"));
    }
}
