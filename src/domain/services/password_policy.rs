use crate::domain::{
    error::DomainError,
    models::strength::{StrengthVerdict, StrengthViolation},
};

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 128;

pub const UPPERCASE_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL_CHARACTERS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

pub fn is_special_character(c: char) -> bool {
    c.is_ascii() && SPECIAL_CHARACTERS.contains(&(c as u8))
}

/// Structural password policy. No dictionary, history or identity checks.
///
/// Letter case and digits are judged by Unicode properties, so `Ñ` counts as
/// uppercase and `٣` as a number. Special characters are the fixed ASCII set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, DomainError> {
        if min_length == 0 || min_length > max_length {
            return Err(DomainError::Configuration(format!(
                "password length bounds {min_length}..={max_length} are not usable"
            )));
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Check the rules in order and report the first one violated
    pub fn validate(&self, password: &str) -> StrengthVerdict {
        match self.first_violation(password) {
            Some(violation) => StrengthVerdict::rejected(violation),
            None => StrengthVerdict::accepted(),
        }
    }

    fn first_violation(&self, password: &str) -> Option<StrengthViolation> {
        let length = password.chars().count();
        if length < self.min_length {
            return Some(StrengthViolation::TooShort(self.min_length));
        }
        if length > self.max_length {
            return Some(StrengthViolation::TooLong(self.max_length));
        }
        if !password.chars().any(char::is_uppercase) {
            return Some(StrengthViolation::MissingUppercase);
        }
        if !password.chars().any(char::is_lowercase) {
            return Some(StrengthViolation::MissingLowercase);
        }
        if !password.chars().any(char::is_numeric) {
            return Some(StrengthViolation::MissingDigit);
        }
        if !password.chars().any(is_special_character) {
            return Some(StrengthViolation::MissingSpecialCharacter);
        }
        None
    }
}
