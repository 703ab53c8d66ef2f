use std::sync::Arc;

use crate::domain::{
    error::DomainError,
    services::{
        password_policy::{
            DEFAULT_MAX_LENGTH, DIGITS, LOWERCASE_LETTERS, SPECIAL_CHARACTERS, UPPERCASE_LETTERS,
        },
        random_source::SecureRandomSource,
    },
};

/// One character from each mandatory class has to fit
pub const MIN_GENERATED_LENGTH: usize = 4;

/// Longest password the default policy still accepts
pub const MAX_GENERATED_LENGTH: usize = DEFAULT_MAX_LENGTH;

pub const DEFAULT_GENERATED_LENGTH: usize = 16;

const MANDATORY_CLASSES: [&[u8]; 4] = [UPPERCASE_LETTERS, LOWERCASE_LETTERS, DIGITS, SPECIAL_CHARACTERS];

/// Produces random passwords containing every mandatory character class
#[derive(Clone)]
pub struct PasswordGenerator {
    random: Arc<dyn SecureRandomSource>,
}

impl PasswordGenerator {
    pub fn new(random: Arc<dyn SecureRandomSource>) -> Self {
        Self { random }
    }

    pub fn generate(&self, length: usize) -> Result<String, DomainError> {
        if length < MIN_GENERATED_LENGTH {
            return Err(DomainError::InvalidArgument(format!(
                "generated password length must be at least {MIN_GENERATED_LENGTH}, got {length}"
            )));
        }
        if length > MAX_GENERATED_LENGTH {
            return Err(DomainError::InvalidArgument(format!(
                "generated password length must be at most {MAX_GENERATED_LENGTH}, got {length}"
            )));
        }

        let mut password: Vec<char> = Vec::with_capacity(length);
        for class in MANDATORY_CLASSES {
            password.push(self.pick(class));
        }

        let alphabet: Vec<u8> = MANDATORY_CLASSES.concat();
        while password.len() < length {
            password.push(self.pick(&alphabet));
        }

        // the first four positions would otherwise always hold the classes in order
        self.random.shuffle(&mut password);

        Ok(password.into_iter().collect())
    }

    fn pick(&self, alphabet: &[u8]) -> char {
        alphabet[self.random.index_below(alphabet.len())] as char
    }
}
