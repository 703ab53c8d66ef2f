use std::fmt;

use thiserror::Error;

/// Message attached to an accepted password
pub const VALID_PASSWORD_MESSAGE: &str = "password is valid";

/// The first policy rule a password failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrengthViolation {
    #[error("password must be at least {0} characters long")]
    TooShort(usize),

    #[error("password must be at most {0} characters long")]
    TooLong(usize),

    #[error("password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("password must contain at least one number")]
    MissingDigit,

    #[error("password must contain at least one special character")]
    MissingSpecialCharacter,
}

/// Outcome of a strength check: accepted, or rejected with exactly one reason
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthVerdict(Option<StrengthViolation>);

impl StrengthVerdict {
    pub fn accepted() -> Self {
        Self(None)
    }

    pub fn rejected(violation: StrengthViolation) -> Self {
        Self(Some(violation))
    }

    pub fn is_acceptable(&self) -> bool {
        self.0.is_none()
    }

    pub fn violation(&self) -> Option<StrengthViolation> {
        self.0
    }

    /// Human readable reason, suitable for showing to the end user
    pub fn reason(&self) -> String {
        match self.0 {
            Some(violation) => violation.to_string(),
            None => VALID_PASSWORD_MESSAGE.to_string(),
        }
    }

    pub fn into_result(self) -> Result<(), StrengthViolation> {
        match self.0 {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}

impl From<StrengthVerdict> for (bool, String) {
    fn from(verdict: StrengthVerdict) -> Self {
        (verdict.is_acceptable(), verdict.reason())
    }
}

impl fmt::Display for StrengthVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason())
    }
}
