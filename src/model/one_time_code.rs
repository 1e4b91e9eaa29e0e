use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// User-entered confirmation code for a key exchange
#[derive(Clone, PartialEq, Eq)]
pub struct OneTimeCode(String);

impl OneTimeCode {
    pub const DEFAULT: &'static str = "123456";

    pub const MIN_LENGTH: usize = 4;

    pub const MAX_LENGTH: usize = 8;

    pub fn new(code: String) -> Result<Self, OneTimeCodeError> {
        if code.len() < Self::MIN_LENGTH {
            return Err(OneTimeCodeError::TooShort);
        }
        if code.len() > Self::MAX_LENGTH {
            return Err(OneTimeCodeError::TooLong);
        }
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OneTimeCodeError::NotNumeric);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OneTimeCode {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl FromStr for OneTimeCode {
    type Err = OneTimeCodeError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::new(code.trim().to_string())
    }
}

impl TryFrom<&str> for OneTimeCode {
    type Error = OneTimeCodeError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl fmt::Debug for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OneTimeCode([REDACTED])")
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneTimeCodeError {
    #[error("One-time code must be at least {min} digits", min = OneTimeCode::MIN_LENGTH)]
    TooShort,

    #[error("One-time code must be at most {max} digits", max = OneTimeCode::MAX_LENGTH)]
    TooLong,

    #[error("One-time code must contain only digits")]
    NotNumeric,
}
