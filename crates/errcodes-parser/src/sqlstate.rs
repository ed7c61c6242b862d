use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of characters in a SQLSTATE.
pub const SQLSTATE_LEN: usize = 5;

const RADIX: u32 = 36;

/// Largest decodable value, `ZZZZZ`.
pub const MAX_VALUE: u32 = RADIX.pow(SQLSTATE_LEN as u32) - 1;

/// A five character SQLSTATE read as a base-36 numeral.
///
/// The digits are kept in canonical upper case, so `22p02` and `22P02`
/// compare equal and print the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SqlState {
    value: u32,
    digits: [u8; SQLSTATE_LEN],
}

impl SqlState {
    pub fn parse(code: &str) -> Result<Self, Error> {
        let len = code.chars().count();
        if len != SQLSTATE_LEN {
            return Err(Error::CodeLength {
                code: code.to_string(),
                len,
            });
        }

        let mut digits = [0u8; SQLSTATE_LEN];
        let mut value = 0u32;
        for (slot, ch) in digits.iter_mut().zip(code.chars()) {
            let digit = ch.to_digit(RADIX).ok_or_else(|| Error::CodeDigit {
                code: code.to_string(),
                ch,
            })?;
            value = value * RADIX + digit;
            // to_digit only accepts ASCII alphanumerics.
            *slot = ch.to_ascii_uppercase() as u8;
        }

        Ok(Self { value, digits })
    }

    /// Encodes `value` back into its zero-padded five character form.
    #[must_use]
    pub fn from_value(value: u32) -> Option<Self> {
        if value > MAX_VALUE {
            return None;
        }

        let mut digits = [b'0'; SQLSTATE_LEN];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            let ch = char::from_digit(rest % RADIX, RADIX)?;
            *slot = ch.to_ascii_uppercase() as u8;
            rest /= RADIX;
        }

        Some(Self { value, digits })
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The class this code belongs to: its first two characters followed by `000`.
    #[must_use]
    pub fn category(&self) -> SqlState {
        let class_width = RADIX.pow(3);
        let value = self.value - self.value % class_width;
        let mut digits = [b'0'; SQLSTATE_LEN];
        digits[..2].copy_from_slice(&self.digits[..2]);
        Self { value, digits }
    }

    #[must_use]
    pub fn is_category(&self) -> bool {
        self.category() == *self
    }
}

impl fmt::Display for SqlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = std::str::from_utf8(&self.digits).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl FromStr for SqlState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
