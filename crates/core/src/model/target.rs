use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TargetError {
    #[error("target must be between 1 and 10, got {value}")]
    OutOfRange { value: i64 },
}

//
// ─── TARGET ────────────────────────────────────────────────────────────────────
//

/// The secret number of a round, always within `Target::MIN..=Target::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Target(u8);

impl Target {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const COUNT: u8 = Self::MAX - Self::MIN + 1;

    /// Creates a target from any integer.
    ///
    /// # Errors
    ///
    /// Returns `TargetError::OutOfRange` when `value` is outside `1..=10`.
    pub fn new(value: i64) -> Result<Self, TargetError> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(TargetError::OutOfRange { value }),
        }
    }

    /// The `index`-th target counting up from `MIN`, wrapping past `MAX`.
    #[must_use]
    pub fn nth(index: u8) -> Self {
        Self(Self::MIN + index % Self::COUNT)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true if the parsed guess names this target.
    #[must_use]
    pub fn matches(self, guess: Option<i64>) -> bool {
        guess == Some(i64::from(self.0))
    }

    /// Every valid target, in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<i64> for Target {
    type Error = TargetError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Target> for i64 {
    fn from(target: Target) -> Self {
        i64::from(target.0)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── GUESS PARSING ─────────────────────────────────────────────────────────────
//

/// Parses raw guess input.
///
/// Surrounding whitespace is ignored and the leading run of an optional sign
/// followed by digits is the value, so `"7abc"` reads as 7. A `0x`/`0X`
/// prefix switches to hexadecimal digits (`"0xA"` is 10). Input without a
/// leading integer (or one that overflows) yields `None`.
#[must_use]
pub fn parse_guess(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits_len = rest
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
