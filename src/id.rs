//! The identifier type and its textual encoding.
//!
//! A [PushId] is 20 characters from the web-safe [ALPHABET](crate::alphabet::ALPHABET):
//!
//! ```text
//!  0       8                   20
//!  +-------+-------------------+
//!  | time  |      suffix       |
//!  +-------+-------------------+
//! ```
//!
//! The first 8 characters hold the low 48 bits of a millisecond unix
//! timestamp, most significant digit first. The remaining 12 hold the suffix,
//! also most significant digit first. Both halves are big-endian, so the
//! string order of two identifiers is the order of their `(timestamp, suffix)`
//! pairs.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::alphabet::{char_to_digit, digit_to_char, BASE};
use crate::suffix::{Suffix, SUFFIX_LEN};

/// Number of characters encoding the timestamp.
pub const TIMESTAMP_LEN: usize = 8;

/// Total length of an identifier in characters (and bytes).
pub const ID_LEN: usize = TIMESTAMP_LEN + SUFFIX_LEN;

/// Largest timestamp that survives encoding; higher bits are truncated.
pub const TIMESTAMP_MAX: u64 = (1 << (6 * TIMESTAMP_LEN)) - 1;

/// The 20 ASCII bytes of an identifier.
pub type RawPushId = [u8; ID_LEN];

/// A 20 character, web-safe, lexicographically sortable identifier.
///
/// `Ord` compares the underlying bytes, which agrees with comparing the
/// string forms.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PushId(RawPushId);

impl PushId {
    /// Encodes a timestamp and suffix.
    ///
    /// Only the low 48 bits of `timestamp_ms` are kept, see [TIMESTAMP_MAX].
    pub fn from_parts(timestamp_ms: u64, suffix: &Suffix) -> PushId {
        let mut id = [0; ID_LEN];

        let mut ts = timestamp_ms;
        for c in id[..TIMESTAMP_LEN].iter_mut().rev() {
            *c = digit_to_char((ts % BASE as u64) as u8);
            ts /= BASE as u64;
        }

        for (c, &digit) in id[TIMESTAMP_LEN..].iter_mut().rev().zip(suffix.digits()) {
            *c = digit_to_char(digit);
        }

        PushId(id)
    }

    /// Validates raw bytes as an identifier.
    pub fn from_raw(raw: RawPushId) -> Result<PushId, ParseError> {
        if let Some(index) = raw.iter().position(|&c| char_to_digit(c).is_none()) {
            return Err(ParseError::BadChar {
                index,
                byte: raw[index],
            });
        }
        Ok(PushId(raw))
    }

    /// The millisecond timestamp, truncated to 48 bits.
    pub fn timestamp(&self) -> u64 {
        self.0[..TIMESTAMP_LEN]
            .iter()
            .fold(0, |ts, &c| ts * BASE as u64 + self::digit(c) as u64)
    }

    /// The suffix digits.
    pub fn suffix(&self) -> Suffix {
        let mut digits = [0; SUFFIX_LEN];
        for (digit, &c) in digits.iter_mut().zip(self.0[TIMESTAMP_LEN..].iter().rev()) {
            *digit = self::digit(c);
        }
        Suffix::from_digits(digits).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: every byte comes from the ASCII alphabet, checked on construction.
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }

    pub fn as_bytes(&self) -> &RawPushId {
        &self.0
    }
}

// Callers only pass bytes that were validated on construction.
fn digit(c: u8) -> u8 {
    char_to_digit(c).unwrap_or(0)
}

impl Deref for PushId {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for PushId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for PushId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<PushId> for String {
    fn from(id: PushId) -> Self {
        id.as_str().to_owned()
    }
}

impl From<PushId> for RawPushId {
    fn from(id: PushId) -> Self {
        id.0
    }
}

impl fmt::Display for PushId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for PushId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PushId({})", self.as_str())
    }
}

impl FromStr for PushId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawPushId = s
            .as_bytes()
            .try_into()
            .map_err(|_| ParseError::BadLength(s.len()))?;
        PushId::from_raw(raw)
    }
}

impl TryFrom<&str> for PushId {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl PartialEq<str> for PushId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for PushId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Why a string is not an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not exactly [ID_LEN] bytes long.
    BadLength(usize),
    /// The byte at `index` is not part of the alphabet.
    BadChar { index: usize, byte: u8 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadLength(len) => {
                write!(f, "expected {ID_LEN} characters, found {len}")
            }
            ParseError::BadChar { index, byte } => write!(
                f,
                "byte {byte:#04x} at position {index} is not a web-safe character"
            ),
        }
    }
}

impl std::error::Error for ParseError {}
