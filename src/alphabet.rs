//! The 64 symbol web-safe alphabet shared by the timestamp and suffix halves
//! of a [PushId](crate::PushId).
//!
//! The symbols are listed in ASCII order, so comparing two encoded strings
//! byte by byte gives the same result as comparing the digits they encode.

/// Number of symbols in [ALPHABET], and thus the base of every digit.
pub const BASE: u8 = 64;

/// Web-safe characters ordered by ASCII.
pub const ALPHABET: &[u8; BASE as usize] =
    b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const INVALID: u8 = u8::MAX;

static DECODE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut digit = 0;
    while digit < ALPHABET.len() {
        table[ALPHABET[digit] as usize] = digit as u8;
        digit += 1;
    }
    table
};

/// Maps a digit in `0..64` to its symbol.
///
/// Only the low six bits of `digit` are used.
#[inline]
pub const fn digit_to_char(digit: u8) -> u8 {
    ALPHABET[(digit & (BASE - 1)) as usize]
}

/// Maps a symbol back to its digit, or `None` for bytes outside the alphabet.
#[inline]
pub fn char_to_digit(c: u8) -> Option<u8> {
    match DECODE[c as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}
