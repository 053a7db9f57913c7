use rand::Rng;

use crate::alphabet::BASE;

/// Number of base-64 digits in a suffix, 72 bits of randomness in total.
pub const SUFFIX_LEN: usize = 12;

/// The random half of a [PushId](crate::PushId).
///
/// Digits are stored least significant first: `digits()[0]` is the one that
/// changes on every [increment](Suffix::increment) and ends up as the last
/// character of the identifier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Suffix([u8; SUFFIX_LEN]);

impl Suffix {
    /// The all zero suffix, which is also what an overflowing increment wraps to.
    pub const fn zero() -> Self {
        Suffix([0; SUFFIX_LEN])
    }

    /// Builds a suffix from least-significant-first digits.
    ///
    /// Returns `None` if any digit is outside `0..64`.
    pub fn from_digits(digits: [u8; SUFFIX_LEN]) -> Option<Self> {
        if digits.iter().all(|&d| d < BASE) {
            Some(Suffix(digits))
        } else {
            None
        }
    }

    /// Draws every digit independently and uniformly from `0..64`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0; SUFFIX_LEN];
        for digit in digits.iter_mut() {
            *digit = rng.gen_range(0..BASE);
        }
        Suffix(digits)
    }

    /// Adds one, carrying into the more significant digits.
    ///
    /// Returns `true` if all digits overflowed and the suffix wrapped around to
    /// [zero](Suffix::zero).
    pub fn increment(&mut self) -> bool {
        for digit in self.0.iter_mut() {
            *digit += 1;
            if *digit < BASE {
                return false;
            }
            *digit = 0;
        }
        true
    }

    /// The digits, least significant first.
    pub fn digits(&self) -> &[u8; SUFFIX_LEN] {
        &self.0
    }
}
