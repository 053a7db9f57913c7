//! Short, web-safe, sortable unique identifiers.
//!
//! A [PushId] is a 20 character string made of a millisecond timestamp and a
//! 72 bit random suffix, both written in a 64 symbol alphabet that is safe to
//! use unescaped in URLs and file names. Identifiers from the same generator
//! sort in the order they were handed out:
//!
//! ```
//! use pushid::pushid;
//!
//! let first = pushid();
//! let second = pushid();
//! assert!(first < second);
//! assert!(first.as_str() < second.as_str());
//! ```
//!
//! Within a single millisecond the generator increments the previous suffix
//! instead of drawing a new one, so identifiers stay unique and ordered even
//! under heavy concurrent use. Uniqueness across processes relies on the
//! random suffix alone.
//!
//! [pushid()] uses a process wide [PushIdGenerator]. Applications that want
//! their own instance, or tests that need a fixed clock and seed, construct
//! one directly:
//!
//! ```
//! use pushid::{ManualClock, PushIdGenerator};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let clock = ManualClock::new(1_700_000_000_000);
//! let generator = PushIdGenerator::with_source(clock.clone(), StdRng::seed_from_u64(1));
//!
//! let a = generator.generate();
//! let b = generator.generate();
//! assert_eq!(a.timestamp(), b.timestamp());
//! assert!(a < b);
//! ```

pub mod alphabet;
pub mod clock;
pub mod generator;
pub mod id;
pub mod suffix;

#[cfg(feature = "proptest")]
pub mod strategy;

#[cfg(kani)]
#[path = "../proofs/suffix_harness.rs"]
mod suffix_harness;

pub use clock::{Clock, ManualClock, SystemClock};
pub use generator::{pushid, pushid_string, PushIdGenerator};
pub use id::{ParseError, PushId, RawPushId, ID_LEN};
pub use suffix::{Suffix, SUFFIX_LEN};
