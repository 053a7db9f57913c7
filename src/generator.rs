use std::sync::{Mutex, OnceLock, PoisonError};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::clock::{Clock, SystemClock};
use crate::id::PushId;
use crate::suffix::Suffix;

struct State<R> {
    last_timestamp_ms: u64,
    last_suffix: Suffix,
    rng: R,
}

/// Hands out strictly increasing [PushId]s.
///
/// Calls that land in a new millisecond get a fresh random suffix; calls that
/// land in the same millisecond as the previous one reuse its suffix
/// incremented by one. All of this happens under one lock, so the ordering
/// holds across threads.
///
/// If the clock reads earlier than the last issued timestamp the generator
/// stays on that timestamp and keeps incrementing until the clock catches up.
pub struct PushIdGenerator<C = SystemClock, R = StdRng> {
    clock: C,
    state: Mutex<State<R>>,
}

impl PushIdGenerator {
    /// A generator on the wall clock with an entropy seeded [StdRng].
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for PushIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PushIdGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_source(clock, StdRng::from_entropy())
    }
}

impl<C: Clock, R: RngCore> PushIdGenerator<C, R> {
    /// Builds a generator from an explicit clock and random source.
    pub fn with_source(clock: C, rng: R) -> Self {
        Self {
            clock,
            state: Mutex::new(State {
                last_timestamp_ms: 0,
                last_suffix: Suffix::zero(),
                rng,
            }),
        }
    }

    /// Produces the next identifier.
    pub fn generate(&self) -> PushId {
        let (timestamp_ms, suffix) = {
            // Nothing in the critical section leaves the state half written,
            // so a poisoned lock is still usable.
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            let state = &mut *state;

            let mut now_ms = self.clock.now_ms();
            if now_ms < state.last_timestamp_ms {
                tracing::warn!(
                    now_ms,
                    last_timestamp_ms = state.last_timestamp_ms,
                    "clock moved backwards, holding last timestamp"
                );
                now_ms = state.last_timestamp_ms;
            }

            if now_ms == state.last_timestamp_ms {
                if state.last_suffix.increment() {
                    tracing::trace!(now_ms, "suffix overflowed and wrapped to zero");
                }
            } else {
                state.last_suffix = Suffix::random(&mut state.rng);
            }
            state.last_timestamp_ms = now_ms;

            (now_ms, state.last_suffix)
        };

        PushId::from_parts(timestamp_ms, &suffix)
    }
}

fn shared() -> &'static PushIdGenerator {
    static GENERATOR: OnceLock<PushIdGenerator> = OnceLock::new();
    GENERATOR.get_or_init(PushIdGenerator::new)
}

/// Generates an identifier from the process wide generator.
///
/// ```
/// let a = pushid::pushid();
/// let b = pushid::pushid();
/// assert_eq!(a.len(), 20);
/// assert!(a < b);
/// ```
pub fn pushid() -> PushId {
    shared().generate()
}

/// Like [pushid], but returns the identifier as a `String`.
pub fn pushid_string() -> String {
    pushid().into()
}
