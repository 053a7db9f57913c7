//! Proptest support for generating well formed identifiers.

use proptest::prelude::Rng;
use proptest::prelude::prop::strategy::{NewTree, Strategy, ValueTree};
use proptest::prelude::prop::test_runner::TestRunner;

use crate::id::{PushId, TIMESTAMP_MAX};
use crate::suffix::{Suffix, SUFFIX_LEN};

pub struct PushIdValueTree(PushId);

/// Produces identifiers with a uniformly random timestamp and suffix.
#[derive(Debug)]
pub struct RandomPushId();

impl Strategy for RandomPushId {
    type Tree = PushIdValueTree;
    type Value = PushId;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let rng = runner.rng();
        let timestamp_ms = rng.next_u64() & TIMESTAMP_MAX;
        let mut digits = [0; SUFFIX_LEN];
        for digit in digits.iter_mut() {
            *digit = (rng.next_u32() & 0x3F) as u8;
        }
        let suffix = Suffix::from_digits(digits).unwrap_or_default();

        Ok(PushIdValueTree(PushId::from_parts(timestamp_ms, &suffix)))
    }
}

impl ValueTree for PushIdValueTree {
    type Value = PushId;

    fn simplify(&mut self) -> bool {
        false
    }
    fn complicate(&mut self) -> bool {
        false
    }
    fn current(&self) -> PushId {
        self.0
    }
}
