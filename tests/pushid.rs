use proptest::prelude::*;
use pushid::alphabet::ALPHABET;
use pushid::strategy::RandomPushId;
use pushid::{ManualClock, PushId, PushIdGenerator, Suffix, ID_LEN};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

proptest! {
    #[test]
    fn pushid_unique(count in 1usize..1000) {
        let mut set = HashSet::new();
        for _ in 0..count {
            let id = pushid::pushid();
            prop_assert!(set.insert(id), "duplicate id generated");
        }
    }

    #[test]
    fn pushid_well_formed(count in 1usize..200) {
        for _ in 0..count {
            let id = pushid::pushid_string();
            prop_assert_eq!(id.len(), ID_LEN);
            prop_assert!(id.bytes().all(|c| ALPHABET.contains(&c)));
        }
    }

    #[test]
    fn pushid_sequential_increasing(count in 2usize..1000) {
        let ids: Vec<_> = (0..count).map(|_| pushid::pushid()).collect();
        for pair in ids.windows(2) {
            prop_assert!(pair[0] < pair[1], "{} must be < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn parse_display_roundtrip(id in RandomPushId()) {
        let parsed: PushId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
        prop_assert_eq!(PushId::from_parts(id.timestamp(), &id.suffix()), id);
    }

    #[test]
    fn string_order_matches_parts(a in RandomPushId(), b in RandomPushId()) {
        let parts = (a.timestamp(), a.suffix().digits().iter().rev().copied().collect::<Vec<_>>())
            .cmp(&(b.timestamp(), b.suffix().digits().iter().rev().copied().collect::<Vec<_>>()));
        prop_assert_eq!(a.as_str().cmp(b.as_str()), parts);
        prop_assert_eq!(a.cmp(&b), parts);
    }

    #[test]
    fn increment_is_successor(id in RandomPushId()) {
        let mut suffix = id.suffix();
        let wrapped = suffix.increment();
        let next = PushId::from_parts(id.timestamp(), &suffix);
        if wrapped {
            prop_assert_eq!(suffix, Suffix::zero());
        } else {
            prop_assert!(next > id);
        }
    }

    #[test]
    fn manual_clock_monotonic(steps in proptest::collection::vec(0u64..3, 1..200), seed in any::<u64>()) {
        let clock = ManualClock::new(1_700_000_000_000);
        let generator = PushIdGenerator::with_source(clock.clone(), StdRng::seed_from_u64(seed));
        let mut prev = generator.generate();
        for step in steps {
            clock.advance(step);
            let id = generator.generate();
            prop_assert!(prev < id);
            prev = id;
        }
    }

    #[test]
    fn clock_regression_stays_monotonic(jumps in proptest::collection::vec(-5i64..5, 1..200), seed in any::<u64>()) {
        let clock = ManualClock::new(1_700_000_000_000);
        let generator = PushIdGenerator::with_source(clock.clone(), StdRng::seed_from_u64(seed));
        let mut now = 1_700_000_000_000i64;
        let mut prev = generator.generate();
        for jump in jumps {
            now += jump;
            clock.set(now as u64);
            let id = generator.generate();
            prop_assert!(prev < id);
            prop_assert!(id.timestamp() >= now as u64);
            prev = id;
        }
    }
}
