#![cfg(kani)]

use crate::id::PushId;
use crate::suffix::{Suffix, SUFFIX_LEN};

fn any_suffix() -> Suffix {
    let digits: [u8; SUFFIX_LEN] = kani::any();
    kani::assume(digits.iter().all(|&d| d < 64));
    Suffix::from_digits(digits).unwrap()
}

#[kani::proof]
#[kani::unwind(13)]
fn increment_stays_in_range() {
    let mut suffix = any_suffix();
    suffix.increment();
    assert!(suffix.digits().iter().all(|&d| d < 64));
}

#[kani::proof]
#[kani::unwind(21)]
fn increment_orders_ids() {
    let timestamp_ms: u64 = kani::any();
    kani::assume(timestamp_ms <= crate::id::TIMESTAMP_MAX);
    let before = any_suffix();
    let mut after = before;
    let wrapped = after.increment();

    let a = PushId::from_parts(timestamp_ms, &before);
    let b = PushId::from_parts(timestamp_ms, &after);
    if wrapped {
        assert!(after == Suffix::zero());
    } else {
        assert!(a < b);
    }
}
