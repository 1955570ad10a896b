//! Fuzz target for the staffed [`CoatRoom`]
//!
//! Coats must only ever move, never duplicate or vanish into two places.
//!
//! # Strategy
//!
//! - Operation sequences: Arbitrary arrivals, departures, coat hand-outs and
//!   drops over a small roster with repeating names
//! - Repeat visits: Guests arrive twice or leave without arriving
//!
//! # Invariants
//!
//! - Real room state equals the reference model after every operation
//! - No coat is stored twice or both stored and held
//! - Attendant subscriptions are untouched by guest traffic
//! - NEVER panic on any operation sequence

#![no_main]

use arbitrary::Arbitrary;
use cloakroom_core::Notification;
use cloakroom_harness::{ModelWorld, Operation, RoomWorld};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    /// Roster size (clamped to 1..=8).
    num_guests: u8,
    /// Operation sequence to apply.
    ops: Vec<Operation>,
}

fuzz_target!(|input: FuzzInput| {
    let num_guests = usize::from(input.num_guests % 8) + 1;
    let mut model = ModelWorld::new(num_guests);
    let real = RoomWorld::new(num_guests);

    for (i, op) in input.ops.into_iter().enumerate() {
        let op = op.clamped(num_guests);

        let model_result = model.apply(&op);
        let real_result = real.apply(&op);
        assert_eq!(model_result, real_result, "result divergence at {i}: {op:?}");
        assert_eq!(
            model.observable_state(),
            real.observable_state(),
            "state divergence at {i}: {op:?}"
        );

        if let Err(violation) = real.check_exclusive_ownership() {
            panic!("ownership violated at {i}: {violation}");
        }
    }

    assert_eq!(real.room().subscriber_count(Notification::Arrived), 1);
    assert_eq!(real.room().subscriber_count(Notification::Departed), 1);
});
