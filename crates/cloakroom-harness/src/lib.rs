//! Model-based testing harness for the coat room.
//!
//! `ModelWorld` is a value-only reference implementation; `RoomWorld` wraps
//! a real, attendant-staffed `CoatRoom`. Both accept the same `Operation`s
//! and expose the same `ObservableState`, so a test (or the fuzzer) can
//! apply one sequence to both and compare.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
mod real;

pub use model::{
    CoatKind, GuestId, ModelCoat, ModelWorld, ObservableState, Operation, OperationError,
    OperationResult,
};
pub use real::RoomWorld;
