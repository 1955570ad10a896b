//! Reference model for model-based testing.
//!
//! The model captures what a coat room does with plain values and no
//! shared ownership, so it can be trusted by inspection.

pub mod operation;
mod world;

pub use operation::{
    CoatKind, GuestId, NAMES, Operation, OperationError, OperationResult, guest_name,
};
pub use world::{ModelCoat, ModelWorld, ObservableState};
