//! Coat room core.
//!
//! Guests arrive, possibly wearing a coat; an attendant reacting to room
//! notifications stores the coat and hands it back when the guest leaves.
//!
//! ## Architecture
//!
//! ```text
//! cloakroom-core
//!   ├─ Coat           (immutable owner + kind)
//!   ├─ Guest          (name + optional held coat)
//!   ├─ CoatStorage    (add / remove / list capability)
//!   ├─ CoatRoom       (storage + presence + notifications)
//!   ├─ Channel        (ordered, fail-fast handler registry)
//!   └─ attendant      (arrival / departure handlers)
//! ```
//!
//! Everything is synchronous and single-threaded: firing a notification
//! runs every handler on the caller's stack before returning.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod attendant;
mod coat;
mod error;
mod guest;
mod notify;
mod room;
mod storage;

pub use attendant::{Remark, Shift};
pub use coat::Coat;
pub use error::CoatError;
pub use guest::Guest;
pub use notify::{Channel, GuestEvent, GuestHandler, Notification, SubscriptionId};
pub use room::CoatRoom;
pub use storage::CoatStorage;
