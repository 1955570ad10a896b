//! Coat storage capability.
//!
//! The attendant only ever sees a `&dyn CoatStorage`, so any backend that
//! implements these three operations can stand behind a coat room.
//!
//! # Invariants
//!
//! - Order: `retrieve_coats()` returns coats in insertion order
//! - Exclusivity: a stored coat is not also held by a guest
//! - Identity: `remove_coat` matches by allocation, never by owner or kind

use std::rc::Rc;

use crate::{coat::Coat, error::CoatError};

/// Add, remove and list stored coats.
pub trait CoatStorage {
    /// Store a coat. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `CoatError::InvalidArgument` if `coat` is `None`; storage is
    /// left unchanged.
    fn add_coat(&self, coat: Option<Rc<Coat>>) -> Result<(), CoatError>;

    /// Remove the first stored entry that is `coat` itself.
    ///
    /// Absent coats are ignored.
    fn remove_coat(&self, coat: &Rc<Coat>);

    /// Snapshot of the stored coats in insertion order.
    fn retrieve_coats(&self) -> Vec<Rc<Coat>>;
}
