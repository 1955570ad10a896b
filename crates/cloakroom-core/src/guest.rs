//! Guest identity and coat possession.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::coat::Coat;

/// A venue guest.
///
/// Guests are shared as `Rc<Guest>` between whoever drives the visit and
/// the coat room's presence list, so the held coat sits behind a `RefCell`.
/// Identity is the allocation: two guests may share a name.
pub struct Guest {
    name: String,
    coat: RefCell<Option<Rc<Coat>>>,
}

impl Guest {
    /// Create a guest arriving without a coat.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), coat: RefCell::new(None) }
    }

    /// Create a guest wearing a coat of `kind`, owned by the guest.
    pub fn with_coat(name: impl Into<String>, kind: impl Into<String>) -> Self {
        let name = name.into();
        let coat = Rc::new(Coat::new(name.clone(), kind));
        Self { name, coat: RefCell::new(Some(coat)) }
    }

    /// Guest name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The coat currently held, if any.
    pub fn coat(&self) -> Option<Rc<Coat>> {
        self.coat.borrow().clone()
    }

    /// Whether the guest currently holds a coat.
    pub fn has_coat(&self) -> bool {
        self.coat.borrow().is_some()
    }

    /// Hand the coat over. Idempotent.
    pub fn leave_coat(&self) {
        *self.coat.borrow_mut() = None;
    }

    /// Take `coat`, replacing whatever the guest held before.
    ///
    /// The caller must already have removed `coat` from storage; a replaced
    /// coat is dropped, not returned anywhere.
    pub fn receive_coat(&self, coat: Rc<Coat>) {
        *self.coat.borrow_mut() = Some(coat);
    }
}

impl fmt::Debug for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guest")
            .field("name", &self.name)
            .field("coat", &self.coat.borrow())
            .finish()
    }
}
