//! Guest notifications.
//!
//! A [`Channel`] is an ordered registry of handlers. Firing is synchronous:
//! each handler runs to completion on the caller's thread before the next
//! one starts, and the first error stops the dispatch and is returned to
//! whoever fired.
//!
//! ## Design
//!
//! - Snapshot dispatch: the handler list is copied before firing, so a
//!   handler may subscribe or unsubscribe without a borrow conflict. Changes
//!   made during a fire apply from the next fire on.
//! - Explicit ids: `subscribe` hands back a [`SubscriptionId`], which is the
//!   only way to unsubscribe.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use crate::{error::CoatError, guest::Guest, storage::CoatStorage};

/// Handler invoked for every fired notification.
pub type GuestHandler = Rc<dyn Fn(&GuestEvent<'_>) -> Result<(), CoatError>>;

/// The two notifications a coat room emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// A guest entered the venue.
    Arrived,
    /// A guest left the venue.
    Departed,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrived => write!(f, "guest arrived"),
            Self::Departed => write!(f, "guest departed"),
        }
    }
}

/// Handle returned by [`Channel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notification payload: the storage to work with and the affected guest.
pub struct GuestEvent<'a> {
    /// Storage of the room that fired the notification.
    pub storage: Option<&'a dyn CoatStorage>,
    /// Guest who arrived or departed.
    pub guest: Rc<Guest>,
}

impl<'a> GuestEvent<'a> {
    /// Build a payload, rejecting an absent storage reference.
    ///
    /// # Errors
    ///
    /// Returns `CoatError::InvalidArgument` if `storage` is `None`.
    pub fn new(storage: Option<&'a dyn CoatStorage>, guest: Rc<Guest>) -> Result<Self, CoatError> {
        let storage = storage.ok_or_else(CoatError::missing_storage)?;
        Ok(Self::with_storage(storage, guest))
    }

    /// Build a payload from a storage reference that is known to exist.
    pub fn with_storage(storage: &'a dyn CoatStorage, guest: Rc<Guest>) -> Self {
        Self { storage: Some(storage), guest }
    }

    /// The storage reference.
    ///
    /// # Errors
    ///
    /// Returns `CoatError::InvalidArgument` if the payload carries none.
    pub fn storage(&self) -> Result<&'a dyn CoatStorage, CoatError> {
        self.storage.ok_or_else(CoatError::missing_storage)
    }
}

impl fmt::Debug for GuestEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestEvent")
            .field("has_storage", &self.storage.is_some())
            .field("guest", &self.guest)
            .finish()
    }
}

/// Ordered handler registry for one notification.
#[derive(Default)]
pub struct Channel {
    handlers: RefCell<Vec<(SubscriptionId, GuestHandler)>>,
    next_id: Cell<u64>,
}

impl Channel {
    /// Create a channel with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler; it runs after every handler subscribed before it.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&GuestEvent<'_>) -> Result<(), CoatError> + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let handler: GuestHandler = Rc::new(handler);
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    /// Remove a handler. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        handlers
            .iter()
            .position(|(sub, _)| *sub == id)
            .map(|index| {
                handlers.remove(index);
            })
            .is_some()
    }

    /// Number of subscribed handlers.
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Whether no handler is subscribed.
    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    /// Invoke every subscribed handler in subscription order.
    ///
    /// # Errors
    ///
    /// Returns the first handler error; later handlers are not invoked.
    pub fn fire(&self, event: &GuestEvent<'_>) -> Result<(), CoatError> {
        let snapshot: Vec<(SubscriptionId, GuestHandler)> = self.handlers.borrow().clone();

        for (id, handler) in snapshot {
            tracing::trace!(subscription = %id, guest = event.guest.name(), "dispatching");
            handler(event)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel").field("subscribers", &self.len()).finish()
    }
}
