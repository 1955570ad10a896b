//! Coat Room
//!
//! In-memory coat storage plus guest presence tracking.
//!
//! ## Responsibilities
//!
//! - Coat Storage: Implements [`CoatStorage`] over an insertion-ordered list
//! - Presence: Tracks which guests are currently inside
//! - Notifications: Fires "arrived" and "departed" to subscribed handlers
//!
//! ## Design
//!
//! - Single-threaded: state lives in `RefCell`s, so the room is neither
//!   `Send` nor `Sync`
//! - No borrow is held while handlers run, which lets a handler call back
//!   into the storage operations of the room that notified it

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    coat::Coat,
    error::CoatError,
    guest::Guest,
    notify::{Channel, GuestEvent, Notification, SubscriptionId},
    storage::CoatStorage,
};

/// Coat storage with guest presence and arrival/departure notifications.
#[derive(Default)]
pub struct CoatRoom {
    /// Stored coats, insertion order
    coats: RefCell<Vec<Rc<Coat>>>,
    /// Guests currently inside, arrival order
    guests: RefCell<Vec<Rc<Guest>>>,
    arrivals: Channel,
    departures: Channel,
}

impl CoatRoom {
    /// Create an empty coat room with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    fn channel(&self, notification: Notification) -> &Channel {
        match notification {
            Notification::Arrived => &self.arrivals,
            Notification::Departed => &self.departures,
        }
    }

    /// Subscribe `handler` to `notification`.
    pub fn subscribe<F>(&self, notification: Notification, handler: F) -> SubscriptionId
    where
        F: Fn(&GuestEvent<'_>) -> Result<(), CoatError> + 'static,
    {
        let id = self.channel(notification).subscribe(handler);
        tracing::debug!(%notification, subscription = %id, "handler subscribed");
        id
    }

    /// Unsubscribe a handler. Returns false if it was not subscribed to
    /// `notification`.
    pub fn unsubscribe(&self, notification: Notification, id: SubscriptionId) -> bool {
        let removed = self.channel(notification).unsubscribe(id);
        if removed {
            tracing::debug!(%notification, subscription = %id, "handler unsubscribed");
        }
        removed
    }

    /// Number of handlers subscribed to `notification`.
    pub fn subscriber_count(&self, notification: Notification) -> usize {
        self.channel(notification).len()
    }

    /// Record `guest` as present, then notify arrival subscribers.
    ///
    /// # Errors
    ///
    /// Returns the first handler error. The guest stays recorded as present
    /// and the remaining handlers are skipped.
    pub fn guest_came(&self, guest: &Rc<Guest>) -> Result<(), CoatError> {
        self.guests.borrow_mut().push(Rc::clone(guest));
        tracing::debug!(guest = guest.name(), "guest came");

        self.arrivals.fire(&GuestEvent::with_storage(self, Rc::clone(guest)))
    }

    /// Drop the first presence record of `guest`, then notify departure
    /// subscribers. Absent guests still trigger the notification.
    ///
    /// # Errors
    ///
    /// Returns the first handler error; the remaining handlers are skipped.
    pub fn guest_left(&self, guest: &Rc<Guest>) -> Result<(), CoatError> {
        let was_present = {
            let mut guests = self.guests.borrow_mut();
            guests
                .iter()
                .position(|g| Rc::ptr_eq(g, guest))
                .map(|index| {
                    guests.remove(index);
                })
                .is_some()
        };
        tracing::debug!(guest = guest.name(), was_present, "guest left");

        self.departures.fire(&GuestEvent::with_storage(self, Rc::clone(guest)))
    }

    /// Snapshot of the guests inside, in arrival order.
    pub fn present_guests(&self) -> Vec<Rc<Guest>> {
        self.guests.borrow().clone()
    }

    /// Whether this very guest is inside.
    pub fn is_present(&self, guest: &Rc<Guest>) -> bool {
        self.guests.borrow().iter().any(|g| Rc::ptr_eq(g, guest))
    }
}

impl CoatStorage for CoatRoom {
    fn add_coat(&self, coat: Option<Rc<Coat>>) -> Result<(), CoatError> {
        let coat = coat.ok_or_else(CoatError::missing_coat)?;
        tracing::debug!(owner = coat.owner(), kind = coat.kind(), "coat stored");
        self.coats.borrow_mut().push(coat);
        Ok(())
    }

    fn remove_coat(&self, coat: &Rc<Coat>) {
        let mut coats = self.coats.borrow_mut();
        if let Some(index) = coats.iter().position(|c| Rc::ptr_eq(c, coat)) {
            coats.remove(index);
            tracing::debug!(owner = coat.owner(), kind = coat.kind(), "coat removed");
        }
    }

    fn retrieve_coats(&self) -> Vec<Rc<Coat>> {
        self.coats.borrow().clone()
    }
}

impl fmt::Debug for CoatRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoatRoom")
            .field("coat_count", &self.coats.borrow().len())
            .field("guest_count", &self.guests.borrow().len())
            .field("arrivals", &self.arrivals)
            .field("departures", &self.departures)
            .finish()
    }
}
