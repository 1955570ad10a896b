//! Coat room attendant.
//!
//! Two stateless handlers: one takes a guest's coat on arrival, the other
//! hands it back on departure. Both work only through the
//! [`CoatStorage`](crate::CoatStorage) carried in the payload, never through
//! the concrete room.
//!
//! Coats are returned by owner name. The first stored coat whose owner
//! equals the departing guest's name is handed over, even if a different
//! guest with the same name deposited it.

use std::fmt;

use crate::{
    error::CoatError,
    notify::{GuestEvent, Notification, SubscriptionId},
    room::CoatRoom,
};

/// Things the attendant says, in the order a visit produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remark {
    /// Greeting on arrival.
    Greeting {
        /// Guest being greeted.
        name: String,
    },
    /// The arriving guest's coat went into storage.
    CoatDeposited,
    /// The arriving guest had no coat.
    EnjoyVisit,
    /// Greeting on departure.
    WelcomeBack {
        /// Guest leaving.
        name: String,
    },
    /// A stored coat was handed back.
    CoatReturned,
    /// No coat was on file for the departing guest.
    Farewell,
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greeting { name } => {
                write!(f, "Greetings {name}. Do you have any coat that I can take?")
            },
            Self::CoatDeposited => {
                write!(f, "Your coat has been deposited in the coat room. Enjoy your visit!")
            },
            Self::EnjoyVisit => write!(f, "Enjoy your visit!"),
            Self::WelcomeBack { name } => {
                write!(f, "Welcome back {name}. Do you have any coat we need to return to you?")
            },
            Self::CoatReturned => {
                write!(f, "Here's your coat. Goodbye and we hope you've enjoyed the visit!")
            },
            Self::Farewell => write!(f, "Goodbye, and we hope you've enjoyed the visit!"),
        }
    }
}

fn say(remarks: &[Remark]) {
    for remark in remarks {
        tracing::info!("{remark}");
    }
}

/// Arrival policy: store the guest's coat, if any, and say so.
///
/// Returns the remarks for the caller to deliver.
///
/// # Errors
///
/// Returns `CoatError::InvalidArgument` if the payload carries no storage,
/// or whatever the storage returns from `add_coat`.
pub fn take_coat(event: &GuestEvent<'_>) -> Result<Vec<Remark>, CoatError> {
    let storage = event.storage()?;
    let guest = &event.guest;
    let mut remarks = vec![Remark::Greeting { name: guest.name().to_string() }];

    match guest.coat() {
        Some(coat) => {
            storage.add_coat(Some(coat))?;
            guest.leave_coat();
            remarks.push(Remark::CoatDeposited);
        },
        None => remarks.push(Remark::EnjoyVisit),
    }

    Ok(remarks)
}

/// Departure policy: hand back the first coat on file under the guest's
/// name, and say so.
///
/// Returns the remarks for the caller to deliver.
///
/// # Errors
///
/// Returns `CoatError::InvalidArgument` if the payload carries no storage.
pub fn return_coat(event: &GuestEvent<'_>) -> Result<Vec<Remark>, CoatError> {
    let storage = event.storage()?;
    let guest = &event.guest;
    let mut remarks = vec![Remark::WelcomeBack { name: guest.name().to_string() }];

    let on_file = storage.retrieve_coats().into_iter().find(|coat| coat.owner() == guest.name());
    match on_file {
        Some(coat) => {
            storage.remove_coat(&coat);
            guest.receive_coat(coat);
            remarks.push(Remark::CoatReturned);
        },
        None => remarks.push(Remark::Farewell),
    }

    Ok(remarks)
}

/// Arrival handler: [`take_coat`], with the remarks logged at info level.
pub fn greet_guest_and_take_coat(event: &GuestEvent<'_>) -> Result<(), CoatError> {
    say(&take_coat(event)?);
    Ok(())
}

/// Departure handler: [`return_coat`], with the remarks logged at info
/// level.
pub fn farewell_guest_and_return_coat(event: &GuestEvent<'_>) -> Result<(), CoatError> {
    say(&return_coat(event)?);
    Ok(())
}

/// The attendant's subscriptions on one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    /// Subscription of [`greet_guest_and_take_coat`].
    pub arrival: SubscriptionId,
    /// Subscription of [`farewell_guest_and_return_coat`].
    pub departure: SubscriptionId,
}

impl Shift {
    /// Unsubscribe both handlers from `room`.
    pub fn end(self, room: &CoatRoom) {
        room.unsubscribe(Notification::Arrived, self.arrival);
        room.unsubscribe(Notification::Departed, self.departure);
    }
}

/// Put the attendant on duty: subscribe both handlers to `room`.
pub fn assign(room: &CoatRoom) -> Shift {
    let arrival = room.subscribe(Notification::Arrived, greet_guest_and_take_coat);
    let departure = room.subscribe(Notification::Departed, farewell_guest_and_return_coat);
    Shift { arrival, departure }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::guest::Guest;

    #[test]
    fn greeting_names_the_guest() {
        let remark = Remark::Greeting { name: "Alice".to_string() };
        assert_eq!(remark.to_string(), "Greetings Alice. Do you have any coat that I can take?");
    }

    #[test]
    fn welcome_back_names_the_guest() {
        let remark = Remark::WelcomeBack { name: "Bob".to_string() };
        assert_eq!(
            remark.to_string(),
            "Welcome back Bob. Do you have any coat we need to return to you?"
        );
    }

    #[test]
    fn handlers_reject_missing_storage() {
        let room = CoatRoom::new();
        let guest = Rc::new(Guest::with_coat("Alice", "Parka"));
        let mut event = GuestEvent::with_storage(&room, Rc::clone(&guest));
        event.storage = None;

        let arrived = greet_guest_and_take_coat(&event);
        assert!(matches!(arrived, Err(CoatError::InvalidArgument { argument: "storage" })));
        assert!(guest.has_coat());

        let departed = farewell_guest_and_return_coat(&event);
        assert!(matches!(departed, Err(CoatError::InvalidArgument { argument: "storage" })));
    }

    #[test]
    fn visit_transcript() {
        let room = CoatRoom::new();
        let ada = Rc::new(Guest::with_coat("Ada", "Parka"));
        let grace = Rc::new(Guest::new("Grace"));

        let mut transcript = Vec::new();
        for guest in [&ada, &grace] {
            transcript
                .extend(take_coat(&GuestEvent::with_storage(&room, Rc::clone(guest))).unwrap());
        }
        for guest in [&grace, &ada] {
            transcript
                .extend(return_coat(&GuestEvent::with_storage(&room, Rc::clone(guest))).unwrap());
        }

        let lines: Vec<String> = transcript.iter().map(ToString::to_string).collect();
        insta::assert_snapshot!(lines.join("\n"), @r"
        Greetings Ada. Do you have any coat that I can take?
        Your coat has been deposited in the coat room. Enjoy your visit!
        Greetings Grace. Do you have any coat that I can take?
        Enjoy your visit!
        Welcome back Grace. Do you have any coat we need to return to you?
        Goodbye, and we hope you've enjoyed the visit!
        Welcome back Ada. Do you have any coat we need to return to you?
        Here's your coat. Goodbye and we hope you've enjoyed the visit!
        ");
    }

    #[test]
    fn assign_then_end_leaves_no_subscribers() {
        let room = CoatRoom::new();
        let shift = assign(&room);
        assert_eq!(room.subscriber_count(Notification::Arrived), 1);
        assert_eq!(room.subscriber_count(Notification::Departed), 1);

        shift.end(&room);
        assert_eq!(room.subscriber_count(Notification::Arrived), 0);
        assert_eq!(room.subscriber_count(Notification::Departed), 0);
    }
}
