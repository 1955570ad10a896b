//! Real coat room wrapper that mirrors `ModelWorld`'s interface.

use std::rc::Rc;

use cloakroom_core::{Coat, CoatRoom, CoatStorage, Guest, attendant};

use crate::model::{
    CoatKind, GuestId, ModelCoat, ObservableState, Operation, OperationError, OperationResult,
    guest_name,
};

/// A staffed `CoatRoom` and its guest roster.
#[derive(Debug)]
pub struct RoomWorld {
    room: CoatRoom,
    guests: Vec<Rc<Guest>>,
}

impl RoomWorld {
    /// Create a staffed room with `num_guests` guests, none inside yet.
    pub fn new(num_guests: usize) -> Self {
        let room = CoatRoom::new();
        attendant::assign(&room);

        let guests = (0..=GuestId::MAX)
            .take(num_guests)
            .map(|id| {
                let guest = match CoatKind::initial(id) {
                    Some(kind) => Guest::with_coat(guest_name(id), kind.as_str()),
                    None => Guest::new(guest_name(id)),
                };
                Rc::new(guest)
            })
            .collect();

        Self { room, guests }
    }

    /// The wrapped room.
    pub fn room(&self) -> &CoatRoom {
        &self.room
    }

    /// Apply an operation and return the result.
    pub fn apply(&self, op: &Operation) -> OperationResult {
        let id = op.guest_id();
        let Some(guest) = self.guests.get(usize::from(id)) else {
            return OperationResult::Error(OperationError::InvalidGuest);
        };

        let result = match op {
            Operation::Arrive { .. } => self.room.guest_came(guest),
            Operation::Depart { .. } => self.room.guest_left(guest),
            Operation::HandCoat { kind, .. } => {
                guest.receive_coat(Rc::new(Coat::new(guest.name(), kind.as_str())));
                Ok(())
            },
            Operation::DropCoat { .. } => {
                guest.leave_coat();
                Ok(())
            },
        };

        match result {
            Ok(()) => OperationResult::Ok,
            Err(e) => OperationResult::Error(OperationError::Rejected(e.to_string())),
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        let stored = self.room.retrieve_coats().iter().map(|c| model_coat(c)).collect();
        let held = self.guests.iter().map(|g| g.coat().map(|c| model_coat(&c))).collect();
        let present = self
            .room
            .present_guests()
            .iter()
            .filter_map(|p| self.guests.iter().position(|g| Rc::ptr_eq(g, p)))
            .filter_map(|index| GuestId::try_from(index).ok())
            .collect();

        ObservableState { stored, held, present }
    }

    /// Verify that no coat is in two places at once.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violation found.
    pub fn check_exclusive_ownership(&self) -> Result<(), String> {
        let stored = self.room.retrieve_coats();

        for (i, coat) in stored.iter().enumerate() {
            if stored[..i].iter().any(|other| Rc::ptr_eq(other, coat)) {
                return Err(format!("coat {i} ({}) stored twice", coat.owner()));
            }
        }

        for (id, guest) in self.guests.iter().enumerate() {
            if let Some(held) = guest.coat()
                && stored.iter().any(|c| Rc::ptr_eq(c, &held))
            {
                return Err(format!(
                    "guest {id} ({}) holds a coat that is also stored",
                    guest.name()
                ));
            }
        }

        Ok(())
    }
}

fn model_coat(coat: &Coat) -> ModelCoat {
    ModelCoat { owner: coat.owner().to_string(), kind: coat.kind().to_string() }
}
