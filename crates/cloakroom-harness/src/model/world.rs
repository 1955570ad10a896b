//! Model world - the reference coat room.
//!
//! Coats are plain values here: a coat is its owner and kind, storage is a
//! vector, and the attendant's policy is spelled out inline. This is the
//! oracle the real `CoatRoom` is checked against.

use super::operation::{CoatKind, GuestId, Operation, OperationError, OperationResult, guest_name};

/// Coat in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCoat {
    /// Owner name.
    pub owner: String,
    /// Coat kind.
    pub kind: String,
}

impl ModelCoat {
    /// Coat of `kind` owned by guest `id`.
    pub fn for_guest(id: GuestId, kind: CoatKind) -> Self {
        Self { owner: guest_name(id).to_string(), kind: kind.as_str().to_string() }
    }
}

/// Observable state for oracle comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Stored coats in insertion order.
    pub stored: Vec<ModelCoat>,
    /// Coat held by each guest, indexed by `GuestId`.
    pub held: Vec<Option<ModelCoat>>,
    /// Present guests in arrival order.
    pub present: Vec<GuestId>,
}

/// Model world - the reference implementation.
#[derive(Debug, Clone)]
pub struct ModelWorld {
    stored: Vec<ModelCoat>,
    held: Vec<Option<ModelCoat>>,
    present: Vec<GuestId>,
}

impl ModelWorld {
    /// Create a model with `num_guests` guests, none inside yet.
    ///
    /// Guest ids beyond `u8::MAX` are not representable and are dropped.
    pub fn new(num_guests: usize) -> Self {
        let held = (0..=GuestId::MAX)
            .take(num_guests)
            .map(|id| CoatKind::initial(id).map(|kind| ModelCoat::for_guest(id, kind)))
            .collect();

        Self { stored: Vec::new(), held, present: Vec::new() }
    }

    /// Number of guests in the roster.
    pub fn num_guests(&self) -> usize {
        self.held.len()
    }

    /// Apply an operation and return the result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        let id = op.guest_id();
        let index = usize::from(id);
        if index >= self.held.len() {
            return OperationResult::Error(OperationError::InvalidGuest);
        }

        match op {
            Operation::Arrive { .. } => {
                self.present.push(id);
                if let Some(coat) = self.held[index].take() {
                    self.stored.push(coat);
                }
            },
            Operation::Depart { .. } => {
                if let Some(pos) = self.present.iter().position(|g| *g == id) {
                    self.present.remove(pos);
                }
                let name = guest_name(id);
                if let Some(pos) = self.stored.iter().position(|c| c.owner == name) {
                    self.held[index] = Some(self.stored.remove(pos));
                }
            },
            Operation::HandCoat { kind, .. } => {
                self.held[index] = Some(ModelCoat::for_guest(id, *kind));
            },
            Operation::DropCoat { .. } => {
                self.held[index] = None;
            },
        }

        OperationResult::Ok
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            stored: self.stored.clone(),
            held: self.held.clone(),
            present: self.present.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrival_moves_coat_into_storage() {
        let mut model = ModelWorld::new(2);
        model.apply(&Operation::Arrive { guest_id: 0 });

        let state = model.observable_state();
        assert_eq!(state.stored, vec![ModelCoat::for_guest(0, CoatKind::Parka)]);
        assert_eq!(state.held, vec![None, None]);
        assert_eq!(state.present, vec![0]);
    }

    #[test]
    fn departure_returns_first_coat_by_name() {
        // Guests 0 and 3 are both "Ada"
        let mut model = ModelWorld::new(4);
        model.apply(&Operation::HandCoat { guest_id: 3, kind: CoatKind::Poncho });
        model.apply(&Operation::Arrive { guest_id: 0 });
        model.apply(&Operation::Arrive { guest_id: 3 });

        model.apply(&Operation::Depart { guest_id: 3 });

        let state = model.observable_state();
        assert_eq!(state.held[3], Some(ModelCoat::for_guest(0, CoatKind::Parka)));
        assert_eq!(state.stored, vec![ModelCoat::for_guest(3, CoatKind::Poncho)]);
    }

    #[test]
    fn out_of_roster_guest_is_rejected() {
        let mut model = ModelWorld::new(2);
        let result = model.apply(&Operation::Arrive { guest_id: 5 });
        assert_eq!(result, OperationResult::Error(OperationError::InvalidGuest));
        assert!(model.observable_state().present.is_empty());
    }
}
