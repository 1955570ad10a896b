//! Operations for model-based testing.
//!
//! Operations are generated by proptest (or the fuzzer) and applied to both
//! the model and the real coat room.

use arbitrary::Arbitrary;

/// Guest identifier (index into the roster).
pub type GuestId = u8;

/// Name pool. Rosters larger than the pool reuse names, which exercises
/// the name-only coat matching.
pub const NAMES: [&str; 3] = ["Ada", "Grace", "Linus"];

/// Name of the guest at `id`.
pub fn guest_name(id: GuestId) -> &'static str {
    NAMES[usize::from(id) % NAMES.len()]
}

/// Coat kinds used by generated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum CoatKind {
    /// A parka.
    Parka,
    /// A trench coat.
    TrenchCoat,
    /// A poncho.
    Poncho,
}

impl CoatKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 3] = [Self::Parka, Self::TrenchCoat, Self::Poncho];

    /// Human readable kind, as stored on the coat.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parka => "Parka",
            Self::TrenchCoat => "Trench Coat",
            Self::Poncho => "Poncho",
        }
    }

    /// Kind a guest starts with, if any. Even guests arrive wearing a coat.
    pub fn initial(id: GuestId) -> Option<Self> {
        (id % 2 == 0).then(|| Self::ALL[usize::from(id / 2) % Self::ALL.len()])
    }
}

/// Operations that can be applied to a coat room.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Guest walks in (the attendant takes their coat).
    Arrive {
        /// Guest arriving.
        guest_id: GuestId,
    },

    /// Guest walks out (the attendant returns a coat by name).
    Depart {
        /// Guest departing.
        guest_id: GuestId,
    },

    /// Guest is handed a brand new coat of their own, outside the room.
    HandCoat {
        /// Guest receiving the coat.
        guest_id: GuestId,
        /// Kind of the new coat.
        kind: CoatKind,
    },

    /// Guest puts their coat aside, outside the room.
    DropCoat {
        /// Guest dropping the coat.
        guest_id: GuestId,
    },
}

impl Operation {
    /// Guest the operation targets.
    pub fn guest_id(&self) -> GuestId {
        match self {
            Self::Arrive { guest_id }
            | Self::Depart { guest_id }
            | Self::HandCoat { guest_id, .. }
            | Self::DropCoat { guest_id } => *guest_id,
        }
    }

    /// Same operation retargeted at `guest_id % num_guests`.
    pub fn clamped(self, num_guests: usize) -> Self {
        let bound = u8::try_from(num_guests.max(1)).unwrap_or(u8::MAX);
        match self {
            Self::Arrive { guest_id } => Self::Arrive { guest_id: guest_id % bound },
            Self::Depart { guest_id } => Self::Depart { guest_id: guest_id % bound },
            Self::HandCoat { guest_id, kind } => Self::HandCoat { guest_id: guest_id % bound, kind },
            Self::DropCoat { guest_id } => Self::DropCoat { guest_id: guest_id % bound },
        }
    }
}

/// Result of applying an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Operation succeeded.
    Ok,

    /// Operation failed with expected error.
    Error(OperationError),
}

/// Expected errors that can occur during operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Guest id outside the roster.
    InvalidGuest,

    /// The real room returned an error.
    Rejected(String),
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, OperationResult::Ok)
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }
}
