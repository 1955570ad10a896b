//! Coat value.

/// A coat handed in at the coat room.
///
/// Immutable after construction. Coats have no value equality: two coats
/// with the same owner and kind are still different coats, and storage
/// finds them by allocation (`Rc::ptr_eq`). Holders pass coats around as
/// `Rc<Coat>` and move that handle on every deposit or return.
#[derive(Debug)]
pub struct Coat {
    owner: String,
    kind: String,
}

impl Coat {
    /// Create a coat belonging to `owner`.
    pub fn new(owner: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { owner: owner.into(), kind: kind.into() }
    }

    /// Name of the guest the coat belongs to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Description of the coat, e.g. "Trench Coat".
    pub fn kind(&self) -> &str {
        &self.kind
    }
}
