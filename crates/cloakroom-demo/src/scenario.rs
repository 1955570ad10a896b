//! Scripted visits.
//!
//! A [`Scenario`] is a guest roster plus a list of steps that reference
//! guests by their roster index. Running it drives a freshly staffed
//! `CoatRoom` and reports where every coat ended up.

use std::rc::Rc;

use cloakroom_core::{CoatError, CoatRoom, CoatStorage, Guest, attendant};

/// A guest on the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSpec {
    /// Guest name.
    pub name: String,
    /// Coat worn on arrival.
    pub coat: Option<String>,
}

impl GuestSpec {
    /// Guest arriving without a coat.
    pub fn without_coat(name: impl Into<String>) -> Self {
        Self { name: name.into(), coat: None }
    }

    /// Guest arriving in a coat of `kind`.
    pub fn with_coat(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { name: name.into(), coat: Some(kind.into()) }
    }

    fn build(&self) -> Guest {
        self.coat.as_deref().map_or_else(
            || Guest::new(self.name.as_str()),
            |kind| Guest::with_coat(self.name.as_str(), kind),
        )
    }
}

/// One scripted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Roster guest at this index arrives.
    Arrive(usize),
    /// Roster guest at this index departs.
    Depart(usize),
}

/// Roster and steps for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scenario {
    /// Guests, referenced by index from `steps`.
    pub guests: Vec<GuestSpec>,
    /// Steps in execution order.
    pub steps: Vec<Step>,
}

impl Scenario {
    /// The fixed demo evening: three arrivals, two departures.
    pub fn gala() -> Self {
        Self {
            guests: vec![
                GuestSpec::without_coat("Albert Einstein"),
                GuestSpec::with_coat("Donald Trump", "Black Business Coat"),
                GuestSpec::with_coat("Michael Jackson", "Red Poncho Coat"),
            ],
            steps: vec![
                Step::Arrive(0),
                Step::Arrive(1),
                Step::Arrive(2),
                Step::Depart(1),
                Step::Depart(0),
            ],
        }
    }
}

/// Errors from running a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// A step references a guest outside the roster.
    #[error("step {step} references unknown guest {guest}")]
    UnknownGuest {
        /// Index of the offending step.
        step: usize,
        /// Roster index it referenced.
        guest: usize,
    },

    /// The coat room rejected an operation.
    #[error("coat room error: {0}")]
    Coat(#[from] CoatError),
}

/// Where things stand after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// `(owner, kind)` of every coat still in storage, insertion order.
    pub stored: Vec<(String, String)>,
    /// Names of guests still inside, arrival order.
    pub present: Vec<String>,
    /// `(name, kind held)` for every roster guest.
    pub held: Vec<(String, Option<String>)>,
}

/// Run `scenario` against a new coat room with the attendant on duty.
///
/// Steps are validated up front, so an out-of-roster reference fails
/// before any guest moves.
///
/// # Errors
///
/// Returns `ScenarioError::UnknownGuest` for a bad step and
/// `ScenarioError::Coat` if a handler fails.
pub fn run_scenario(scenario: &Scenario) -> Result<Summary, ScenarioError> {
    for (step, action) in scenario.steps.iter().enumerate() {
        let (Step::Arrive(guest) | Step::Depart(guest)) = *action;
        if guest >= scenario.guests.len() {
            return Err(ScenarioError::UnknownGuest { step, guest });
        }
    }

    let room = CoatRoom::new();
    let shift = attendant::assign(&room);
    let guests: Vec<Rc<Guest>> = scenario.guests.iter().map(|g| Rc::new(g.build())).collect();
    tracing::debug!(guests = guests.len(), steps = scenario.steps.len(), "scenario starting");

    for action in &scenario.steps {
        match *action {
            Step::Arrive(index) => room.guest_came(&guests[index])?,
            Step::Depart(index) => room.guest_left(&guests[index])?,
        }
    }

    let summary = Summary {
        stored: room
            .retrieve_coats()
            .iter()
            .map(|c| (c.owner().to_string(), c.kind().to_string()))
            .collect(),
        present: room.present_guests().iter().map(|g| g.name().to_string()).collect(),
        held: guests
            .iter()
            .map(|g| (g.name().to_string(), g.coat().map(|c| c.kind().to_string())))
            .collect(),
    };
    shift.end(&room);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gala_roster_matches_steps() {
        let gala = Scenario::gala();
        assert_eq!(gala.guests.len(), 3);
        assert_eq!(gala.steps.iter().filter(|s| matches!(s, Step::Arrive(_))).count(), 3);
        assert_eq!(gala.steps.iter().filter(|s| matches!(s, Step::Depart(_))).count(), 2);
    }

    #[test]
    fn unknown_guest_fails_before_running() {
        let scenario = Scenario {
            guests: vec![GuestSpec::without_coat("Alice")],
            steps: vec![Step::Arrive(0), Step::Depart(3)],
        };

        let result = run_scenario(&scenario);
        assert!(matches!(result, Err(ScenarioError::UnknownGuest { step: 1, guest: 3 })));
    }

    #[test]
    fn empty_scenario_has_empty_summary() {
        let summary = run_scenario(&Scenario::default()).unwrap();
        assert!(summary.stored.is_empty());
        assert!(summary.present.is_empty());
        assert!(summary.held.is_empty());
    }

    #[test]
    fn error_display() {
        let err = ScenarioError::UnknownGuest { step: 2, guest: 7 };
        assert_eq!(err.to_string(), "step 2 references unknown guest 7");
    }
}
