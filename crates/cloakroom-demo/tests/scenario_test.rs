//! Scenario driver tests

use cloakroom_demo::{GuestSpec, Scenario, ScenarioError, Step, run_scenario};
use proptest::prelude::*;

fn held<'a>(summary: &'a cloakroom_demo::Summary, name: &str) -> Option<&'a str> {
    summary.held.iter().find(|(n, _)| n == name).and_then(|(_, kind)| kind.as_deref())
}

#[test]
fn gala_evening_ends_as_narrated() {
    let summary = run_scenario(&Scenario::gala()).unwrap();

    // Trump reclaimed his coat, Jackson is still inside
    assert_eq!(
        summary.stored,
        vec![("Michael Jackson".to_string(), "Red Poncho Coat".to_string())]
    );
    assert_eq!(summary.present, vec!["Michael Jackson".to_string()]);
    assert_eq!(held(&summary, "Donald Trump"), Some("Black Business Coat"));
    assert_eq!(held(&summary, "Albert Einstein"), None);
    assert_eq!(held(&summary, "Michael Jackson"), None);
}

#[test]
fn guest_without_coat_visits() {
    let scenario = Scenario {
        guests: vec![GuestSpec::without_coat("Einstein")],
        steps: vec![Step::Arrive(0), Step::Depart(0)],
    };

    let summary = run_scenario(&scenario).unwrap();
    assert!(summary.stored.is_empty());
    assert_eq!(held(&summary, "Einstein"), None);
}

#[test]
fn coat_is_held_in_storage_while_inside() {
    let scenario = Scenario {
        guests: vec![GuestSpec::with_coat("Trump", "Black Business Coat")],
        steps: vec![Step::Arrive(0)],
    };

    let summary = run_scenario(&scenario).unwrap();
    assert_eq!(summary.stored, vec![("Trump".to_string(), "Black Business Coat".to_string())]);
    assert_eq!(held(&summary, "Trump"), None);
}

#[test]
fn coated_pair_departs_in_either_order() {
    let guests = vec![
        GuestSpec::without_coat("Einstein"),
        GuestSpec::with_coat("Trump", "Black Business Coat"),
        GuestSpec::with_coat("Jackson", "Red Poncho Coat"),
    ];
    let arrivals = vec![Step::Arrive(0), Step::Arrive(1), Step::Arrive(2)];

    for departures in [[Step::Depart(1), Step::Depart(2)], [Step::Depart(2), Step::Depart(1)]] {
        let mut steps = arrivals.clone();
        steps.extend(departures);
        let summary = run_scenario(&Scenario { guests: guests.clone(), steps }).unwrap();

        assert!(summary.stored.is_empty());
        assert_eq!(held(&summary, "Trump"), Some("Black Business Coat"));
        assert_eq!(held(&summary, "Jackson"), Some("Red Poncho Coat"));
        assert_eq!(summary.present, vec!["Einstein".to_string()]);
    }
}

#[test]
fn unknown_guest_is_reported() {
    let scenario = Scenario { guests: Vec::new(), steps: vec![Step::Depart(0)] };
    let result = run_scenario(&scenario);
    assert!(matches!(result, Err(ScenarioError::UnknownGuest { step: 0, guest: 0 })));
}

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    let names = ["Ada", "Grace", "Linus", "Barbara"];
    let guests = prop::collection::vec(prop::option::of("[A-Z][a-z]{2,6}"), 1..5).prop_map(
        move |coats| {
            coats
                .into_iter()
                .enumerate()
                .map(|(i, coat)| GuestSpec { name: names[i].to_string(), coat })
                .collect::<Vec<_>>()
        },
    );

    guests.prop_flat_map(|guests| {
        let len = guests.len();
        let step = (0..len, any::<bool>())
            .prop_map(|(i, arrive)| if arrive { Step::Arrive(i) } else { Step::Depart(i) });
        prop::collection::vec(step, 0..30)
            .prop_map(move |steps| Scenario { guests: guests.clone(), steps })
    })
}

proptest! {
    /// With distinct names every coat is either stored or back with its
    /// owner, and storage holds only coats of guests who were inside.
    #[test]
    fn prop_distinct_names_never_lose_coats(scenario in scenario_strategy()) {
        let summary = run_scenario(&scenario).unwrap();

        for spec in &scenario.guests {
            let Some(kind) = &spec.coat else { continue };
            let in_storage = summary.stored.iter().filter(|(owner, _)| *owner == spec.name).count();
            let in_hand = held(&summary, &spec.name) == Some(kind.as_str());
            prop_assert_eq!(in_storage + usize::from(in_hand), 1, "coat of {} lost", spec.name);
        }
    }
}
