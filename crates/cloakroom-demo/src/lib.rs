//! Coat room demo driver.
//!
//! Staffs a coat room with the attendant and walks a scripted roster of
//! guests through it. The attendant's remarks are `tracing` events, so the
//! binary's subscriber is what turns them into console narration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod scenario;

pub use config::DemoConfig;
pub use scenario::{GuestSpec, Scenario, ScenarioError, Step, Summary, run_scenario};

/// Log `summary` at info level, one event per line of interest.
pub fn log_summary(summary: &Summary) {
    tracing::info!(stored = summary.stored.len(), present = summary.present.len(), "evening over");

    for (owner, kind) in &summary.stored {
        tracing::info!(%owner, %kind, "coat still in storage");
    }
    for name in &summary.present {
        tracing::info!(%name, "guest still inside");
    }
    for (name, kind) in &summary.held {
        let kind = kind.as_deref().unwrap_or("none");
        tracing::info!(%name, kind, "coat in hand");
    }
}
