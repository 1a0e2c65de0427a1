//! Application layer - orchestrates domain derivations and port calls.
//!
//! - `DashboardController` - loads, writes and the error policy around them
//! - `MutationGate` - one in-flight request per mutation kind

mod dashboard_controller;
mod mutation_gate;

pub use dashboard_controller::{
    DashboardController, GenerateOutcome, ResetOutcome, WriteOutcome, GENERATE_FAILED_MESSAGE,
    RESET_CONFIRM_PROMPT, RESET_FAILED_MESSAGE, RESET_SUCCEEDED_MESSAGE,
};
pub use mutation_gate::{MutationGate, MutationGuard};
