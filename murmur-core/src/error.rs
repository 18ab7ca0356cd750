//! Error types for the simulation state machine.

use thiserror::Error;

/// Errors surfaced by [`crate::simulation::Simulation`].
///
/// The taxonomy is deliberately small: numeric edge cases (zero-length
/// vectors, empty neighbour sets) are handled with total fallbacks and never
/// produce an error value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// The frame history holds no frames. Reading or advancing an unseeded
    /// simulation is a contract violation; [`crate::simulation::Simulation::new`]
    /// seeds the history, so a properly constructed simulation never hits
    /// this.
    #[error("no frames have been pushed to the history")]
    EmptyHistory,
}
