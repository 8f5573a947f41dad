//! The engine-session seam.

use crate::action::FunctionCall;
use crate::error::SessionError;
use crate::observation::{RawObservation, StepOutcome};

/// A live session with the external RTS engine.
///
/// This trait decouples the adapter from the engine process: the
/// adapter only ever sees raw observations coming out and structured
/// commands going in. Test suites substitute mock implementations.
pub trait GameSession {
    /// Start (or restart) an episode, yielding the initial observation.
    fn reset(&mut self) -> Result<RawObservation, SessionError>;

    /// Submit a command and advance the engine by one step.
    ///
    /// The adapter performs no legality check on `call`; the caller is
    /// expected to have consulted the availability mask. An illegal
    /// command is the engine's failure mode and surfaces as
    /// [`SessionError::CommandRejected`].
    fn step(&mut self, call: &FunctionCall) -> Result<StepOutcome, SessionError>;
}
