//! Thin episode driver: reset, encode, select, decode, step.
//!
//! The driver owns nothing but the loop; the engine stays behind
//! [`GameSession`] and the policy behind [`Policy`]. Failures are
//! immediate and propagate to the caller, who decides whether to abort
//! the episode or the process.

use log::{debug, warn};
use std::error::Error;
use std::fmt;

use vantage_core::{DecodeError, EncodeError, FunctionId, GameSession, SessionError};
use vantage_obs::EncodedTensor;

use crate::handler::GameInterfaceHandler;

/// Selects one discrete action per tick from encoded inputs.
pub trait Policy {
    /// Choose `(function, flat spatial target)` from the tick's screen
    /// and minimap tensors and the availability mask.
    fn select(
        &mut self,
        screen: &EncodedTensor,
        minimap: &EncodedTensor,
        mask: &[f32],
    ) -> (FunctionId, u32);
}

/// Aggregate result of one driven episode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpisodeSummary {
    /// Ticks executed.
    pub steps: u32,
    /// Sum of per-step rewards.
    pub total_reward: f32,
    /// Whether the engine ended the episode (vs. the step cap).
    pub completed: bool,
}

/// Failures while driving an episode.
#[derive(Clone, Debug, PartialEq)]
pub enum EpisodeError {
    /// Observation encoding failed.
    Encode(EncodeError),
    /// Action decoding failed.
    Decode(DecodeError),
    /// The engine session failed.
    Session(SessionError),
}

impl fmt::Display for EpisodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "encoding observation: {e}"),
            Self::Decode(e) => write!(f, "decoding action: {e}"),
            Self::Session(e) => write!(f, "engine session: {e}"),
        }
    }
}

impl Error for EpisodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Session(e) => Some(e),
        }
    }
}

impl From<EncodeError> for EpisodeError {
    fn from(e: EncodeError) -> Self {
        Self::Encode(e)
    }
}

impl From<DecodeError> for EpisodeError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<SessionError> for EpisodeError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

/// Drive one episode to completion or to `max_steps`.
///
/// Per tick: encode both maps and the availability mask, ask the
/// policy for a selection, decode it into a
/// [`FunctionCall`](vantage_core::FunctionCall), and submit it. Purely
/// sequential; every tick's tensors are fresh allocations.
pub fn run_episode<S, P>(
    session: &mut S,
    handler: &GameInterfaceHandler,
    policy: &mut P,
    max_steps: u32,
) -> Result<EpisodeSummary, EpisodeError>
where
    S: GameSession,
    P: Policy,
{
    let mut observation = session.reset()?;
    let mut total_reward = 0.0;

    for step in 0..max_steps {
        let screen = handler.encode_screen(&observation)?;
        let minimap = handler.encode_minimap(&observation)?;
        let mask = handler.available_actions(&observation)?;

        let (function, target) = policy.select(&screen, &minimap, &mask);
        let call = handler.decode_action(function, target)?;
        debug!("step {step}: {call}");

        let outcome = session.step(&call)?;
        total_reward += outcome.reward;
        if outcome.episode_over {
            return Ok(EpisodeSummary {
                steps: step + 1,
                total_reward,
                completed: true,
            });
        }
        observation = outcome.observation;
    }

    warn!("episode truncated after {max_steps} steps");
    Ok(EpisodeSummary {
        steps: max_steps,
        total_reward,
        completed: false,
    })
}
