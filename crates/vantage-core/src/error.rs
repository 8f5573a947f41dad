//! Error types for the vantage adapter, organized by failure domain:
//! observation encoding, action decoding, configuration, and the
//! engine session boundary.

use std::error::Error;
use std::fmt;

use crate::id::FunctionId;

/// Errors from observation encoding (tensor and mask construction).
///
/// Shape mismatches between a raw map and its catalog are a contract
/// breach and assert instead; these variants cover malformed *values*
/// inside an otherwise well-shaped observation.
#[derive(Clone, Debug, PartialEq)]
pub enum EncodeError {
    /// A categorical layer contained a value outside its declared range.
    CategoryOutOfRange {
        /// Name of the offending layer.
        layer: &'static str,
        /// The raw value observed at the pixel.
        value: f32,
        /// Number of categories the layer declares.
        n_values: u32,
    },
    /// An index was outside the expected `[0, depth)` range.
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Exclusive upper bound the index was checked against.
        depth: u32,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryOutOfRange {
                layer,
                value,
                n_values,
            } => write!(
                f,
                "layer '{layer}': category value {value} outside [0, {n_values})"
            ),
            Self::IndexOutOfRange { index, depth } => {
                write!(f, "index {index} outside [0, {depth})")
            }
        }
    }
}

impl Error for EncodeError {}

/// Errors from decoding a policy's discrete selection into an engine command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The chosen function ID is not in the vocabulary.
    UnknownFunction {
        /// The offending function ID.
        function: FunctionId,
    },
    /// The flat spatial target does not fit the configured grid.
    TargetOutOfRange {
        /// The offending flat index.
        target: u32,
        /// The configured square resolution.
        resolution: u32,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFunction { function } => {
                write!(f, "function {function} not in vocabulary")
            }
            Self::TargetOutOfRange { target, resolution } => write!(
                f,
                "spatial target {target} outside {resolution}x{resolution} grid"
            ),
        }
    }
}

impl Error for DecodeError {}

/// Errors from configuration loading and vocabulary construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested profile name is not one of the recognized set.
    UnknownProfile {
        /// The name that was requested.
        name: String,
    },
    /// The configuration file could not be read.
    Io {
        /// Path of the file.
        path: String,
        /// Stringified I/O failure.
        message: String,
    },
    /// The configuration file could not be parsed.
    Parse {
        /// Stringified parse failure.
        message: String,
    },
    /// An action vocabulary with zero entries was supplied.
    EmptyVocabulary,
    /// Vocabulary entry IDs must be contiguous from zero.
    NonContiguousVocabulary {
        /// The ID expected at this position.
        expected: FunctionId,
        /// The ID actually found.
        found: FunctionId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProfile { name } => {
                write!(f, "unknown profile '{name}' (expected 'dev' or 'test')")
            }
            Self::Io { path, message } => write!(f, "reading '{path}': {message}"),
            Self::Parse { message } => write!(f, "parsing config: {message}"),
            Self::EmptyVocabulary => write!(f, "action vocabulary is empty"),
            Self::NonContiguousVocabulary { expected, found } => write!(
                f,
                "vocabulary IDs must be contiguous: expected {expected}, found {found}"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Errors surfaced by a [`GameSession`](crate::GameSession) implementation.
///
/// The adapter never validates command legality itself; submitting an
/// illegal command is the engine's failure mode and is reported here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The engine rejected or failed to execute a submitted command.
    CommandRejected {
        /// The function that was submitted.
        function: FunctionId,
        /// Engine-provided reason, if any.
        reason: String,
    },
    /// The engine itself failed (crash, disconnect, protocol error).
    Engine {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandRejected { function, reason } => {
                write!(f, "engine rejected function {function}: {reason}")
            }
            Self::Engine { reason } => write!(f, "engine failure: {reason}"),
        }
    }
}

impl Error for SessionError {}
