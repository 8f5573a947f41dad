//! Core types and traits for the vantage RTS adapter.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the vantage workspace:
//! the action vocabulary, the feature-layer catalog, raw observation
//! records, structured engine commands, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod error;
pub mod feature;
pub mod id;
pub mod observation;
pub mod traits;

pub use action::{ActionVocabulary, ArgSpec, ArgValue, FunctionCall, FunctionDef};
pub use error::{ConfigError, DecodeError, EncodeError, SessionError};
pub use feature::{FeatureCatalog, FeatureKind, FeatureLayerDef};
pub use id::FunctionId;
pub use observation::{FeatureMap, RawObservation, StepOutcome};
pub use traits::GameSession;
