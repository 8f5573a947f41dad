//! Vantage: an observation/action adapter between a real-time strategy
//! engine and a learning agent.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all vantage sub-crates. For most users, adding `vantage` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use vantage::prelude::*;
//!
//! // The engine's vocabulary is injected at startup; a two-function
//! // slice of it is enough to exercise the adapter.
//! let vocab = ActionVocabulary::new(vec![
//!     FunctionDef { id: FunctionId(0), name: "no_op".into(), args: vec![] },
//!     FunctionDef {
//!         id: FunctionId(1),
//!         name: "Move_screen".into(),
//!         args: vec![ArgSpec::new("queued"), ArgSpec::new("screen")],
//!     },
//! ])
//! .unwrap();
//!
//! let handler = GameInterfaceHandler::new(vocab, 64);
//! assert_eq!(handler.minimap_channels(), 33);
//!
//! // Network output (function 1, flat target 70) becomes an engine call.
//! let call = handler.decode_action(FunctionId(1), 70).unwrap();
//! assert_eq!(call.args[1], ArgValue::Point { x: 6, y: 1 });
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vantage-core` | IDs, feature catalogs, vocabulary, commands, errors |
//! | [`obs`] | `vantage-obs` | Tensor encoding, one-hot, availability masks |
//! | [`env`] | `vantage-env` | Config profiles, the handler, the episode driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`vantage-core`).
pub use vantage_core as types;

/// Observation encoding (`vantage-obs`).
pub use vantage_obs as obs;

/// Config, handler, and episode driver (`vantage-env`).
pub use vantage_env as env;

/// The types most programs need, in one import.
pub mod prelude {
    pub use vantage_core::{
        ActionVocabulary, ArgSpec, ArgValue, ConfigError, DecodeError, EncodeError,
        FeatureCatalog, FeatureKind, FeatureLayerDef, FeatureMap, FunctionCall, FunctionDef,
        FunctionId, GameSession, RawObservation, SessionError, StepOutcome,
    };
    pub use vantage_env::{
        run_episode, AdapterConfig, GameInterfaceHandler, Policy, Profile, ProfileName,
        SessionConfig,
    };
    pub use vantage_obs::{availability_mask, encode_feature_map, one_hot, EncodedTensor};
}
