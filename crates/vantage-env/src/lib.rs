//! Environment glue for the vantage RTS adapter: profile configuration,
//! session parameters, the [`GameInterfaceHandler`] adapter, and a thin
//! episode driver over any [`GameSession`](vantage_core::GameSession).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod handler;

pub use config::{AdapterConfig, Profile, ProfileName, SessionConfig};
pub use driver::{run_episode, EpisodeError, EpisodeSummary, Policy};
pub use handler::GameInterfaceHandler;
