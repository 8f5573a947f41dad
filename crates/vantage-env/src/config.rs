//! Profile configuration for engine sessions.
//!
//! Sessions are parameterized by a named profile from a YAML file: a
//! lightweight `dev` profile for interactive runs and a stricter `test`
//! profile for evaluation. Each profile fixes the step multiplier and
//! the square map resolution shared by both map types.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use vantage_core::ConfigError;

/// The recognized profile names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileName {
    /// Lightweight profile for interactive development runs.
    Dev,
    /// Stricter profile for evaluation runs.
    Test,
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => write!(f, "dev"),
            Self::Test => write!(f, "test"),
        }
    }
}

impl FromStr for ProfileName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::UnknownProfile {
                name: other.to_string(),
            }),
        }
    }
}

/// One named profile's session parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// Engine steps per adapter tick.
    pub step_mul: u32,
    /// Square resolution for both screen and minimap.
    #[serde(rename = "resl")]
    pub resolution: u32,
}

/// The profile table loaded from the config file.
///
/// # Examples
///
/// ```
/// use vantage_env::{AdapterConfig, ProfileName};
///
/// let config = AdapterConfig::parse("
/// dev:
///   step_mul: 8
///   resl: 64
/// test:
///   step_mul: 16
///   resl: 64
/// ").unwrap();
/// assert_eq!(config.profile(ProfileName::Dev).resolution, 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct AdapterConfig {
    /// The `dev` profile.
    pub dev: Profile,
    /// The `test` profile.
    pub test: Profile,
}

impl AdapterConfig {
    /// Load the profile table from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&text)
    }

    /// Parse the profile table from YAML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// The parameters for a recognized profile.
    pub fn profile(&self, name: ProfileName) -> &Profile {
        match name {
            ProfileName::Dev => &self.dev,
            ProfileName::Test => &self.test,
        }
    }
}

/// Parameters for constructing an engine session.
///
/// Both map types share the one square resolution; the original engine
/// accepts them separately but the adapter keeps them uniform for its
/// handler's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name of the map/minigame to load.
    pub map_name: String,
    /// Engine steps per adapter tick.
    pub step_mul: u32,
    /// Square resolution for both map types.
    pub resolution: u32,
    /// Whether the engine should render a spectator view.
    pub visualize: bool,
}

impl SessionConfig {
    /// Build session parameters from a profile.
    pub fn from_profile(map_name: impl Into<String>, profile: &Profile) -> Self {
        Self {
            map_name: map_name.into(),
            step_mul: profile.step_mul,
            resolution: profile.resolution,
            visualize: false,
        }
    }
}
