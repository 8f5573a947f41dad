//! The game interface handler: observation encoding and action
//! decoding against one fixed catalog/vocabulary/resolution triple.

use vantage_core::{
    ActionVocabulary, ArgValue, DecodeError, EncodeError, FeatureCatalog, FunctionCall,
    FunctionId, RawObservation,
};
use vantage_obs::{availability_mask, encode_feature_map, EncodedTensor};

use crate::config::Profile;

/// Adapter between raw engine observations and network-shaped tensors,
/// and between network selections and engine commands.
///
/// All inputs are injected at construction and immutable afterwards;
/// the only derived state is the per-function non-spatial
/// classification, computed once. Every encode call allocates fresh
/// outputs — nothing is cached across ticks.
///
/// # Examples
///
/// ```
/// use vantage_core::{ActionVocabulary, ArgSpec, FunctionDef, FunctionId};
/// use vantage_env::GameInterfaceHandler;
///
/// let vocab = ActionVocabulary::new(vec![FunctionDef {
///     id: FunctionId(0),
///     name: "Move_screen".into(),
///     args: vec![ArgSpec::new("queued"), ArgSpec::new("screen")],
/// }])
/// .unwrap();
/// let handler = GameInterfaceHandler::new(vocab, 64);
///
/// let call = handler.decode_action(FunctionId(0), 130).unwrap();
/// assert_eq!(call.args.len(), 2);
/// assert_eq!(handler.is_non_spatial(FunctionId(0)), Some(false));
/// ```
#[derive(Clone, Debug)]
pub struct GameInterfaceHandler {
    screen: FeatureCatalog,
    minimap: FeatureCatalog,
    vocabulary: ActionVocabulary,
    resolution: u32,
    /// `non_spatial[id]` — true iff function `id` has no spatial slot.
    non_spatial: Vec<bool>,
}

impl GameInterfaceHandler {
    /// Build a handler over the built-in screen/minimap catalogs.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is zero.
    pub fn new(vocabulary: ActionVocabulary, resolution: u32) -> Self {
        Self::with_catalogs(
            FeatureCatalog::screen(),
            FeatureCatalog::minimap(),
            vocabulary,
            resolution,
        )
    }

    /// Build a handler from a config profile.
    pub fn from_profile(vocabulary: ActionVocabulary, profile: &Profile) -> Self {
        Self::new(vocabulary, profile.resolution)
    }

    /// Build a handler with explicit catalogs (tests, engine variants).
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is zero.
    pub fn with_catalogs(
        screen: FeatureCatalog,
        minimap: FeatureCatalog,
        vocabulary: ActionVocabulary,
        resolution: u32,
    ) -> Self {
        assert!(resolution > 0, "resolution must be positive");
        let non_spatial = vocabulary.iter().map(|f| !f.is_spatial()).collect();
        Self {
            screen,
            minimap,
            vocabulary,
            resolution,
            non_spatial,
        }
    }

    /// Channel count of encoded screen tensors.
    pub fn screen_channels(&self) -> u32 {
        self.screen.channels()
    }

    /// Channel count of encoded minimap tensors.
    pub fn minimap_channels(&self) -> u32 {
        self.minimap.channels()
    }

    /// The square resolution shared by both map types.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The injected action vocabulary.
    pub fn vocabulary(&self) -> &ActionVocabulary {
        &self.vocabulary
    }

    /// Encode the screen map into a `(1, C, H, W)` tensor.
    pub fn encode_screen(&self, obs: &RawObservation) -> Result<EncodedTensor, EncodeError> {
        encode_feature_map(&obs.screen, &self.screen)
    }

    /// Encode the minimap into a `(1, C, H, W)` tensor.
    pub fn encode_minimap(&self, obs: &RawObservation) -> Result<EncodedTensor, EncodeError> {
        encode_feature_map(&obs.minimap, &self.minimap)
    }

    /// Build the legal-action mask for the observation's tick.
    pub fn available_actions(&self, obs: &RawObservation) -> Result<Vec<f32>, EncodeError> {
        availability_mask(&obs.available_actions, self.vocabulary.len())
    }

    /// Decode a network selection into a structured engine command.
    ///
    /// `target` is a flat index into the `resolution x resolution`
    /// grid, row-major with x varying fastest: `x = target % resl`,
    /// `y = target / resl`. This matches the pixel layout of the
    /// encoded tensors; the two must never diverge or spatial targeting
    /// is silently miscalibrated.
    ///
    /// Each spatial slot receives the decoded `(x, y)` pair; each
    /// non-spatial slot receives the placeholder `0`. Whether
    /// `function` is actually legal this tick is the caller's concern.
    pub fn decode_action(
        &self,
        function: FunctionId,
        target: u32,
    ) -> Result<FunctionCall, DecodeError> {
        let def = self
            .vocabulary
            .get(function)
            .ok_or(DecodeError::UnknownFunction { function })?;
        if target >= self.resolution * self.resolution {
            return Err(DecodeError::TargetOutOfRange {
                target,
                resolution: self.resolution,
            });
        }
        let x = target % self.resolution;
        let y = target / self.resolution;
        let args = def
            .args
            .iter()
            .map(|slot| {
                if slot.is_spatial() {
                    ArgValue::Point { x, y }
                } else {
                    ArgValue::Flag(0)
                }
            })
            .collect();
        Ok(FunctionCall { function, args })
    }

    /// Whether a function has no spatial argument slot, from the
    /// construction-time classification. `None` for unknown IDs.
    pub fn is_non_spatial(&self, function: FunctionId) -> Option<bool> {
        self.non_spatial.get(function.0 as usize).copied()
    }
}
