//! Raw observation records as reported by the engine.
//!
//! The engine reports per-tile feature maps as flat f32 buffers plus
//! shape metadata; [`RawObservation`] is the typed record replacing the
//! engine's loosely-keyed observation dictionary at the adapter
//! boundary.

use crate::id::FunctionId;

/// A raw 3-D feature map with shape `(layers, height, width)`.
///
/// Data is flat row-major: layer-major, then row, then column. Values
/// are stored as f32 even for categorical layers (the engine transports
/// integer categories in the same buffer type).
///
/// # Examples
///
/// ```
/// use vantage_core::FeatureMap;
///
/// let map = FeatureMap::new(vec![0.0, 1.0, 2.0, 3.0], 1, 2, 2);
/// assert_eq!(map.value_at(0, 1, 0), 2.0);
/// assert_eq!(map.layer_data(0).len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureMap {
    data: Vec<f32>,
    layers: usize,
    height: usize,
    width: usize,
}

impl FeatureMap {
    /// Build a map from a flat buffer and its shape.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != layers * height * width`; a mis-shaped
    /// buffer is a transport bug, not a runtime condition.
    pub fn new(data: Vec<f32>, layers: usize, height: usize, width: usize) -> Self {
        assert_eq!(
            data.len(),
            layers * height * width,
            "feature map buffer is {} values but shape ({layers}, {height}, {width}) needs {}",
            data.len(),
            layers * height * width,
        );
        Self {
            data,
            layers,
            height,
            width,
        }
    }

    /// Number of feature layers.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Map height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Map width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The raw value at `(layer, row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn value_at(&self, layer: usize, row: usize, col: usize) -> f32 {
        assert!(layer < self.layers && row < self.height && col < self.width);
        self.data[(layer * self.height + row) * self.width + col]
    }

    /// The flat `height * width` slice for one layer.
    pub fn layer_data(&self, layer: usize) -> &[f32] {
        let plane = self.height * self.width;
        &self.data[layer * plane..(layer + 1) * plane]
    }
}

/// One tick's raw observation, keyed by semantic name.
#[derive(Clone, Debug, PartialEq)]
pub struct RawObservation {
    /// The screen feature map, shape `(screen layers, resl, resl)`.
    pub screen: FeatureMap,
    /// The minimap feature map, shape `(minimap layers, resl, resl)`.
    pub minimap: FeatureMap,
    /// Functions legal in the current state.
    pub available_actions: Vec<FunctionId>,
}

/// Result of advancing the engine by one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    /// The observation after the step.
    pub observation: RawObservation,
    /// Scalar reward signal for the step.
    pub reward: f32,
    /// Whether the episode ended with this step.
    pub episode_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_indexing() {
        // 2 layers of 2x3; layer 1 starts at flat offset 6.
        let data: Vec<f32> = (0..12).map(|v| v as f32).collect();
        let map = FeatureMap::new(data, 2, 2, 3);
        assert_eq!(map.value_at(0, 0, 0), 0.0);
        assert_eq!(map.value_at(0, 1, 2), 5.0);
        assert_eq!(map.value_at(1, 0, 0), 6.0);
        assert_eq!(map.value_at(1, 1, 1), 10.0);
        assert_eq!(map.layer_data(1), &[6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);
    }

    #[test]
    #[should_panic(expected = "feature map buffer")]
    fn shape_mismatch_is_fatal() {
        FeatureMap::new(vec![0.0; 5], 1, 2, 3);
    }
}
