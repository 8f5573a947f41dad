//! Feature-layer catalog: static knowledge of the engine's per-tile
//! feature layers for the two map types (screen and minimap).
//!
//! The catalogs are declared by the engine, not derived from
//! observations. Channel accounting ([`FeatureCatalog::channels`]) is a
//! pure function of the catalog: scalar layers contribute one channel,
//! categorical layers contribute one channel per category.

use indexmap::IndexMap;

/// Classification of a feature layer's per-tile value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureKind {
    /// A magnitude per tile (health, resource count). Normalized with
    /// `ln(v + 1)` at encode time.
    Scalar,
    /// A discrete class per tile, expanded into one indicator channel
    /// per category at encode time.
    Categorical {
        /// Number of possible categories.
        n_values: u32,
    },
}

impl FeatureKind {
    /// Number of tensor channels this layer expands to.
    pub fn channels(&self) -> u32 {
        match self {
            Self::Scalar => 1,
            Self::Categorical { n_values } => *n_values,
        }
    }
}

/// One entry in a feature catalog.
///
/// Immutable, fixed at process start from the engine's declared layer
/// table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureLayerDef {
    /// Engine-declared layer name.
    pub name: &'static str,
    /// Scalar or categorical classification.
    pub kind: FeatureKind,
}

/// Declaration-ordered catalog of feature layers for one map type.
///
/// Layer order matches the layer axis of the raw observation map;
/// channel order in the encoded tensor follows the same declaration
/// order, with categorical sub-channels in increasing category value.
///
/// # Examples
///
/// ```
/// use vantage_core::FeatureCatalog;
///
/// let minimap = FeatureCatalog::minimap();
/// assert_eq!(minimap.len(), 7);
/// assert_eq!(minimap.channels(), 33);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureCatalog {
    name: &'static str,
    layers: IndexMap<&'static str, FeatureLayerDef>,
}

impl FeatureCatalog {
    /// Build a catalog from an ordered layer list.
    ///
    /// # Panics
    ///
    /// Panics if two layers share a name; the engine's tables never do.
    pub fn new(name: &'static str, layers: Vec<FeatureLayerDef>) -> Self {
        let mut map = IndexMap::with_capacity(layers.len());
        for layer in layers {
            let previous = map.insert(layer.name, layer);
            assert!(
                previous.is_none(),
                "catalog '{name}': duplicate layer '{}'",
                layer.name
            );
        }
        Self { name, layers: map }
    }

    /// The catalog's map-type name (`"screen"` or `"minimap"` for the
    /// built-in tables).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of layers (= the layer axis of the raw map).
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if the catalog has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total channel count after encoding: Σ per-layer channels.
    pub fn channels(&self) -> u32 {
        self.layers.values().map(|l| l.kind.channels()).sum()
    }

    /// Look up a layer by name.
    pub fn get(&self, name: &str) -> Option<&FeatureLayerDef> {
        self.layers.get(name)
    }

    /// Look up a layer by declaration index.
    pub fn layer(&self, index: usize) -> Option<&FeatureLayerDef> {
        self.layers.get_index(index).map(|(_, l)| l)
    }

    /// Iterate layers in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureLayerDef> {
        self.layers.values()
    }

    /// The engine's screen feature table (13 layers).
    pub fn screen() -> Self {
        use FeatureKind::{Categorical, Scalar};
        Self::new(
            "screen",
            vec![
                def("height_map", Scalar),
                def("visibility_map", Categorical { n_values: 4 }),
                def("creep", Categorical { n_values: 2 }),
                def("power", Categorical { n_values: 2 }),
                def("player_id", Categorical { n_values: 17 }),
                def("player_relative", Categorical { n_values: 5 }),
                def("unit_type", Categorical { n_values: 1850 }),
                def("selected", Categorical { n_values: 2 }),
                def("unit_hit_points", Scalar),
                def("unit_energy", Scalar),
                def("unit_shields", Scalar),
                def("unit_density", Scalar),
                def("unit_density_aa", Scalar),
            ],
        )
    }

    /// The engine's minimap feature table (7 layers).
    pub fn minimap() -> Self {
        use FeatureKind::{Categorical, Scalar};
        Self::new(
            "minimap",
            vec![
                def("height_map", Scalar),
                def("visibility_map", Categorical { n_values: 4 }),
                def("creep", Categorical { n_values: 2 }),
                def("camera", Categorical { n_values: 2 }),
                def("player_id", Categorical { n_values: 17 }),
                def("player_relative", Categorical { n_values: 5 }),
                def("selected", Categorical { n_values: 2 }),
            ],
        )
    }
}

fn def(name: &'static str, kind: FeatureKind) -> FeatureLayerDef {
    FeatureLayerDef { name, kind }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_channel_total() {
        let screen = FeatureCatalog::screen();
        assert_eq!(screen.len(), 13);
        // 6 scalar layers + (4 + 2 + 2 + 17 + 5 + 1850 + 2) categorical.
        assert_eq!(screen.channels(), 6 + 1882);
    }

    #[test]
    fn minimap_channel_total() {
        let minimap = FeatureCatalog::minimap();
        assert_eq!(minimap.len(), 7);
        assert_eq!(minimap.channels(), 1 + 32);
    }

    #[test]
    fn channels_is_value_independent() {
        // Channel accounting never looks at observation data.
        assert_eq!(FeatureKind::Scalar.channels(), 1);
        assert_eq!(FeatureKind::Categorical { n_values: 5 }.channels(), 5);
    }

    #[test]
    fn lookup_by_name_and_index_agree() {
        let screen = FeatureCatalog::screen();
        let by_name = screen.get("unit_type").unwrap();
        let by_index = screen.layer(6).unwrap();
        assert_eq!(by_name, by_index);
        assert_eq!(by_name.kind, FeatureKind::Categorical { n_values: 1850 });
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let minimap = FeatureCatalog::minimap();
        let names: Vec<_> = minimap.iter().map(|l| l.name).collect();
        assert_eq!(names[0], "height_map");
        assert_eq!(names[6], "selected");
    }

    #[test]
    #[should_panic(expected = "duplicate layer")]
    fn duplicate_layer_names_rejected() {
        FeatureCatalog::new(
            "bad",
            vec![def("creep", FeatureKind::Scalar), def("creep", FeatureKind::Scalar)],
        );
    }
}
