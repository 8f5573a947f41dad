//! Feature-map to tensor transformation.
//!
//! The per-layer rules, applied in catalog order:
//!
//! - scalar layer → one channel, `ln(v + 1)` elementwise (keeps zero at
//!   zero and damps heavy-tailed magnitudes like hit points);
//! - categorical layer with C categories → C indicator channels, where
//!   channel j is 1.0 at every tile whose raw value equals j.
//!
//! Channel blocks are concatenated in catalog order, then a batch axis
//! of size 1 is prepended. The transform is a pure function of the map
//! and the static catalog.

use vantage_core::{EncodeError, FeatureCatalog, FeatureKind, FeatureMap};

use crate::tensor::EncodedTensor;

/// Encode one raw feature map against its catalog.
///
/// Returns a fresh `(1, catalog.channels(), H, W)` tensor. A raw
/// categorical value outside its layer's declared range is rejected
/// with [`EncodeError::CategoryOutOfRange`].
///
/// # Panics
///
/// Panics if the map's layer count differs from the catalog's — that
/// is catalog/engine version skew, a contract breach rather than a
/// recoverable condition.
pub fn encode_feature_map(
    map: &FeatureMap,
    catalog: &FeatureCatalog,
) -> Result<EncodedTensor, EncodeError> {
    assert_eq!(
        map.layers(),
        catalog.len(),
        "map has {} layers but catalog '{}' declares {}",
        map.layers(),
        catalog.name(),
        catalog.len(),
    );

    let height = map.height();
    let width = map.width();
    let plane = height * width;
    let channels = catalog.channels() as usize;
    let mut data = Vec::with_capacity(channels * plane);

    for (index, layer) in catalog.iter().enumerate() {
        let raw = map.layer_data(index);
        match layer.kind {
            FeatureKind::Scalar => {
                data.extend(raw.iter().map(|&v| (v + 1.0).ln()));
            }
            FeatureKind::Categorical { n_values } => {
                let base = data.len();
                data.resize(base + n_values as usize * plane, 0.0);
                for (tile, &value) in raw.iter().enumerate() {
                    let category = value as u32;
                    if value < 0.0 || value.fract() != 0.0 || category >= n_values {
                        return Err(EncodeError::CategoryOutOfRange {
                            layer: layer.name,
                            value,
                            n_values,
                        });
                    }
                    data[base + category as usize * plane + tile] = 1.0;
                }
            }
        }
    }

    Ok(EncodedTensor::new(data, channels, height, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vantage_core::FeatureLayerDef;

    fn catalog(layers: Vec<FeatureLayerDef>) -> FeatureCatalog {
        FeatureCatalog::new("test", layers)
    }

    fn scalar(name: &'static str) -> FeatureLayerDef {
        FeatureLayerDef {
            name,
            kind: FeatureKind::Scalar,
        }
    }

    fn categorical(name: &'static str, n_values: u32) -> FeatureLayerDef {
        FeatureLayerDef {
            name,
            kind: FeatureKind::Categorical { n_values },
        }
    }

    #[test]
    fn scalar_layer_is_log_compressed() {
        let cat = catalog(vec![scalar("hp")]);
        let map = FeatureMap::new(vec![0.0, 1.0, 99.0, 1599.0], 1, 2, 2);
        let t = encode_feature_map(&map, &cat).unwrap();
        assert_eq!(t.shape(), [1, 1, 2, 2]);
        assert_eq!(t.at(0, 0, 0), 0.0);
        assert!((t.at(0, 0, 1) - 2.0f32.ln()).abs() < 1e-6);
        assert!((t.at(0, 1, 0) - 100.0f32.ln()).abs() < 1e-5);
        assert!((t.at(0, 1, 1) - 1600.0f32.ln()).abs() < 1e-4);
    }

    #[test]
    fn categorical_layer_expands_to_indicators() {
        let cat = catalog(vec![categorical("owner", 3)]);
        let map = FeatureMap::new(vec![0.0, 2.0, 1.0, 2.0], 1, 2, 2);
        let t = encode_feature_map(&map, &cat).unwrap();
        assert_eq!(t.shape(), [1, 3, 2, 2]);
        // Channel j is hot exactly where the raw value was j.
        assert_eq!(t.at(0, 0, 0), 1.0);
        assert_eq!(t.at(2, 0, 1), 1.0);
        assert_eq!(t.at(1, 1, 0), 1.0);
        assert_eq!(t.at(2, 1, 1), 1.0);
        // And cold everywhere else at those tiles.
        assert_eq!(t.at(1, 0, 0), 0.0);
        assert_eq!(t.at(2, 0, 0), 0.0);
        assert_eq!(t.at(0, 0, 1), 0.0);
    }

    #[test]
    fn channel_blocks_follow_catalog_order() {
        let cat = catalog(vec![scalar("hp"), categorical("owner", 2), scalar("energy")]);
        let map = FeatureMap::new(vec![0.0, 1.0, 7.0], 3, 1, 1);
        let t = encode_feature_map(&map, &cat).unwrap();
        assert_eq!(t.shape(), [1, 4, 1, 1]);
        assert_eq!(t.at(0, 0, 0), 0.0); // ln(0 + 1)
        assert_eq!(t.at(1, 0, 0), 0.0); // owner == 1, so channel for 0 is cold
        assert_eq!(t.at(2, 0, 0), 1.0); // channel for category 1
        assert!((t.at(3, 0, 0) - 8.0f32.ln()).abs() < 1e-6);
    }

    #[test]
    fn category_out_of_range_rejected() {
        let cat = catalog(vec![categorical("owner", 2)]);
        let map = FeatureMap::new(vec![0.0, 2.0], 1, 1, 2);
        let err = encode_feature_map(&map, &cat).unwrap_err();
        assert_eq!(
            err,
            EncodeError::CategoryOutOfRange {
                layer: "owner",
                value: 2.0,
                n_values: 2,
            }
        );
    }

    #[test]
    fn fractional_category_rejected() {
        let cat = catalog(vec![categorical("owner", 4)]);
        let map = FeatureMap::new(vec![1.5], 1, 1, 1);
        assert!(matches!(
            encode_feature_map(&map, &cat),
            Err(EncodeError::CategoryOutOfRange { value, .. }) if value == 1.5
        ));
    }

    #[test]
    #[should_panic(expected = "declares")]
    fn layer_count_mismatch_is_fatal() {
        let cat = catalog(vec![scalar("hp"), scalar("energy")]);
        let map = FeatureMap::new(vec![0.0; 4], 1, 2, 2);
        let _ = encode_feature_map(&map, &cat);
    }

    proptest! {
        #[test]
        fn channel_count_is_value_independent(
            values in prop::collection::vec(0f32..4.0, 16),
        ) {
            // 4 categories, 4x4 map; any integral values produce the
            // same channel count.
            let cat = catalog(vec![categorical("c", 4), scalar("s")]);
            let mut data: Vec<f32> = values.iter().map(|v| v.floor()).collect();
            data.extend(values.iter());
            let map = FeatureMap::new(data, 2, 4, 4);
            let t = encode_feature_map(&map, &cat).unwrap();
            prop_assert_eq!(t.channels(), 5);
        }

        #[test]
        fn categorical_round_trips_via_argmax(
            raw in prop::collection::vec(0u32..6, 9),
        ) {
            let cat = catalog(vec![categorical("c", 6)]);
            let data: Vec<f32> = raw.iter().map(|&v| v as f32).collect();
            let map = FeatureMap::new(data, 1, 3, 3);
            let t = encode_feature_map(&map, &cat).unwrap();
            for row in 0..3 {
                for col in 0..3 {
                    // Exactly one hot channel per tile...
                    let hot: f32 = (0..6).map(|c| t.at(c, row, col)).sum();
                    prop_assert_eq!(hot, 1.0);
                    // ...and argmax recovers the raw category.
                    let recovered = t.argmax_channel(0, 6, row, col) as u32;
                    prop_assert_eq!(recovered, raw[row * 3 + col]);
                }
            }
        }

        #[test]
        fn scalar_log_is_monotonic(a in 0f32..1e6, b in 0f32..1e6) {
            let cat = catalog(vec![scalar("s")]);
            let map = FeatureMap::new(vec![a, b], 1, 1, 2);
            let t = encode_feature_map(&map, &cat).unwrap();
            if a <= b {
                prop_assert!(t.at(0, 0, 0) <= t.at(0, 0, 1));
            } else {
                prop_assert!(t.at(0, 0, 0) >= t.at(0, 0, 1));
            }
        }
    }
}
