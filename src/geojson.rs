//! GeoJSON payload classification.
//!
//! Payloads are stored verbatim and never validated beyond this: the
//! save endpoint derives a feature count and the set of distinct
//! geometry types for list views, computed once at save time.

use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct GeometrySummary {
    pub feature_count: i64,
    /// Sorted, comma-joined distinct geometry types, e.g. "Point,Polygon"
    pub geometry_types: String,
}

/// Classify a submitted payload by its top-level `type` tag.
///
/// A `FeatureCollection` contributes every feature's geometry type
/// (features with no geometry, or a geometry with no type, contribute
/// nothing). A bare `Feature` counts as one feature. Anything else
/// yields zero features and an empty type set.
pub fn classify(payload: &Value) -> GeometrySummary {
    let mut types = BTreeSet::new();
    let mut feature_count = 0i64;

    match payload.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {
            if let Some(features) = payload.get("features").and_then(Value::as_array) {
                feature_count = features.len() as i64;
                for feature in features {
                    if let Some(t) = geometry_type(feature) {
                        types.insert(t.to_string());
                    }
                }
            }
        }
        Some("Feature") => {
            feature_count = 1;
            if let Some(t) = geometry_type(payload) {
                types.insert(t.to_string());
            }
        }
        _ => {}
    }

    GeometrySummary {
        feature_count,
        geometry_types: types.into_iter().collect::<Vec<_>>().join(","),
    }
}

fn geometry_type(feature: &Value) -> Option<&str> {
    feature.get("geometry")?.get("type")?.as_str()
}
