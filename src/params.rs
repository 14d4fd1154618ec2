use serde::{Deserialize, Serialize};

use crate::error::TrackError;

/// The five tunable curve parameters.
///
/// Field names serialize in camelCase to match the config object the
/// control panel edits (`viewBoxWidth`, `bumpHeight`, ...). All values are
/// plain f64; validity (finiteness) is checked at construction time, not
/// at the type level, so a deserialized NaN is representable but rejected
/// by [`TrackParams::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackParams {
    /// Horizontal extent of the coordinate space (typically 200-350).
    pub view_box_width: f64,
    /// Peak displacement from baseline. 0 = flat track.
    pub bump_height: f64,
    /// Horizontal span of the bump region, centered on the bump position.
    pub curve_section_width: f64,
    /// Distance between the two peak control points.
    pub curve_top_width: f64,
    /// Bump center as a percentage (0-100) of `view_box_width`.
    pub bump_position: f64,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            view_box_width: 300.0,
            bump_height: 40.0,
            curve_section_width: 150.0,
            curve_top_width: 65.0,
            bump_position: 50.0,
        }
    }
}

impl TrackParams {
    /// Reject NaN and infinite values. Reports the first offending field
    /// under its wire name.
    pub fn validate(&self) -> Result<(), TrackError> {
        let fields = [
            ("viewBoxWidth", self.view_box_width),
            ("bumpHeight", self.bump_height),
            ("curveSectionWidth", self.curve_section_width),
            ("curveTopWidth", self.curve_top_width),
            ("bumpPosition", self.bump_position),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(TrackError::NonFiniteParam { name, value });
            }
        }
        Ok(())
    }

    /// Merge a partial update over the current values. Unset fields keep
    /// their previous value.
    pub fn apply(&self, patch: &TrackPatch) -> Self {
        Self {
            view_box_width: patch.view_box_width.unwrap_or(self.view_box_width),
            bump_height: patch.bump_height.unwrap_or(self.bump_height),
            curve_section_width: patch
                .curve_section_width
                .unwrap_or(self.curve_section_width),
            curve_top_width: patch.curve_top_width.unwrap_or(self.curve_top_width),
            bump_position: patch.bump_position.unwrap_or(self.bump_position),
        }
    }
}

/// A parameter-change event: any subset of the five fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackPatch {
    pub view_box_width: Option<f64>,
    pub bump_height: Option<f64>,
    pub curve_section_width: Option<f64>,
    pub curve_top_width: Option<f64>,
    pub bump_position: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let p = TrackParams::default();
        assert_eq!(p.view_box_width, 300.0);
        assert_eq!(p.bump_height, 40.0);
        assert_eq!(p.curve_section_width, 150.0);
        assert_eq!(p.curve_top_width, 65.0);
        assert_eq!(p.bump_position, 50.0);
    }

    #[test]
    fn test_validate_accepts_degenerate_but_finite() {
        let p = TrackParams {
            bump_height: 0.0,
            curve_section_width: 0.0,
            bump_position: -200.0,
            ..TrackParams::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan_with_field_name() {
        let p = TrackParams {
            curve_top_width: f64::NAN,
            ..TrackParams::default()
        };
        match p.validate() {
            Err(TrackError::NonFiniteParam { name, value }) => {
                assert_eq!(name, "curveTopWidth");
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteParam, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_infinity() {
        let p = TrackParams {
            view_box_width: f64::INFINITY,
            ..TrackParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_patch_merges_subset() {
        let base = TrackParams::default();
        let patch = TrackPatch {
            bump_height: Some(80.0),
            bump_position: Some(10.0),
            ..TrackPatch::default()
        };
        let merged = base.apply(&patch);
        assert_eq!(merged.bump_height, 80.0);
        assert_eq!(merged.bump_position, 10.0);
        // untouched fields keep their previous values
        assert_eq!(merged.view_box_width, 300.0);
        assert_eq!(merged.curve_section_width, 150.0);
        assert_eq!(merged.curve_top_width, 65.0);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = TrackParams::default();
        assert_eq!(base.apply(&TrackPatch::default()), base);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let p = TrackParams::default();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"viewBoxWidth\":300.0"), "got {json}");
        assert!(json.contains("\"curveSectionWidth\":150.0"), "got {json}");

        let back: TrackParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_patch_deserializes_from_partial_object() {
        let patch: TrackPatch = serde_json::from_str(r#"{"bumpHeight": 12}"#).unwrap();
        assert_eq!(patch.bump_height, Some(12.0));
        assert_eq!(patch.view_box_width, None);
        assert_eq!(patch.bump_position, None);
    }
}
