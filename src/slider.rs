use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bezier::Point;
use crate::constants::{BASELINE_Y, VIEW_BOX_HEIGHT};
use crate::error::TrackError;
use crate::geometry::TrackGeometry;
use crate::params::{TrackParams, TrackPatch};
use crate::path::TrackPath;

/// Marker symbol shown for each quarter of the value range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerSymbol {
    Triangle,
    Square,
    Circle,
    Star,
}

impl MarkerSymbol {
    /// Symbol zone for a slider value: 0-24 triangle, 25-49 square,
    /// 50-74 circle, 75-100 star. Values outside 0-100 (or in the
    /// fractional gaps between zones) map to no symbol.
    pub fn for_value(value: f64) -> Option<Self> {
        if (0.0..=24.0).contains(&value) {
            Some(Self::Triangle)
        } else if (25.0..=49.0).contains(&value) {
            Some(Self::Square)
        } else if (50.0..=74.0).contains(&value) {
            Some(Self::Circle)
        } else if (75.0..=100.0).contains(&value) {
            Some(Self::Star)
        } else {
            None
        }
    }
}

/// Stateful slider model: owns the tuning parameters, the current input
/// value, and the most recent valid geometry.
///
/// The bump follows the thumb (`bump_position` is driven by the value),
/// and the track stays flat until the slider is pressed; pressing raises
/// the bump to the configured height under the thumb. Rejected parameter
/// updates leave the previous geometry in effect, so point queries always
/// see a complete geometry or none at all.
#[derive(Clone, Debug)]
pub struct Slider {
    params: TrackParams,
    value: f64,
    pressed: bool,
    geometry: Option<TrackGeometry>,
}

impl Slider {
    /// Create a slider at value 0, released. Invalid initial parameters
    /// leave the geometry unset; queries answer the baseline until a valid
    /// update arrives.
    pub fn new(params: TrackParams) -> Self {
        let mut slider = Self {
            params,
            value: 0.0,
            pressed: false,
            geometry: None,
        };
        slider.rebuild();
        slider
    }

    pub fn params(&self) -> &TrackParams {
        &self.params
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn geometry(&self) -> Option<&TrackGeometry> {
        self.geometry.as_ref()
    }

    /// Parameters as currently driven by the input device.
    fn effective_params(&self) -> TrackParams {
        TrackParams {
            bump_position: self.value,
            bump_height: if self.pressed {
                self.params.bump_height
            } else {
                0.0
            },
            ..self.params
        }
    }

    fn rebuild(&mut self) {
        match TrackGeometry::from_params(&self.effective_params()) {
            Ok(geometry) => self.geometry = Some(geometry),
            Err(error) => {
                warn!(%error, "curve rebuild failed, keeping previous geometry");
            }
        }
    }

    /// Apply a partial parameter update. On a non-finite field the patch
    /// is dropped wholesale, the previous geometry stays in effect, and
    /// the error is returned as a diagnostic.
    pub fn apply(&mut self, patch: &TrackPatch) -> Result<(), TrackError> {
        let merged = self.params.apply(patch);
        if let Err(error) = merged.validate() {
            warn!(%error, "ignoring parameter patch");
            return Err(error);
        }
        self.params = merged;
        self.rebuild();
        Ok(())
    }

    /// Move the thumb. The value is clamped to 0-100 and the bump is
    /// re-centered under it.
    pub fn set_value(&mut self, value: f64) {
        self.value = if value.is_finite() {
            value.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.rebuild();
    }

    /// Pointer down / focus: raise the bump under the thumb.
    pub fn press(&mut self) {
        self.pressed = true;
        self.rebuild();
    }

    /// Pointer up / blur: flatten the track.
    pub fn release(&mut self) {
        self.pressed = false;
        self.rebuild();
    }

    /// The curve's Y at a horizontal coordinate, against the most recent
    /// geometry. Before the first successful build this is the baseline.
    pub fn y_at(&self, x: f64) -> f64 {
        match &self.geometry {
            Some(geometry) => geometry.y_at(x),
            None => BASELINE_Y,
        }
    }

    /// Position of a marker pinned at a percentage of the track width.
    pub fn marker_position(&self, percent: f64) -> Point {
        let x = percent / 100.0 * self.params.view_box_width;
        Point::new(x, self.y_at(x))
    }

    /// Horizontal scale of the track fill, 0 to 1.
    pub fn fill_scale(&self) -> f64 {
        self.value / 100.0
    }

    /// Path for the most recent geometry, if one has been built.
    pub fn path(&self) -> Option<TrackPath> {
        self.geometry.as_ref().map(TrackGeometry::path)
    }

    /// SVG viewBox attribute for the configured width.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.params.view_box_width, VIEW_BOX_HEIGHT)
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(TrackParams::default())
    }
}
