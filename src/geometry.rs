use serde::{Deserialize, Serialize};

use crate::bezier::{CubicSegment, Point};
use crate::constants::{BASELINE_Y, SHOULDER_OFFSET, VIEW_BOX_HEIGHT};
use crate::error::TrackError;
use crate::params::TrackParams;
use crate::path::{PathCommand, TrackPath};

/// Fully derived track geometry: the two Bézier segments of the bump plus
/// the flat extensions on either side.
///
/// A value of this type is recomputed wholesale from [`TrackParams`] on
/// every parameter change; nothing is mutated incrementally. Callers hold
/// the most recent geometry and thread it into point queries, so there is
/// no hidden shared state anywhere in the crate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub view_box_width: f64,
    pub baseline_y: f64,
    /// Left end of the rendered path, extended half a section beyond the
    /// viewBox so the stroke never visibly clips at the edge.
    pub path_start_x: f64,
    pub path_end_x: f64,
    pub curve_start_x: f64,
    pub curve_end_x: f64,
    /// Bump center; also the join point of the two segments.
    pub peak_center_x: f64,
    pub peak_y: f64,
    /// Segment from the left shoulder up to the peak.
    pub ascent: CubicSegment,
    /// Segment from the peak back down to the right shoulder.
    pub descent: CubicSegment,
}

impl TrackGeometry {
    /// Derive the geometry for a parameter set.
    ///
    /// Pure and deterministic: identical parameters yield identical
    /// geometry and a byte-identical path string. Fails only on non-finite
    /// input; every finite combination, however degenerate (zero-width
    /// section, zero height, off-viewport positions), produces a
    /// well-defined geometry.
    pub fn from_params(params: &TrackParams) -> Result<Self, TrackError> {
        params.validate()?;

        let baseline_y = BASELINE_Y;
        let peak_center_x = params.bump_position / 100.0 * params.view_box_width;
        let peak_y = baseline_y - params.bump_height;

        let half_section = params.curve_section_width / 2.0;
        let curve_start_x = peak_center_x - half_section;
        let curve_end_x = peak_center_x + half_section;

        // Peak controls sit symmetrically about the bump center
        let half_top = params.curve_top_width / 2.0;
        let peak = Point::new(peak_center_x, peak_y);

        let ascent = CubicSegment::new(
            Point::new(curve_start_x, baseline_y),
            Point::new(curve_start_x + SHOULDER_OFFSET, baseline_y),
            Point::new(peak_center_x - half_top, peak_y),
            peak,
        );
        let descent = CubicSegment::new(
            peak,
            Point::new(peak_center_x + half_top, peak_y),
            Point::new(curve_end_x - SHOULDER_OFFSET, baseline_y),
            Point::new(curve_end_x, baseline_y),
        );

        Ok(Self {
            view_box_width: params.view_box_width,
            baseline_y,
            path_start_x: -half_section,
            path_end_x: params.view_box_width + half_section,
            curve_start_x,
            curve_end_x,
            peak_center_x,
            peak_y,
            ascent,
            descent,
        })
    }

    /// The curve's Y at a horizontal coordinate.
    ///
    /// Outside the bump region the track is flat and the answer is the
    /// baseline; inside, the matching segment is inverted numerically
    /// (bisection on X, see [`CubicSegment::y_at_x`]). Total work is
    /// bounded, and the same geometry and x always give the same y.
    pub fn y_at(&self, x: f64) -> f64 {
        if x <= self.curve_start_x || x >= self.curve_end_x {
            self.baseline_y
        } else if x <= self.peak_center_x {
            self.ascent.y_at_x(x)
        } else {
            self.descent.y_at_x(x)
        }
    }

    /// Drawing instructions: flat lead-in, the two bump segments, flat
    /// lead-out.
    pub fn path(&self) -> TrackPath {
        TrackPath {
            commands: vec![
                PathCommand::MoveTo(Point::new(self.path_start_x, self.baseline_y)),
                PathCommand::LineTo(self.ascent.p0),
                PathCommand::CurveTo {
                    c1: self.ascent.p1,
                    c2: self.ascent.p2,
                    end: self.ascent.p3,
                },
                PathCommand::CurveTo {
                    c1: self.descent.p1,
                    c2: self.descent.p2,
                    end: self.descent.p3,
                },
                PathCommand::LineTo(Point::new(self.path_end_x, self.baseline_y)),
            ],
        }
    }

    /// SVG viewBox attribute for this geometry, e.g. `0 0 300 4`.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.view_box_width, VIEW_BOX_HEIGHT)
    }
}
