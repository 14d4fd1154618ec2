/// Baseline Y: the track's vertical position outside the bump region.
pub const BASELINE_Y: f64 = 2.0;

/// Height of the viewBox strip the track is drawn in.
pub const VIEW_BOX_HEIGHT: f64 = 4.0;

/// Horizontal offset of the shoulder control points from the edges of the
/// curve section. Hand-tuned shape constant controlling how sharply the
/// flat track rolls into the bump. Deliberately NOT derived from the
/// section width, so very narrow sections can push the shoulders past the
/// peak controls and fold the curve (see `CubicSegment::y_at_x`).
pub const SHOULDER_OFFSET: f64 = 33.0;

/// Absolute tolerance on X when bisecting for the curve parameter t.
pub const X_TOLERANCE: f64 = 1e-4;

/// Bisection iteration cap. Twenty halvings of [0, 1] shrink the bracket
/// to ~1e-6 of the segment, well inside `X_TOLERANCE` for the coordinate
/// ranges the slider uses. Bounded work per query, no convergence loop.
pub const MAX_BISECTIONS: usize = 20;
