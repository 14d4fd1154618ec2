//! Geometry engine for a slider whose track is a two-segment cubic Bézier
//! "bump" curve.
//!
//! Five scalar parameters describe the bump (viewBox width, bump height,
//! section width, top width, position); construction derives the control
//! points and an SVG-compatible path description, and point queries invert
//! the curve (X → Y) by bounded bisection per segment.
//!
//! Zero I/O — pure math engine with no opinions about rendering or event
//! plumbing. [`TrackGeometry`] is an explicit value threaded by the caller;
//! the optional [`Slider`] model layers the input-device state (value,
//! press, parameter patches) on top.

pub mod bezier;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod params;
pub mod path;
pub mod slider;

pub use bezier::{CubicSegment, Point};
pub use constants::{BASELINE_Y, MAX_BISECTIONS, SHOULDER_OFFSET, X_TOLERANCE};
pub use error::TrackError;
pub use geometry::TrackGeometry;
pub use params::{TrackParams, TrackPatch};
pub use path::{PathCommand, TrackPath};
pub use slider::{MarkerSymbol, Slider};
