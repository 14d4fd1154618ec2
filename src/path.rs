use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bezier::Point;

/// A single absolute path-data command.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier with two control points and an endpoint.
    CurveTo { c1: Point, c2: Point, end: Point },
}

/// Ordered drawing instructions for the full track outline.
///
/// Renders via `Display` to SVG path data with absolute coordinates
/// (`M ... L ... C ... C ... L ...`). Construction is pure, so identical
/// parameters always render byte-identical strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackPath {
    pub commands: Vec<PathCommand>,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            PathCommand::CurveTo { c1, c2, end } => write!(
                f,
                "C {} {} {} {} {} {}",
                c1.x, c1.y, c2.x, c2.y, end.x, end.y
            ),
        }
    }
}

impl fmt::Display for TrackPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}
