//! Two-anchor geometry shared by line, rectangle, ellipse and arrow.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Start and end anchors of a shape element.
///
/// `(x1, y1)` is where the gesture started and never moves. `(x2, y2)` follows
/// the pointer. No normalization is applied, so `x2 < x1` is legal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchors {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Anchors {
    /// Create anchors from start `(x1, y1)` and end `(x2, y2)`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The fixed start anchor.
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// The end anchor that follows the pointer.
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Bounding box of both anchors, normalized.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start(), self.end())
    }
}
