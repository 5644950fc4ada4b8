//! Element definitions for the whiteboard.

mod anchors;
pub mod factory;
pub mod freehand;

pub use anchors::Anchors;
pub use factory::create_element;
pub use freehand::{Stroke, append_point};

use crate::tools::ToolKind;
use kurbo::Rect;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    /// Create a color from RGBA components.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Opaque white.
    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke width used when none is configured.
pub const DEFAULT_STROKE_WIDTH: NonZeroU32 = NonZeroU32::MIN.saturating_add(1);

/// Style attributes captured when a gesture starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleAttributes {
    pub stroke_color: SerializableColor,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
    pub stroke_width: NonZeroU32,
}

impl StyleAttributes {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }
}

impl Default for StyleAttributes {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            fill_color: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Element identifier: the element's index in the collection when it was
/// created. Never reused within a session.
pub type ElementId = usize;

/// Geometry of an element. Which variant is valid depends on the element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementBody {
    /// Two anchors, used by line, rectangle, ellipse and arrow.
    Anchors(Anchors),
    /// Sample points plus outline, used by freehand.
    Stroke(Stroke),
}

/// A drawn element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub kind: ToolKind,
    pub style: StyleAttributes,
    pub body: ElementBody,
}

impl Element {
    /// Anchors of a shape element, `None` for freehand.
    pub fn anchors(&self) -> Option<&Anchors> {
        match &self.body {
            ElementBody::Anchors(anchors) => Some(anchors),
            ElementBody::Stroke(_) => None,
        }
    }

    /// Stroke of a freehand element, `None` for shapes.
    pub fn stroke(&self) -> Option<&Stroke> {
        match &self.body {
            ElementBody::Stroke(stroke) => Some(stroke),
            ElementBody::Anchors(_) => None,
        }
    }

    /// Whether the body is the one the kind calls for.
    pub fn is_well_formed(&self) -> bool {
        matches!(
            (self.kind.is_shape(), &self.body),
            (true, ElementBody::Anchors(_)) | (false, ElementBody::Stroke(_))
        )
    }

    /// Axis-aligned bounds in canvas coordinates.
    ///
    /// Anchors are stored as given; the bounds are normalized so renderers
    /// can use them directly even when the end anchor lies above or left of
    /// the start anchor.
    pub fn bounds(&self) -> Rect {
        match &self.body {
            ElementBody::Anchors(anchors) => anchors.bounds(),
            ElementBody::Stroke(stroke) => stroke.bounds(),
        }
    }
}
