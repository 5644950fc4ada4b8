//! Whiteboard Core Library
//!
//! Tool selection, the pointer-gesture state machine and the element model of
//! a vector whiteboard. Rendering and stroke smoothing live elsewhere and are
//! reached through the traits in [`outline`].

pub mod board;
pub mod config;
pub mod error;
pub mod outline;
pub mod shapes;
pub mod tools;

pub use board::{Action, Board, BoardState, GestureState, reduce};
pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use outline::{
    CenterlineOutliner, OutlinePipeline, OutlinePolygon, PathSerializer, QuadraticPathSerializer,
    RenderablePath, StrokeOutliner,
};
pub use shapes::{
    Anchors, DEFAULT_STROKE_WIDTH, Element, ElementBody, ElementId, SerializableColor, Stroke,
    StyleAttributes,
};
pub use tools::ToolKind;
