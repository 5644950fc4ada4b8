//! Tool selection for the whiteboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Drawing tools. The active tool decides the kind of the next element created
/// when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Line,
    Rectangle,
    Ellipse,
    Arrow,
    Freehand,
}

impl ToolKind {
    /// Every tool, in toolbar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Freehand,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Ellipse,
        ToolKind::Arrow,
    ];

    /// Whether elements of this kind are defined by two anchors.
    pub fn is_shape(self) -> bool {
        !matches!(self, ToolKind::Freehand)
    }

    /// Lower-case name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Ellipse => "ellipse",
            ToolKind::Arrow => "arrow",
            ToolKind::Freehand => "freehand",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a tool name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl FromStr for ToolKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(ToolKind::Line),
            "rectangle" | "rect" => Ok(ToolKind::Rectangle),
            "ellipse" | "circle" => Ok(ToolKind::Ellipse),
            "arrow" => Ok(ToolKind::Arrow),
            "freehand" | "brush" | "pencil" => Ok(ToolKind::Freehand),
            _ => Err(UnknownTool(s.to_string())),
        }
    }
}
