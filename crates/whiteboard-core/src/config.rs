//! Board configuration.

use crate::shapes::StyleAttributes;
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Settings applied when a board session starts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Tool selected before the user picks one.
    pub initial_tool: ToolKind,
    /// Style used by callers that have no palette state of their own.
    pub default_style: StyleAttributes,
}
