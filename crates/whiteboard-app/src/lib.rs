//! Whiteboard Application
//!
//! Headless shell around the core: loads configuration and a recorded action
//! script, then feeds the actions through a board session.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use whiteboard_core::{Action, Board, BoardConfig, BoardError, BoardState, StyleAttributes, ToolKind};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usage: whiteboard <script.json> [config.json]")]
    Usage,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Step {step} rejected: {source}")]
    Replay {
        step: usize,
        #[source]
        source: BoardError,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// One recorded input step. Same shape as [`Action`], except a gesture start
/// may omit its style and pick up the configured default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScriptStep {
    SelectTool {
        tool: ToolKind,
    },
    GestureStart {
        x: f64,
        y: f64,
        #[serde(default)]
        style: Option<StyleAttributes>,
    },
    GestureUpdate {
        x: f64,
        y: f64,
    },
    GestureEnd,
}

impl ScriptStep {
    pub fn into_action(self, default_style: &StyleAttributes) -> Action {
        match self {
            ScriptStep::SelectTool { tool } => Action::select_tool(tool),
            ScriptStep::GestureStart { x, y, style } => {
                Action::gesture_start(x, y, style.unwrap_or_else(|| default_style.clone()))
            }
            ScriptStep::GestureUpdate { x, y } => Action::gesture_update(x, y),
            ScriptStep::GestureEnd => Action::gesture_end(),
        }
    }
}

/// Read a script: a JSON array of steps.
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, AppError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Run `steps` through a fresh board and return the final state.
///
/// Stops at the first rejected step.
pub fn replay(
    config: &AppConfig,
    steps: impl IntoIterator<Item = ScriptStep>,
) -> Result<BoardState, AppError> {
    let mut board = Board::with_config(&config.board);
    let mut count = 0;
    for (step, entry) in steps.into_iter().enumerate() {
        let action = entry.into_action(&config.board.default_style);
        board
            .dispatch(action)
            .map_err(|source| AppError::Replay { step, source })?;
        count += 1;
    }
    log::info!(
        "Replayed {count} steps, {} elements on the board",
        board.elements().len()
    );
    Ok(board.into_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use whiteboard_core::{Anchors, SerializableColor};

    #[test]
    fn test_load_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"board":{{"initial_tool":"Arrow","default_style":{{"stroke_color":{{"r":1,"g":2,"b":3,"a":255}},"fill_color":null,"stroke_width":5}}}}}}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.board.initial_tool, ToolKind::Arrow);
        assert_eq!(config.board.default_style.stroke_width.get(), 5);
        assert_eq!(
            config.board.default_style.stroke_color,
            SerializableColor::new(1, 2, 3, 255)
        );
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_replay_script_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"type":"SelectTool","tool":"Rectangle"}},
                {{"type":"GestureStart","x":10,"y":10}},
                {{"type":"GestureUpdate","x":50,"y":80}},
                {{"type":"GestureEnd"}}
            ]"#
        )
        .unwrap();

        let steps = load_script(file.path()).unwrap();
        let state = replay(&AppConfig::default(), steps).unwrap();
        assert_eq!(state.elements.len(), 1);
        assert_eq!(
            state.elements[0].anchors(),
            Some(&Anchors::new(10.0, 10.0, 50.0, 80.0))
        );
        assert_eq!(state.elements[0].style, StyleAttributes::default());
    }

    #[test]
    fn test_replay_uses_configured_tool() {
        let config = AppConfig {
            board: BoardConfig {
                initial_tool: ToolKind::Freehand,
                ..BoardConfig::default()
            },
        };
        let steps = vec![
            ScriptStep::GestureStart { x: 0.0, y: 0.0, style: None },
            ScriptStep::GestureUpdate { x: 1.0, y: 1.0 },
            ScriptStep::GestureEnd,
        ];
        let state = replay(&config, steps).unwrap();
        assert_eq!(state.elements[0].kind, ToolKind::Freehand);
        assert_eq!(state.elements[0].stroke().unwrap().len(), 2);
    }

    #[test]
    fn test_bad_script_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"type":"Teleport"}}]"#).unwrap();
        assert!(matches!(load_script(file.path()), Err(AppError::Json(_))));
    }
}
