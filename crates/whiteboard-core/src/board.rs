//! Board state and the action reducer.
//!
//! Pointer input arrives as [`Action`]s. [`reduce`] maps a state and an action
//! to the next state without touching its input, and [`Board`] keeps the
//! current state for a session, swapping it wholesale after each successful
//! action.

use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::outline::OutlinePipeline;
use crate::shapes::{
    Anchors, Element, ElementId, StyleAttributes, append_point, create_element,
};
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Actions accepted by the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Make `tool` the tool for the next gesture.
    SelectTool { tool: ToolKind },
    /// Pointer down: create a new element at `(x, y)`.
    GestureStart {
        x: f64,
        y: f64,
        style: StyleAttributes,
    },
    /// Pointer move: reshape the element in progress.
    GestureUpdate { x: f64, y: f64 },
    /// Pointer up: freeze the element in progress.
    GestureEnd,
}

impl Action {
    pub fn select_tool(tool: ToolKind) -> Self {
        Action::SelectTool { tool }
    }

    pub fn gesture_start(x: f64, y: f64, style: StyleAttributes) -> Self {
        Action::GestureStart { x, y, style }
    }

    pub fn gesture_update(x: f64, y: f64) -> Self {
        Action::GestureUpdate { x, y }
    }

    pub fn gesture_end() -> Self {
        Action::GestureEnd
    }
}

/// Whether a gesture is in progress, and which element it is shaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing { active: ElementId },
}

/// Everything the reducer reads and writes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardState {
    pub active_tool: ToolKind,
    pub gesture: GestureState,
    /// Elements in creation order.
    pub elements: Vec<Element>,
}

impl BoardState {
    /// Create an empty board with `tool` selected.
    pub fn new(tool: ToolKind) -> Self {
        Self {
            active_tool: tool,
            gesture: GestureState::Idle,
            elements: Vec::new(),
        }
    }

    /// Whether a gesture is in progress.
    pub fn gesture_active(&self) -> bool {
        matches!(self.gesture, GestureState::Drawing { .. })
    }

    /// Id of the element the current gesture is shaping, if any.
    pub fn active_element_id(&self) -> Option<ElementId> {
        match self.gesture {
            GestureState::Drawing { active } => Some(active),
            GestureState::Idle => None,
        }
    }

    /// The element being shaped by the current gesture, if any.
    pub fn active_element(&self) -> Option<&Element> {
        let id = self.active_element_id()?;
        self.elements.iter().find(|e| e.id == id)
    }

    /// Id the next created element will get.
    fn next_id(&self) -> ElementId {
        self.elements.len()
    }

    /// Serialize the state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a state from JSON and check it with [`BoardState::validate`].
    pub fn from_json(json: &str) -> BoardResult<Self> {
        let state: Self =
            serde_json::from_str(json).map_err(|e| BoardError::Serialization(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }

    /// Check the invariants the reducer relies on.
    ///
    /// Every element's id must equal its index and its body must match its
    /// kind. While drawing, the active element must be the last one.
    pub fn validate(&self) -> BoardResult<()> {
        for (index, element) in self.elements.iter().enumerate() {
            if element.id != index {
                return Err(BoardError::IdOutOfSequence {
                    index,
                    id: element.id,
                });
            }
            if !element.is_well_formed() {
                return Err(BoardError::UnrecognizedElementKind {
                    id: element.id,
                    kind: element.kind,
                });
            }
        }

        if let GestureState::Drawing { active } = self.gesture {
            if active >= self.elements.len() {
                return Err(BoardError::MissingActiveElement(active));
            }
            if active + 1 != self.elements.len() {
                return Err(BoardError::ActiveElementNotLast(active));
            }
        }
        Ok(())
    }
}

/// Apply `action` to `state`, returning the next state.
///
/// `state` is never modified. On error the caller keeps `state` as is.
pub fn reduce(
    state: &BoardState,
    action: &Action,
    pipeline: &OutlinePipeline,
) -> BoardResult<BoardState> {
    match action {
        Action::SelectTool { tool } => {
            log::debug!("Tool changed: {} -> {}", state.active_tool, tool);
            Ok(BoardState {
                active_tool: *tool,
                ..state.clone()
            })
        }
        Action::GestureStart { x, y, style } => {
            if let Some(abandoned) = state.active_element_id() {
                log::warn!("Gesture started while element {abandoned} was in progress, freezing it");
            }

            let id = state.next_id();
            let element = create_element(
                id,
                state.active_tool,
                Anchors::new(*x, *y, *x, *y),
                style.clone(),
                pipeline,
            );
            log::debug!("Gesture started: {} element {id} at ({x}, {y})", element.kind);

            let mut elements = Vec::with_capacity(state.elements.len() + 1);
            elements.extend_from_slice(&state.elements);
            elements.push(element);

            Ok(BoardState {
                active_tool: state.active_tool,
                gesture: GestureState::Drawing { active: id },
                elements,
            })
        }
        Action::GestureUpdate { x, y } => {
            let GestureState::Drawing { active } = state.gesture else {
                log::trace!("Ignoring update at ({x}, {y}) with no gesture in progress");
                return Ok(state.clone());
            };

            let index = state
                .elements
                .iter()
                .rposition(|e| e.id == active)
                .ok_or(BoardError::MissingActiveElement(active))?;
            if index + 1 != state.elements.len() {
                return Err(BoardError::ActiveElementNotLast(active));
            }
            let updated = update_element(&state.elements[index], *x, *y, pipeline)?;
            log::trace!("Element {active} updated to ({x}, {y})");

            let mut next = state.clone();
            next.elements[index] = updated;
            Ok(next)
        }
        Action::GestureEnd => {
            if let Some(id) = state.active_element_id() {
                log::debug!("Gesture ended, element {id} frozen");
            }
            Ok(BoardState {
                gesture: GestureState::Idle,
                ..state.clone()
            })
        }
    }
}

/// Reshape an in-progress element toward `(x, y)` according to its own kind.
fn update_element(
    element: &Element,
    x: f64,
    y: f64,
    pipeline: &OutlinePipeline,
) -> BoardResult<Element> {
    match element.kind {
        ToolKind::Line | ToolKind::Rectangle | ToolKind::Ellipse | ToolKind::Arrow => {
            let start = element
                .anchors()
                .ok_or(BoardError::UnrecognizedElementKind {
                    id: element.id,
                    kind: element.kind,
                })?;
            Ok(create_element(
                element.id,
                element.kind,
                Anchors::new(start.x1, start.y1, x, y),
                element.style.clone(),
                pipeline,
            ))
        }
        ToolKind::Freehand => append_point(element, x, y, pipeline),
    }
}

/// A board editing session.
#[derive(Debug, Default)]
pub struct Board {
    state: BoardState,
    pipeline: OutlinePipeline,
}

impl Board {
    /// Create an empty board with default settings and outline pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &BoardConfig) -> Self {
        Self::with_pipeline(config, OutlinePipeline::default())
    }

    pub fn with_pipeline(config: &BoardConfig, pipeline: OutlinePipeline) -> Self {
        Self {
            state: BoardState::new(config.initial_tool),
            pipeline,
        }
    }

    /// Resume a session from a state held by the application.
    ///
    /// The state is rejected if it fails [`BoardState::validate`].
    pub fn from_state(state: BoardState, pipeline: OutlinePipeline) -> BoardResult<Self> {
        state.validate()?;
        Ok(Self { state, pipeline })
    }

    /// Apply an action. On error the current state is kept unchanged.
    pub fn dispatch(&mut self, action: Action) -> BoardResult<()> {
        match reduce(&self.state, &action, &self.pipeline) {
            Ok(next) => {
                self.state = next;
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected {action:?}: {e}");
                Err(e)
            }
        }
    }

    pub fn active_tool(&self) -> ToolKind {
        self.state.active_tool
    }

    pub fn gesture(&self) -> GestureState {
        self.state.gesture
    }

    pub fn is_drawing(&self) -> bool {
        self.state.gesture_active()
    }

    pub fn elements(&self) -> &[Element] {
        &self.state.elements
    }

    pub fn active_element(&self) -> Option<&Element> {
        self.state.active_element()
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn into_state(self) -> BoardState {
        self.state
    }
}
