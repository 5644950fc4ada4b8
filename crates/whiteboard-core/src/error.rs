//! Errors raised while applying board actions.

use crate::shapes::ElementId;
use crate::tools::ToolKind;
use thiserror::Error;

/// Board errors. Any of these rejects the action that caused it; the board
/// state is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Element {id} of kind {kind} has no geometry this board can update")]
    UnrecognizedElementKind { id: ElementId, kind: ToolKind },
    #[error("Active element {0} is not on the board")]
    MissingActiveElement(ElementId),
    #[error("Element at index {index} has id {id}")]
    IdOutOfSequence { index: usize, id: ElementId },
    #[error("Active element {0} is not the last element")]
    ActiveElementNotLast(ElementId),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
