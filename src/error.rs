//! Error types for the state machine engine

use thiserror::Error;

/// Result type alias for engine operations
pub type FsmResult<T> = std::result::Result<T, FsmError>;

/// Errors that can occur during engine construction or transitions.
///
/// There are exactly two kinds, and both are fatal to the call that raised
/// them. Exhausted undo/redo history is not an error; [`Fsm::undo`] and
/// [`Fsm::redo`] report availability through their `bool` return instead.
///
/// [`Fsm::undo`]: crate::Fsm::undo
/// [`Fsm::redo`]: crate::Fsm::redo
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsmError {
    /// Construction was attempted without a configuration
    #[error("no configuration supplied")]
    InvalidConfig,

    /// A transition targeted a name that is not a key of the transition table.
    ///
    /// Raised by [`Fsm::change_state`] for a bad state name, and by
    /// [`Fsm::trigger`] when the current state has no rule for the event
    /// (the variant then carries the event name, the only name available).
    ///
    /// [`Fsm::change_state`]: crate::Fsm::change_state
    /// [`Fsm::trigger`]: crate::Fsm::trigger
    #[error("unknown state {0:?}")]
    UnknownState(String),
}
