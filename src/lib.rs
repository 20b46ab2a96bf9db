//! # Rewind FSM
//!
//! A finite state machine engine with a linear undo/redo timeline, meant to
//! be embedded wherever ad-hoc flags are not enough: UI widgets, workflow
//! steps, game states.
//!
//! ## Features
//!
//! - **Named states and events**: the transition table is plain data, a
//!   mapping from state name to event rules, supplied once at construction.
//! - **Undo/redo history**: every forward transition is recorded; stepping
//!   backward and forward moves a cursor without rewriting the timeline.
//! - **Fail-fast transitions**: an unknown target is rejected at the moment
//!   the transition is taken, never earlier.
//! - **Serde wire format**: the configuration shape round-trips through
//!   serde, so tables can live in JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use rewind_fsm::FsmBuilder;
//!
//! let mut fsm = FsmBuilder::new()
//!     .initial("locked")
//!     .transition("locked", "coin", "unlocked")
//!     .transition("unlocked", "push", "locked")
//!     .build()?;
//!
//! fsm.trigger("coin")?;
//! assert_eq!(fsm.state(), "unlocked");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "locked");
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "unlocked");
//! # Ok::<(), rewind_fsm::FsmError>(())
//! ```
//!
//! ## History semantics
//!
//! The timeline is append-only at its tail. A forward transition taken while
//! the cursor sits mid-history (after `undo`) does **not** truncate the
//! stale future entries: the cursor steps past them without appending, so a
//! later `redo` resurfaces the old entry rather than the state branched to.
//! This mirrors the reference behavior deliberately; whether it is product
//! behavior or a latent defect is ambiguous upstream, and this crate
//! reproduces rather than resolves it. See [`Fsm::change_state`] for the
//! exact rule.
//!
//! ## Threading
//!
//! The engine is synchronous and does no internal locking. It is `Send`, but
//! concurrent mutation must be serialized by the host (a mutex, or confining
//! the engine to one thread).

#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod fsm;

pub use builder::FsmBuilder;
pub use config::{Config, StateConfig};
pub use error::{FsmError, FsmResult};
pub use fsm::Fsm;

pub mod prelude {
    //! Prelude module for convenient imports
    pub use crate::{Config, Fsm, FsmBuilder, FsmError, FsmResult, StateConfig};
}
