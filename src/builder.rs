//! Builder pattern implementation for the engine

use crate::{Config, Fsm, FsmError, FsmResult, StateConfig};
use std::collections::BTreeMap;

/// Fluent builder for the engine.
///
/// Collects states and transition rules, then hands [`Fsm::new`] the
/// assembled [`Config`]. Declaring a transition implicitly registers both
/// endpoints as states.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::FsmBuilder;
///
/// let mut fsm = FsmBuilder::new()
///     .initial("idle")
///     .transition("idle", "start", "running")
///     .transition("running", "stop", "idle")
///     .build()
///     .unwrap();
///
/// fsm.trigger("start").unwrap();
/// assert_eq!(fsm.state(), "running");
/// ```
#[derive(Debug, Default)]
pub struct FsmBuilder {
    initial: Option<String>,
    states: BTreeMap<String, StateConfig>,
}

impl FsmBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state.
    ///
    /// The name is not registered as a state; declare it with [`state`] or
    /// as a [`transition`] endpoint, or `build` fails with
    /// [`FsmError::UnknownState`].
    ///
    /// [`state`]: FsmBuilder::state
    /// [`transition`]: FsmBuilder::transition
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Register a state with no outgoing transitions (a valid dead end)
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name.into()).or_default();
        self
    }

    /// Add an event rule from one state to another, registering both states
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let to = to.into();
        self.states.entry(to.clone()).or_default();
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to);
        self
    }

    /// Build the engine.
    ///
    /// Fails with [`FsmError::InvalidConfig`] when no initial state was
    /// supplied, and propagates [`FsmError::UnknownState`] from [`Fsm::new`]
    /// for an initial state missing from the table.
    pub fn build(self) -> FsmResult<Fsm> {
        let initial = self.initial.ok_or(FsmError::InvalidConfig)?;
        Fsm::new(Config {
            initial,
            states: self.states,
        })
    }
}
