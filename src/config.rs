//! Engine configuration: the transition table and the initial state.
//!
//! The configuration shape is the crate's only wire format. It serializes
//! to and from the JSON layout
//!
//! ```json
//! {
//!     "initial": "off",
//!     "states": {
//!         "off": { "transitions": { "power": "on" } },
//!         "on":  { "transitions": { "power": "off" } }
//!     }
//! }
//! ```
//!
//! Maps are `BTreeMap` so the key order reported by
//! [`Fsm::states`](crate::Fsm::states) is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete engine configuration, supplied once at construction.
///
/// The table becomes immutable for the engine's lifetime. No structural
/// validation happens here: a transition target that is not itself a key of
/// `states` is only rejected at the moment that transition is taken.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::{Config, Fsm, StateConfig};
/// use std::collections::BTreeMap;
///
/// let mut states = BTreeMap::new();
/// states.insert(
///     "locked".to_string(),
///     StateConfig::with_transitions([("coin", "unlocked")]),
/// );
/// states.insert(
///     "unlocked".to_string(),
///     StateConfig::with_transitions([("push", "locked")]),
/// );
///
/// let fsm = Fsm::new(Config { initial: "locked".to_string(), states }).unwrap();
/// assert_eq!(fsm.state(), "locked");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the state the engine starts in
    pub initial: String,
    /// The transition table: state name to state descriptor
    pub states: BTreeMap<String, StateConfig>,
}

/// Descriptor for a single state: its outgoing event rules.
///
/// An empty transition set is a perfectly valid state (a dead end the
/// engine can still occupy); it is never treated as "missing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Event name to target state name
    #[serde(default)]
    pub transitions: BTreeMap<String, String>,
}

impl StateConfig {
    /// Descriptor with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor built from `(event, target)` pairs.
    pub fn with_transitions<I, E, T>(rules: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        Self {
            transitions: rules
                .into_iter()
                .map(|(event, target)| (event.into(), target.into()))
                .collect(),
        }
    }
}
