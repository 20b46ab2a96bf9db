//! The finite state machine engine with linear undo/redo history.
//!
//! The engine owns a read-only transition table and an ordered history of
//! visited state names (the "story") with an integer cursor (`head`) into it.
//! Forward transitions append to the story only while the cursor sits at its
//! tail; [`Fsm::undo`] and [`Fsm::redo`] move the cursor without touching the
//! story's contents.
//!
//! # Branching mid-history
//!
//! Taking a forward transition while the cursor is *not* at the tail (after
//! one or more un-redone `undo` calls) does **not** truncate the stale
//! "future" entries. The cursor just steps past them and nothing is
//! appended, so the slot the cursor points at keeps whatever state already
//! occupied it. The newly entered state is live in [`Fsm::state`] but is
//! absent from the story: a following `undo` steps back over the stale slot,
//! and a following `redo` resurfaces the *old* future entry, not the state
//! you branched to. This matches the reference behavior exactly and is kept
//! deliberately; see the crate-level documentation.

use crate::{Config, FsmError, FsmResult, StateConfig};
use std::collections::BTreeMap;

/// A finite state machine over named states and events, with a replayable
/// undo/redo timeline.
///
/// All mutation goes through `&mut self` methods; the engine performs no
/// internal synchronization, so multi-threaded hosts must serialize access
/// externally.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::FsmBuilder;
///
/// let mut fsm = FsmBuilder::new()
///     .initial("draft")
///     .transition("draft", "submit", "review")
///     .transition("review", "approve", "published")
///     .build()
///     .unwrap();
///
/// fsm.trigger("submit").unwrap();
/// fsm.trigger("approve").unwrap();
/// assert_eq!(fsm.state(), "published");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "review");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "published");
/// ```
#[derive(Debug, Clone)]
pub struct Fsm {
    states: BTreeMap<String, StateConfig>,
    default_state: String,
    state: String,
    story: Vec<String>,
    head: usize,
}

impl Fsm {
    /// Create an engine from a configuration.
    ///
    /// Stores the table and the initial state name, then performs an
    /// ordinary forward transition into the initial state, seeding the
    /// history with its first entry.
    ///
    /// # Errors
    ///
    /// [`FsmError::UnknownState`] when `initial` is not a key of the table.
    pub fn new(config: Config) -> FsmResult<Self> {
        let initial = config.initial;
        let mut fsm = Self {
            states: config.states,
            default_state: initial.clone(),
            state: String::new(),
            story: Vec::new(),
            head: 0,
        };
        fsm.change_state(&initial)?;
        Ok(fsm)
    }

    /// The active state name. Pure query, no side effects.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The initial state name supplied at construction
    pub fn initial_state(&self) -> &str {
        &self.default_state
    }

    /// Read-only view of the visited-state timeline
    pub fn history(&self) -> &[String] {
        &self.story
    }

    /// The cursor position within [`history`](Fsm::history).
    ///
    /// One past the active entry: `history()[cursor() - 1]` is the slot the
    /// cursor nominally points at (which can diverge from [`state`](Fsm::state)
    /// after branching mid-history, see the module documentation).
    pub fn cursor(&self) -> usize {
        self.head
    }

    /// Go directly to the given state.
    ///
    /// Membership in the table is the only check: a state with an empty
    /// transition set is as valid a destination as any other. On success the
    /// active state is updated, the name is appended to history if and only
    /// if the cursor is at the tail, and the cursor advances by one. When
    /// the cursor is mid-history no entry is appended and the stale future
    /// entries stay in place (see the module documentation).
    ///
    /// # Errors
    ///
    /// [`FsmError::UnknownState`] when `state` is not a key of the table;
    /// the engine is left untouched.
    pub fn change_state(&mut self, state: &str) -> FsmResult<()> {
        if !self.states.contains_key(state) {
            return Err(FsmError::UnknownState(state.to_string()));
        }

        self.state = state.to_string();
        if self.head == self.story.len() {
            self.story.push(self.state.clone());
        }

        self.head += 1;
        Ok(())
    }

    /// Advance according to the current state's rule for `event`.
    ///
    /// # Errors
    ///
    /// [`FsmError::UnknownState`] when the current state has no rule for
    /// `event` (carrying the event name), or when the rule's target is
    /// absent from the table (carrying the target name). Both cases are the
    /// same error kind on purpose: an unresolvable event *is* an attempt to
    /// enter a state that does not exist.
    pub fn trigger(&mut self, event: &str) -> FsmResult<()> {
        let target = self
            .states
            .get(&self.state)
            .and_then(|descriptor| descriptor.transitions.get(event))
            .cloned();

        match target {
            Some(target) => self.change_state(&target),
            None => Err(FsmError::UnknownState(event.to_string())),
        }
    }

    /// Return to the initial state supplied at construction.
    ///
    /// An ordinary forward transition: it is recorded in history (subject to
    /// the same tail/non-tail rule as [`change_state`](Fsm::change_state))
    /// and is therefore undoable.
    pub fn reset(&mut self) -> FsmResult<()> {
        let default = self.default_state.clone();
        self.change_state(&default)
    }

    /// All state names in the table, as a sorted snapshot
    pub fn states(&self) -> Vec<String> {
        self.states.keys().cloned().collect()
    }

    /// State names whose descriptor has a rule for `event`, sorted snapshot
    pub fn states_handling(&self, event: &str) -> Vec<String> {
        self.states
            .iter()
            .filter(|(_, descriptor)| descriptor.transitions.contains_key(event))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Step the cursor one entry backward.
    ///
    /// Returns `false` without mutating anything when there is no earlier
    /// entry to return to. On success the active state becomes the entry
    /// before the vacated slot. History contents are never discarded.
    pub fn undo(&mut self) -> bool {
        if self.head < 2 {
            false
        } else {
            self.head -= 1;
            self.state = self.story[self.head - 1].clone();
            true
        }
    }

    /// Step the cursor one entry forward.
    ///
    /// Returns `false` without mutating anything when the cursor is already
    /// at the tail. On success the active state becomes the entry at the
    /// cursor, which then advances past it.
    pub fn redo(&mut self) -> bool {
        if self.head == self.story.len() {
            false
        } else {
            self.state = self.story[self.head].clone();
            self.head += 1;
            true
        }
    }

    /// Discard all undo/redo capability.
    ///
    /// Empties the timeline and re-seeds it with the current active state,
    /// leaving the engine as if freshly constructed with `initial` equal to
    /// that state. The configured initial state for [`reset`](Fsm::reset) is
    /// unchanged.
    pub fn clear_history(&mut self) -> FsmResult<()> {
        self.story.clear();
        self.head = 0;
        let current = self.state.clone();
        self.change_state(&current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FsmBuilder;

    fn student_fsm() -> Fsm {
        FsmBuilder::new()
            .initial("normal")
            .transition("normal", "study", "busy")
            .transition("busy", "get_tired", "sleeping")
            .transition("busy", "get_hungry", "hungry")
            .transition("hungry", "eat", "normal")
            .transition("sleeping", "get_hungry", "hungry")
            .transition("sleeping", "get_up", "normal")
            .build()
            .unwrap()
    }

    #[test]
    fn construction_seeds_initial_state() {
        let fsm = student_fsm();
        assert_eq!(fsm.state(), "normal");
        assert_eq!(fsm.initial_state(), "normal");
        assert_eq!(fsm.history(), ["normal"]);
        assert_eq!(fsm.cursor(), 1);
    }

    #[test]
    fn construction_without_initial_is_invalid_config() {
        let result = FsmBuilder::new().state("a").state("b").build();
        assert_eq!(result.unwrap_err(), FsmError::InvalidConfig);
    }

    #[test]
    fn construction_with_unknown_initial_is_unknown_state() {
        let result = FsmBuilder::new().initial("ghost").state("a").build();
        assert_eq!(
            result.unwrap_err(),
            FsmError::UnknownState("ghost".to_string())
        );
    }

    #[test]
    fn change_state_moves_and_records() {
        let mut fsm = student_fsm();
        fsm.change_state("busy").unwrap();
        assert_eq!(fsm.state(), "busy");
        assert_eq!(fsm.history(), ["normal", "busy"]);

        // change_state does not consult the transition rules
        fsm.change_state("sleeping").unwrap();
        assert_eq!(fsm.state(), "sleeping");
    }

    #[test]
    fn change_state_rejects_unknown_name() {
        let mut fsm = student_fsm();
        let err = fsm.change_state("flying").unwrap_err();
        assert_eq!(err, FsmError::UnknownState("flying".to_string()));
        assert_eq!(fsm.state(), "normal");
        assert_eq!(fsm.history(), ["normal"]);
    }

    #[test]
    fn empty_transition_set_is_a_valid_state() {
        let mut fsm = FsmBuilder::new()
            .initial("a")
            .transition("a", "go", "dead_end")
            .build()
            .unwrap();

        fsm.change_state("dead_end").unwrap();
        assert_eq!(fsm.state(), "dead_end");
    }

    #[test]
    fn trigger_follows_event_rule() {
        let mut fsm = student_fsm();
        fsm.trigger("study").unwrap();
        assert_eq!(fsm.state(), "busy");
        fsm.trigger("get_hungry").unwrap();
        assert_eq!(fsm.state(), "hungry");
    }

    #[test]
    fn trigger_with_unhandled_event_is_unknown_state() {
        let mut fsm = student_fsm();
        // "eat" has no rule in "normal"; same error kind as a bad state name
        let err = fsm.trigger("eat").unwrap_err();
        assert!(matches!(err, FsmError::UnknownState(_)));
        assert_eq!(fsm.state(), "normal");
    }

    #[test]
    fn reset_returns_to_initial_and_is_undoable() {
        let mut fsm = student_fsm();
        fsm.trigger("study").unwrap();
        fsm.trigger("get_tired").unwrap();

        fsm.reset().unwrap();
        assert_eq!(fsm.state(), "normal");
        assert_eq!(fsm.history(), ["normal", "busy", "sleeping", "normal"]);

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "sleeping");
    }

    #[test]
    fn states_returns_sorted_snapshot() {
        let fsm = student_fsm();
        assert_eq!(fsm.states(), ["busy", "hungry", "normal", "sleeping"]);

        // snapshot, not a live view
        let mut snapshot = fsm.states();
        snapshot.clear();
        assert_eq!(fsm.states(), ["busy", "hungry", "normal", "sleeping"]);
    }

    #[test]
    fn states_handling_filters_by_event_rule() {
        let fsm = student_fsm();
        assert_eq!(fsm.states_handling("get_hungry"), ["busy", "sleeping"]);
        assert_eq!(fsm.states_handling("study"), ["normal"]);
        assert!(fsm.states_handling("levitate").is_empty());
    }

    #[test]
    fn undo_steps_back_until_exhausted() {
        let mut fsm = student_fsm();
        fsm.trigger("study").unwrap();
        assert_eq!(fsm.state(), "busy");

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "normal");

        assert!(!fsm.undo());
        assert_eq!(fsm.state(), "normal");
    }

    #[test]
    fn redo_replays_undone_transition() {
        let mut fsm = student_fsm();
        fsm.trigger("study").unwrap();
        assert!(fsm.undo());
        assert_eq!(fsm.state(), "normal");

        assert!(fsm.redo());
        assert_eq!(fsm.state(), "busy");

        assert!(!fsm.redo());
        assert_eq!(fsm.state(), "busy");
    }

    #[test]
    fn redo_unavailable_without_prior_undo() {
        let mut fsm = student_fsm();
        assert!(!fsm.redo());
        fsm.trigger("study").unwrap();
        assert!(!fsm.redo());
    }

    // Reference behavior: branching mid-history neither truncates the stale
    // future nor records the branched-to state. The cursor steps past the
    // stale slot, undo jumps back over it, and redo resurfaces the old
    // future entry instead of the branched-to state.
    #[test]
    fn branch_mid_history_keeps_stale_future() {
        let mut fsm = student_fsm();
        fsm.trigger("study").unwrap(); // normal -> busy
        assert!(fsm.undo()); // back to normal, cursor mid-history
        assert_eq!(fsm.cursor(), 1);

        fsm.change_state("hungry").unwrap();
        assert_eq!(fsm.state(), "hungry");
        // "busy" survives and "hungry" was never appended
        assert_eq!(fsm.history(), ["normal", "busy"]);
        assert_eq!(fsm.cursor(), 2);

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "normal");

        assert!(fsm.redo());
        assert_eq!(fsm.state(), "busy"); // not "hungry"
    }

    #[test]
    fn branch_mid_history_deeper_timeline() {
        let mut fsm = student_fsm();
        fsm.trigger("study").unwrap(); // busy
        fsm.trigger("get_tired").unwrap(); // sleeping
        assert!(fsm.undo());
        assert!(fsm.undo());
        assert_eq!(fsm.state(), "normal");
        assert_eq!(fsm.cursor(), 1);

        fsm.change_state("hungry").unwrap();
        assert_eq!(fsm.history(), ["normal", "busy", "sleeping"]);
        assert_eq!(fsm.cursor(), 2);

        // the second stale entry is still redoable
        assert!(fsm.redo());
        assert_eq!(fsm.state(), "sleeping");
        assert_eq!(fsm.cursor(), 3);
    }

    #[test]
    fn clear_history_collapses_timeline() {
        let mut fsm = student_fsm();
        fsm.trigger("study").unwrap();
        fsm.trigger("get_hungry").unwrap();
        assert_eq!(fsm.state(), "hungry");

        fsm.clear_history().unwrap();
        assert_eq!(fsm.state(), "hungry");
        assert_eq!(fsm.history(), ["hungry"]);
        assert_eq!(fsm.cursor(), 1);

        assert!(!fsm.undo());
        assert!(!fsm.redo());

        // reset still targets the configured initial state
        fsm.reset().unwrap();
        assert_eq!(fsm.state(), "normal");
    }

    #[test]
    fn queries_are_idempotent() {
        let mut fsm = student_fsm();
        fsm.trigger("study").unwrap();

        let state = fsm.state().to_string();
        let states = fsm.states();
        for _ in 0..3 {
            assert_eq!(fsm.state(), state);
            assert_eq!(fsm.states(), states);
        }
    }

    #[test]
    fn cursor_stays_within_history_bounds() {
        let mut fsm = student_fsm();
        fsm.trigger("study").unwrap();
        fsm.trigger("get_tired").unwrap();
        fsm.undo();
        fsm.undo();
        fsm.undo();
        assert!(fsm.cursor() >= 1);
        assert!(fsm.cursor() <= fsm.history().len());

        fsm.redo();
        fsm.redo();
        fsm.redo();
        assert_eq!(fsm.cursor(), fsm.history().len());
    }
}
