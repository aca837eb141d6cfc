//! Accordion expansion state for click-to-toggle menu surfaces.

use std::collections::HashSet;

/// The set of currently expanded group names for one menu surface.
///
/// Each surface (rail, drawer) owns its own instance; expanding a group on
/// one surface is never visible on another. The state starts empty, is only
/// ever mutated through [`ExpansionState::toggle`], and is discarded with the
/// owning surface.
#[derive(Debug, Default, Clone)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    /// Creates an empty expansion state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the expansion of a group name: expands it if collapsed,
    /// collapses it if expanded. Toggling twice restores the prior state.
    pub fn toggle(&mut self, name: &str) {
        if !self.expanded.remove(name) {
            self.expanded.insert(name.to_string());
        }
    }

    /// Whether the group with the given name is currently expanded.
    /// Unknown names are simply not expanded.
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::ExpansionState;

    #[test]
    fn starts_with_nothing_expanded() {
        let state = ExpansionState::new();
        assert!(!state.is_expanded("Products"));
        assert!(!state.is_expanded(""));
    }

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = ExpansionState::new();
        state.toggle("Products");
        assert!(state.is_expanded("Products"));
        state.toggle("Products");
        assert!(!state.is_expanded("Products"));
    }

    #[test]
    fn double_toggle_is_involution_regardless_of_start() {
        let mut state = ExpansionState::new();
        state.toggle("About");
        let before = state.is_expanded("About");
        state.toggle("About");
        state.toggle("About");
        assert_eq!(state.is_expanded("About"), before);
    }

    #[test]
    fn toggles_are_independent_per_name() {
        let mut state = ExpansionState::new();
        state.toggle("Products");
        assert!(state.is_expanded("Products"));
        assert!(!state.is_expanded("About"));
    }

    #[test]
    fn instances_never_observe_each_others_toggles() {
        let mut a = ExpansionState::new();
        let b = ExpansionState::new();
        a.toggle("Products");
        assert!(a.is_expanded("Products"));
        assert!(!b.is_expanded("Products"));
    }
}
