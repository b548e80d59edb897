//! Selection state machine behind the multi-select dropdown
//!
//! `SelectionState` is a plain value; every change goes through
//! [`SelectionState::reduce`], which returns the next state plus the
//! side effect the host has to perform. Everything the view shows
//! (filtered options, tri-state checkbox, apply gate) is derived on read.

use super::option::SelectOption;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    committed: HashSet<String>,
    draft: HashSet<String>,
    is_open: bool,
    search_term: String,
}

/// User intents accepted by the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Trigger button: opens when closed, discards the draft when open
    Toggle,
    /// Cancel button, Escape key, click outside
    Cancel,
    Apply,
    ToggleOption(String),
    SelectAll,
    DeselectAll,
    /// Select-all checkbox: deselects everything when all options are selected
    ToggleSelectAll,
    SetSearch(String),
    /// Host-driven replacement of the committed selection
    SyncCommitted(HashSet<String>),
}

/// What the host must do after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    None,
    /// Dropdown just opened; hosts use this to load options lazily
    Opened,
    /// Apply produced a new committed selection
    Committed(HashSet<String>),
}

/// Tri-state of the select-all checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    /// Value for the `aria-checked` attribute
    pub fn aria_checked(self) -> &'static str {
        match self {
            CheckState::Unchecked => "false",
            CheckState::Checked => "true",
            CheckState::Indeterminate => "mixed",
        }
    }
}

impl SelectionState {
    pub fn new(committed: HashSet<String>) -> Self {
        Self {
            draft: committed.clone(),
            committed,
            is_open: false,
            search_term: String::new(),
        }
    }

    pub fn committed(&self) -> &HashSet<String> {
        &self.committed
    }

    pub fn draft(&self) -> &HashSet<String> {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.draft.contains(id)
    }

    /// Applies one intent. `options` are the currently loaded options; ids
    /// outside of them are never added to the draft.
    pub fn reduce(mut self, intent: Intent, options: &[SelectOption]) -> (Self, Outcome) {
        if !self.is_open {
            return match intent {
                Intent::Toggle => {
                    self.is_open = true;
                    self.draft = self.committed.clone();
                    self.search_term.clear();
                    (self, Outcome::Opened)
                }
                Intent::SyncCommitted(ids) => {
                    self.draft = ids.clone();
                    self.committed = ids;
                    (self, Outcome::None)
                }
                _ => (self, Outcome::None),
            };
        }

        match intent {
            Intent::Toggle | Intent::Cancel => (self.close(), Outcome::None),
            Intent::Apply => {
                if !self.has_changes() {
                    return (self.close(), Outcome::None);
                }
                self.committed = self.draft.clone();
                let committed = self.committed.clone();
                (self.close(), Outcome::Committed(committed))
            }
            Intent::ToggleOption(id) => {
                if !self.draft.remove(&id) && options.iter().any(|o| o.id == id) {
                    self.draft.insert(id);
                }
                (self, Outcome::None)
            }
            Intent::SelectAll => {
                self.draft = options.iter().map(|o| o.id.clone()).collect();
                (self, Outcome::None)
            }
            Intent::DeselectAll => {
                self.draft.clear();
                (self, Outcome::None)
            }
            Intent::ToggleSelectAll => {
                let intent = if self.all_selected(options) {
                    Intent::DeselectAll
                } else {
                    Intent::SelectAll
                };
                self.reduce(intent, options)
            }
            Intent::SetSearch(term) => {
                self.search_term = term;
                (self, Outcome::None)
            }
            Intent::SyncCommitted(ids) => {
                self.committed = ids;
                (self, Outcome::None)
            }
        }
    }

    fn close(mut self) -> Self {
        self.is_open = false;
        self.draft = self.committed.clone();
        self.search_term.clear();
        self
    }

    pub fn filtered_options(&self, options: &[SelectOption]) -> Vec<SelectOption> {
        filter_options(options, &self.search_term)
    }

    pub fn all_selected(&self, options: &[SelectOption]) -> bool {
        !options.is_empty() && options.iter().all(|o| self.draft.contains(&o.id))
    }

    pub fn some_selected(&self, options: &[SelectOption]) -> bool {
        options.iter().any(|o| self.draft.contains(&o.id))
    }

    pub fn indeterminate(&self, options: &[SelectOption]) -> bool {
        self.some_selected(options) && !self.all_selected(options)
    }

    pub fn select_all_state(&self, options: &[SelectOption]) -> CheckState {
        if self.all_selected(options) {
            CheckState::Checked
        } else if self.some_selected(options) {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    /// Gate for the Apply button
    pub fn has_changes(&self) -> bool {
        self.draft.len() != self.committed.len()
            || self.draft.iter().any(|id| !self.committed.contains(id))
    }

    /// Text on the closed trigger button
    pub fn trigger_label(&self, placeholder: &str, selected_label: Option<&str>) -> String {
        if self.committed.is_empty() {
            placeholder.to_string()
        } else {
            format!(
                "{} {}",
                self.committed.len(),
                selected_label.unwrap_or("selected")
            )
        }
    }
}

/// Case-insensitive substring match on labels; a blank term keeps everything.
pub fn filter_options(options: &[SelectOption], term: &str) -> Vec<SelectOption> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "Apple"),
            SelectOption::new("2", "Banana"),
            SelectOption::new("3", "Cherry"),
        ]
    }

    fn ids(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(state: SelectionState, intents: Vec<Intent>, options: &[SelectOption]) -> SelectionState {
        intents
            .into_iter()
            .fold(state, |s, intent| s.reduce(intent, options).0)
    }

    #[test]
    fn test_open_copies_committed_into_draft() {
        let state = SelectionState::new(ids(&["2"]));
        let (state, effect) = state.reduce(Intent::Toggle, &fruits());
        assert!(state.is_open());
        assert_eq!(effect, Outcome::Opened);
        assert_eq!(state.draft(), &ids(&["2"]));
        assert_eq!(state.search_term(), "");
    }

    #[test]
    fn test_apply_scenario_two_selected() {
        let options = fruits();
        let state = run(
            SelectionState::default(),
            vec![
                Intent::Toggle,
                Intent::ToggleOption("1".into()),
                Intent::ToggleOption("2".into()),
            ],
            &options,
        );
        let (state, effect) = state.reduce(Intent::Apply, &options);
        assert_eq!(effect, Outcome::Committed(ids(&["1", "2"])));
        assert_eq!(state.committed(), &ids(&["1", "2"]));
        assert!(!state.is_open());
        assert_eq!(state.trigger_label("Select items", None), "2 selected");
    }

    #[test]
    fn test_apply_then_reopen_starts_from_committed() {
        let options = fruits();
        let state = run(
            SelectionState::default(),
            vec![Intent::Toggle, Intent::ToggleOption("1".into()), Intent::Apply],
            &options,
        );
        assert_eq!(state.committed(), &ids(&["1"]));
        let (state, _) = state.reduce(Intent::Toggle, &options);
        assert_eq!(state.draft(), &ids(&["1"]));
    }

    #[test]
    fn test_cancel_discards_draft_and_search() {
        let options = fruits();
        let before = SelectionState::new(ids(&["3"]));
        let label_before = before.trigger_label("Select items", Some("Products selected"));
        let state = run(
            before.clone(),
            vec![
                Intent::Toggle,
                Intent::ToggleOption("1".into()),
                Intent::SetSearch("ban".into()),
                Intent::SelectAll,
                Intent::Cancel,
            ],
            &options,
        );
        assert_eq!(state, before);
        assert_eq!(
            state.trigger_label("Select items", Some("Products selected")),
            label_before
        );
    }

    #[test]
    fn test_toggle_while_open_behaves_like_cancel() {
        let options = fruits();
        let state = run(
            SelectionState::default(),
            vec![Intent::Toggle, Intent::ToggleOption("2".into()), Intent::Toggle],
            &options,
        );
        assert!(!state.is_open());
        assert!(state.committed().is_empty());
        assert!(state.draft().is_empty());
    }

    #[test]
    fn test_toggle_option_twice_is_identity() {
        let options = fruits();
        let opened = SelectionState::new(ids(&["3"])).reduce(Intent::Toggle, &options).0;
        let state = run(
            opened.clone(),
            vec![Intent::ToggleOption("1".into()), Intent::ToggleOption("1".into())],
            &options,
        );
        assert_eq!(state.draft(), opened.draft());
    }

    #[test]
    fn test_toggle_unknown_option_is_inert() {
        let options = fruits();
        let opened = SelectionState::default().reduce(Intent::Toggle, &options).0;
        let (state, _) = opened.clone().reduce(Intent::ToggleOption("42".into()), &options);
        assert_eq!(state, opened);
    }

    #[test]
    fn test_intents_while_closed_are_inert() {
        let options = fruits();
        let closed = SelectionState::new(ids(&["1"]));
        for intent in [
            Intent::ToggleOption("2".into()),
            Intent::SelectAll,
            Intent::DeselectAll,
            Intent::SetSearch("x".into()),
            Intent::Apply,
            Intent::Cancel,
        ] {
            let (state, effect) = closed.clone().reduce(intent, &options);
            assert_eq!(state, closed);
            assert_eq!(effect, Outcome::None);
        }
    }

    #[test]
    fn test_select_all_toggle_deselects_when_everything_selected() {
        let options = fruits();
        let state = run(
            SelectionState::new(ids(&["1", "2", "3"])),
            vec![Intent::Toggle, Intent::ToggleSelectAll],
            &options,
        );
        assert!(state.draft().is_empty());
        assert_eq!(state.committed(), &ids(&["1", "2", "3"]));
    }

    #[test]
    fn test_select_all_toggle_selects_loaded_options() {
        let options = fruits();
        let state = run(
            SelectionState::new(ids(&["1"])),
            vec![Intent::Toggle, Intent::ToggleSelectAll],
            &options,
        );
        assert_eq!(state.draft(), &ids(&["1", "2", "3"]));
    }

    #[test]
    fn test_select_all_ignores_search_filter() {
        let options = fruits();
        let state = run(
            SelectionState::default(),
            vec![Intent::Toggle, Intent::SetSearch("ch".into()), Intent::SelectAll],
            &options,
        );
        assert_eq!(state.draft().len(), 3);
    }

    #[test]
    fn test_all_selected_bounds() {
        let options = fruits();
        let mut state = SelectionState::default().reduce(Intent::Toggle, &options).0;
        assert!(!state.all_selected(&options));
        state = state.reduce(Intent::SelectAll, &options).0;
        assert!(state.all_selected(&options));
        assert!(!state.all_selected(&[]));
    }

    #[test]
    fn test_indeterminate_on_partial_selection() {
        let options = fruits();
        let state = SelectionState::new(ids(&["1", "2"]))
            .reduce(Intent::Toggle, &options)
            .0;
        assert!(state.indeterminate(&options));
        assert_eq!(state.select_all_state(&options), CheckState::Indeterminate);
        assert_eq!(state.select_all_state(&options).aria_checked(), "mixed");

        let none = SelectionState::default();
        assert!(!none.indeterminate(&options));
        assert_eq!(none.select_all_state(&options), CheckState::Unchecked);
    }

    #[test]
    fn test_has_changes_compares_as_sets() {
        let options = fruits();
        let state = SelectionState::new(ids(&["1", "2"]))
            .reduce(Intent::Toggle, &options)
            .0;
        assert!(!state.has_changes());

        // Same size, different members
        let state = run(
            state,
            vec![Intent::ToggleOption("2".into()), Intent::ToggleOption("3".into())],
            &options,
        );
        assert!(state.has_changes());

        let state = run(
            state,
            vec![Intent::ToggleOption("3".into()), Intent::ToggleOption("2".into())],
            &options,
        );
        assert!(!state.has_changes());
    }

    #[test]
    fn test_apply_without_changes_closes_silently() {
        let options = fruits();
        let state = SelectionState::new(ids(&["1"]));
        let (state, effect) = state
            .reduce(Intent::Toggle, &options)
            .0
            .reduce(Intent::Apply, &options);
        assert!(!state.is_open());
        assert_eq!(effect, Outcome::None);
    }

    #[test]
    fn test_set_search_keeps_draft() {
        let options = fruits();
        let opened = SelectionState::new(ids(&["2"])).reduce(Intent::Toggle, &options).0;
        let (state, _) = opened.reduce(Intent::SetSearch("APP".into()), &options);
        assert_eq!(state.search_term(), "APP");
        assert_eq!(state.draft(), &ids(&["2"]));
        assert_eq!(
            state.filtered_options(&options),
            vec![SelectOption::new("1", "Apple")]
        );
    }

    #[test]
    fn test_search_cleared_on_reopen() {
        let options = fruits();
        let state = run(
            SelectionState::default(),
            vec![Intent::Toggle, Intent::SetSearch("app".into()), Intent::Cancel, Intent::Toggle],
            &options,
        );
        assert!(state.is_open());
        assert_eq!(state.search_term(), "");
    }

    #[test]
    fn test_sync_committed_while_closed_moves_draft() {
        let options = fruits();
        let (state, effect) =
            SelectionState::new(ids(&["1", "3"])).reduce(Intent::SyncCommitted(HashSet::new()), &options);
        assert_eq!(effect, Outcome::None);
        assert!(state.committed().is_empty());
        assert!(state.draft().is_empty());
        assert_eq!(state.trigger_label("Select Users", Some("Users selected")), "Select Users");
    }

    #[test]
    fn test_sync_committed_while_open_keeps_draft() {
        let options = fruits();
        let opened = SelectionState::new(ids(&["1"])).reduce(Intent::Toggle, &options).0;
        let (state, _) = opened.reduce(Intent::SyncCommitted(HashSet::new()), &options);
        assert!(state.is_open());
        assert_eq!(state.draft(), &ids(&["1"]));
        assert!(state.has_changes());
    }

    #[test]
    fn test_trigger_label_with_custom_suffix() {
        let state = SelectionState::new(ids(&["1", "2", "3"]));
        assert_eq!(
            state.trigger_label("Select Product", Some("Products selected")),
            "3 Products selected"
        );
    }

    #[test]
    fn test_filter_options_subset_and_matching() {
        let options = fruits();
        for term in ["", "  ", "a", "AN", "rr", "zzz", " che "] {
            let filtered = filter_options(&options, term);
            let needle = term.trim().to_lowercase();
            assert!(filtered.iter().all(|o| options.contains(o)));
            assert!(filtered
                .iter()
                .all(|o| o.label.to_lowercase().contains(&needle)));
        }
        assert_eq!(filter_options(&options, "").len(), 3);
        assert_eq!(filter_options(&options, "zzz").len(), 0);
        assert_eq!(
            filter_options(&options, "an"),
            vec![SelectOption::new("2", "Banana")]
        );
    }

    #[test]
    fn test_filter_options_preserves_order() {
        let options = vec![
            SelectOption::new("9", "Cranberry"),
            SelectOption::new("1", "Blackberry"),
            SelectOption::new("5", "Strawberry"),
        ];
        let labels: Vec<String> = filter_options(&options, "BERRY")
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, vec!["Cranberry", "Blackberry", "Strawberry"]);
    }
}
