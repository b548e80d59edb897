use super::option::SelectOption;
use super::state::{filter_options, CheckState, Intent, Outcome, SelectionState};
use leptos::prelude::*;
use std::collections::HashSet;

/// Which body the options list renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsListBody {
    Skeleton,
    Failed(String),
    NoOptions,
    NoMatches,
    Options,
}

#[derive(Debug, Clone)]
struct Labels {
    placeholder: String,
    selected_label: Option<String>,
}

/// One multi-select instance: its state machine plus the host wiring.
///
/// The handle is `Copy` and is passed explicitly to every widget part, so a
/// part can never be rendered without the instance it belongs to.
#[derive(Clone, Copy)]
pub struct MultiSelectHandle {
    state: RwSignal<SelectionState>,
    options: Signal<Vec<SelectOption>>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    labels: StoredValue<Labels>,
    on_open: Option<Callback<()>>,
    on_change: Callback<HashSet<String>>,
}

impl MultiSelectHandle {
    /// `on_change` receives the committed selection each time Apply changes it.
    pub fn new(
        options: impl Into<Signal<Vec<SelectOption>>>,
        on_change: Callback<HashSet<String>>,
    ) -> Self {
        Self {
            state: RwSignal::new(SelectionState::default()),
            options: options.into(),
            loading: Signal::derive(|| false),
            error: Signal::derive(|| None),
            labels: StoredValue::new(Labels {
                placeholder: "Select items".to_string(),
                selected_label: None,
            }),
            on_open: None,
            on_change,
        }
    }

    pub fn placeholder(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.labels.update_value(|l| l.placeholder = text);
        self
    }

    /// Suffix after the count on the trigger, "selected" by default
    pub fn selected_label(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.labels.update_value(|l| l.selected_label = Some(text));
        self
    }

    pub fn on_open(mut self, callback: Callback<()>) -> Self {
        self.on_open = Some(callback);
        self
    }

    pub fn loading(mut self, loading: impl Into<Signal<bool>>) -> Self {
        self.loading = loading.into();
        self
    }

    pub fn error(mut self, error: impl Into<Signal<Option<String>>>) -> Self {
        self.error = error.into();
        self
    }

    pub fn dispatch(&self, intent: Intent) {
        let options = self.options.get_untracked();
        let current = self.state.get_untracked();
        let (next, outcome) = current.reduce(intent, &options);
        self.state.set(next);

        match outcome {
            Outcome::Opened => {
                if let Some(on_open) = self.on_open {
                    on_open.run(());
                }
            }
            Outcome::Committed(ids) => self.on_change.run(ids),
            Outcome::None => {}
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.get()
    }

    pub fn search_term(&self) -> String {
        self.state.with(|s| s.search_term().to_string())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.with(|s| s.is_selected(id))
    }

    pub fn committed_count(&self) -> usize {
        self.state.with(|s| s.committed().len())
    }

    pub fn has_changes(&self) -> bool {
        self.state.with(|s| s.has_changes())
    }

    pub fn has_options(&self) -> bool {
        self.options.with(|o| !o.is_empty())
    }

    pub fn filtered_options(&self) -> Vec<SelectOption> {
        self.options
            .with(|options| self.state.with(|s| s.filtered_options(options)))
    }

    /// Depends on the draft only through the search result, so a memo over
    /// it stays unchanged while options are toggled.
    pub fn options_list_body(&self) -> OptionsListBody {
        if self.is_loading() && !self.has_options() {
            return OptionsListBody::Skeleton;
        }
        if let Some(message) = self.error_message() {
            return OptionsListBody::Failed(message);
        }
        if !self.has_options() {
            return OptionsListBody::NoOptions;
        }
        let search_term = self.search_term();
        let any_match = self
            .options
            .with(|options| !filter_options(options, &search_term).is_empty());
        if any_match {
            OptionsListBody::Options
        } else {
            OptionsListBody::NoMatches
        }
    }

    pub fn select_all_state(&self) -> CheckState {
        self.options
            .with(|options| self.state.with(|s| s.select_all_state(options)))
    }

    pub fn trigger_label(&self) -> String {
        let (placeholder, selected_label) = self
            .labels
            .with_value(|l| (l.placeholder.clone(), l.selected_label.clone()));
        self.state
            .with(|s| s.trigger_label(&placeholder, selected_label.as_deref()))
    }
}
