use crate::shared::components::multi_select::SelectOption;
use crate::shared::graphql::QueryError;
use leptos::prelude::*;
use std::future::Future;

/// Dropdown options fetched on first use.
///
/// Only one fetch runs at a time. A successful fetch is kept for the
/// lifetime of the page; a failed one is reported through [`Self::error`]
/// and retried on the next [`Self::load_once`].
#[derive(Clone, Copy)]
pub struct LazyOptions {
    name: &'static str,
    options: RwSignal<Vec<SelectOption>>,
    loading: RwSignal<bool>,
    loaded: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl LazyOptions {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            options: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            loaded: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn options(&self) -> Signal<Vec<SelectOption>> {
        self.options.into()
    }

    pub fn loading(&self) -> Signal<bool> {
        self.loading.into()
    }

    pub fn error(&self) -> Signal<Option<String>> {
        self.error.into()
    }

    pub fn load_once<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<SelectOption>, QueryError>> + 'static,
    {
        if self.loaded.get_untracked() || self.loading.get_untracked() {
            return;
        }

        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        log::debug!("loading {} options", this.name);

        wasm_bindgen_futures::spawn_local(async move {
            match fetch().await {
                Ok(options) => {
                    log::debug!("loaded {} {} options", options.len(), this.name);
                    this.options.set(options);
                    this.loaded.set(true);
                }
                Err(e) => {
                    log::error!("failed to load {} options: {}", this.name, e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }
}
