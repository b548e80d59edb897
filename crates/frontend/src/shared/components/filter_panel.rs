use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// FilterPanel component - titled filter section with an active-filter badge
///
/// "Clear all filters" is rendered only while at least one filter is active.
#[component]
pub fn FilterPanel(
    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Callback for the "Clear all filters" button
    on_clear: Callback<()>,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    view! {
        <section class="filters">
            <div class="filters__header">
                <div class="filters__header-left">
                    {icon("filter")}
                    <h2 class="filters__title">"Filters"</h2>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <Show when=move || { active_filters_count.get() > 0 }>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_clear.run(())
                    >
                        "Clear all filters"
                    </Button>
                </Show>
            </div>

            <div class="filters__grid">
                {children()}
            </div>
        </section>
    }
}

/// FilterField component - labelled slot for one filter control
#[component]
pub fn FilterField(
    #[prop(into)]
    label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="filters__field">
            <label class="filters__label">{label}</label>
            {children()}
        </div>
    }
}
