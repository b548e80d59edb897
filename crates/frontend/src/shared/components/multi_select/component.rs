use super::handle::{MultiSelectHandle, OptionsListBody};
use super::option::SelectOption;
use super::shell::install_dismiss_listeners;
use super::state::{CheckState, Intent};
use crate::shared::icons::icon;
use leptos::ev::KeyboardEvent;
use leptos::html::Div;
use leptos::prelude::*;
use thaw::*;

const SKELETON_ROWS: usize = 5;

fn is_activation_key(ev: &KeyboardEvent) -> bool {
    let key = ev.key();
    key == "Enter" || key == " "
}

/// Root of a multi-select. Owns the boundary used for outside-click
/// dismissal; parts are passed in as children with the same handle.
///
/// # Example
/// ```ignore
/// let handle = MultiSelectHandle::new(options, on_change).placeholder("Select Product");
/// view! {
///     <MultiSelect handle=handle>
///         <MultiSelectTrigger handle=handle />
///         <MultiSelectContent handle=handle>
///             <MultiSelectSearch handle=handle placeholder="Search products" />
///             <MultiSelectSelectAll handle=handle label="Select all products" />
///             <MultiSelectOptionsList handle=handle empty_message="No products found" />
///             <MultiSelectFooter handle=handle />
///         </MultiSelectContent>
///     </MultiSelect>
/// }
/// ```
#[component]
pub fn MultiSelect(
    handle: MultiSelectHandle,
    /// Extra classes for the root container
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let root = NodeRef::<Div>::new();

    install_dismiss_listeners(
        root,
        Memo::new(move |_| handle.is_open()),
        Callback::new(move |_| handle.dispatch(Intent::Cancel)),
    );

    view! {
        <div node_ref=root class=format!("multiselect {}", class).trim_end().to_string()>
            {children()}
        </div>
    }
}

#[component]
pub fn MultiSelectTrigger(handle: MultiSelectHandle) -> impl IntoView {
    view! {
        <button
            type="button"
            class="multiselect-trigger"
            aria-haspopup="listbox"
            aria-expanded=move || handle.is_open().to_string()
            on:click=move |_| handle.dispatch(Intent::Toggle)
        >
            <span class=move || {
                if handle.committed_count() == 0 {
                    "multiselect-trigger__text multiselect-trigger__text--placeholder"
                } else {
                    "multiselect-trigger__text"
                }
            }>
                {move || handle.trigger_label()}
            </span>
            <span class=move || {
                if handle.is_open() {
                    "multiselect-trigger__icon multiselect-trigger__icon--open"
                } else {
                    "multiselect-trigger__icon"
                }
            }>
                {icon("chevron-down")}
            </span>
        </button>
    }
}

/// Dropdown panel, rendered only while open
#[component]
pub fn MultiSelectContent(
    handle: MultiSelectHandle,
    #[prop(optional, into)]
    class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let class = format!("multiselect-content {}", class).trim_end().to_string();

    view! {
        <Show when=move || handle.is_open()>
            <div class=class.clone()>{children()}</div>
        </Show>
    }
}

#[component]
pub fn MultiSelectSearch(
    handle: MultiSelectHandle,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="multiselect-search">
            <div class="multiselect-search__wrapper">
                <span class="multiselect-search__icon">{icon("search")}</span>
                <input
                    type="text"
                    class="multiselect-search__input"
                    placeholder=placeholder
                    aria-label="Search options"
                    autofocus=true
                    prop:value=move || handle.search_term()
                    prop:disabled=move || handle.is_loading()
                    on:input=move |ev| handle.dispatch(Intent::SetSearch(event_target_value(&ev)))
                />
            </div>
        </div>
    }
}

/// Tri-state "select all" row; operates on the loaded options only
#[component]
pub fn MultiSelectSelectAll(
    handle: MultiSelectHandle,
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    let label = if label.is_empty() {
        "Select all".to_string()
    } else {
        label
    };

    let is_disabled = move || handle.is_loading() || !handle.has_options();
    let activate = move || {
        if !is_disabled() {
            handle.dispatch(Intent::ToggleSelectAll);
        }
    };

    view! {
        <div
            class=move || {
                if is_disabled() {
                    "multiselect-select-all multiselect-select-all--disabled"
                } else {
                    "multiselect-select-all"
                }
            }
            role="checkbox"
            aria-checked=move || handle.select_all_state().aria_checked()
            tabindex=move || if is_disabled() { "-1" } else { "0" }
            on:click=move |_| activate()
            on:keydown=move |ev: KeyboardEvent| {
                if is_activation_key(&ev) {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            {move || checkbox(handle.select_all_state())}
            <span class="multiselect-select-all__label">{label.clone()}</span>
        </div>
    }
}

#[component]
pub fn MultiSelectOptionsList(
    handle: MultiSelectHandle,
    /// Shown when the search matches nothing
    #[prop(optional, into)]
    empty_message: String,
    /// Shown when there are no options at all
    #[prop(optional, into)]
    no_options_message: String,
) -> impl IntoView {
    let empty_message = if empty_message.is_empty() {
        "No results found".to_string()
    } else {
        empty_message
    };
    let no_options_message = if no_options_message.is_empty() {
        "No options available".to_string()
    } else {
        no_options_message
    };

    // Draft changes update the rows in place; only a different body or a
    // different search result rebuilds them
    let body = Memo::new(move |_| handle.options_list_body());
    let filtered = Memo::new(move |_| handle.filtered_options());

    move || match body.get() {
        OptionsListBody::Skeleton => view! {
            <div class="multiselect-options">
                {(0..SKELETON_ROWS)
                    .map(|_| view! {
                        <div class="multiselect-skeleton animate-pulse">
                            <div class="multiselect-skeleton__checkbox"></div>
                            <div class="multiselect-skeleton__text"></div>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        OptionsListBody::Failed(message) => view! {
            <div class="multiselect-options">
                <div class="multiselect-options__error" role="alert">
                    {icon("alert")}
                    <span>{message}</span>
                </div>
            </div>
        }
        .into_any(),
        OptionsListBody::NoOptions => view! {
            <div class="multiselect-options">
                <div class="multiselect-options__empty">{no_options_message.clone()}</div>
            </div>
        }
        .into_any(),
        OptionsListBody::NoMatches => view! {
            <div class="multiselect-options">
                <div class="multiselect-options__empty">{empty_message.clone()}</div>
            </div>
        }
        .into_any(),
        OptionsListBody::Options => view! {
            <div class="multiselect-options" role="listbox" aria-multiselectable="true">
                <ul class="multiselect-options__list">
                    <For
                        each=move || filtered.get()
                        key=|option| option.id.clone()
                        children=move |option: SelectOption| {
                            view! { <MultiSelectOptionRow handle=handle option=option /> }
                        }
                    />
                </ul>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn MultiSelectOptionRow(handle: MultiSelectHandle, option: SelectOption) -> impl IntoView {
    let SelectOption { id, label } = option;
    let id = StoredValue::new(id);
    let is_selected = move || id.with_value(|id| handle.is_selected(id));
    let toggle = move || handle.dispatch(Intent::ToggleOption(id.get_value()));

    view! {
        <li
            class=move || {
                if is_selected() {
                    "multiselect-option multiselect-option--selected"
                } else {
                    "multiselect-option"
                }
            }
            role="option"
            aria-selected=move || is_selected().to_string()
            tabindex="0"
            on:click=move |_| toggle()
            on:keydown=move |ev: KeyboardEvent| {
                if is_activation_key(&ev) {
                    ev.prevent_default();
                    toggle();
                }
            }
        >
            {move || {
                checkbox(if is_selected() { CheckState::Checked } else { CheckState::Unchecked })
            }}
            <span class="multiselect-option__label">{label}</span>
        </li>
    }
}

/// Cancel discards the draft; Apply is enabled only when the draft differs
#[component]
pub fn MultiSelectFooter(handle: MultiSelectHandle) -> impl IntoView {
    view! {
        <div class="multiselect-footer">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| handle.dispatch(Intent::Cancel)
            >
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || !handle.has_changes())
                on_click=move |_| handle.dispatch(Intent::Apply)
            >
                "Apply"
            </Button>
        </div>
    }
}

fn checkbox(state: CheckState) -> AnyView {
    match state {
        CheckState::Checked => view! {
            <div class="multiselect-checkbox multiselect-checkbox--checked">{icon("check")}</div>
        }
        .into_any(),
        CheckState::Indeterminate => view! {
            <div class="multiselect-checkbox multiselect-checkbox--indeterminate">{icon("minus")}</div>
        }
        .into_any(),
        CheckState::Unchecked => view! { <div class="multiselect-checkbox"></div> }.into_any(),
    }
}
