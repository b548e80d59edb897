pub mod state;

use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::domain::a003_purchase::filter::PurchaseFilter;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

use self::state::{FilterSelections, ListView, PurchaseList};
use super::card::{PurchaseCard, PurchaseCardSkeleton, SKELETON_CARDS};
use crate::domain::a001_product::ui::filter::{product_filter_handle, ProductFilter};
use crate::domain::a002_user::ui::filter::{user_filter_handle, UserFilter};
use crate::domain::a003_purchase::api::fetch_purchases_page;
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::infinite_scroll::InfiniteScrollSentinel;
use crate::shared::components::multi_select::Intent;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::paged_list::PageRequest;

#[component]
pub fn PurchasesPage() -> impl IntoView {
    let config = use_app_config();
    let endpoint = StoredValue::new(config.graphql_endpoint.clone());
    let page_size = config.purchases_page_size;

    let selections = RwSignal::new(FilterSelections::default());
    let list = RwSignal::new(PurchaseList::new(PurchaseFilter::default()));

    let product_filter = product_filter_handle(Callback::new(move |ids: HashSet<String>| {
        selections.update(|s| s.products = ids)
    }));
    let user_filter = user_filter_handle(Callback::new(move |ids: HashSet<String>| {
        selections.update(|s| s.users = ids)
    }));

    // Only notifies when the query parameters actually change
    let filter = Memo::new(move |_| selections.with(FilterSelections::filter));
    let active_count = Signal::derive(move || filter.with(PurchaseFilter::active_count));
    let list_view = Memo::new(move |_| list.with(ListView::of));

    let fetch = move |request: PageRequest<PurchaseFilter>| {
        let endpoint = endpoint.get_value();
        log::debug!(
            "fetching purchases (generation {}, after {:?})",
            request.generation,
            request.after
        );
        wasm_bindgen_futures::spawn_local(async move {
            let result =
                fetch_purchases_page(&endpoint, request.key.clone(), page_size, request.after.clone())
                    .await;
            if let Err(e) = &result {
                log::error!("failed to load purchases: {}", e);
            }
            match list.try_update(|l| l.complete(&request, result)) {
                Some(true) => log::debug!(
                    "purchases page applied, {} loaded",
                    list.with_untracked(|l| l.items().len())
                ),
                Some(false) => log::debug!(
                    "stale purchases response discarded (generation {})",
                    request.generation
                ),
                // Page unmounted while the request was in flight
                None => {}
            }
        });
    };

    // Every filter change restarts from the first page
    Effect::new(move |_| {
        let key = filter.get();
        if let Some(request) = list.try_update(|l| l.reset(key)) {
            fetch(request);
        }
    });

    let load_more = Callback::new(move |_| {
        if let Some(request) = list.try_update(PurchaseList::next_page_request).flatten() {
            fetch(request);
        }
    });

    let retry = move || {
        if let Some(request) = list.try_update(PurchaseList::retry).flatten() {
            fetch(request);
        }
    };

    let clear_all = Callback::new(move |_| {
        product_filter.dispatch(Intent::SyncCommitted(HashSet::new()));
        user_filter.dispatch(Intent::SyncCommitted(HashSet::new()));
        selections.set(FilterSelections::default());
    });

    let can_load_more = Signal::derive(move || list.with(PurchaseList::can_load_more));
    let root_margin = config.sentinel_root_margin.clone();

    view! {
        <div id="a003_purchase--list" class="page purchases-page">
            <div class="page__header">
                <h1 class="page__title">"Purchases"</h1>
            </div>

            <div class="page__content">
                <FilterPanel active_filters_count=active_count on_clear=clear_all>
                    <FilterField label="Products">
                        <ProductFilter handle=product_filter />
                    </FilterField>
                    <FilterField label="Users">
                        <UserFilter handle=user_filter />
                    </FilterField>
                </FilterPanel>

                <section class="purchases">
                    {move || match list_view.get() {
                        ListView::Skeleton => view! {
                            <div class="purchases__grid">
                                {(0..SKELETON_CARDS).map(|_| view! { <PurchaseCardSkeleton /> }).collect_view()}
                            </div>
                        }
                        .into_any(),
                        ListView::Failed(message) => view! {
                            <div class="purchases__error" role="alert">
                                {icon("alert")}
                                <p class="purchases__error-text">"Failed to load purchases: " {message}</p>
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| retry()>
                                    "Try again"
                                </Button>
                            </div>
                        }
                        .into_any(),
                        ListView::Empty => view! {
                            <div class="purchases__empty">
                                {icon("package")}
                                <h3 class="purchases__empty-title">"No purchases found"</h3>
                                <p class="purchases__empty-text">
                                    "Try adjusting your filters to see more results."
                                </p>
                            </div>
                        }
                        .into_any(),
                        ListView::Items { load_more_error } => view! {
                            <PurchaseGrid items=Signal::derive(move || list.with(|l| l.items().to_vec())) />
                            {match load_more_error {
                                Some(message) => view! {
                                    <div class="purchases__load-more-error" role="alert">
                                        <span>{message}</span>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| retry()
                                        >
                                            "Try again"
                                        </Button>
                                    </div>
                                }
                                .into_any(),
                                None => view! {
                                    <InfiniteScrollSentinel
                                        armed=can_load_more
                                        on_visible=load_more
                                        root_margin=root_margin.clone()
                                    >
                                        <Show when=move || list.with(PurchaseList::is_loading_more)>
                                            <div class="purchases__loading-more">
                                                <Spinner size=SpinnerSize::Small />
                                                <span>"Loading more purchases..."</span>
                                            </div>
                                        </Show>
                                    </InfiniteScrollSentinel>
                                }
                                .into_any(),
                            }}
                        }
                        .into_any(),
                    }}
                </section>
            </div>
        </div>
    }
}

#[component]
fn PurchaseGrid(#[prop(into)] items: Signal<Vec<Purchase>>) -> impl IntoView {
    view! {
        <div class="purchases__grid">
            <For
                each=move || items.get()
                key=|purchase| purchase.id.clone()
                children=move |purchase: Purchase| view! { <PurchaseCard purchase=purchase /> }
            />
        </div>
    }
}
