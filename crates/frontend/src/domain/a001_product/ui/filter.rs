use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::domain::a001_product::api::fetch_all_products;
use crate::shared::components::multi_select::*;
use crate::shared::config::use_app_config;
use crate::shared::lazy_options::LazyOptions;

pub const PRODUCT_KEYS: OptionKeys<Product> =
    OptionKeys::new(|p| p.id.clone(), |p| p.name.clone());

/// Multi-select over all products. Options are fetched the first time the
/// dropdown opens; `on_change` receives each applied selection.
pub fn product_filter_handle(on_change: Callback<HashSet<String>>) -> MultiSelectHandle {
    let config = use_app_config();
    let source = LazyOptions::new("product");

    let on_open = Callback::new(move |_| {
        let endpoint = config.graphql_endpoint.clone();
        let page_size = config.dropdown_page_size;
        source.load_once(move || async move {
            let products = fetch_all_products(endpoint, page_size).await?;
            Ok(PRODUCT_KEYS.normalize(&products))
        });
    });

    MultiSelectHandle::new(source.options(), on_change)
        .placeholder("Select Product")
        .selected_label("Products selected")
        .loading(source.loading())
        .error(source.error())
        .on_open(on_open)
}

#[component]
pub fn ProductFilter(handle: MultiSelectHandle) -> impl IntoView {
    view! {
        <MultiSelect handle=handle class="filter-select">
            <MultiSelectTrigger handle=handle />
            <MultiSelectContent handle=handle>
                <MultiSelectSearch handle=handle placeholder="Search products" />
                <MultiSelectSelectAll handle=handle label="Select all products" />
                <MultiSelectOptionsList
                    handle=handle
                    empty_message="No products found"
                    no_options_message="No products available"
                />
                <MultiSelectFooter handle=handle />
            </MultiSelectContent>
        </MultiSelect>
    }
}
