use crate::domain::a003_purchase::ui::PurchasesPage;
use crate::shared::config::{provide_app_config, AppConfig};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Endpoint and page sizes for every query on the page
    provide_app_config(AppConfig::from_document());

    view! {
        <ConfigProvider>
            <PurchasesPage />
        </ConfigProvider>
    }
}
