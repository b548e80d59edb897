use contracts::domain::a003_purchase::aggregate::Purchase;
use leptos::prelude::*;

use crate::shared::date_utils::format_date_or_raw;
use crate::shared::icons::icon;

/// Card placeholders shown while the first page loads
pub const SKELETON_CARDS: usize = 8;

#[component]
pub fn PurchaseCard(purchase: Purchase) -> impl IntoView {
    let date = format_date_or_raw(purchase.purchased_on(), &purchase.date);
    let buyer = purchase.user.full_name();
    let Purchase { product, .. } = purchase;

    // Broken images fall back to the placeholder
    let image_failed = RwSignal::new(false);
    let image = product.image_url.filter(|url| !url.is_empty());
    let alt = product.name.clone();

    view! {
        <article class="purchase-card">
            <div class="purchase-card__image">
                {move || match image.clone() {
                    Some(src) if !image_failed.get() => view! {
                        <img
                            src=src
                            alt=alt.clone()
                            loading="lazy"
                            on:error=move |_| image_failed.set(true)
                        />
                    }
                    .into_any(),
                    _ => view! {
                        <div class="purchase-card__image-placeholder">{icon("package")}</div>
                    }
                    .into_any(),
                }}
            </div>
            <div class="purchase-card__body">
                <h3 class="purchase-card__title">{product.name}</h3>
                <div class="purchase-card__meta">
                    <span class="purchase-card__buyer">{buyer}</span>
                    <span class="purchase-card__date">{date}</span>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn PurchaseCardSkeleton() -> impl IntoView {
    view! {
        <div class="purchase-card purchase-card--skeleton animate-pulse">
            <div class="purchase-card__image"></div>
            <div class="purchase-card__body">
                <div class="purchase-card__line purchase-card__line--wide"></div>
                <div class="purchase-card__line"></div>
            </div>
        </div>
    }
}
