use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::query::{ProductsData, PRODUCTS_QUERY};
use contracts::shared::pagination::{Connection, PageVariables};

use crate::shared::graphql::{execute, fetch_all_pages, QueryError};

/// Fetch one page of products
pub async fn fetch_products_page(
    endpoint: &str,
    first: u32,
    after: Option<String>,
) -> Result<Connection<Product>, QueryError> {
    let data: ProductsData = execute(endpoint, PRODUCTS_QUERY, PageVariables { first, after }).await?;
    Ok(data.products)
}

/// Fetch every product, `page_size` at a time
pub async fn fetch_all_products(endpoint: String, page_size: u32) -> Result<Vec<Product>, QueryError> {
    let products = fetch_all_pages(|after| {
        let endpoint = endpoint.clone();
        async move { fetch_products_page(&endpoint, page_size, after).await }
    })
    .await?;
    log::debug!("fetched {} products", products.len());
    Ok(products)
}
