use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::domain::a003_purchase::filter::PurchaseFilter;
use contracts::domain::a003_purchase::query::{PurchasesData, PurchasesVariables, PURCHASES_QUERY};
use contracts::shared::pagination::Connection;

use crate::shared::graphql::{execute, QueryError};

/// Fetch one page of purchases matching `filter`
pub async fn fetch_purchases_page(
    endpoint: &str,
    filter: PurchaseFilter,
    first: u32,
    after: Option<String>,
) -> Result<Connection<Purchase>, QueryError> {
    let variables = PurchasesVariables {
        filter,
        first,
        after,
    };
    let data: PurchasesData = execute(endpoint, PURCHASES_QUERY, variables).await?;
    Ok(data.purchases)
}
