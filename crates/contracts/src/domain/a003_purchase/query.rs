use super::aggregate::Purchase;
use super::filter::PurchaseFilter;
use crate::shared::pagination::Connection;
use serde::{Deserialize, Serialize};

pub const PURCHASES_QUERY: &str = r#"
query Purchases($productIds: [ID], $userIds: [ID], $first: Int, $after: String) {
  purchases(productIds: $productIds, userIds: $userIds, first: $first, after: $after) {
    nodes {
      id
      date
      user {
        id
        firstName
        lastName
        email
      }
      product {
        id
        name
        imageUrl
      }
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
      endCursor
      startCursor
    }
  }
}
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchasesVariables {
    #[serde(flatten)]
    pub filter: PurchaseFilter,
    pub first: u32,
    pub after: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchasesData {
    pub purchases: Connection<Purchase>,
}
