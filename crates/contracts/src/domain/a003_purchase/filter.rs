use serde::Serialize;
use std::collections::HashSet;

/// Filter parameters for the purchases query.
///
/// An empty selection means "no filter" and is omitted from the request
/// entirely rather than sent as an empty list. Ids are sorted so that equal
/// selections always produce equal parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
}

impl PurchaseFilter {
    pub fn from_selections(products: &HashSet<String>, users: &HashSet<String>) -> Self {
        Self {
            product_ids: sorted_ids(products),
            user_ids: sorted_ids(users),
        }
    }

    /// Number of filter dimensions currently restricting the list
    pub fn active_count(&self) -> usize {
        usize::from(self.product_ids.is_some()) + usize::from(self.user_ids.is_some())
    }
}

fn sorted_ids(selection: &HashSet<String>) -> Option<Vec<String>> {
    if selection.is_empty() {
        return None;
    }
    let mut ids: Vec<String> = selection.iter().cloned().collect();
    ids.sort();
    Some(ids)
}
