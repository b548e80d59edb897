use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::domain::a003_purchase::filter::PurchaseFilter;
use std::collections::HashSet;

use crate::shared::paged_list::PagedList;

pub type PurchaseList = PagedList<Purchase, PurchaseFilter>;

/// Committed selections of both filter widgets
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelections {
    pub products: HashSet<String>,
    pub users: HashSet<String>,
}

impl FilterSelections {
    pub fn filter(&self) -> PurchaseFilter {
        PurchaseFilter::from_selections(&self.products, &self.users)
    }
}

/// What the purchases section shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Skeleton,
    /// First page failed; nothing to show
    Failed(String),
    Empty,
    /// Items are shown; a failed next page is reported below them
    Items { load_more_error: Option<String> },
}

impl ListView {
    pub fn of(list: &PurchaseList) -> Self {
        if list.is_initial_loading() {
            return ListView::Skeleton;
        }
        match list.error() {
            Some(e) if list.items().is_empty() => ListView::Failed(e.to_string()),
            error => {
                if list.is_empty_result() {
                    ListView::Empty
                } else {
                    ListView::Items {
                        load_more_error: error.map(str::to_string),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::{Connection, PageInfo};

    fn no_purchases() -> Result<Connection<Purchase>, String> {
        Ok(Connection {
            nodes: Vec::new(),
            page_info: PageInfo::default(),
        })
    }

    fn purchases(ids: &[&str], next: Option<&str>) -> Result<Connection<Purchase>, String> {
        let nodes = ids
            .iter()
            .map(|id| {
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "date": "2024-03-15",
                    "user": {"id": "u1", "firstName": "Ada", "lastName": "Lovelace"},
                    "product": {"id": "p1", "name": "Yoga Mat"}
                }))
                .unwrap()
            })
            .collect();
        Ok(Connection {
            nodes,
            page_info: PageInfo {
                has_next_page: next.is_some(),
                end_cursor: next.map(str::to_string),
                ..Default::default()
            },
        })
    }

    #[test]
    fn test_selections_to_filter() {
        let mut selections = FilterSelections::default();
        assert_eq!(selections.filter().active_count(), 0);
        assert_eq!(selections.filter(), PurchaseFilter::default());

        selections.users.insert("u2".into());
        selections.users.insert("u1".into());
        assert_eq!(selections.filter().active_count(), 1);
        assert_eq!(
            selections.filter().user_ids,
            Some(vec!["u1".to_string(), "u2".to_string()])
        );
        assert_eq!(selections.filter().product_ids, None);
    }

    #[test]
    fn test_skeleton_before_first_request() {
        let list = PurchaseList::new(PurchaseFilter::default());
        assert_eq!(ListView::of(&list), ListView::Skeleton);
    }

    #[test]
    fn test_skeleton_until_first_page() {
        let mut list = PurchaseList::new(PurchaseFilter::default());
        list.reset(PurchaseFilter::default());
        assert_eq!(ListView::of(&list), ListView::Skeleton);
    }

    #[test]
    fn test_empty_page_is_empty_state_not_error() {
        let mut list = PurchaseList::new(PurchaseFilter::default());
        let req = list.reset(PurchaseFilter::default());
        list.complete(&req, no_purchases());
        assert_eq!(ListView::of(&list), ListView::Empty);
    }

    #[test]
    fn test_first_page_failure() {
        let mut list = PurchaseList::new(PurchaseFilter::default());
        let req = list.reset(PurchaseFilter::default());
        list.complete(&req, Err::<Connection<Purchase>, _>("Network error: offline"));
        assert_eq!(
            ListView::of(&list),
            ListView::Failed("Network error: offline".into())
        );
    }

    #[test]
    fn test_load_more_failure_keeps_items() {
        let mut list = PurchaseList::new(PurchaseFilter::default());
        let req = list.reset(PurchaseFilter::default());
        list.complete(&req, purchases(&["x1", "x2"], Some("c2")));
        assert_eq!(ListView::of(&list), ListView::Items { load_more_error: None });

        let next = list.next_page_request().unwrap();
        list.complete(&next, Err::<Connection<Purchase>, _>("Query service responded with status 500"));
        assert_eq!(
            ListView::of(&list),
            ListView::Items {
                load_more_error: Some("Query service responded with status 500".into())
            }
        );
        assert_eq!(list.items().len(), 2);
    }
}
