use crate::domain::a001_product::aggregate::Product;
use crate::domain::a002_user::aggregate::User;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single purchase of a product by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    /// ISO 8601 date or RFC 3339 timestamp, depending on the service
    pub date: String,
    pub user: User,
    pub product: Product,
}

impl Purchase {
    /// Calendar day of the purchase; `None` when the service sent something unparseable.
    pub fn purchased_on(&self) -> Option<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(dt.date_naive());
        }
        let date_part = self.date.split('T').next().unwrap_or(&self.date);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}
