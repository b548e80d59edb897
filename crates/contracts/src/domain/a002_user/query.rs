use super::aggregate::User;
use crate::shared::pagination::Connection;
use serde::Deserialize;

pub const USERS_QUERY: &str = r#"
query Users($first: Int, $after: String) {
  users(first: $first, after: $after) {
    nodes {
      id
      firstName
      lastName
    }
    pageInfo {
      hasNextPage
      endCursor
    }
  }
}
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct UsersData {
    pub users: Connection<User>,
}
