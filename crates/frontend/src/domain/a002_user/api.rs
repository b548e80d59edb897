use contracts::domain::a002_user::aggregate::User;
use contracts::domain::a002_user::query::{UsersData, USERS_QUERY};
use contracts::shared::pagination::{Connection, PageVariables};

use crate::shared::graphql::{execute, fetch_all_pages, QueryError};

/// Fetch one page of users
pub async fn fetch_users_page(
    endpoint: &str,
    first: u32,
    after: Option<String>,
) -> Result<Connection<User>, QueryError> {
    let data: UsersData = execute(endpoint, USERS_QUERY, PageVariables { first, after }).await?;
    Ok(data.users)
}

/// Fetch every user, `page_size` at a time
pub async fn fetch_all_users(endpoint: String, page_size: u32) -> Result<Vec<User>, QueryError> {
    let users = fetch_all_pages(|after| {
        let endpoint = endpoint.clone();
        async move { fetch_users_page(&endpoint, page_size, after).await }
    })
    .await?;
    log::debug!("fetched {} users", users.len());
    Ok(users)
}
