//! Minimal GraphQL-over-HTTP client for the query service

use contracts::shared::graphql::{GraphQlRequest, GraphQlResponse};
use contracts::shared::pagination::Connection;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use thiserror::Error;

/// Why a query produced no usable data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Query service responded with status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("{0}")]
    GraphQl(String),

    #[error("Query service returned no data")]
    MissingData,
}

/// POSTs one query and unwraps the `data` member of the response.
pub async fn execute<V, D>(endpoint: &str, query: &'static str, variables: V) -> Result<D, QueryError>
where
    V: Serialize,
    D: DeserializeOwned,
{
    let body = GraphQlRequest::new(query, variables);

    let response = Request::post(endpoint)
        .json(&body)
        .map_err(|e| QueryError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| QueryError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(QueryError::Status(response.status()));
    }

    let envelope = response
        .json::<GraphQlResponse<D>>()
        .await
        .map_err(|e| QueryError::Decode(e.to_string()))?;

    into_data(envelope)
}

/// Partial results (data plus errors) are accepted; errors without data are not.
pub fn into_data<D>(envelope: GraphQlResponse<D>) -> Result<D, QueryError> {
    let summary = envelope.error_summary();
    match (envelope.data, summary) {
        (Some(data), None) => Ok(data),
        (Some(data), Some(errors)) => {
            log::warn!("query returned partial data: {}", errors);
            Ok(data)
        }
        (None, Some(errors)) => Err(QueryError::GraphQl(errors)),
        (None, None) => Err(QueryError::MissingData),
    }
}

/// Follows cursors until the last page, concatenating nodes in order.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, QueryError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Connection<T>, QueryError>>,
{
    let mut nodes = Vec::new();
    let mut after: Option<String> = None;

    loop {
        let page = fetch_page(after.clone()).await?;
        nodes.extend(page.nodes);

        match page.page_info.next_cursor() {
            // A repeated cursor would loop forever
            Some(cursor) if after.as_deref() != Some(cursor) => after = Some(cursor.to_string()),
            _ => break,
        }
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::graphql::GraphQlResponse;

    fn envelope(json: &str) -> GraphQlResponse<serde_json::Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_into_data_clean() {
        let data = into_data(envelope(r#"{"data":{"ok":1}}"#)).unwrap();
        assert_eq!(data["ok"], 1);
    }

    #[test]
    fn test_into_data_partial_is_accepted() {
        let data = into_data(envelope(
            r#"{"data":{"ok":1},"errors":[{"message":"field deprecated"}]}"#,
        ))
        .unwrap();
        assert_eq!(data["ok"], 1);
    }

    #[test]
    fn test_into_data_errors_only() {
        let err = into_data(envelope(
            r#"{"data":null,"errors":[{"message":"Invalid cursor"}]}"#,
        ))
        .unwrap_err();
        assert_eq!(err, QueryError::GraphQl("Invalid cursor".into()));
        assert_eq!(err.to_string(), "Invalid cursor");
    }

    #[test]
    fn test_into_data_empty_envelope() {
        assert_eq!(into_data(envelope("{}")).unwrap_err(), QueryError::MissingData);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            QueryError::Status(502).to_string(),
            "Query service responded with status 502"
        );
        assert_eq!(
            QueryError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }
}
