//! GraphQL-over-HTTP envelopes
//!
//! Requests are POSTed as `{"query", "variables"}`; responses carry either
//! `data`, `errors`, or both (partial results).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<V> {
    pub query: &'static str,
    pub variables: V,
}

impl<V: Serialize> GraphQlRequest<V> {
    pub fn new(query: &'static str, variables: V) -> Self {
        Self { query, variables }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<D> GraphQlResponse<D> {
    /// Error messages joined for display, `None` when the response is clean.
    pub fn error_summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Ping {
        pong: bool,
    }

    #[test]
    fn test_response_with_data_only() {
        let resp: GraphQlResponse<Ping> =
            serde_json::from_str(r#"{"data":{"pong":true}}"#).unwrap();
        assert!(resp.data.unwrap().pong);
        assert!(resp.errors.is_empty());
    }

    #[test]
    fn test_error_summary_joins_messages() {
        let resp: GraphQlResponse<Ping> = serde_json::from_str(
            r#"{"data":null,"errors":[{"message":"bad cursor"},{"message":"timeout","path":["purchases"]}]}"#,
        )
        .unwrap();
        assert!(resp.data.is_none());
        assert_eq!(resp.error_summary().as_deref(), Some("bad cursor; timeout"));
    }
}
