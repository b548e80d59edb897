use serde::{Deserialize, Serialize};

/// Product as exposed by the query service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
