use super::aggregate::Product;
use crate::shared::pagination::Connection;
use serde::Deserialize;

pub const PRODUCTS_QUERY: &str = r#"
query Products($first: Int, $after: String) {
  products(first: $first, after: $after) {
    nodes {
      id
      name
    }
    pageInfo {
      hasNextPage
      endCursor
    }
  }
}
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct ProductsData {
    pub products: Connection<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_products_page() {
        let data: ProductsData = serde_json::from_str(
            r#"{"products":{"nodes":[{"id":"p1","name":"Yoga Mat"},{"id":"p2","name":"Kettlebell"}],
                "pageInfo":{"hasNextPage":false,"endCursor":null}}}"#,
        )
        .unwrap();
        assert_eq!(data.products.nodes.len(), 2);
        assert_eq!(data.products.nodes[0].name, "Yoga Mat");
        assert_eq!(data.products.nodes[0].image_url, None);
        assert_eq!(data.products.page_info.next_cursor(), None);
    }
}
