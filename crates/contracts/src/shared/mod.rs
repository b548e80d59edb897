pub mod graphql;
pub mod pagination;
