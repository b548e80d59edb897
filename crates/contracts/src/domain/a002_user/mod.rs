pub mod aggregate;
pub mod query;
