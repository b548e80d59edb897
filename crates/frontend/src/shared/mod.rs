pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod graphql;
pub mod icons;
pub mod lazy_options;
pub mod paged_list;
