pub mod api_utils;
pub mod loadable;
pub mod page_interactions;
