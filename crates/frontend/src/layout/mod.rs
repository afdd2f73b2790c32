pub mod error_page;
pub mod global_context;
pub mod header;
