pub mod card;
pub mod details;
pub mod list;
pub mod search;
