pub mod config;
pub mod error;
pub mod groupie_api;

#[cfg(test)]
pub mod test_support;
