pub mod a001_artist;
pub mod errors;
pub mod static_files;
