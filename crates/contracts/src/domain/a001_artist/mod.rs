pub mod aggregate;

pub use aggregate::{Artist, ArtistDates, ArtistDetails, ArtistLocations, ArtistRelation};
