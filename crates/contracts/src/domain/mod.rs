pub mod a001_artist;
