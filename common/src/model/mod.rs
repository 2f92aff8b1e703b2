pub mod attributes;
pub mod bookmark;
pub mod config;
pub mod coordinate;
pub mod location;
