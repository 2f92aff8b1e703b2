pub mod model;
pub mod projection;
pub mod requests;
