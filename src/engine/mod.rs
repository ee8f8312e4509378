pub mod analysis;
pub mod config;
pub mod iv;
pub mod surface;
pub mod types;
