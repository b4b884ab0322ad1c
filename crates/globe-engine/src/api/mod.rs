pub mod config;
pub mod globe;
