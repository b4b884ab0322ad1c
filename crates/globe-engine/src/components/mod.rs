pub mod arc;
pub mod marker;
