pub mod graticule;
pub mod projection;
