pub mod model;
pub mod palette;
pub mod spectrum;
