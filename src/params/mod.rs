pub mod bounds;
pub mod model;
