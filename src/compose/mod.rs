pub mod layers;
pub mod transform;
