pub mod sprite;
pub mod surface;
