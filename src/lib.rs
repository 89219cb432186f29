pub mod core;
pub mod render;
