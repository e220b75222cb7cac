pub mod escape;
pub mod loader;
pub mod render;
