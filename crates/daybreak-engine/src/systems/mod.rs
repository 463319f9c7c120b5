pub mod render;
pub mod tick;
