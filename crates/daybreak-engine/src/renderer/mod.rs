pub mod color;
pub mod paint;
pub mod recording;
pub mod traits;
#[cfg(feature = "vectors")]
pub mod vector;
