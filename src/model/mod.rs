pub mod color;
pub mod percentile;
pub mod profile;
pub mod score;
