pub mod classifier;
pub mod normalize;
