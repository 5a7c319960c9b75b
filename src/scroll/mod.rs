pub mod sampler;
pub mod smooth;
pub mod threshold;
