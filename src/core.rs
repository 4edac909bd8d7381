pub mod chain;
pub mod sampler;
pub mod snapshot;
pub mod walk;
