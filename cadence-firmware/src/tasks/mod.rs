//! Embassy async tasks

pub mod monitor;
pub mod sampler;

pub use monitor::monitor_task;
pub use sampler::sampler_task;
