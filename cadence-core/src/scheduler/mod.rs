//! Sample scheduling
//!
//! Decides when the next sample is due. Deadlines move forward by a fixed
//! period, never by "now + period", so loop overhead does not accumulate
//! into the sample rate.

pub mod deadline;

pub use deadline::DeadlineScheduler;
