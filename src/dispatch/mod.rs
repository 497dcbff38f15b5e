//! Bounded fan-out of targets to a fixed pool of probe workers.
mod pool;
mod summary;


pub use pool::run_batch;
pub use summary::BatchSummary;
