//! Core library for the `sigsweep` CLI.
//!
//! A batch of targets is fanned out to a fixed pool of workers; each worker
//! sends one request per target, prints the status, and flags bodies that
//! contain a known signature. Per-target failures stay with their target.
pub mod args;
pub mod config;
pub mod dispatch;
mod entry;
pub mod error;
mod logger;
pub mod probe;
pub mod target;

pub use entry::run;
