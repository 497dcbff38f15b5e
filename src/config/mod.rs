//! Immutable run configuration built once from the parsed CLI arguments.
mod types;


pub use types::{ProbeConfig, RequestConfig, RunMode};
