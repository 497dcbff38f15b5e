//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::ProbeArgs;
pub use types::{HttpMethod, PositiveUsize, Scheme, TlsVersion};

pub(crate) use defaults::DEFAULT_HEADERS;
