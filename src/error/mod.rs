mod app;
mod http;
mod probe;
mod source;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult, EXIT_FAILURE, EXIT_SOURCE_READ};
pub use http::HttpError;
pub use probe::ProbeError;
pub use source::SourceError;
pub use validation::ValidationError;
