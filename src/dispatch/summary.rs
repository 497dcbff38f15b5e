use std::fmt;
use std::time::Duration;

use crate::args::PositiveUsize;

/// Totals reported once every worker has exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of targets handed to the batch.
    pub count: usize,
    pub pool_size: PositiveUsize,
    pub elapsed: Duration,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Finished processing {} targets with {} workers in {:?}.",
            self.count, self.pool_size, self.elapsed
        )
    }
}
