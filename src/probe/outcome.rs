use std::error::Error as StdError;
use std::io::Write;

use reqwest::StatusCode;
use tracing::debug;

use crate::error::ProbeError;
use crate::target::Target;

/// What happened to one target.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The target string did not form a usable URL.
    InvalidTarget(ProbeError),
    /// No response: DNS, connect, TLS or timeout failure.
    Unreachable(ProbeError),
    /// A response arrived but its body could not be read in full.
    BodyUnreadable {
        status: StatusCode,
        error: ProbeError,
    },
    Responded {
        status: StatusCode,
        /// Label of the signature when the body matched.
        matched: Option<String>,
    },
}

impl ProbeOutcome {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            ProbeOutcome::InvalidTarget(_) => "invalid-target",
            ProbeOutcome::Unreachable(_) => "unreachable",
            ProbeOutcome::BodyUnreadable { .. } => "body-unreadable",
            ProbeOutcome::Responded { matched: None, .. } => "responded",
            ProbeOutcome::Responded {
                matched: Some(_), ..
            } => "matched",
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, ProbeOutcome::Responded {
            matched: Some(_),
            ..
        })
    }

    /// Status code of the response, if one arrived.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            ProbeOutcome::BodyUnreadable { status, .. } | ProbeOutcome::Responded { status, .. } => {
                Some(*status)
            }
            ProbeOutcome::InvalidTarget(_) | ProbeOutcome::Unreachable(_) => None,
        }
    }

    /// Console lines for this outcome, in the order they are printed.
    #[must_use]
    pub fn lines(&self, target: &Target) -> Vec<String> {
        let mut lines: Vec<String> = self
            .status()
            .map(|status| status_line(target, status))
            .into_iter()
            .collect();
        lines.extend(self.detail_lines(target));
        lines
    }

    /// Lines that follow the status line, or all lines when there is no
    /// response.
    #[must_use]
    pub fn detail_lines(&self, target: &Target) -> Vec<String> {
        match self {
            ProbeOutcome::InvalidTarget(error) => {
                vec![format!("({}) invalid target: {}", target, describe(error))]
            }
            ProbeOutcome::Unreachable(error) => {
                vec![format!(
                    "Server not responding ({}): {}",
                    target,
                    describe(error)
                )]
            }
            ProbeOutcome::BodyUnreadable { error, .. } => vec![format!(
                "({}) failed to read response body: {}",
                target,
                describe(error)
            )],
            ProbeOutcome::Responded { matched, .. } => matched
                .iter()
                .map(|label| format!("({}) {} Found!", target, label))
                .collect(),
        }
    }

    /// Writes the lines after the status line to stdout as one block.
    pub fn print_details(&self, target: &Target) {
        write_lines(&self.detail_lines(target));
    }
}

/// Writes the status line as soon as a response head is in.
pub(crate) fn print_status(target: &Target, status: StatusCode) {
    write_lines(&[status_line(target, status)]);
}

/// Writes lines to stdout under one lock; a closed stdout is logged, not fatal.
fn write_lines(lines: &[String]) {
    let mut stdout = std::io::stdout().lock();
    for line in lines {
        if let Err(err) = writeln!(stdout, "{}", line) {
            debug!("Failed to write probe output: {}", err);
            return;
        }
    }
}

fn status_line(target: &Target, status: StatusCode) -> String {
    format!("({}) returned status: {}", target, status)
}

/// Error message with its source chain, skipping repeated text.
fn describe(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}
