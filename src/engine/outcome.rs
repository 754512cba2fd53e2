//! Run results.

use super::error::RunError;
use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accept/reject decision for a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("Reached the accepting state. Input accepted."),
            Verdict::Rejected => {
                f.write_str("Input rejected. The final state is not the accepting state.")
            }
        }
    }
}

/// What a completed run produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub verdict: Verdict,
    /// State reached after input consumption and epsilon closure
    pub final_state: StateId,
    /// Input characters consumed
    pub consumed: usize,
    /// Epsilon moves taken during closure
    pub epsilon_moves: usize,
    /// Stack depth at the end of the run
    pub stack_depth: usize,
}

/// One input line and the result of running it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOutcome {
    pub line: String,
    pub result: Result<RunReport, RunError>,
}

/// Tally of a batch of runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub accepted: usize,
    pub rejected: usize,
    /// Runs aborted by a [`RunError`]
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &Result<RunReport, RunError>) {
        match result {
            Ok(report) if report.verdict.is_accepted() => self.accepted += 1,
            Ok(_) => self.rejected += 1,
            Err(_) => self.failed += 1,
        }
    }

    /// Tally a batch of outcomes.
    pub fn of(outcomes: &[LineOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.record(&outcome.result);
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.accepted + self.rejected + self.failed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} line(s): {} accepted, {} rejected, {} failed",
            self.total(),
            self.accepted,
            self.rejected,
            self.failed
        )
    }
}
