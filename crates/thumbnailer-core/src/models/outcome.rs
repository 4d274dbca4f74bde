use crate::constants::{SUBJECT_COMPLETE, SUBJECT_ERROR};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Terminal outcome reported through the notification topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Complete,
    Error,
}

impl Outcome {
    /// Subject line of the published message.
    pub fn subject(&self) -> &'static str {
        match self {
            Outcome::Complete => SUBJECT_COMPLETE,
            Outcome::Error => SUBJECT_ERROR,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.subject())
    }
}

/// How a pipeline run ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// Thumbnail written; Complete notification attempted.
    Completed,
    /// Extension outside the supported families; nothing written or deleted.
    Skipped,
    /// Failed after the fetch; Error notification attempted.
    Reported,
}
