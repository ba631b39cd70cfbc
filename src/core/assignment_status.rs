use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Progress of one worker's assignment
///
/// Movement is forward-only; completed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Initial state when the assignment is created
    NotStarted,
    /// The worker has started cleaning
    InProgress,
    /// Terminal state; the assignment can no longer change
    Completed,
}

/// Every legal move; anything not listed here is rejected.
/// Same-state moves are not transitions and are handled by the caller.
const LEGAL_TRANSITIONS: &[(AssignmentStatus, AssignmentStatus)] = &[
    (AssignmentStatus::NotStarted, AssignmentStatus::InProgress),
    (AssignmentStatus::NotStarted, AssignmentStatus::Completed),
    (AssignmentStatus::InProgress, AssignmentStatus::Completed),
];

impl AssignmentStatus {
    /// Whether moving from `self` to `target` is a legal forward transition
    pub fn can_advance_to(self, target: AssignmentStatus) -> bool {
        LEGAL_TRANSITIONS.contains(&(self, target))
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentStatus::NotStarted => write!(f, "not_started"),
            AssignmentStatus::InProgress => write!(f, "in_progress"),
            AssignmentStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for AssignmentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(AssignmentStatus::NotStarted),
            "in_progress" => Ok(AssignmentStatus::InProgress),
            "completed" => Ok(AssignmentStatus::Completed),
            _ => Err(()),
        }
    }
}
