/// Run state definitions for tracking a crawl from start to finish
use std::fmt;

/// Represents the lifecycle state of one crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStatus {
    /// Run has been created but the loop has not started
    Idle,

    /// Frontier is being drained
    Running,

    // ===== Terminal States =====
    /// Frontier drained and the artifact was written
    Completed,

    /// Start-up or finalization failed
    Failed,

    /// Caller requested early termination
    Cancelled,
}

impl RunStatus {
    /// Returns true if the run can no longer change state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    /// Returns true if moving from `self` to `next` is a legal transition
    ///
    /// `Idle -> Running -> {Completed, Failed, Cancelled}`; a run that fails
    /// to start may also go straight from `Idle` to `Failed`.
    pub fn can_transition_to(&self, next: RunStatus) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running)
                | (Self::Idle, Self::Failed)
                | (Self::Running, Self::Completed)
                | (Self::Running, Self::Failed)
                | (Self::Running, Self::Cancelled)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
