//! The agent outcome state machine.

use std::fmt;

/// Lifecycle status of one agent.
///
/// Transitions: `Active → Saved` (occupied an exit cell) and
/// `Active → Lost` (health reached 0).  Both targets are terminal — a
/// terminal agent is removed from the live set and never simulated again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AgentStatus {
    Active,
    Saved,
    Lost,
}

impl AgentStatus {
    /// `true` for `Saved` and `Lost`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, AgentStatus::Active)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentStatus::Active => "active",
            AgentStatus::Saved => "saved",
            AgentStatus::Lost => "lost",
        };
        f.write_str(s)
    }
}
