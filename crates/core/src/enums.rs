// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed enumerated value sets shared across entity schemas.
//!
//! Every enum here derives strict serde (Rust's generated `Deserialize`
//! already rejects any string outside the declared variants), matching the
//! schema rule that visibility/role/sensitivity and friends are closed sets.

use serde::{Deserialize, Serialize};

/// Who may read a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    PrivateAgent,
    Team,
    Managers,
    Org,
}

crate::simple_display! {
    Visibility {
        PrivateAgent => "private_agent",
        Team => "team",
        Managers => "managers",
        Org => "org",
    }
}

/// Memory-content classification affecting compose-context authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    Public,
    Internal,
    Restricted,
}

crate::simple_display! {
    Sensitivity {
        Public => "public",
        Internal => "internal",
        Restricted => "restricted",
    }
}

/// An actor's organizational role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Human,
    Ceo,
    Director,
    Manager,
    Worker,
}

crate::simple_display! {
    Role {
        Human => "human",
        Ceo => "ceo",
        Director => "director",
        Manager => "manager",
        Worker => "worker",
    }
}

impl Role {
    /// `{human, ceo, director, manager}` — roles allowed to approve most
    /// artifact kinds and to read `managers`/manager-override `team` resources.
    pub fn is_manager_set(self) -> bool {
        matches!(self, Role::Human | Role::Ceo | Role::Director | Role::Manager)
    }

    /// `{human, ceo, director}` — roles allowed to approve `memory_delta` and
    /// to compose context from `restricted` sensitivity resources.
    pub fn is_director_set(self) -> bool {
        matches!(self, Role::Human | Role::Ceo | Role::Director)
    }
}

/// An agent's non-human organizational role (a [`Role`] other than `Human`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Ceo,
    Director,
    Manager,
    Worker,
}

crate::simple_display! {
    AgentRole {
        Ceo => "ceo",
        Director => "director",
        Manager => "manager",
        Worker => "worker",
    }
}

impl From<AgentRole> for Role {
    fn from(r: AgentRole) -> Self {
        match r {
            AgentRole::Ceo => Role::Ceo,
            AgentRole::Director => Role::Director,
            AgentRole::Manager => Role::Manager,
            AgentRole::Worker => Role::Worker,
        }
    }
}

/// Lifecycle status of a [`crate::Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Archived,
}

crate::simple_display! {
    ProjectStatus {
        Active => "active",
        Archived => "archived",
    }
}

/// Lifecycle status of a [`crate::Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Draft,
    Ready,
    InProgress,
    Blocked,
    Done,
    Canceled,
}

crate::simple_display! {
    TaskStatus {
        Draft => "draft",
        Ready => "ready",
        InProgress => "in_progress",
        Blocked => "blocked",
        Done => "done",
        Canceled => "canceled",
    }
}

/// Lifecycle status of a [`crate::Run`]. Transitions: `running` → one of
/// `{ended, failed, stopped}`; terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    Ended,
    Failed,
    Stopped,
}

crate::simple_display! {
    RunStatus {
        Running => "running",
        Ended => "ended",
        Failed => "failed",
        Stopped => "stopped",
    }
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Ended | RunStatus::Failed | RunStatus::Stopped)
    }
}

/// Outcome of a [`crate::Review`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approved,
    Denied,
}

crate::simple_display! {
    ReviewDecision {
        Approved => "approved",
        Denied => "denied",
    }
}

/// The kind of a [`crate::Artifact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    IntakeBrief,
    ClarificationsQa,
    Proposal,
    Workplan,
    MilestoneReport,
    ManagerDigest,
    MemoryDelta,
    FailureReport,
    HeartbeatActionProposal,
}

crate::simple_display! {
    ArtifactType {
        IntakeBrief => "intake_brief",
        ClarificationsQa => "clarifications_qa",
        Proposal => "proposal",
        Workplan => "workplan",
        MilestoneReport => "milestone_report",
        ManagerDigest => "manager_digest",
        MemoryDelta => "memory_delta",
        FailureReport => "failure_report",
        HeartbeatActionProposal => "heartbeat_action_proposal",
    }
}

impl ArtifactType {
    /// Markdown `##` headings every artifact of this type must contain in
    /// its body, checked by `validate()` / the round-trip property test.
    pub fn required_headings(self) -> &'static [&'static str] {
        match self {
            ArtifactType::IntakeBrief => &["Summary", "Requirements"],
            ArtifactType::ClarificationsQa => &["Questions", "Answers"],
            ArtifactType::Proposal => &["Summary", "Approach", "Risks"],
            ArtifactType::Workplan => &["Milestones", "Schedule"],
            ArtifactType::MilestoneReport => &["Status", "Next Steps"],
            ArtifactType::ManagerDigest => &["Highlights", "Blockers"],
            ArtifactType::MemoryDelta => &["Change", "Justification"],
            ArtifactType::FailureReport => &["What Happened", "Root Cause"],
            ArtifactType::HeartbeatActionProposal => &["Proposal"],
        }
    }
}

#[cfg(test)]
#[path = "enums_tests.rs"]
mod tests;
