// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The pure `(actor, action, resource) -> decision` evaluator.
//!
//! Rules are checked in a fixed order; the first one whose condition
//! matches decides the outcome (allow or deny) and evaluation stops there.

use ac_core::{Role, Sensitivity, TeamId, Visibility};
use serde::{Deserialize, Serialize};

/// Who is asking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub actor_id: String,
    pub role: Role,
    pub team_id: Option<TeamId>,
}

impl Actor {
    pub fn new(actor_id: impl Into<String>, role: Role) -> Self {
        Self { actor_id: actor_id.into(), role, team_id: None }
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }
}

/// What they're trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Approve,
    Launch,
    ComposeContext,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Approve => "approve",
            Action::Launch => "launch",
            Action::ComposeContext => "compose_context",
        }
    }
}

/// What they're trying to do it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub resource_id: String,
    pub visibility: Visibility,
    pub team_id: Option<TeamId>,
    pub producing_actor_id: Option<String>,
    pub kind: Option<String>,
    pub sensitivity: Option<Sensitivity>,
}

impl Resource {
    pub fn new(resource_id: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            resource_id: resource_id.into(),
            visibility,
            team_id: None,
            producing_actor_id: None,
            kind: None,
            sensitivity: None,
        }
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_producing_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.producing_actor_id = Some(actor_id.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.sensitivity = Some(sensitivity);
        self
    }
}

/// The outcome of evaluating one `(actor, action, resource)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDecision {
    pub allowed: bool,
    pub rule_id: &'static str,
    pub reason: &'static str,
}

impl PolicyDecision {
    fn allow(rule_id: &'static str) -> Self {
        Self { allowed: true, rule_id, reason: "allowed" }
    }

    fn deny(rule_id: &'static str, reason: &'static str) -> Self {
        Self { allowed: false, rule_id, reason }
    }
}

const MEMORY_DELTA_KIND: &str = "memory_delta";

/// Evaluate policy for one `(actor, action, resource)` triple. Pure: no I/O,
/// no side effects, same inputs always produce the same decision.
pub fn evaluate_policy(actor: &Actor, action: Action, resource: &Resource) -> PolicyDecision {
    if action == Action::Approve && resource.kind.as_deref() == Some(MEMORY_DELTA_KIND) {
        return if actor.role.is_director_set() {
            PolicyDecision::allow("approve.memory.role")
        } else {
            PolicyDecision::deny("approve.memory.role", "role_not_allowed")
        };
    }

    if action == Action::Approve {
        return if actor.role.is_manager_set() {
            PolicyDecision::allow("approve.role")
        } else {
            PolicyDecision::deny("approve.role", "role_not_allowed")
        };
    }

    if action == Action::ComposeContext && resource.sensitivity == Some(Sensitivity::Restricted) {
        return if actor.role.is_director_set() {
            PolicyDecision::allow("compose_context.restricted.role")
        } else {
            PolicyDecision::deny("compose_context.restricted.role", "role_not_allowed")
        };
    }

    match resource.visibility {
        Visibility::Org => PolicyDecision::allow("vis.org"),
        Visibility::Managers => {
            if actor.role.is_manager_set() {
                PolicyDecision::allow("vis.managers.role")
            } else {
                PolicyDecision::deny("vis.managers.role", "role_not_allowed")
            }
        }
        Visibility::Team => {
            if actor.role.is_manager_set() {
                PolicyDecision::allow("vis.team.manager_override")
            } else if actor.team_id.is_some() && actor.team_id == resource.team_id {
                PolicyDecision::allow("vis.team.member")
            } else {
                PolicyDecision::deny("vis.team.mismatch", "team_mismatch")
            }
        }
        Visibility::PrivateAgent => {
            if actor.role == Role::Human {
                PolicyDecision::allow("vis.private.human")
            } else if resource.producing_actor_id.as_deref() == Some(actor.actor_id.as_str()) {
                PolicyDecision::allow("vis.private.owner")
            } else {
                PolicyDecision::deny("vis.private.owner", "not_owner")
            }
        }
    }
}

#[cfg(test)]
#[path = "decision_tests.rs"]
mod tests;
