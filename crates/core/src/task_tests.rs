// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn progress_is_zero_with_no_milestones() {
    let task = Task::new(ProjectId::new(), "Ship it", Visibility::Team, 1_000);
    assert_eq!(task.progress(), 0.0);
}

#[test]
fn progress_reflects_done_fraction() {
    let mut task = Task::new(ProjectId::new(), "Ship it", Visibility::Team, 1_000);
    let mut m1 = Milestone::new("design");
    m1.done = true;
    let m2 = Milestone::new("implement");
    task.milestones.push(m1);
    task.milestones.push(m2);
    assert_eq!(task.progress(), 0.5);
}

#[test]
fn new_task_starts_draft() {
    let task = Task::new(ProjectId::new(), "Ship it", Visibility::Org, 1_000);
    assert_eq!(task.status, TaskStatus::Draft);
}

#[test]
fn setters_attach_assignee_and_team() {
    let team_id = TeamId::new();
    let agent_id = AgentId::new();
    let task = Task::new(ProjectId::new(), "Ship it", Visibility::Team, 1_000)
        .team_id(team_id)
        .assignee_agent_id(agent_id);
    assert_eq!(task.team_id, Some(team_id));
    assert_eq!(task.assignee_agent_id, Some(agent_id));
}
