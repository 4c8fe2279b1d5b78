// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concrete entity identifiers, one per prefix in the workspace's id space.

crate::define_id! {
    /// Identifies the single Company record in a workspace.
    pub struct CompanyId("cmp");
}

crate::define_id! {
    /// Identifies a Team.
    pub struct TeamId("team");
}

crate::define_id! {
    /// Identifies an Agent.
    pub struct AgentId("agent");
}

crate::define_id! {
    /// Identifies a Project.
    pub struct ProjectId("proj");
}

crate::define_id! {
    /// Identifies a conversation thread.
    pub struct ConversationId("conv");
}

crate::define_id! {
    /// Identifies a single conversation message.
    pub struct MessageId("msg");
}

crate::define_id! {
    /// Identifies a Task.
    pub struct TaskId("task");
}

crate::define_id! {
    /// Identifies a milestone within a task's plan.
    pub struct MilestoneId("ms");
}

crate::define_id! {
    /// Identifies a Run (one invocation of a worker agent).
    pub struct RunId("run");
}

crate::define_id! {
    /// Identifies a scheduled or dispatched job.
    pub struct JobId("job");
}

crate::define_id! {
    /// Identifies an Artifact.
    pub struct ArtifactId("art");
}

crate::define_id! {
    /// Identifies a Context Pack.
    pub struct ContextPackId("ctx");
}

crate::define_id! {
    /// Identifies a Share Pack.
    pub struct SharePackId("share");
}

crate::define_id! {
    /// Identifies a Review.
    pub struct ReviewId("rev");
}

crate::define_id! {
    /// Identifies a help request in the inbox.
    pub struct HelpRequestId("help");
}

crate::define_id! {
    /// Identifies a comment.
    pub struct CommentId("cmt");
}

crate::define_id! {
    /// Identifies an event envelope.
    pub struct EventId("evt");
}
