use crate::{GroupId, StudyActivityId};
use serde::{Deserialize, Serialize};

/// Start a study session of an activity against a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartStudySession {
    pub study_activity_id: StudyActivityId,
    pub group_id: GroupId,
}

/// Record whether a word was answered correctly during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewWord {
    pub correct: bool,
}
