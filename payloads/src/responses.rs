use crate::{GroupId, StudyActivityId, StudySessionId, WordId};
use serde::{Deserialize, Serialize};

/// The three renderings of a vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordParts {
    pub portuguese: String,
    pub kimbundu: String,
    pub english: String,
}

/// A word as listed in tables, with its review counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub portuguese: String,
    pub kimbundu: String,
    pub english: String,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub wrong_count: u32,
    pub parts: Option<WordParts>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    pub correct_count: u32,
    pub wrong_count: u32,
}

/// A single word with its review stats and the groups containing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDetail {
    pub id: WordId,
    pub portuguese: String,
    pub kimbundu: String,
    pub english: String,
    pub parts: Option<WordParts>,
    pub stats: WordStats,
    #[serde(default)]
    pub groups: Vec<GroupSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub words_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    pub total_words_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDetail {
    pub id: GroupId,
    pub name: String,
    pub stats: GroupStats,
}

/// Timestamps are passed through as the backend's text; it emits more than
/// one format depending on the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: StudySessionId,
    pub activity_name: String,
    pub group_name: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub review_items_count: u32,
}

/// A study session as listed under a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStudySession {
    pub id: StudySessionId,
    pub group_id: GroupId,
    pub study_activity_id: StudyActivityId,
    pub created_at: Option<String>,
    pub activity_name: String,
    pub group_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyActivity {
    pub id: StudyActivityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub preview_url: String,
}

/// Everything needed to launch an activity: the activity plus the groups it
/// can be played with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyActivityLaunch {
    pub activity: StudyActivity,
    #[serde(default)]
    pub groups: Vec<GroupSummary>,
}

/// A recorded answer for one word within a study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReviewRecorded {
    pub success: bool,
    pub id: i64,
    pub word_id: WordId,
    pub study_session_id: StudySessionId,
    pub correct: bool,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastStudySession {
    pub id: Option<StudySessionId>,
    pub group_id: Option<GroupId>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub activity_name: Option<String>,
    pub group_name: Option<String>,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub wrong_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyProgress {
    pub total_words: u32,
    pub studied_words: u32,
    #[serde(default)]
    pub studied_words_trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStats {
    pub success_rate: f64,
    #[serde(default)]
    pub success_rate_trend: f64,
    pub total_study_sessions: u32,
    pub total_active_groups: u32,
    pub study_streak_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceGraphPoint {
    pub id: StudySessionId,
    pub start_time: Option<String>,
    pub review_items_count: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueLearningSession {
    pub id: StudySessionId,
    pub activity_id: StudyActivityId,
    pub group_id: GroupId,
    pub group_name: String,
    pub review_items_count: u32,
    pub total_words_count: u32,
}

/// Result of the history and full reset commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

/// Error body sent by the backend. Older routes use `error`, newer ones
/// `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.is_empty())
    }
}
