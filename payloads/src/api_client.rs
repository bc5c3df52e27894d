use crate::{
    ContinueLearningSession, ErrorBody, GroupDetail, GroupId, GroupStudySession,
    GroupSummary, LastStudySession, PageQuery, Paginated,
    PerformanceGraphPoint, QuickStats, ResetResponse, StudyActivity,
    StudyActivityId, StudyActivityLaunch, StudyProgress, StudySession,
    StudySessionId, Word, WordDetail, WordId, WordReviewRecorded, requests,
};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
#[derive(Debug, Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.address.trim_end_matches('/'))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn page_get(&self, path: &str, query: &PageQuery) -> ReqwestResult {
        self.inner_client
            .get(self.format_url(path))
            .query(&query.to_params())
            .send()
            .await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health").await?;
        ok_empty(response).await
    }

    /// List words, sortable by any word column.
    pub async fn list_words(
        &self,
        query: &PageQuery,
    ) -> Result<Paginated<Word>, ClientError> {
        let response = self.page_get("words", query).await?;
        ok_body(response).await
    }

    pub async fn get_word(
        &self,
        word_id: &WordId,
    ) -> Result<WordDetail, ClientError> {
        let response = self.empty_get(&format!("words/{word_id}")).await?;
        ok_body(response).await
    }

    pub async fn list_groups(
        &self,
        query: &PageQuery,
    ) -> Result<Paginated<GroupSummary>, ClientError> {
        let response = self.page_get("groups", query).await?;
        ok_body(response).await
    }

    pub async fn get_group(
        &self,
        group_id: &GroupId,
    ) -> Result<GroupDetail, ClientError> {
        let response = self.empty_get(&format!("groups/{group_id}")).await?;
        ok_body(response).await
    }

    pub async fn list_group_words(
        &self,
        group_id: &GroupId,
        query: &PageQuery,
    ) -> Result<Paginated<Word>, ClientError> {
        let response = self
            .page_get(&format!("groups/{group_id}/words"), query)
            .await?;
        ok_body(response).await
    }

    /// Study sessions of a group. The endpoint only pages, so any sort in
    /// `query` is dropped.
    pub async fn list_group_study_sessions(
        &self,
        group_id: &GroupId,
        query: &PageQuery,
    ) -> Result<Paginated<GroupStudySession>, ClientError> {
        let response = self
            .page_get(
                &format!("groups/{group_id}/study_sessions"),
                &PageQuery::page(query.page),
            )
            .await?;
        ok_body(response).await
    }

    pub async fn list_study_sessions(
        &self,
        query: &PageQuery,
    ) -> Result<Paginated<StudySession>, ClientError> {
        let response = self.page_get("study_sessions", query).await?;
        ok_body(response).await
    }

    pub async fn get_study_session(
        &self,
        session_id: &StudySessionId,
    ) -> Result<StudySession, ClientError> {
        let response = self
            .empty_get(&format!("study_sessions/{session_id}"))
            .await?;
        ok_body(response).await
    }

    /// Words reviewed during a study session.
    pub async fn list_study_session_words(
        &self,
        session_id: &StudySessionId,
        query: &PageQuery,
    ) -> Result<Paginated<Word>, ClientError> {
        let response = self
            .page_get(&format!("study_sessions/{session_id}/words"), query)
            .await?;
        ok_body(response).await
    }

    pub async fn start_study_session(
        &self,
        details: &requests::StartStudySession,
    ) -> Result<StudySession, ClientError> {
        let response = self.post("study_sessions", details).await?;
        ok_body(response).await
    }

    pub async fn record_word_review(
        &self,
        session_id: &StudySessionId,
        word_id: &WordId,
        details: &requests::ReviewWord,
    ) -> Result<WordReviewRecorded, ClientError> {
        let response = self
            .post(
                &format!("study_sessions/{session_id}/words/{word_id}/review"),
                details,
            )
            .await?;
        ok_body(response).await
    }

    /// Delete every study session and review. Words and groups are kept.
    pub async fn reset_history(&self) -> Result<ResetResponse, ClientError> {
        let response = self
            .post("study_sessions/reset_history", &serde_json::json!({}))
            .await?;
        ok_body(response).await
    }

    /// Sessions with words left to review.
    pub async fn continue_learning(
        &self,
    ) -> Result<Vec<ContinueLearningSession>, ClientError> {
        let response = self.empty_get("study_sessions/continue_learning").await?;
        ok_body(response).await
    }

    pub async fn list_study_activities(
        &self,
    ) -> Result<Vec<StudyActivity>, ClientError> {
        let response = self.empty_get("study_activities").await?;
        ok_body(response).await
    }

    pub async fn get_study_activity(
        &self,
        activity_id: &StudyActivityId,
    ) -> Result<StudyActivity, ClientError> {
        let response = self
            .empty_get(&format!("study_activities/{activity_id}"))
            .await?;
        ok_body(response).await
    }

    pub async fn get_study_activity_launch(
        &self,
        activity_id: &StudyActivityId,
    ) -> Result<StudyActivityLaunch, ClientError> {
        let response = self
            .empty_get(&format!("study_activities/{activity_id}/launch"))
            .await?;
        ok_body(response).await
    }

    /// Study sessions of an activity. The endpoint only pages, so any sort in
    /// `query` is dropped.
    pub async fn list_study_activity_sessions(
        &self,
        activity_id: &StudyActivityId,
        query: &PageQuery,
    ) -> Result<Paginated<StudySession>, ClientError> {
        let response = self
            .page_get(
                &format!("study_activities/{activity_id}/study_sessions"),
                &PageQuery::page(query.page),
            )
            .await?;
        ok_body(response).await
    }

    pub async fn last_study_session(
        &self,
    ) -> Result<LastStudySession, ClientError> {
        let response = self.empty_get("dashboard/last_study_session").await?;
        ok_body(response).await
    }

    pub async fn study_progress(&self) -> Result<StudyProgress, ClientError> {
        let response = self.empty_get("dashboard/study_progress").await?;
        ok_body(response).await
    }

    pub async fn quick_stats(&self) -> Result<QuickStats, ClientError> {
        let response = self.empty_get("dashboard/quick_stats").await?;
        ok_body(response).await
    }

    pub async fn performance_graph(
        &self,
    ) -> Result<Vec<PerformanceGraphPoint>, ClientError> {
        let response = self.empty_get("dashboard/performance_graph").await?;
        ok_body(response).await
    }

    /// Reset the whole database to its seeded state.
    pub async fn full_reset(&self) -> Result<ResetResponse, ClientError> {
        let response = self
            .post("dashboard/full_reset", &serde_json::json!({}))
            .await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the backend's message.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// A successful response whose body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}

/// Build an APIError from the `message`/`error` field of a JSON error body,
/// falling back to the status code when the body has neither.
async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("API error: {}", status.as_u16()));
    ClientError::APIError(status, message)
}
