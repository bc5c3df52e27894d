use payloads::{APIClient, StudySession, StudySessionId, Word};

use crate::{FetchError, Operation, PageOperation};

pub fn list_study_sessions(client: &APIClient) -> PageOperation<StudySession> {
    let client = client.clone();
    PageOperation::new(move |query| {
        let client = client.clone();
        async move {
            client
                .list_study_sessions(&query)
                .await
                .map_err(FetchError::from)
        }
    })
}

pub fn study_session(
    client: &APIClient,
    session_id: StudySessionId,
) -> Operation<StudySession> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move {
            client
                .get_study_session(&session_id)
                .await
                .map_err(FetchError::from)
        }
    })
}

/// Words reviewed during one session.
pub fn study_session_words(
    client: &APIClient,
    session_id: StudySessionId,
) -> PageOperation<Word> {
    let client = client.clone();
    PageOperation::new(move |query| {
        let client = client.clone();
        async move {
            client
                .list_study_session_words(&session_id, &query)
                .await
                .map_err(FetchError::from)
        }
    })
}
