use fetch::PageQuery;
use fetch::accessors::study_sessions;
use payloads::{StudySession, StudySessionId, Word};
use yew::prelude::*;

use super::{FetchHookReturn, PaginationHookReturn, use_operation, use_pagination};
use crate::get_api_client;

#[hook]
pub fn use_study_sessions() -> PaginationHookReturn<StudySession> {
    use_pagination((), PageQuery::default(), || {
        study_sessions::list_study_sessions(&get_api_client())
    })
}

#[hook]
pub fn use_study_session(
    session_id: StudySessionId,
) -> FetchHookReturn<StudySession> {
    use_operation(session_id, move || {
        study_sessions::study_session(&get_api_client(), session_id)
    })
}

/// Words reviewed in a session.
#[hook]
pub fn use_study_session_words(
    session_id: StudySessionId,
) -> PaginationHookReturn<Word> {
    use_pagination(session_id, PageQuery::default(), move || {
        study_sessions::study_session_words(&get_api_client(), session_id)
    })
}
