use fetch::PageQuery;
use fetch::accessors::study_activities;
use payloads::{
    StudyActivity, StudyActivityId, StudyActivityLaunch, StudySession,
};
use yew::prelude::*;

use super::{FetchHookReturn, PaginationHookReturn, use_operation, use_pagination};
use crate::get_api_client;

#[hook]
pub fn use_study_activities() -> FetchHookReturn<Vec<StudyActivity>> {
    use_operation((), || {
        study_activities::study_activities(&get_api_client())
    })
}

#[hook]
pub fn use_study_activity(
    activity_id: StudyActivityId,
) -> FetchHookReturn<StudyActivity> {
    use_operation(activity_id, move || {
        study_activities::study_activity(&get_api_client(), activity_id)
    })
}

/// The activity plus the groups it can be launched against.
#[hook]
pub fn use_study_activity_launch(
    activity_id: StudyActivityId,
) -> FetchHookReturn<StudyActivityLaunch> {
    use_operation(activity_id, move || {
        study_activities::study_activity_launch(&get_api_client(), activity_id)
    })
}

#[hook]
pub fn use_study_activity_sessions(
    activity_id: StudyActivityId,
) -> PaginationHookReturn<StudySession> {
    use_pagination(activity_id, PageQuery::default(), move || {
        study_activities::study_activity_sessions(
            &get_api_client(),
            activity_id,
        )
    })
}
