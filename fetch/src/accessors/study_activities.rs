use payloads::{
    APIClient, StudyActivity, StudyActivityId, StudyActivityLaunch,
    StudySession,
};

use crate::{FetchError, Operation, PageOperation};

pub fn study_activities(client: &APIClient) -> Operation<Vec<StudyActivity>> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move {
            client.list_study_activities().await.map_err(FetchError::from)
        }
    })
}

pub fn study_activity(
    client: &APIClient,
    activity_id: StudyActivityId,
) -> Operation<StudyActivity> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move {
            client
                .get_study_activity(&activity_id)
                .await
                .map_err(FetchError::from)
        }
    })
}

/// The activity together with the groups it can be launched for.
pub fn study_activity_launch(
    client: &APIClient,
    activity_id: StudyActivityId,
) -> Operation<StudyActivityLaunch> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move {
            client
                .get_study_activity_launch(&activity_id)
                .await
                .map_err(FetchError::from)
        }
    })
}

/// Sessions played with one activity. Paged only.
pub fn study_activity_sessions(
    client: &APIClient,
    activity_id: StudyActivityId,
) -> PageOperation<StudySession> {
    let client = client.clone();
    PageOperation::new(move |query| {
        let client = client.clone();
        async move {
            client
                .list_study_activity_sessions(&activity_id, &query)
                .await
                .map_err(FetchError::from)
        }
    })
}
