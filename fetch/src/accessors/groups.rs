use payloads::{
    APIClient, GroupDetail, GroupId, GroupStudySession, GroupSummary, Word,
};

use crate::{FetchError, Operation, PageOperation};

pub fn list_groups(client: &APIClient) -> PageOperation<GroupSummary> {
    let client = client.clone();
    PageOperation::new(move |query| {
        let client = client.clone();
        async move { client.list_groups(&query).await.map_err(FetchError::from) }
    })
}

pub fn group(client: &APIClient, group_id: GroupId) -> Operation<GroupDetail> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move {
            client.get_group(&group_id).await.map_err(FetchError::from)
        }
    })
}

/// Words of one group, sortable like the word list.
pub fn group_words(
    client: &APIClient,
    group_id: GroupId,
) -> PageOperation<Word> {
    let client = client.clone();
    PageOperation::new(move |query| {
        let client = client.clone();
        async move {
            client
                .list_group_words(&group_id, &query)
                .await
                .map_err(FetchError::from)
        }
    })
}

/// Study sessions of one group. Paged only; sort changes still refetch but
/// are not sent.
pub fn group_study_sessions(
    client: &APIClient,
    group_id: GroupId,
) -> PageOperation<GroupStudySession> {
    let client = client.clone();
    PageOperation::new(move |query| {
        let client = client.clone();
        async move {
            client
                .list_group_study_sessions(&group_id, &query)
                .await
                .map_err(FetchError::from)
        }
    })
}
