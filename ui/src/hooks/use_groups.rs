use fetch::PageQuery;
use fetch::accessors::groups;
use payloads::{GroupDetail, GroupId, GroupStudySession, GroupSummary, Word};
use yew::prelude::*;

use super::{FetchHookReturn, PaginationHookReturn, use_operation, use_pagination};
use crate::get_api_client;

#[hook]
pub fn use_groups() -> PaginationHookReturn<GroupSummary> {
    use_pagination((), PageQuery::default(), || {
        groups::list_groups(&get_api_client())
    })
}

#[hook]
pub fn use_group(group_id: GroupId) -> FetchHookReturn<GroupDetail> {
    use_operation(group_id, move || groups::group(&get_api_client(), group_id))
}

#[hook]
pub fn use_group_words(group_id: GroupId) -> PaginationHookReturn<Word> {
    use_pagination(group_id, PageQuery::default(), move || {
        groups::group_words(&get_api_client(), group_id)
    })
}

#[hook]
pub fn use_group_study_sessions(
    group_id: GroupId,
) -> PaginationHookReturn<GroupStudySession> {
    use_pagination(group_id, PageQuery::default(), move || {
        groups::group_study_sessions(&get_api_client(), group_id)
    })
}
