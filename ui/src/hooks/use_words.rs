use fetch::PageQuery;
use fetch::accessors::words;
use payloads::{Word, WordDetail, WordId};
use yew::prelude::*;

use super::{FetchHookReturn, PaginationHookReturn, use_operation, use_pagination};
use crate::get_api_client;

#[hook]
pub fn use_words() -> PaginationHookReturn<Word> {
    use_pagination((), PageQuery::default(), || {
        words::list_words(&get_api_client())
    })
}

#[hook]
pub fn use_word(word_id: WordId) -> FetchHookReturn<WordDetail> {
    use_operation(word_id, move || words::word(&get_api_client(), word_id))
}
