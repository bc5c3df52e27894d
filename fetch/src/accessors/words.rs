use payloads::{APIClient, Word, WordDetail, WordId};

use crate::{FetchError, Operation, PageOperation};

/// All words, sortable by any word column.
pub fn list_words(client: &APIClient) -> PageOperation<Word> {
    let client = client.clone();
    PageOperation::new(move |query| {
        let client = client.clone();
        async move { client.list_words(&query).await.map_err(FetchError::from) }
    })
}

pub fn word(client: &APIClient, word_id: WordId) -> Operation<WordDetail> {
    let client = client.clone();
    Operation::new(move || {
        let client = client.clone();
        async move { client.get_word(&word_id).await.map_err(FetchError::from) }
    })
}
