use reqwest::StatusCode;

use payloads::{PageQuery, SortDirection, WordId};
use test_helpers::{MockConfig, assert_status_code, spawn_app, spawn_app_with};

#[tokio::test]
async fn list_words_first_page() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let page = app.client.list_words(&PageQuery::default()).await?;

    assert_eq!(page.items.len(), 12);
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.per_page, 100);
    assert_eq!(page.pagination.total, 12);
    assert_eq!(page.pagination.total_pages, 1);
    Ok(())
}

#[tokio::test]
async fn list_words_last_partial_page() -> anyhow::Result<()> {
    let app = spawn_app_with(MockConfig {
        per_page: 5,
        ..Default::default()
    })
    .await;

    let page = app.client.list_words(&PageQuery::page(3)).await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.pagination.total_pages, 3);
    assert_eq!(page.pagination.first_item(), 11);
    assert_eq!(page.pagination.last_item(), 12);
    assert!(!page.pagination.has_next());
    Ok(())
}

#[tokio::test]
async fn list_words_sorted() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut query = PageQuery {
        page: 1,
        sort_by: "english".into(),
        sort_direction: SortDirection::Asc,
    };

    let ascending = app.client.list_words(&query).await?;
    assert_eq!(ascending.items[0].english, "child");

    query.sort_direction = SortDirection::Desc;
    let descending = app.client.list_words(&query).await?;
    assert_eq!(descending.items[0].english, "water");
    Ok(())
}

#[tokio::test]
async fn word_details_include_stats_and_groups() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let word = app.client.get_word(&WordId(3)).await?;

    assert_eq!(word.portuguese, "pessoa");
    assert_eq!(word.kimbundu, "mutu");
    assert_eq!(word.stats.correct_count, 1);
    assert_eq!(word.stats.wrong_count, 1);
    let groups: Vec<_> = word.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(groups, vec!["Basics"]);
    Ok(())
}

#[tokio::test]
async fn unknown_word_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_word(&WordId(999)).await;

    match &result {
        Err(payloads::ClientError::APIError(_, message)) => {
            assert_eq!(message, "Word not found")
        }
        _ => panic!("Expected APIError"),
    }
    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn forced_failure_carries_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.faults.fail("/api/words", 500, "Database unavailable");

    let result = app.client.list_words(&PageQuery::default()).await;

    let Err(e) = &result else {
        panic!("Expected APIError");
    };
    assert_eq!(e.to_string(), "Database unavailable");
    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
