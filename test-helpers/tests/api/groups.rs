use payloads::{GroupId, PageQuery, SortDirection};
use test_helpers::spawn_app;

#[tokio::test]
async fn list_groups_sorted_by_size() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let page = app
        .client
        .list_groups(&PageQuery {
            page: 1,
            sort_by: "words_count".into(),
            sort_direction: SortDirection::Asc,
        })
        .await?;

    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.items[0].name, "Empty");
    assert_eq!(page.items[0].words_count, 0);
    Ok(())
}

#[tokio::test]
async fn group_details_and_words() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let group = app.client.get_group(&GroupId(2)).await?;
    assert_eq!(group.name, "Nature");
    assert_eq!(group.stats.total_words_count, 6);

    let words = app
        .client
        .list_group_words(&GroupId(2), &PageQuery::default())
        .await?;
    assert_eq!(words.items.len(), 6);
    assert!(words.items.iter().all(|w| w.id.0 >= 7));
    Ok(())
}

#[tokio::test]
async fn empty_group_reports_zero_pages() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let words = app
        .client
        .list_group_words(&GroupId(3), &PageQuery::default())
        .await?;

    assert!(words.items.is_empty());
    assert_eq!(words.pagination.total_pages, 0);
    assert_eq!(words.pagination.normalized().total_pages, 1);
    Ok(())
}

#[tokio::test]
async fn group_study_sessions_ignore_sort() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let sessions = app
        .client
        .list_group_study_sessions(
            &GroupId(1),
            &PageQuery {
                page: 1,
                sort_by: "id".into(),
                sort_direction: SortDirection::Desc,
            },
        )
        .await?;

    let ids: Vec<_> = sessions.items.iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(sessions.items.iter().all(|s| s.group_name == "Basics"));
    Ok(())
}
