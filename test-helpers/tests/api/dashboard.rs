use payloads::{GroupId, StudySessionId};
use test_helpers::spawn_app;

#[tokio::test]
async fn dashboard_panels() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let last = app.client.last_study_session().await?;
    assert_eq!(last.id, Some(StudySessionId(3)));
    assert_eq!(last.group_id, Some(GroupId(1)));
    assert_eq!(last.correct_count, 2);
    assert_eq!(last.wrong_count, 1);

    let progress = app.client.study_progress().await?;
    assert_eq!(progress.total_words, 12);
    assert_eq!(progress.studied_words, 12);

    let stats = app.client.quick_stats().await?;
    assert_eq!(stats.total_study_sessions, 3);
    assert_eq!(stats.total_active_groups, 2);
    assert!((stats.success_rate - 13.0 * 100.0 / 15.0).abs() < 1e-9);

    let graph = app.client.performance_graph().await?;
    assert_eq!(graph.len(), 3);
    assert_eq!(graph[0].wrong_count, 1);
    Ok(())
}

#[tokio::test]
async fn full_reset_restores_seeded_data() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.client.reset_history().await?;
    assert_eq!(app.client.last_study_session().await?.id, None);

    let response = app.client.full_reset().await?;

    assert!(response.success);
    assert_eq!(app.data().sessions.len(), 3);
    let last = app.client.last_study_session().await?;
    assert_eq!(last.id, Some(StudySessionId(3)));
    Ok(())
}
