use payloads::{PageQuery, StudyActivityId};
use test_helpers::spawn_app;

#[tokio::test]
async fn activities_and_launch_data() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let activities = app.client.list_study_activities().await?;
    assert_eq!(activities.len(), 2);

    let activity = app.client.get_study_activity(&StudyActivityId(1)).await?;
    assert_eq!(activity.name, "Flashcards");

    let launch = app
        .client
        .get_study_activity_launch(&StudyActivityId(2))
        .await?;
    assert_eq!(launch.activity.name, "Typing Tutor");
    assert_eq!(launch.groups.len(), 3);
    Ok(())
}

#[tokio::test]
async fn sessions_of_an_activity() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let sessions = app
        .client
        .list_study_activity_sessions(&StudyActivityId(1), &PageQuery::default())
        .await?;

    let ids: Vec<_> = sessions.items.iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![2, 1]);
    Ok(())
}
