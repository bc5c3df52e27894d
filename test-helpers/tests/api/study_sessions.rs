use reqwest::StatusCode;

use payloads::{
    GroupId, PageQuery, StudyActivityId, StudySessionId, WordId, requests,
};
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn sessions_listed_newest_first() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let page = app.client.list_study_sessions(&PageQuery::default()).await?;

    let ids: Vec<_> = page.items.iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert_eq!(page.items[0].activity_name, "Typing Tutor");
    assert_eq!(page.items[0].review_items_count, 3);
    Ok(())
}

#[tokio::test]
async fn start_session_and_review_words() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let session = app
        .client
        .start_study_session(&requests::StartStudySession {
            study_activity_id: StudyActivityId(2),
            group_id: GroupId(2),
        })
        .await?;
    assert_eq!(session.id, StudySessionId(4));
    assert_eq!(session.group_name, "Nature");
    assert_eq!(session.review_items_count, 0);

    let review = app
        .client
        .record_word_review(
            &session.id,
            &WordId(8),
            &requests::ReviewWord { correct: false },
        )
        .await?;
    assert!(review.success);
    assert!(!review.correct);
    assert_eq!(review.study_session_id, session.id);

    let words = app
        .client
        .list_study_session_words(&session.id, &PageQuery::default())
        .await?;
    assert_eq!(words.items.len(), 1);
    assert_eq!(words.items[0].kimbundu, "kumbi");
    assert_eq!(words.items[0].wrong_count, 1);

    let session = app.client.get_study_session(&session.id).await?;
    assert_eq!(session.review_items_count, 1);
    Ok(())
}

#[tokio::test]
async fn start_session_for_unknown_group_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .start_study_session(&requests::StartStudySession {
            study_activity_id: StudyActivityId(1),
            group_id: GroupId(42),
        })
        .await;

    assert_status_code(result, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn continue_learning_lists_incomplete_sessions() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let sessions = app.client.continue_learning().await?;

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, StudySessionId(3));
    assert_eq!(sessions[0].review_items_count, 3);
    assert_eq!(sessions[0].total_words_count, 6);
    Ok(())
}

#[tokio::test]
async fn reset_history_keeps_words() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app.client.reset_history().await?;
    assert!(response.success);

    let sessions = app.client.list_study_sessions(&PageQuery::default()).await?;
    assert!(sessions.items.is_empty());
    let words = app.client.list_words(&PageQuery::default()).await?;
    assert_eq!(words.pagination.total, 12);
    assert!(words.items.iter().all(|w| w.correct_count == 0));
    Ok(())
}
