mod dashboard;
mod groups;
mod study_activities;
mod study_sessions;
mod words;

use payloads::api_client::ok_body;
use payloads::{APIClient, ClientError, Word};
use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> anyhow::Result<()> {
    // Grab a free port, then release it so nothing listens there.
    let port = std::net::TcpListener::bind("127.0.0.1:0")?
        .local_addr()?
        .port();
    let client = APIClient::new(format!("http://127.0.0.1:{port}"));

    let result = client.health_check().await;

    assert!(matches!(result, Err(ClientError::Network(_))));
    Ok(())
}

#[tokio::test]
async fn mismatched_body_is_a_decode_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // `/api/health` answers 200 with a body that is not a word.
    let response = app
        .client
        .inner_client
        .get(format!("{}/api/health", app.client.address))
        .send()
        .await?;
    let result = ok_body::<Word>(response).await;

    let error = match result {
        Err(e @ ClientError::Decode(_)) => e,
        other => panic!("expected a decode error, got {other:?}"),
    };
    let shown = error.to_string();
    assert!(shown.starts_with("Invalid response: "), "{shown}");
    assert!(shown.contains("missing field"), "{shown}");
    Ok(())
}
