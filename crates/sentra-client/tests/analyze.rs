use std::time::Duration;

use sentra_client::{AnalysisClient, ClientConfig, Error, Polarity};
use sentra_testing::fixtures::{self, response_body};
use sentra_testing::{StubResponse, StubServer, closed_endpoint};

fn client_for(server: &StubServer) -> AnalysisClient {
    AnalysisClient::new(ClientConfig::new(server.endpoint())).unwrap()
}

#[tokio::test]
async fn test_success_returns_result_unchanged() -> anyhow::Result<()> {
    let expected = fixtures::positive_result();
    let server = StubServer::start(StubResponse::ok(response_body(&expected))).await?;

    let result = client_for(&server).analyze("i love this great day").await?;

    assert_eq!(result, expected);
    assert_eq!(result.polarity(), Polarity::Positive);
    Ok(())
}

#[tokio::test]
async fn test_posts_text_as_json_to_analyze_path() -> anyhow::Result<()> {
    let server =
        StubServer::start(StubResponse::ok(response_body(&fixtures::neutral_result()))).await?;

    client_for(&server).analyze("the a").await?;

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/analyze");
    assert_eq!(
        requests[0].content_type.as_deref(),
        Some("application/json")
    );
    assert_eq!(
        requests[0].json_body()?,
        serde_json::json!({ "text": "the a" })
    );
    Ok(())
}

#[tokio::test]
async fn test_blank_text_is_forwarded_as_is() -> anyhow::Result<()> {
    let server =
        StubServer::start(StubResponse::ok(response_body(&fixtures::neutral_result()))).await?;

    client_for(&server).analyze("   ").await?;

    assert_eq!(server.requests()[0].json_body()?["text"], "   ");
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_an_error() -> anyhow::Result<()> {
    let server =
        StubServer::start(StubResponse::json(500, r#"{"detail":"model not loaded"}"#)).await?;

    let err = client_for(&server).analyze("hello").await.unwrap_err();

    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("model not loaded"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_an_error() -> anyhow::Result<()> {
    let server = StubServer::start(StubResponse::ok(r#"{"score": "high"}"#)).await?;

    let err = client_for(&server).analyze("hello").await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "got {:?}", err);
    Ok(())
}

#[tokio::test]
async fn test_non_json_body_is_an_error() -> anyhow::Result<()> {
    let server = StubServer::start(StubResponse::ok("<html>oops</html>")).await?;

    let err = client_for(&server).analyze("hello").await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "got {:?}", err);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_service_is_an_error() -> anyhow::Result<()> {
    let endpoint = closed_endpoint().await?;
    let client = AnalysisClient::new(
        ClientConfig::new(endpoint).with_timeout(Duration::from_secs(5)),
    )?;

    let err = client.analyze("hello").await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
    Ok(())
}

#[tokio::test]
async fn test_client_is_reusable_across_calls() -> anyhow::Result<()> {
    let server =
        StubServer::start(StubResponse::ok(response_body(&fixtures::negative_result()))).await?;
    let client = client_for(&server);

    let first = client.analyze("bad and terrible").await?;
    let second = client.clone().analyze("bad and terrible").await?;

    assert_eq!(first, second);
    assert_eq!(server.request_count(), 2);
    Ok(())
}
