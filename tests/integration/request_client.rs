//! Request client against a mock service: success, service errors, decode and transport failures

use crate::mock_server::{
    ssn_breach, unreachable_base_url, MockServerFixture, SSN_BREACH_QUERY, SSN_BREACH_RESPONSE,
};
use agentic_compliance::types::FALLBACK_ERROR_MESSAGE;
use agentic_compliance::{AnalysisClient, Error, ErrorKind, RiskLevel};

#[tokio::test]
async fn test_success_returns_exact_payload() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_analyze(SSN_BREACH_QUERY, 200, SSN_BREACH_RESPONSE)
        .await;

    let resp = fixture
        .client()
        .submit_analysis(SSN_BREACH_QUERY)
        .await
        .expect("analysis succeeds");

    mock.assert_async().await;
    assert_eq!(resp, ssn_breach());
    assert_eq!(resp.analysis.risk_level, RiskLevel::High);
    assert!(resp.analysis.reasoning_map[0].regulation_version.is_none());
}

#[tokio::test]
async fn test_query_is_forwarded_untrimmed() {
    let fixture = MockServerFixture::new().await;
    let query = "  trailing and leading spaces \n";
    let mock = fixture.mock_analyze(query, 200, SSN_BREACH_RESPONSE).await;

    fixture.client().submit_analysis(query).await.expect("analysis succeeds");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_detail_is_surfaced() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_analyze("Ship to Atlantis", 400, r#"{"detail":"Unrecognized jurisdiction"}"#)
        .await;

    let err = fixture
        .client()
        .submit_analysis("Ship to Atlantis")
        .await
        .unwrap_err();

    match &err {
        Error::Service { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Unrecognized jurisdiction");
        }
        other => panic!("expected service error, got {other:?}"),
    }
    assert_eq!(err.user_message(), "Unrecognized jurisdiction");
}

#[tokio::test]
async fn test_service_error_without_detail_uses_fallback() {
    let cases = [
        (400, "application/json", "{}"),
        (500, "application/json", r#"{"detail":null}"#),
        (502, "text/html", "<html>Bad Gateway</html>"),
        (503, "text/plain", ""),
    ];
    for (status, content_type, body) in cases {
        let fixture = MockServerFixture::new().await;
        let _mock = fixture.mock_analyze_raw(status, content_type, body).await;

        let err = fixture.client().submit_analysis("anything").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Service, "status {status}");
        assert_eq!(err.status(), Some(status));
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE, "status {status}");
    }
}

#[tokio::test]
async fn test_unparseable_success_body_is_decode_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_analyze_raw(200, "text/html", "<html>maintenance</html>")
        .await;

    let err = fixture.client().submit_analysis("anything").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn test_wrong_shape_success_body_is_decode_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_analyze_raw(
            200,
            "application/json",
            r#"{"analysis":{"risk_level":"Catastrophic"},"decision":"MAYBE"}"#,
        )
        .await;

    let err = fixture.client().submit_analysis("anything").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let client = AnalysisClient::builder()
        .base_url(unreachable_base_url())
        .build()
        .expect("client builds");

    let err = client.submit_analysis(SSN_BREACH_QUERY).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(err, Error::Transport(ref e) if e.is_connect()));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn test_health_probe() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_health(200, r#"{"status":"ok","service":"compliance-agent"}"#)
        .await;

    let health = fixture.client().health().await.expect("health succeeds");
    assert!(health.is_ok());
    assert_eq!(health.service.as_deref(), Some("compliance-agent"));
}

#[tokio::test]
async fn test_health_probe_failure_maps_to_service_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_health(503, r#"{"detail":"warming up"}"#).await;

    let err = fixture.client().health().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.user_message(), "warming up");
}
