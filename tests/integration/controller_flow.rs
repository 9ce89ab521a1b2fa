//! End-to-end flows: interaction controller driving the HTTP client

use crate::mock_server::{
    ssn_breach, unreachable_base_url, MockServerFixture, SSN_BREACH_QUERY, SSN_BREACH_RESPONSE,
};
use agentic_compliance::types::FALLBACK_ERROR_MESSAGE;
use agentic_compliance::{AnalysisClient, ControllerState, InteractionController, StateTag};

#[tokio::test]
async fn test_happy_path_ends_in_success() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_analyze(SSN_BREACH_QUERY, 200, SSN_BREACH_RESPONSE)
        .await;
    let controller = InteractionController::new(fixture.client());

    let pending = controller.submit_query(SSN_BREACH_QUERY).expect("request starts");
    assert!(controller.is_busy());
    pending.wait().await;

    mock.assert_async().await;
    assert_eq!(controller.state(), ControllerState::Success(ssn_breach()));
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_service_error_ends_in_failed_with_detail() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_analyze("Export data to Narnia", 400, r#"{"detail":"Unrecognized jurisdiction"}"#)
        .await;
    let controller = InteractionController::new(fixture.client());

    controller
        .submit_query("Export data to Narnia")
        .expect("request starts")
        .wait()
        .await;

    assert_eq!(controller.state_tag(), StateTag::Failed);
    assert_eq!(controller.error_message().as_deref(), Some("Unrecognized jurisdiction"));
    assert!(controller.result().is_none());
}

#[tokio::test]
async fn test_service_error_without_detail_ends_in_fallback() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_analyze("Export data to Narnia", 400, "{}").await;
    let controller = InteractionController::new(fixture.client());

    controller
        .submit_query("Export data to Narnia")
        .expect("request starts")
        .wait()
        .await;

    assert_eq!(controller.error_message().as_deref(), Some(FALLBACK_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_transport_failure_ends_in_failed() {
    let client = AnalysisClient::builder()
        .base_url(unreachable_base_url())
        .build()
        .expect("client builds");
    let controller = InteractionController::new(client);

    controller
        .submit_query(SSN_BREACH_QUERY)
        .expect("request starts")
        .wait()
        .await;

    assert_eq!(controller.state_tag(), StateTag::Failed);
    let message = controller.error_message().expect("message stored");
    assert!(!message.trim().is_empty());
}

#[tokio::test]
async fn test_blank_query_sends_nothing() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_analyze_never().await;
    let controller = InteractionController::new(fixture.client());

    assert!(controller.submit_query("   ").is_none());
    assert_eq!(controller.state_tag(), StateTag::Idle);
    assert_eq!(controller.snapshot(), controller.snapshot());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failure_then_success_replaces_state() {
    let fixture = MockServerFixture::new().await;
    let _bad = fixture
        .mock_analyze("first try", 422, r#"{"detail":"query too vague"}"#)
        .await;
    let _good = fixture
        .mock_analyze(SSN_BREACH_QUERY, 200, SSN_BREACH_RESPONSE)
        .await;
    let controller = InteractionController::new(fixture.client());

    controller.submit_query("first try").unwrap().wait().await;
    assert_eq!(controller.error_message().as_deref(), Some("query too vague"));

    controller.submit_query(SSN_BREACH_QUERY).unwrap().wait().await;
    assert_eq!(controller.state_tag(), StateTag::Success);
    assert!(controller.error_message().is_none());
    assert_eq!(controller.result(), Some(ssn_breach()));
}
