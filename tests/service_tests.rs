//! # Service Tests
//!
//! Salon and time-slot services over the recording transport: operation
//! mapping, body forwarding and error propagation without a backend.

use std::sync::Arc;

use paths::{Action, Method, Operation, Resource};
use salon_booking_client::transport::mock::{MockResponse, RecordingTransport};
use salon_booking_client::{ClientError, QueryParams, SalonApi};
use serde_json::json;

fn api() -> (SalonApi, RecordingTransport) {
    let transport = RecordingTransport::new();
    (SalonApi::with_transport(Arc::new(transport.clone())), transport)
}

#[tokio::test]
async fn test_create_salon_posts_body_and_returns_payload() {
    let (api, transport) = api();
    let created = json!({"id": 7, "name": "Lotus"});
    transport.push_response(MockResponse::status(201, created.to_string()));

    let payload = api
        .salons()
        .create_salon(&json!({"name": "Lotus"}))
        .await
        .unwrap();

    assert_eq!(payload, created);
    let request = transport.last_request().unwrap();
    assert_eq!(request.operation, Operation::Create(Resource::Salons));
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body, Some(json!({"name": "Lotus"})));
}

#[tokio::test]
async fn test_time_slot_filters_are_forwarded() {
    let (api, transport) = api();
    transport.push_response(MockResponse::json(&json!([])));

    let filters: QueryParams = [("salon", 3), ("day", 20)].into_iter().collect();
    api.time_slots().get_time_slots(&filters).await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.path, "/salons/timeslots/");
    assert_eq!(request.query.get("salon"), Some("3"));
    assert_eq!(request.query.get("day"), Some("20"));
}

#[tokio::test]
async fn test_range_actions_use_blocked_times_collection() {
    let (api, transport) = api();
    let range = json!({"start": "2026-10-20T09:00:00", "end": "2026-10-20T10:00:00"});

    api.time_slots().block_time_range(&range).await.unwrap();
    api.time_slots().unblock_time_range(&range).await.unwrap();

    let operations: Vec<Operation> = transport
        .requests()
        .into_iter()
        .map(|request| request.operation)
        .collect();
    assert_eq!(
        operations,
        [
            Operation::Action(Action::BlockTimeRange),
            Operation::Action(Action::UnblockTimeRange),
        ]
    );
    assert!(transport
        .requests()
        .iter()
        .all(|request| request.body.as_ref() == Some(&range)));
}

#[tokio::test]
async fn test_network_failure_propagates_unchanged() {
    let (api, transport) = api();
    transport.push_response(MockResponse::network_failure("connection refused"));

    let err = api.time_slots().unblock_time_slot(8).await.unwrap_err();

    match err {
        ClientError::NetworkFailure { method, path, .. } => {
            assert_eq!(method, Method::Post);
            assert_eq!(path, "/salons/timeslots/8/unblock_slot/");
        }
        other => panic!("expected NetworkFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_status_is_reported() {
    let (api, transport) = api();
    transport.push_response(MockResponse::status(500, "boom"));

    let err = api
        .time_slots()
        .block_time_slot(2, "holiday")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.kind(), "http");
}

#[tokio::test]
async fn test_unblock_after_empty_response_decodes_as_null() {
    let (api, transport) = api();
    transport.push_response(MockResponse::no_content());

    let payload = api.time_slots().unblock_time_slot(4).await.unwrap();

    assert!(payload.is_null());
}
