//! HTTP Gateway Integration Tests
//!
//! Runs `HttpGateway` and the view-model against a mock REST server.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use todo_sync::{
    CollectionState, CollectionViewModel, CompletionPatch, Draft, GatewayConfig, GatewayError,
    HttpGateway, Item, ItemId, RemoteGateway, StateCell,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> HttpGateway {
    HttpGateway::new(GatewayConfig::new(server.uri(), "todos")).expect("valid config")
}

#[tokio::test]
async fn test_list_gets_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "A", "description": "d", "completed": false},
            {"id": 2, "title": "B", "description": "e", "completed": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let items = gateway_for(&server).list().await.expect("list");

    assert_eq!(items, vec![Item::new(1, "A", "d"), Item::new(2, "B", "e").with_completed(true)]);
}

#[tokio::test]
async fn test_create_posts_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(body_json(json!({"title": "A", "description": "d"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": 5, "title": "A", "description": "d"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = gateway_for(&server).create(&Draft::new("A", "d")).await.expect("create");

    assert_eq!(created, Item::new(5, "A", "d"));
}

#[tokio::test]
async fn test_replace_puts_to_item_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/todos/5"))
        .and(body_json(json!({"title": "A2", "description": "d2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": 5, "title": "A2", "description": "d2", "completed": true}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let updated = gateway_for(&server)
        .replace(ItemId(5), &Draft::new("A2", "d2"))
        .await
        .expect("replace");

    assert_eq!(updated, Item::new(5, "A2", "d2").with_completed(true));
}

#[tokio::test]
async fn test_patch_sends_only_completed() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/todos/1"))
        .and(body_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": 1, "title": "A", "description": "d", "completed": true}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let patched = gateway_for(&server)
        .patch(ItemId(1), CompletionPatch { completed: true })
        .await
        .expect("patch");

    assert!(patched.completed);
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    gateway_for(&server).delete(ItemId(1)).await.expect("delete");
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = gateway_for(&server).delete(ItemId(9)).await.unwrap_err();

    match err {
        GatewayError::Status { method, status, .. } => {
            assert_eq!(method, "DELETE");
            assert_eq!(status, 404);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = gateway_for(&server).list().await.unwrap_err();

    assert!(matches!(err, GatewayError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let gateway = HttpGateway::new(GatewayConfig::new("http://127.0.0.1:9", "todos"))
        .expect("valid config");

    let err = gateway.list().await.unwrap_err();

    assert!(matches!(err, GatewayError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_view_model_toggle_scenario_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "A", "description": "d", "completed": false}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/todos/1"))
        .and(body_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": 1, "title": "A", "description": "d", "completed": true}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let state = Rc::new(RefCell::new(CollectionState::default()));
    let vm = CollectionViewModel::new(gateway_for(&server), state);
    vm.load().await;
    vm.toggle_completion(ItemId(1)).await;

    let (active, completed) = vm.columns();
    assert!(active.is_empty());
    assert_eq!(completed, vec![Item::new(1, "A", "d").with_completed(true)]);
}

#[tokio::test]
async fn test_view_model_swallows_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "A", "description": "d", "completed": false}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let state = Rc::new(RefCell::new(CollectionState::default()));
    let vm = CollectionViewModel::new(gateway_for(&server), state);
    vm.load().await;
    let draft = Draft::new("B", "e");
    vm.update_draft(draft.clone());
    vm.submit(draft.clone()).await;

    assert_eq!(vm.state().read(|s| s.items().to_vec()), vec![Item::new(1, "A", "d")]);
    assert_eq!(vm.state().read(|s| s.draft().clone()), draft);
}
