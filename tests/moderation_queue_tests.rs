//! Moderation queue behavior against a mocked backend.

use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sellerdesk::api::{ApiClient, StatusFilter};
use sellerdesk::moderation::{ModerationError, ModerationQueue};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), "test-token").unwrap()
}

fn request_json(id: u64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "requester": {"id": 7, "username": "mira"},
        "shopName": "Mira's Plants",
        "description": "Houseplants and pots",
        "address": "12 Fern Way",
        "sellerType": "individual",
        "bankName": "First Bank",
        "bankAccount": "0001112223",
        "idCardFront": "https://cdn.example/front.jpg",
        "idCardBack": "https://cdn.example/back.jpg",
        "status": status,
        "createdAt": "2026-05-01T09:30:00Z"
    })
}

fn page_json(rows: Vec<serde_json::Value>, total: u64) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "content": rows,
        "totalElements": total
    })
}

#[tokio::test]
async fn refresh_sends_the_configured_page_size_and_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seller-requests"))
        .and(query_param("page", "2"))
        .and(query_param("size", "5"))
        .and(query_param("status", "PENDING"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![request_json(42, "PENDING")], 11)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut queue = ModerationQueue::new(client(&server), 5);
    queue.set_filter(StatusFilter::Pending);
    queue.set_page(2);
    queue.refresh().await.unwrap();

    assert_eq!(queue.rows().len(), 1);
    assert_eq!(queue.total_elements(), 11);
    assert_eq!(queue.total_pages(), 3);
}

#[tokio::test]
async fn approve_puts_once_then_refreshes_with_the_same_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/seller-requests/42/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The post-decision refresh must reuse the page/filter the reviewer was
    // looking at.
    Mock::given(method("GET"))
        .and(path("/seller-requests"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .and(query_param("status", "PENDING"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![request_json(43, "PENDING")], 1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut queue = ModerationQueue::new(client(&server), 10);
    queue.set_filter(StatusFilter::Pending);
    queue.set_page(1);
    queue.approve(42).await.unwrap();

    assert_eq!(queue.rows().len(), 1);
    assert_eq!(queue.rows()[0].id, 43);
}

#[tokio::test]
async fn reject_with_empty_reason_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/seller-requests/42/reject"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(0)
        .mount(&server)
        .await;

    let mut queue = ModerationQueue::new(client(&server), 10);
    let err = queue.reject(42, "   ").await.unwrap_err();
    assert!(matches!(err, ModerationError::EmptyReason));
}

#[tokio::test]
async fn reject_sends_the_trimmed_reason_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/seller-requests/42/reject"))
        .and(body_json(serde_json::json!({"reason": "Blurry ID scan"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/seller-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .expect(1)
        .mount(&server)
        .await;

    let mut queue = ModerationQueue::new(client(&server), 10);
    queue.reject(42, "  Blurry ID scan  ").await.unwrap();
}

#[tokio::test]
async fn stale_decision_refreshes_and_surfaces_the_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/seller-requests/42/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "Request is no longer pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The queue re-fetches so the stale row shows its real status instead
    // of an actionable PENDING.
    Mock::given(method("GET"))
        .and(path("/seller-requests"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![request_json(42, "APPROVED")], 1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut queue = ModerationQueue::new(client(&server), 10);
    let err = queue.approve(42).await.unwrap_err();

    match err {
        ModerationError::Api(api_err) => {
            assert_eq!(api_err.user_message(), "Request is no longer pending");
        }
        other => panic!("expected business error, got {other:?}"),
    }
    assert_eq!(queue.rows()[0].status.to_string(), "APPROVED");
}

#[tokio::test]
async fn decisions_are_refused_for_rows_known_not_to_be_pending() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seller-requests"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![request_json(42, "APPROVED")], 1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/seller-requests/42/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(0)
        .mount(&server)
        .await;

    let mut queue = ModerationQueue::new(client(&server), 10);
    queue.refresh().await.unwrap();

    let err = queue.approve(42).await.unwrap_err();
    assert!(matches!(err, ModerationError::NotPending(42)));
}
