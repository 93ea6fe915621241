//! End-to-end HTTP tests.
//!
//! These tests require:
//! - A migrated `PostgreSQL` database (`crud-cli migrate`)
//! - A manager row matching `CUSTOMERS_MANAGER_LOGIN`/`CUSTOMERS_MANAGER_PASSWORD`
//! - The server running (`cargo run -p customer-crud-server`)

#![allow(clippy::unwrap_used)]

use customer_crud_integration_tests::{base_url, manager_authorization, unique_phone};
use reqwest::{Client, StatusCode, header};
use serde_json::{Value, json};

async fn create_customer(client: &Client, phone: &str, password: &str) -> Value {
    let resp = client
        .post(format!("{}/customers", base_url()))
        .header(header::AUTHORIZATION, manager_authorization())
        .json(&json!({"id": 0, "name": "Ann", "phone": phone, "password": password}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.unwrap()
}

async fn delete_customer(client: &Client, id: i64) {
    let _ = client
        .delete(format!("{}/customers/{id}", base_url()))
        .header(header::AUTHORIZATION, manager_authorization())
        .send()
        .await;
}

// ============================================================================
// Customer administration
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_create_then_get_customer() {
    let client = Client::new();
    let phone = unique_phone();

    let created = create_customer(&client, &phone, "secret").await;
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["active"], true);
    assert_eq!(created["phone"], phone.as_str());
    assert!(created.get("password").is_none());

    let resp = client
        .get(format!("{}/customers/{id}", base_url()))
        .header(header::AUTHORIZATION, manager_authorization())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);

    delete_customer(&client, id).await;
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_block_hides_customer_from_active_list() {
    let client = Client::new();
    let created = create_customer(&client, &unique_phone(), "secret").await;
    let id = created["id"].as_i64().unwrap();

    let resp = client
        .post(format!("{}/customers/block/{id}", base_url()))
        .header(header::AUTHORIZATION, manager_authorization())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let blocked: Value = resp.json().await.unwrap();
    assert_eq!(blocked["active"], false);

    let active: Vec<Value> = client
        .get(format!("{}/customers/active", base_url()))
        .header(header::AUTHORIZATION, manager_authorization())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(active.iter().all(|c| c["id"].as_i64() != Some(id)));

    let resp = client
        .post(format!("{}/customers/unblock/{id}", base_url()))
        .header(header::AUTHORIZATION, manager_authorization())
        .send()
        .await
        .unwrap();
    let unblocked: Value = resp.json().await.unwrap();
    assert_eq!(unblocked["active"], true);

    delete_customer(&client, id).await;
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_deleted_customer_is_not_found() {
    let client = Client::new();
    let created = create_customer(&client, &unique_phone(), "secret").await;
    let id = created["id"].as_i64().unwrap();

    let resp = client
        .delete(format!("{}/customers/{id}", base_url()))
        .header(header::AUTHORIZATION, manager_authorization())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/customers/{id}", base_url()))
        .header(header::AUTHORIZATION, manager_authorization())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_basic_auth_failures() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/customers", base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client
        .get(format!("{}/customers", base_url()))
        .basic_auth("admin", Some("definitely-wrong"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_non_numeric_id_is_bad_request() {
    let resp = Client::new()
        .get(format!("{}/customers/abc", base_url()))
        .header(header::AUTHORIZATION, manager_authorization())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Customer tokens
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_issue_and_validate_token() {
    let client = Client::new();
    let phone = unique_phone();
    let created = create_customer(&client, &phone, "secret").await;
    let id = created["id"].as_i64().unwrap();

    let resp = client
        .post(format!("{}/api/customers/token", base_url()))
        .json(&json!({"phone": phone, "password": "secret"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let issued: Value = resp.json().await.unwrap();
    let token = issued["token"].as_str().unwrap().to_string();
    assert_eq!(token.len(), 512);

    let resp = client
        .post(format!("{}/api/customers/token/validate", base_url()))
        .json(&json!({"token": token}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let validation: Value = resp.json().await.unwrap();
    assert_eq!(validation["statusCode"], "OK");
    assert_eq!(validation["info"]["status"], "ok");
    assert_eq!(validation["info"]["customerId"].as_i64(), Some(id));

    delete_customer(&client, id).await;
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_issue_token_failures() {
    let client = Client::new();
    let phone = unique_phone();
    let created = create_customer(&client, &phone, "secret").await;

    let resp = client
        .post(format!("{}/api/customers/token", base_url()))
        .json(&json!({"phone": phone, "password": "nope"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .post(format!("{}/api/customers/token", base_url()))
        .json(&json!({"phone": unique_phone(), "password": "secret"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    delete_customer(&client, created["id"].as_i64().unwrap()).await;
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_validate_unknown_token_is_structured_not_found() {
    let resp = Client::new()
        .post(format!("{}/api/customers/token/validate", base_url()))
        .json(&json!({"token": "0".repeat(512)}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let validation: Value = resp.json().await.unwrap();
    assert_eq!(
        validation,
        json!({"statusCode": "Not Found", "info": {"status": "fail", "reason": "notFound"}})
    );
}
