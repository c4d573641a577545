//! End-to-end API tests over the in-memory stores

use authz_server::core::{Config, ServerState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    let state = ServerState::initialize(&Config::default())
        .await
        .expect("state");
    authz_server::api::router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_reports_seeded_counts() {
    let app = app().await;
    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["permissions"], 28);
    assert_eq!(body["roles"], 5);
}

#[tokio::test]
async fn create_permission_then_filter_by_module() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/permissions",
            json!({
                "name": "Export Users",
                "code": "user.export",
                "module": "User Management",
                "action": "export",
                "description": "Export user accounts"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json(response).await;
    assert_eq!(created["is_system"], false);
    assert_eq!(created["status"], "active");

    let response = app
        .oneshot(empty_request(
            "GET",
            "/api/permissions?module=User%20Management",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json(response).await;
    let codes: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["code"].as_str().unwrap())
        .collect();
    assert!(codes.contains(&"user.export"));
    assert!(codes.contains(&"user.create"));
    assert!(!codes.contains(&"employee.read"));
}

#[tokio::test]
async fn duplicate_permission_code_conflicts() {
    let app = app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/permissions",
            json!({
                "name": "Shadow Create User",
                "code": "user.create",
                "module": "User Management",
                "action": "create",
                "description": ""
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json(response).await;
    assert_eq!(body["code"], 4);
}

#[tokio::test]
async fn create_role_with_unknown_permission_is_rejected() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/roles",
            json!({
                "name": "Phantom",
                "code": "PHANTOM",
                "description": "",
                "permissions": ["employee.read", "ghost.permission"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert_eq!(body["details"]["permission"], "ghost.permission");

    // nothing was created
    let response = app
        .oneshot(empty_request("GET", "/api/roles/PHANTOM"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn system_role_cannot_be_deleted_or_stripped() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/roles/ADMIN"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(empty_request(
            "DELETE",
            "/api/roles/ADMIN/permissions/user.create",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn role_with_assigned_users_cannot_be_deleted() {
    let app = app().await;
    let response = app
        .oneshot(empty_request("DELETE", "/api/roles/HR_MGR"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json(response).await;
    assert_eq!(body["details"]["user_count"], 1);
}

#[tokio::test]
async fn referenced_permission_delete_conflicts_until_purged() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/permissions",
            json!({
                "name": "Export Employees",
                "code": "employee.export",
                "module": "Employee Management",
                "action": "export",
                "description": ""
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/roles",
            json!({
                "name": "Exporter",
                "code": "EXPORTER",
                "description": "",
                "permissions": ["employee.export"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/permissions/employee.export"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json(response).await;
    assert_eq!(body["details"]["roles"], json!(["EXPORTER"]));

    let response = app
        .clone()
        .oneshot(empty_request("POST", "/api/permissions/employee.export/purge"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["stripped_roles"], 1);

    let response = app
        .oneshot(empty_request(
            "GET",
            "/api/roles/EXPORTER/permissions/employee.export",
        ))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["granted"], false);
}

#[tokio::test]
async fn grant_and_revoke_are_idempotent_over_http() {
    let app = app().await;

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(empty_request(
                "POST",
                "/api/roles/VIEWER/permissions/report.generate",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/roles/VIEWER"))
        .await
        .unwrap();
    let body = read_json(response).await;
    let grants: Vec<&str> = body["permissions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();
    assert_eq!(
        grants.iter().filter(|p| **p == "report.generate").count(),
        1
    );

    // revoking something never granted succeeds without change
    let response = app
        .oneshot(empty_request(
            "DELETE",
            "/api/roles/VIEWER/permissions/system.backup",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn matrix_marks_grants_per_module() {
    let app = app().await;
    let response = app
        .oneshot(empty_request("GET", "/api/roles/DEPT_HEAD/matrix"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["total"], 28);
    assert_eq!(body["granted"], 6);
    let employee_module = body["modules"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["module"] == "Employee Management")
        .unwrap();
    let read_cell = employee_module["permissions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["code"] == "employee.read")
        .unwrap();
    assert_eq!(read_cell["granted"], true);
}

#[tokio::test]
async fn user_attachment_updates_counts_and_blocks_delete() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(empty_request("POST", "/api/roles/VIEWER/users"))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["user_count"], 1);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/roles/VIEWER"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/roles/VIEWER/users"))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["user_count"], 0);

    let response = app
        .oneshot(empty_request("DELETE", "/api/roles/VIEWER"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
