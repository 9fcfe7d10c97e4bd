use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use dashboard_admin::{
    app::{
        invoices::{InMemoryInvoiceStore, InvoiceService},
        users::{
            InMemoryUserStore, PasswordHasher, UpdateUserForm, UserError, UserForm, UserService,
            UserStore,
        },
    },
    infrastructure::config::{HashingConfig, HttpConfig},
    router, AppState,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

fn hasher() -> PasswordHasher {
    PasswordHasher::new(&HashingConfig {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}

fn user_service() -> (UserService, InMemoryUserStore) {
    let store = InMemoryUserStore::new();
    (UserService::new(Arc::new(store.clone()), hasher()), store)
}

fn form(name: &str, email: &str, password: &str, isadmin: Option<&str>) -> UserForm {
    UserForm {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        isadmin: isadmin.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_admin_user_end_to_end() {
    let (service, store) = user_service();

    let user = service
        .create_user(form("Ada", "ada@x.com", "secret1", Some("true")))
        .await
        .unwrap();

    assert_eq!(user.email, "ada@x.com");
    assert!(user.is_admin);
    assert_ne!(user.password_hash, "secret1");
    assert!(service.hasher().verify("secret1", &user.password_hash));

    let stored = store.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored, user);
}

#[tokio::test]
async fn test_invalid_create_reports_all_fields_without_store_call() {
    let (service, store) = user_service();

    let err = service
        .create_user(form("", "bad", "123", None))
        .await
        .unwrap_err();

    let errors = err.field_errors().unwrap();
    for field in ["name", "email", "password"] {
        assert!(errors.contains_key(field), "missing error for {field}");
    }
    assert_eq!(store.calls(), 0);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_flag_only_for_literal_true() {
    let (service, _store) = user_service();

    for (i, raw) in [Some("true"), Some("TRUE"), Some(""), Some("1"), Some("false"), None]
        .into_iter()
        .enumerate()
    {
        let user = service
            .create_user(form("User", &format!("user{i}@x.com"), "secret1", raw))
            .await
            .unwrap();
        assert_eq!(user.is_admin, raw == Some("true"), "isadmin {raw:?}");
    }
}

#[tokio::test]
async fn test_same_password_gets_distinct_hashes() {
    let (service, _store) = user_service();

    let a = service
        .create_user(form("A", "a@x.com", "secret1", None))
        .await
        .unwrap();
    let b = service
        .create_user(form("B", "b@x.com", "secret1", None))
        .await
        .unwrap();

    assert_ne!(a.password_hash, b.password_hash);
    assert!(service.hasher().verify("secret1", &a.password_hash));
    assert!(service.hasher().verify("secret1", &b.password_hash));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (service, store) = user_service();
    let user = service
        .create_user(form("Ada", "ada@x.com", "secret1", None))
        .await
        .unwrap();

    service.delete_user(user.id).await.unwrap();
    service.delete_user(user.id).await.unwrap();
    service.delete_user(Uuid::new_v4()).await.unwrap();

    assert!(store.find_by_id(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_changes_only_credentials() {
    let (service, _store) = user_service();
    let user = service
        .create_user(form("Ada", "ada@x.com", "secret1", Some("true")))
        .await
        .unwrap();

    let updated = service
        .update_user(
            user.id,
            UpdateUserForm {
                email: Some("lovelace@x.com".to_string()),
                password: Some("newpass".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "Ada");
    assert!(updated.is_admin);
    assert_eq!(updated.email, "lovelace@x.com");
    assert!(service.hasher().verify("newpass", &updated.password_hash));
    assert!(!service.hasher().verify("secret1", &updated.password_hash));

    let fetched = service.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_store_failure_collapses_to_generic_message() {
    let (service, store) = user_service();
    store.set_failing(true);

    let err = service
        .create_user(form("Ada", "ada@x.com", "secret1", None))
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::Persistence { .. }));
    assert_eq!(err.to_string(), "Failed to create user.");
    assert_eq!(store.calls(), 1);

    let err = service.list_users().await.unwrap_err();
    assert!(matches!(err, UserError::Persistence { .. }));
}

fn app() -> Router {
    let state = AppState {
        users: UserService::new(Arc::new(InMemoryUserStore::new()), hasher()),
        invoices: InvoiceService::new(Arc::new(InMemoryInvoiceStore::new())),
    };
    router(state, &HttpConfig::default())
}

fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_http_user_lifecycle() {
    let app = app();

    let (status, body) = send(
        &app,
        form_request(
            "POST",
            "/users",
            "name=Ada&email=ada%40x.com&password=secret1&isadmin=true",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully.");
    assert_eq!(body["data"]["isadmin"], true);
    assert!(body["data"].get("password_hash").is_none());
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, empty_request("GET", "/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        form_request(
            "PUT",
            &format!("/users/{id}"),
            "email=ada%40lovelace.dev&password=newpass",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "ada@lovelace.dev");
    assert_eq!(body["data"]["name"], "Ada");

    for _ in 0..2 {
        let (status, body) = send(&app, empty_request("DELETE", &format!("/users/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User deleted successfully.");
    }

    let (status, _) = send(&app, empty_request("GET", &format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_http_validation_errors() {
    let app = app();

    let (status, body) = send(
        &app,
        form_request("POST", "/users", "name=&email=bad&password=123"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing Fields. Failed to Create User.");
    for field in ["name", "email", "password"] {
        assert!(body["errors"][field].is_array(), "missing {field}");
    }

    let (status, body) = send(
        &app,
        form_request("PUT", &format!("/users/{}", Uuid::new_v4()), "email=a%40x.com"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "password is required.");

    let (status, body) = send(
        &app,
        form_request(
            "PUT",
            &format!("/users/{}", Uuid::new_v4()),
            "email=not-an-email&password=x",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing Fields. Failed to Update User.");
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());
}

#[tokio::test]
async fn test_http_invoice_flow() {
    let app = app();
    let customer = Uuid::new_v4();

    let (status, body) = send(
        &app,
        form_request(
            "POST",
            "/invoices",
            &format!("customerId={customer}&amount=42.5&status=pending"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["amount"], 4250);
    assert_eq!(body["data"]["status"], "pending");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        form_request("PUT", &format!("/invoices/{id}"), "amount=0&status=late"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing Fields. Failed to Update Invoice.");
    for field in ["customerId", "amount", "status"] {
        assert!(body["errors"][field].is_array(), "missing {field}");
    }

    let (status, _) = send(&app, empty_request("DELETE", &format!("/invoices/{id}"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, empty_request("GET", "/invoices")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_and_request_id() {
    let app = app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}
