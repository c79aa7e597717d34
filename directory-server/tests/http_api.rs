use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use directory_server::auth::{JwtConfig, JwtService};
use directory_server::{Config, ServerState, api};
use shared::Role;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &str = "http-api-test-secret";

fn app() -> Router {
    let state = ServerState::initialize(&Config::with_overrides(0, SECRET))
        .expect("Failed to initialize state");
    api::router(state)
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn graphql(query: &str, variables: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = json!({ "query": query, "variables": variables });
    builder.body(Body::from(body.to_string())).unwrap()
}

const LOGIN: &str = r#"
    mutation($u: String!, $p: String!) {
        login(username: $u, password: $p) { id role token }
    }
"#;

async fn login(app: &Router, username: &str, password: &str) -> String {
    let resp = app
        .clone()
        .oneshot(graphql(LOGIN, json!({ "u": username, "p": password }), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    body["data"]["login"]["token"]
        .as_str()
        .expect("login should return a token")
        .to_string()
}

#[tokio::test]
async fn test_health() {
    let resp = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["employees"], 10);
}

#[tokio::test]
async fn test_sandbox_page() {
    let resp = app()
        .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("EmbeddedSandbox"));
}

#[tokio::test]
async fn test_admin_token_allows_mutation() {
    let app = app();
    let token = login(&app, "admin", "admin123").await;

    let resp = app
        .clone()
        .oneshot(graphql(
            r#"mutation { addEmployee(name: "Meena", age: 24, class: "B") { id name flagged } }"#,
            json!({}),
            Some(&token),
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
    assert_eq!(body["data"]["addEmployee"]["id"], "11");
    assert_eq!(body["data"]["addEmployee"]["flagged"], false);
}

#[tokio::test]
async fn test_employee_token_is_rejected_with_code() {
    let app = app();
    let token = login(&app, "employee", "employee123").await;

    let resp = app
        .clone()
        .oneshot(graphql(
            r#"mutation { flagEmployee(id: "1") { id flagged } }"#,
            json!({}),
            Some(&token),
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["errors"][0]["message"], "Unauthorized");
    assert_eq!(body["errors"][0]["extensions"]["code"], 2001);

    let check = app
        .oneshot(graphql(r#"{ employee(id: "1") { flagged } }"#, json!({}), None))
        .await
        .unwrap();
    let body = body_json(check).await;
    assert_eq!(body["data"]["employee"]["flagged"], false);
}

#[tokio::test]
async fn test_invalid_token_is_treated_as_anonymous() {
    let app = app();

    let query = app
        .clone()
        .oneshot(graphql(
            "{ employees(limit: 1) { id } }",
            json!({}),
            Some("not-a-real-token"),
        ))
        .await
        .unwrap();
    let body = body_json(query).await;
    assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
    assert_eq!(body["data"]["employees"][0]["id"], "1");

    let mutation = app
        .oneshot(graphql(
            r#"mutation { deleteEmployee(id: "1") { id } }"#,
            json!({}),
            Some("not-a-real-token"),
        ))
        .await
        .unwrap();
    let body = body_json(mutation).await;
    assert_eq!(body["errors"][0]["message"], "Unauthorized");
}

#[tokio::test]
async fn test_expired_and_foreign_tokens_are_treated_as_anonymous() {
    let app = app();

    let expired = JwtService::with_config(JwtConfig {
        secret: SECRET.to_string(),
        expiration_minutes: -5,
    })
    .generate_token("1", Role::Admin)
    .unwrap();
    let foreign = JwtService::with_config(JwtConfig::with_secret("not-the-server-secret"))
        .generate_token("1", Role::Admin)
        .unwrap();

    for token in [expired, foreign] {
        let query = app
            .clone()
            .oneshot(graphql("{ employees(limit: 2) { id } }", json!({}), Some(&token)))
            .await
            .unwrap();
        let body = body_json(query).await;
        assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
        assert_eq!(body["data"]["employees"][1]["id"], "2");

        let mutation = app
            .clone()
            .oneshot(graphql(
                r#"mutation { deleteEmployee(id: "2") { id } }"#,
                json!({}),
                Some(&token),
            ))
            .await
            .unwrap();
        let body = body_json(mutation).await;
        assert_eq!(body["errors"][0]["message"], "Unauthorized");
        assert_eq!(body["errors"][0]["extensions"]["code"], 2001);
    }

    let health = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(health).await["employees"], 10);
}

#[tokio::test]
async fn test_wrong_password_returns_error() {
    let resp = app()
        .oneshot(graphql(
            LOGIN,
            json!({ "u": "employee", "p": "nope" }),
            None,
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["errors"][0]["message"], "Invalid credentials");
    assert_eq!(body["errors"][0]["extensions"]["code"], 1002);
}

#[tokio::test]
async fn test_cors_preflight() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/graphql")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
