//! Drives the Lambda-registered service with the requests the runtime
//! produces, without opening any socket.

use backend::app::build_router;
use backend::config::DEFAULT_SERVICE_NAME;
use backend::server::lambda_service;
use backend::{AppConfig, Mode};
use lambda_http::http::{Method, StatusCode};
use lambda_http::request::LambdaRequest;
use lambda_http::{Body, IntoResponse, Request};
use serde_json::{json, Value};
use tower::ServiceExt;

fn lambda_router() -> axum::Router {
    build_router(&AppConfig {
        mode: Mode::EventDriven,
        port: 8080,
        service_name: DEFAULT_SERVICE_NAME.to_string(),
    })
}

fn request(method: Method, path: &str) -> Request {
    lambda_http::http::Request::builder()
        .method(method)
        .uri(path)
        .body(Body::Empty)
        .unwrap()
}

/// API Gateway REST proxy event for `GET {path}` on the given stage.
fn rest_proxy_event(path: &str, stage: &str, query: Value) -> Value {
    json!({
        "resource": "/{proxy+}",
        "path": path,
        "httpMethod": "GET",
        "headers": {
            "Accept": "application/json",
            "Host": "abc.execute-api.us-east-1.amazonaws.com",
            "User-Agent": "curl/8.4.0",
            "X-Forwarded-Proto": "https"
        },
        "multiValueHeaders": {
            "Accept": ["application/json"],
            "Host": ["abc.execute-api.us-east-1.amazonaws.com"],
            "User-Agent": ["curl/8.4.0"],
            "X-Forwarded-Proto": ["https"]
        },
        "queryStringParameters": query,
        "multiValueQueryStringParameters": null,
        "pathParameters": { "proxy": path.trim_start_matches('/') },
        "stageVariables": null,
        "requestContext": {
            "accountId": "123456789012",
            "resourceId": "us4z18",
            "stage": stage,
            "requestId": "41b45ea3-70b5-11e6-b7bd-69b5aaebc7d9",
            "identity": {
                "sourceIp": "192.168.100.1",
                "userAgent": "curl/8.4.0"
            },
            "resourcePath": "/{proxy+}",
            "httpMethod": "GET",
            "apiId": "abc",
            "path": format!("/{}{}", stage, path),
            "protocol": "HTTP/1.1",
            "requestTime": "09/Apr/2015:12:34:56 +0000",
            "requestTimeEpoch": 1428582896000i64
        },
        "body": null,
        "isBase64Encoded": false
    })
}

fn from_event(event: Value) -> Request {
    let event: LambdaRequest = serde_json::from_value(event).unwrap();
    event.into()
}

/// Run one invocation and return the response as the runtime would encode it.
async fn invoke(req: Request) -> (StatusCode, Body) {
    let response = lambda_service(lambda_router()).oneshot(req).await.unwrap();
    let response = response.into_response().await;
    let status = response.status();
    (status, response.into_body())
}

fn text(body: Body) -> String {
    match body {
        Body::Text(text) => text,
        other => panic!("expected text body, got {:?}", other),
    }
}

#[tokio::test]
async fn health_invocation_returns_healthy() {
    let (status, body) = invoke(request(Method::GET, "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(body), r#"{"status":"healthy"}"#);
}

#[tokio::test]
async fn root_invocation_returns_running_message() {
    let (status, body) = invoke(request(Method::GET, "/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        text(body),
        r#"{"message":"MongoFlow Go Service is running","status":"ok"}"#
    );
}

#[tokio::test]
async fn invocation_body_is_ignored() {
    let req = lambda_http::http::Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::Text("unexpected payload".to_string()))
        .unwrap();

    let (status, body) = invoke(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(body), r#"{"status":"healthy"}"#);
}

#[tokio::test]
async fn unknown_path_invocation_is_not_found() {
    let (status, _) = invoke(request(Method::GET, "/nonexistent")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rest_event_on_named_stage_routes_health() {
    let req = from_event(rest_proxy_event("/health", "prod", Value::Null));
    assert!(req.uri().path().starts_with("/prod"));

    let (status, body) = invoke(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(body), r#"{"status":"healthy"}"#);
}

#[tokio::test]
async fn rest_event_on_named_stage_routes_root() {
    let req = from_event(rest_proxy_event("/", "prod", json!({ "verbose": "true" })));

    let (status, body) = invoke(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        text(body),
        r#"{"message":"MongoFlow Go Service is running","status":"ok"}"#
    );
}

#[tokio::test]
async fn rest_event_for_unknown_path_is_not_found() {
    let req = from_event(rest_proxy_event("/nonexistent", "prod", Value::Null));

    let (status, _) = invoke(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
