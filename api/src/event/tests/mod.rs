use actix_web::test::TestRequest;
use actix_web::web::Bytes;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use serde_json::json;

use hd_shared::{FunctionEvent, FunctionResponse};

use super::adapter::{event_from_http, into_http_response};
use super::{NormalizedRequest, RequestBody};
use crate::handlers::error::ApiError;

#[derive(Debug, Deserialize)]
struct Credentials {
    #[serde(default)]
    email: Option<String>,
}

#[test]
fn test_method_is_defaulted_and_upper_cased() {
    let absent = NormalizedRequest::from_event(&FunctionEvent::default(), "POST");
    assert_eq!(absent.method, "POST");

    let lower = NormalizedRequest::from_event(&FunctionEvent::new("options"), "GET");
    assert_eq!(lower.method, "OPTIONS");
    assert!(lower.is_preflight());

    let blank = NormalizedRequest::from_event(&FunctionEvent::new("  "), "GET");
    assert_eq!(blank.method, "GET");
}

#[test]
fn test_body_variants() {
    let empty = NormalizedRequest::from_event(&FunctionEvent::new("POST").with_body(""), "POST");
    assert_eq!(empty.body, RequestBody::Empty);

    let null = NormalizedRequest::from_event(&FunctionEvent::new("POST").with_body("null"), "POST");
    assert_eq!(null.body, RequestBody::Empty);

    let broken = NormalizedRequest::from_event(&FunctionEvent::new("POST").with_body("{oops"), "POST");
    assert_eq!(broken.body, RequestBody::Malformed);

    let array = NormalizedRequest::from_event(&FunctionEvent::new("POST").with_body("[1,2]"), "POST");
    assert_eq!(array.body, RequestBody::Malformed);

    let object = NormalizedRequest::from_event(
        &FunctionEvent::new("POST").with_json(&json!({"email": "a@b.co"})),
        "POST",
    );
    assert!(matches!(object.body, RequestBody::Json(ref map) if map["email"] == "a@b.co"));
}

#[test]
fn test_base64_body_is_decoded() {
    let encoded = STANDARD.encode(r#"{"email":"test@example.com"}"#);
    let event = FunctionEvent::new("POST").with_body(encoded).base64_encoded(true);
    let request = NormalizedRequest::from_event(&event, "POST");

    let body: Credentials = request.parse_body().unwrap();
    assert_eq!(body.email.as_deref(), Some("test@example.com"));

    let garbage = FunctionEvent::new("POST").with_body("%%%").base64_encoded(true);
    assert_eq!(
        NormalizedRequest::from_event(&garbage, "POST").body,
        RequestBody::Malformed
    );
}

#[test]
fn test_parse_body() {
    let empty = NormalizedRequest::from_event(&FunctionEvent::new("POST"), "POST");
    let body: Credentials = empty.parse_body().unwrap();
    assert!(body.email.is_none());

    let broken = NormalizedRequest::from_event(&FunctionEvent::new("POST").with_body("{"), "POST");
    assert!(matches!(broken.parse_body::<Credentials>(), Err(ApiError::MalformedInput)));

    let wrong_type = NormalizedRequest::from_event(
        &FunctionEvent::new("POST").with_json(&json!({"email": 42})),
        "POST",
    );
    assert!(matches!(wrong_type.parse_body::<Credentials>(), Err(ApiError::MalformedInput)));
}

#[test]
fn test_query_params() {
    let event = FunctionEvent::new("GET")
        .with_query("username", "  alice ")
        .with_query("blank", "   ");
    let request = NormalizedRequest::from_event(&event, "GET");

    assert_eq!(request.query_param("username"), Some("alice"));
    assert_eq!(request.query_param("blank"), None);
    assert_eq!(request.query_param("missing"), None);

    let without = NormalizedRequest::from_event(&FunctionEvent::new("GET"), "GET");
    assert!(without.query.is_empty());
}

#[test]
fn test_event_from_http() {
    let req = TestRequest::post()
        .uri("/check-username?username=validuser1&x=1")
        .insert_header(("Content-Type", "application/json"))
        .to_http_request();
    let event = event_from_http(&req, &Bytes::from_static(br#"{"a":1}"#));

    assert_eq!(event.http_method.as_deref(), Some("POST"));
    assert_eq!(event.path.as_deref(), Some("/check-username"));
    assert_eq!(event.header("content-type"), Some("application/json"));
    let query = event.query_string_parameters.unwrap();
    assert_eq!(query.get("username").map(String::as_str), Some("validuser1"));
    assert_eq!(event.body.as_deref(), Some(r#"{"a":1}"#));
    assert!(!event.is_base64_encoded);
}

#[test]
fn test_event_from_http_binary_body() {
    let req = TestRequest::post().uri("/register").to_http_request();
    let event = event_from_http(&req, &Bytes::from_static(&[0xff, 0xfe, 0x00]));

    assert!(event.is_base64_encoded);
    assert!(event.query_string_parameters.is_none());
    assert_eq!(event.body.as_deref(), Some(STANDARD.encode([0xffu8, 0xfe, 0x00]).as_str()));
}

#[test]
fn test_into_http_response() {
    let mut response = FunctionResponse {
        status_code: 401,
        headers: Default::default(),
        body: String::from(r#"{"success":false}"#),
    };
    response
        .headers
        .insert(String::from("Access-Control-Allow-Origin"), String::from("*"));

    let http = into_http_response(response);
    assert_eq!(http.status().as_u16(), 401);
    assert_eq!(
        http.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
