//! actix-web adapter
//!
//! Turns an HTTP request into a [`FunctionEvent`] and a
//! [`FunctionResponse`] back into an [`HttpResponse`].

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::collections::BTreeMap;

use hd_shared::{FunctionEvent, FunctionResponse};

/// Build an event from an HTTP request and its raw body
///
/// Bodies that are not valid UTF-8 are passed base64 encoded.
pub fn event_from_http(req: &HttpRequest, body: &web::Bytes) -> FunctionEvent {
    let headers: BTreeMap<String, String> = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();

    let query = if req.query_string().is_empty() {
        None
    } else {
        web::Query::<BTreeMap<String, String>>::from_query(req.query_string())
            .ok()
            .map(web::Query::into_inner)
    };

    let (body, is_base64_encoded) = if body.is_empty() {
        (None, false)
    } else {
        match std::str::from_utf8(body) {
            Ok(text) => (Some(text.to_string()), false),
            Err(_) => (Some(STANDARD.encode(body)), true),
        }
    };

    FunctionEvent {
        http_method: Some(req.method().as_str().to_string()),
        path: Some(req.path().to_string()),
        headers,
        query_string_parameters: query,
        body,
        is_base64_encoded,
    }
}

/// Convert a function response into an HTTP response
pub fn into_http_response(response: FunctionResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = HttpResponse::build(status);
    for (name, value) in &response.headers {
        builder.insert_header((name.as_str(), value.as_str()));
    }
    builder.body(response.body)
}
