use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};

use hd_core::repositories::{UserDirectory, VerificationTokenStore};
use hd_shared::ErrorEnvelope;

use crate::event::{adapter, response};
use crate::routes::{AppState, Function};

/// Run the function named by the path
///
/// Every method reaches the function so it can answer preflights and apply
/// its own method list.
pub async fn dispatch<D, T>(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    state: web::Data<AppState<D, T>>,
) -> HttpResponse
where
    D: UserDirectory + 'static,
    T: VerificationTokenStore + 'static,
{
    let function = match Function::from_path(&path) {
        Some(function) => function,
        None => return not_found().await,
    };

    let event = adapter::event_from_http(&req, &body);
    let response = function.invoke(state.get_ref(), &event).await;
    adapter::into_http_response(response)
}

/// JSON 404 for unknown routes
pub async fn not_found() -> HttpResponse {
    adapter::into_http_response(response::error(
        StatusCode::NOT_FOUND,
        &ErrorEnvelope::new("Not found"),
    ))
}
