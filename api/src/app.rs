//! Application factory
//!
//! Builds the actix-web application serving the account functions under
//! `/{function}` plus `/health`.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use tracing_actix_web::TracingLogger;

use hd_core::repositories::{UserDirectory, VerificationTokenStore};

use crate::handlers::{dispatch, health_check, not_found};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<D, T>(
    app_state: web::Data<AppState<D, T>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    D: UserDirectory + 'static,
    T: VerificationTokenStore + 'static,
{
    let payload_limit = app_state.config.server.max_payload_size;

    App::new()
        .app_data(app_state)
        .app_data(web::PayloadConfig::new(payload_limit))
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // One route per function, all methods
        .route("/{function}", web::route().to(dispatch::<D, T>))
        .default_service(web::route().to(not_found))
}
