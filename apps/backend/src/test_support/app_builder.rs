//! Test service builder: given an AppState, build an initialized Actix
//! test service on the production routes plus the trace middleware.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error as ActixError};

use crate::middleware::request_trace::RequestTrace;
use crate::routes;
use crate::state::app_state::AppState;

/// Build and initialize an Actix test service wired exactly like production
/// minus CORS (origin checks only get in the way of in-process requests).
pub async fn create_test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
