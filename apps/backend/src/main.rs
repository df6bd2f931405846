use actix_web::{web, App, HttpServer};
use freecell_backend::middleware::cors::cors_middleware;
use freecell_backend::middleware::request_trace::RequestTrace;
use freecell_backend::routes;
use freecell_backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables are set by the runtime environment (container
    // env files, or sourced manually for local dev).
    let host = std::env::var("FREECELL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("FREECELL_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("FREECELL_PORT must be a valid port number");
            std::process::exit(1);
        });

    tracing::info!(host = %host, port, "starting FreeCell backend");

    let app_state = AppState::new();
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
