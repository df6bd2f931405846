use actix_web::web;

pub mod games;
pub mod health;

/// Configure application routes.
///
/// `main.rs` wires these into the HttpServer; tests register the same paths
/// through `test_support` so endpoint behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
