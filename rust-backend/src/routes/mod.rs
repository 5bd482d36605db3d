use actix_web::web;

pub mod health;

/// Registers every endpoint the service exposes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure).configure(test::configure);
}
