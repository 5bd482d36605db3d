use actix_web::{middleware::Logger, App, HttpServer};

use atstudio_backend::{
    config::{security::SecurityConfig, settings::Settings},
    middleware::{AccessPolicy, PathLogger},
    routes::configure_routes,
    utils::errors::ServerError,
};

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
        .init();
}

#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    init_logging();

    let settings = Settings::new()
        .inspect_err(|e| log::error!("Failed to load settings: {e}"))?;

    let security = SecurityConfig::permissive();
    log::log!(
        security.startup_log_level(&settings),
        "access policy permits every request (CSRF {:?}); do not expose this build publicly",
        security.csrf,
    );
    log::info!(
        "Starting atstudio backend on {}:{} ({})",
        settings.host,
        settings.server_port,
        settings.app_mode,
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(AccessPolicy::new(security))
            .wrap(PathLogger)
            .wrap(Logger::default())
            .configure(configure_routes)
    });

    if let Some(workers) = settings.workers {
        server = server.workers(workers);
    }

    server
        .bind((settings.host.as_str(), settings.server_port))?
        .run()
        .await?;

    Ok(())
}
