use actix_web::{http::header::ContentType, web, HttpResponse};

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}

/// GET and HEAD only; other methods get the resource's 405.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .route(web::head().to(health_check)),
    );
}
