use actix_web::{web, HttpResponse};

pub mod proxy;
pub mod token;

use crate::AppError;

async fn health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("ok"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .configure(token::configure_routes)
        .configure(proxy::configure_routes);
}
