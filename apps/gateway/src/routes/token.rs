use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::token::issue_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    pub rid: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Mint a capability token for one gated resource.
///
/// Read-style request only; the resource id comes from the `rid` query
/// parameter. Stateless: nothing is stored, an expired token is simply
/// reissued by calling again.
async fn issue(
    query: web::Query<TokenQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let token = issue_token(&query.rid, SystemTime::now(), &app_state.security)?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::method_not_allowed())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/token")
            .route(web::get().to(issue))
            .default_service(web::to(method_not_allowed)),
    );
}
