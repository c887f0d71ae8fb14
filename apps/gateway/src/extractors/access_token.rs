//! Verified capability token extractor.
//!
//! Mount this on any route that must not release gated bytes without a
//! valid token. The token is taken from `Authorization: Bearer <token>` or,
//! because media elements cannot set request headers, from a `token` query
//! parameter. Verification happens against the process-wide signing secret
//! before the handler runs.

use std::time::SystemTime;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::token::{verify_token, AccessClaims};
use crate::state::app_state::AppState;
use crate::AppError;

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub claims: AccessClaims,
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then(|| token.to_string())
}

// Tokens are base64url segments joined by '.', so no percent-decoding is
// needed here.
fn query_token(req: &HttpRequest) -> Option<String> {
    req.query_string()
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

impl FromRequest for AccessToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("application state not configured".to_string()))?;

            let token = bearer_token(&req)
                .or_else(|| query_token(&req))
                .ok_or_else(AppError::unauthorized)?;

            let claims = verify_token(&token, SystemTime::now(), &app_state.security)?;
            Ok(AccessToken { claims })
        })
    }
}
