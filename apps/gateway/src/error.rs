use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::trace_ctx;

/// RFC 7807 problem document returned for every error response.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {detail}")]
    BadRequest { code: &'static str, detail: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("UnauthorizedInvalidSignature")]
    UnauthorizedInvalidSignature,
    #[error("UnauthorizedExpiredToken")]
    UnauthorizedExpiredToken,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Origin unavailable: {detail}")]
    OriginUnavailable { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for the response body.
    ///
    /// Both token-verification variants intentionally collapse to the
    /// generic `UNAUTHORIZED` code so the HTTP surface never reveals which
    /// check rejected the token.
    fn code(&self) -> String {
        match self {
            AppError::BadRequest { code, .. } => code.to_string(),
            AppError::Unauthorized
            | AppError::UnauthorizedInvalidSignature
            | AppError::UnauthorizedExpiredToken => "UNAUTHORIZED".to_string(),
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED".to_string(),
            AppError::Config { .. } => "CONFIG_ERROR".to_string(),
            AppError::OriginUnavailable { .. } => "ORIGIN_UNAVAILABLE".to_string(),
            AppError::Internal { .. } => "INTERNAL".to_string(),
        }
    }

    /// Detail string exposed to the caller. Server-side details (config,
    /// origin, internal failures) are replaced with generic text; the real
    /// detail is only logged.
    fn public_detail(&self) -> String {
        match self {
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Unauthorized
            | AppError::UnauthorizedInvalidSignature
            | AppError::UnauthorizedExpiredToken => "Invalid or expired access token".to_string(),
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::Config { .. } => "Server configuration error".to_string(),
            AppError::OriginUnavailable { .. } => "Content origin unavailable".to_string(),
            AppError::Internal { .. } => "Internal server error".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized
            | AppError::UnauthorizedInvalidSignature
            | AppError::UnauthorizedExpiredToken => StatusCode::UNAUTHORIZED,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::OriginUnavailable { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(code: &'static str, detail: String) -> Self {
        Self::BadRequest { code, detail }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn unauthorized_invalid_signature() -> Self {
        Self::UnauthorizedInvalidSignature
    }

    pub fn unauthorized_expired_token() -> Self {
        Self::UnauthorizedExpiredToken
    }

    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn origin_unavailable(detail: String) -> Self {
        Self::OriginUnavailable { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let trace_id = trace_ctx::trace_id();

        // The unredacted variant detail stays server-side.
        if status.is_server_error() {
            tracing::error!(error = %self, trace_id = %trace_id, "request failed");
        }

        let problem_details = ProblemDetails {
            type_: format!("https://hq.havefunwithaich.com/errors/{}", code.to_uppercase()),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail: self.public_detail(),
            code,
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}
