//! Outbound requests to the internal content origin.
//!
//! Every request carries the trusted-caller credential header; the origin
//! locator is fixed at construction time. Responses are returned untouched
//! so route handlers can mirror status, headers and body to the public
//! caller.

use reqwest::header::RANGE;
use reqwest::Url;

use crate::config::origin::OriginConfig;
use crate::AppError;

/// Header identifying the edge as a trusted caller of the origin.
pub const ISSUE_KEY_HEADER: &str = "x-hfw-issue-key";

/// Content kind communicated to the origin via the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image,
    Video,
    Ad,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Image => "image",
            ContentKind::Video => "video",
            ContentKind::Ad => "ad",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OriginClient {
    http: reqwest::Client,
    config: OriginConfig,
}

impl OriginClient {
    pub fn new(config: OriginConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("failed to build origin client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Fetch a single content item by id and kind. For video, the inbound
    /// `Range` header is forwarded verbatim so the origin can answer with
    /// `206 Partial Content`.
    pub async fn fetch_content(
        &self,
        content_id: &str,
        kind: ContentKind,
        range: Option<&str>,
    ) -> Result<reqwest::Response, AppError> {
        let mut request = self
            .http
            .get(&self.config.base_url)
            .query(&[("content_id", content_id), ("type", kind.as_str())])
            .header(ISSUE_KEY_HEADER, &self.config.issue_key);

        if let Some(range) = range {
            request = request.header(RANGE, range);
        }

        request
            .send()
            .await
            .map_err(|e| AppError::origin_unavailable(e.to_string()))
    }

    /// Fetch a content listing, forwarding the inbound query string
    /// verbatim. The edge does not know the listing parameter schema.
    pub async fn fetch_list(&self, raw_query: &str) -> Result<reqwest::Response, AppError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| AppError::config(format!("invalid origin URL: {e}")))?;
        url.set_query((!raw_query.is_empty()).then_some(raw_query));

        self.http
            .get(url)
            .header(ISSUE_KEY_HEADER, &self.config.issue_key)
            .send()
            .await
            .map_err(|e| AppError::origin_unavailable(e.to_string()))
    }
}
