//! Single fetch façade for all content consumers.
//!
//! Every UI-side resource request goes through [`FetchClient::fetch_resource`],
//! which interprets the response by content type: binary media becomes an
//! owned [`MediaHandle`] whose lifetime belongs to the caller (acquire on
//! fetch, drop on unmount or replacement), anything else is parsed as JSON.
//! Failures degrade to `None` so callers fall back to teaser UI instead of
//! surfacing raw errors.

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::warn;

use crate::AppError;

/// Public marker identifying the site's own client. Not a secret and not
/// related to the edge's trusted-caller credential.
pub const CLIENT_MARKER_HEADER: &str = "x-hfw-client";
pub const CLIENT_MARKER: &str = "web";

/// What to fetch. Serialized as the JSON request body; absent fields are
/// omitted so the gateway sees exactly the fields that were set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ResourceDescriptor {
    pub fn for_content(content_id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            content_id: Some(content_id.into()),
            kind: Some(kind.into()),
        }
    }
}

/// An authorized binary resource held in memory on behalf of one consumer.
///
/// Dropping the handle releases the bytes; clone only if a second consumer
/// really needs its own copy of the lifetime.
#[derive(Debug, Clone)]
pub struct MediaHandle {
    content_type: String,
    bytes: Bytes,
}

impl MediaHandle {
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

#[derive(Debug)]
pub enum FetchedResource {
    /// Binary media (image/video), owned by the caller.
    Media(MediaHandle),
    /// Structured data for everything else.
    Data(serde_json::Value),
}

#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
}

impl FetchClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("failed to build fetch client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Request one resource. Independent and idempotent per call;
    /// overlapping calls for different resources do not interfere.
    pub async fn fetch_resource(
        &self,
        endpoint: &str,
        descriptor: &ResourceDescriptor,
    ) -> Option<FetchedResource> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));

        let response = match self
            .http
            .post(&url)
            .header(CLIENT_MARKER_HEADER, CLIENT_MARKER)
            .json(descriptor)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(endpoint = %endpoint, error = %e, "resource fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                endpoint = %endpoint,
                status = response.status().as_u16(),
                "resource fetch returned non-success status"
            );
            return None;
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with("image/") || content_type.starts_with("video/") {
            match response.bytes().await {
                Ok(bytes) => Some(FetchedResource::Media(MediaHandle {
                    content_type,
                    bytes,
                })),
                Err(e) => {
                    warn!(endpoint = %endpoint, error = %e, "failed to read media body");
                    None
                }
            }
        } else {
            match response.json::<serde_json::Value>().await {
                Ok(value) => Some(FetchedResource::Data(value)),
                Err(e) => {
                    warn!(endpoint = %endpoint, error = %e, "failed to parse response body");
                    None
                }
            }
        }
    }
}
