//! Presentation-only access gate.
//!
//! Decides whether a renderer shows full content or a teaser, from a
//! locally held identity the server never vouched for. This is NOT a
//! security boundary: gated bytes are protected at the proxy/origin layer,
//! and this gate must never influence which bytes were transmitted.

use serde::{Deserialize, Serialize};

/// Identity written at login and passed explicitly into the rendering
/// layer. Untrusted by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientIdentity {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub database_id: Option<i64>,
    /// Subscription marker set by the billing collaborator.
    #[serde(default)]
    pub my_stripe_id: Option<String>,
}

/// Numeric identifier granted full access regardless of subscription state.
pub const PRIVILEGED_DATABASE_ID: i64 = 1;

/// True iff an identity is present and carries a non-empty subscription
/// marker or the privileged identifier.
pub fn is_authorized(identity: Option<&ClientIdentity>) -> bool {
    let Some(identity) = identity else {
        return false;
    };
    let subscribed = identity
        .my_stripe_id
        .as_deref()
        .is_some_and(|id| !id.is_empty());
    subscribed || identity.database_id == Some(PRIVILEGED_DATABASE_ID)
}
