/// Token-signing configuration.
///
/// Process-wide, read-only after startup. The secret is shared between the
/// token issuer and whichever component verifies tokens before releasing
/// gated content.
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC-SHA256 key used to sign and verify capability tokens.
    pub gate_secret: Vec<u8>,
}

impl SecurityConfig {
    pub fn new(gate_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            gate_secret: gate_secret.into(),
        }
    }
}

// Keeps the signing secret out of debug output and logs.
impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("gate_secret", &"[redacted]")
            .finish()
    }
}
