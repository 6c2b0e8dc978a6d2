//! Anti-forgery tokens for the edit form.
//!
//! A token is issued while rendering the publish-box toggle and verified on
//! save. Verification is non-consuming: re-submitting the same form remains
//! valid until the token ages out, which is what makes repeated saves of an
//! unchanged form idempotent.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// Anti-forgery seam. Tokens are opaque strings bound to a namespace.
pub trait NonceProvider {
    /// Issue a fresh token bound to `namespace`.
    fn issue(&mut self, namespace: &str) -> String;

    /// Whether `token` was issued for `namespace` and has not expired.
    fn verify(&self, token: &str, namespace: &str) -> bool;
}

/// Session-scoped token table with an expiry window.
#[derive(Debug)]
pub struct SessionNonces {
    lifetime: Duration,
    issued: HashMap<String, IssuedNonce>,
}

#[derive(Debug)]
struct IssuedNonce {
    namespace: String,
    issued_at: DateTime<Utc>,
}

impl SessionNonces {
    /// Tokens stay valid for a day, matching the editorial-session horizon.
    pub fn new() -> Self {
        Self::with_lifetime(Duration::hours(24))
    }

    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            lifetime,
            issued: HashMap::new(),
        }
    }
}

impl Default for SessionNonces {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for SessionNonces {
    fn issue(&mut self, namespace: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.issued.insert(
            token.clone(),
            IssuedNonce {
                namespace: namespace.to_string(),
                issued_at: Utc::now(),
            },
        );
        token
    }

    fn verify(&self, token: &str, namespace: &str) -> bool {
        match self.issued.get(token) {
            Some(nonce) => {
                nonce.namespace == namespace && Utc::now() - nonce.issued_at <= self.lifetime
            }
            None => false,
        }
    }
}
