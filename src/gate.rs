//! Access Gate: the shared-password check in front of every protected view.
//!
//! This is a low-assurance convenience gate, not a security boundary. The
//! credential is a single shared string known at build time, the comparison
//! is a plain exact match, and there is no attempt counting, rate limiting or
//! lockout. Anyone who can read the shipped configuration can read the
//! password, and anyone who can write client storage can set the flag.

use thiserror::Error;

use crate::session::{SessionBackend, SessionStore};

/// The configured shared secret. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// The submitted secret did not match. Retryable; the caller clears its input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Invalid password. Please try again.")]
pub struct InvalidSecret;

/// Proof that an attempt succeeded and the flag was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unlocked;

#[derive(Clone, Debug)]
pub struct AccessGate<B> {
    credential: Credential,
    store: SessionStore<B>,
}

impl<B: SessionBackend> AccessGate<B> {
    pub fn new(credential: Credential, store: SessionStore<B>) -> Self {
        Self { credential, store }
    }

    /// Compare `secret` to the configured credential and persist the unlocked
    /// flag on a match.
    pub fn attempt(&self, secret: &str) -> Result<Unlocked, InvalidSecret> {
        if self.credential.matches(secret) {
            self.store.set_unlocked();
            tracing::info!("Gate unlocked");
            Ok(Unlocked)
        } else {
            tracing::warn!("Rejected gate attempt");
            Err(InvalidSecret)
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.store.load()
    }

    pub fn revoke(&self) {
        self.store.clear();
        tracing::info!("Gate session revoked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryBackend;

    fn gate() -> AccessGate<MemoryBackend> {
        AccessGate::new(
            Credential::new("open-sesame"),
            SessionStore::new(MemoryBackend::new()),
        )
    }

    #[test]
    fn near_misses_are_rejected() {
        let gate = gate();
        for secret in ["", "open-sesam", "Open-Sesame", "open-sesame ", " open-sesame"] {
            assert_eq!(gate.attempt(secret), Err(InvalidSecret));
        }
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn credential_debug_does_not_leak_secret() {
        let rendered = format!("{:?}", Credential::new("open-sesame"));
        assert!(!rendered.contains("open-sesame"));
    }

    #[test]
    fn wrong_secret_after_unlock_keeps_session() {
        let gate = gate();
        gate.attempt("open-sesame").unwrap();
        assert!(gate.attempt("wrong").is_err());
        assert!(gate.is_unlocked());
    }
}
