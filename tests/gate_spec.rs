use showcase_gate::gate::{AccessGate, Credential, InvalidSecret, Unlocked};
use showcase_gate::session::{MemoryBackend, SessionBackend, SessionStore, SESSION_KEY};
use speculate2::speculate;

const PASSWORD: &str = "ebhemh2026";

speculate! {
    before {
        let backend = MemoryBackend::new();
        let gate = AccessGate::new(
            Credential::new(PASSWORD),
            SessionStore::new(backend.clone()),
        );
    }

    describe "attempt" {
        it "rejects wrong secrets and stays locked" {
            for secret in ["wrong", "", "EBHEMH2026", "ebhemh2026\n", "ebhemh"] {
                assert_eq!(gate.attempt(secret), Err(InvalidSecret));
                assert!(!gate.is_unlocked());
            }
            assert!(backend.read(SESSION_KEY).unwrap().is_none());
        }

        it "accepts the configured secret and persists the flag" {
            assert_eq!(gate.attempt(PASSWORD), Ok(Unlocked));
            assert!(gate.is_unlocked());
            assert_eq!(backend.read(SESSION_KEY).unwrap().as_deref(), Some("true"));
        }

        it "can be retried after a rejection" {
            assert!(gate.attempt("wrong").is_err());
            assert!(gate.attempt(PASSWORD).is_ok());
            assert!(gate.is_unlocked());
        }

        it "has no lockout after many failures" {
            for _ in 0..100 {
                assert!(gate.attempt("guess").is_err());
            }
            assert!(gate.attempt(PASSWORD).is_ok());
        }
    }

    describe "is_unlocked" {
        it "is false for a fresh installation" {
            assert!(!gate.is_unlocked());
        }

        it "stays true across repeated loads until revoked" {
            gate.attempt(PASSWORD).unwrap();
            for _ in 0..5 {
                assert!(gate.is_unlocked());
            }
        }

        it "is shared by every gate over the same storage" {
            gate.attempt(PASSWORD).unwrap();
            let other = AccessGate::new(Credential::new(PASSWORD), SessionStore::new(backend.clone()));
            assert!(other.is_unlocked());
        }
    }

    describe "revoke" {
        it "locks the session again" {
            gate.attempt(PASSWORD).unwrap();
            gate.revoke();
            assert!(!gate.is_unlocked());
            assert!(backend.read(SESSION_KEY).unwrap().is_none());
        }

        it "is harmless when already locked" {
            gate.revoke();
            assert!(!gate.is_unlocked());
        }
    }

    describe "unavailable storage" {
        it "reports locked even after a correct secret" {
            let gate = AccessGate::new(
                Credential::new(PASSWORD),
                SessionStore::new(MemoryBackend::unavailable()),
            );
            assert!(gate.attempt(PASSWORD).is_ok());
            assert!(!gate.is_unlocked());
            gate.revoke();
        }
    }
}
