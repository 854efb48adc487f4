//! Credential checking.
//!
//! The contract is "given credentials, return success or failure plus a
//! session token": a pluggable capability, not a comparison buried in a
//! screen handler. `StaticCredentials` covers the demo deployment; a real
//! identity backend would implement the same trait.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::{SessionState, SessionStore};
use crate::validation::{validate_login, ValidationReport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: Uuid,
    pub email: String,
    pub issued_at: DateTime<Utc>,
}

pub trait CredentialVerifier {
    /// Returns a fresh session on success, `None` on rejection.
    fn verify(&self, email: &str, password: &str) -> Option<AuthSession>;
}

/// Verifier over an injected list of known email/password pairs.
pub struct StaticCredentials {
    pairs: Vec<(String, String)>,
}

impl StaticCredentials {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        StaticCredentials { pairs }
    }

    /// The two demo accounts the builder UI ships with.
    pub fn demo() -> Self {
        StaticCredentials::new(vec![
            ("demo@resumade.com".to_string(), "password123".to_string()),
            ("user@example.com".to_string(), "demo123".to_string()),
        ])
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> Option<AuthSession> {
        let known = self
            .pairs
            .iter()
            .any(|(e, p)| e == email && p == password);
        known.then(|| AuthSession {
            token: Uuid::new_v4(),
            email: email.to_string(),
            issued_at: Utc::now(),
        })
    }
}

#[derive(Debug)]
pub enum LoginOutcome {
    /// Credentials accepted; the session flag was written to the store.
    Success(AuthSession),
    /// The form itself was malformed; nothing was checked.
    Invalid(ValidationReport),
    /// Well-formed but unknown credentials.
    Rejected,
}

/// Runs a login attempt end to end: form validation, credential check,
/// session write.
pub fn login(
    verifier: &dyn CredentialVerifier,
    sessions: &dyn SessionStore,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, AppError> {
    let report = validate_login(email, password);
    if !report.is_empty() {
        return Ok(LoginOutcome::Invalid(report));
    }

    match verifier.verify(email, password) {
        Some(session) => {
            sessions.set_session(&SessionState {
                authenticated: true,
                email: session.email.clone(),
            })?;
            info!(email = %session.email, "login succeeded");
            Ok(LoginOutcome::Success(session))
        }
        None => {
            warn!(email, "login rejected");
            Ok(LoginOutcome::Rejected)
        }
    }
}
