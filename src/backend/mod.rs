//! Collaborator seams for everything that crosses the process boundary:
//! the backend session endpoint and the ambient auth context.
//!
//! Both are injected capabilities. Nothing in the core reads credentials
//! or user identity from global storage; hosts hand in providers and tests
//! hand in stubs.

pub mod http;

use anyhow::Result;

use crate::models::{GameSession, StoredSession, User};

pub use http::HttpSessionBackend;

/// The backend session-creation endpoint.
#[allow(async_fn_in_trait)]
pub trait SessionBackend {
    /// Submits a finalized session and returns the stored record as the
    /// backend created it (id and server timestamps added).
    async fn create_session(&self, session: &GameSession) -> Result<StoredSession>;
}

/// Supplies the current bearer credential for outgoing requests.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Resolves the signed-in user. `None` blocks session finalization.
pub trait UserProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;
}

/// Fixed credential, mostly for tests and local tooling.
pub struct StaticCredential(pub String);

impl CredentialProvider for StaticCredential {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Fixed user, mostly for tests and local tooling.
pub struct StaticUser(pub Option<User>);

impl UserProvider for StaticUser {
    fn current_user(&self) -> Option<User> {
        self.0.clone()
    }
}
