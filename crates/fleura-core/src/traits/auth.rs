//! External authentication service boundary.
//!
//! Session handling lives outside this system; the catalog only needs the
//! outcome of a logout request to relay to the admin UI.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of a logout request against the external auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResult {
    /// Whether the session was terminated.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
}

/// Boundary trait for the external authentication collaborator.
#[async_trait]
pub trait AuthProvider: Send + Sync + 'static {
    /// Terminate the current session.
    async fn logout(&self) -> LogoutResult;
}
