//! Bridge to the external authentication collaborator.

use async_trait::async_trait;
use tracing::info;

use fleura_core::traits::{AuthProvider, LogoutResult};

/// Auth provider for deployments where sessions live entirely in the
/// upstream identity service; logout is acknowledged locally and the
/// upstream cookie is cleared by the edge.
#[derive(Debug, Clone, Default)]
pub struct UpstreamAuthProvider;

#[async_trait]
impl AuthProvider for UpstreamAuthProvider {
    async fn logout(&self) -> LogoutResult {
        info!("Logout acknowledged");
        LogoutResult {
            success: true,
            message: "Signed out".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logout_reports_success() {
        let provider = UpstreamAuthProvider;
        let result = provider.logout().await;
        assert!(result.success);
        assert!(!result.message.is_empty());
    }
}
