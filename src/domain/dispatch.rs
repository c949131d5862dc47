use crate::domain::catalog::HandlerRef;
use anyhow::Result;
use async_trait::async_trait;

/// The host side of a palette selection. Calls are fire-and-forget from the
/// palette's point of view: the palette has already closed when they run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Dispatcher: Send + Sync {
    // Switch the host to another view
    async fn navigate(&self, destination: &str) -> Result<()>;

    // Run a named side-effecting operation
    async fn invoke(&self, handler: &HandlerRef) -> Result<()>;
}
