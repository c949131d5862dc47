use crate::app::action::Action;
use crate::domain::builtin::handlers;
use crate::domain::catalog::HandlerRef;
use crate::domain::dispatch::Dispatcher;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

/// Dispatcher for the terminal shell: effects come back into the event loop
/// as actions.
pub struct HostDispatcher {
    tx: mpsc::Sender<Action>,
}

impl HostDispatcher {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self { tx }
    }

    async fn send(&self, action: Action) -> Result<()> {
        self.tx
            .send(action)
            .await
            .map_err(|_| anyhow!("event loop has shut down"))
    }
}

#[async_trait]
impl Dispatcher for HostDispatcher {
    async fn navigate(&self, destination: &str) -> Result<()> {
        debug!(%destination, "navigate");
        self.send(Action::Navigated(destination.to_string())).await
    }

    async fn invoke(&self, handler: &HandlerRef) -> Result<()> {
        debug!(handler = %handler.0, "invoke");
        let action = match handler.0.as_str() {
            handlers::QUIT => Action::Quit,
            handlers::HELP => Action::ToggleHelp,
            handlers::THEME => Action::CycleTheme,
            _ => Action::HandlerInvoked(handler.clone()),
        };
        self.send(action).await
    }
}
