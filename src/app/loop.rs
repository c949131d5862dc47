use crate::app::{action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui};
use crate::domain::dispatch::Dispatcher;
use crate::infrastructure::host::HostDispatcher;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: AppState) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    // Dispatch results come back as actions
    let (action_tx, action_rx) = mpsc::channel(100);
    let dispatcher: Arc<dyn Dispatcher> = Arc::new(HostDispatcher::new(action_tx));

    run_loop_with_events(terminal, app_state, dispatcher, event_rx, action_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    dispatcher: Arc<dyn Dispatcher>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
    mut action_rx: mpsc::Receiver<Action>,
) -> Result<()> {
    let mut interval = interval(TICK_RATE);
    info!(view = %app_state.current_view, "event loop started");

    loop {
        // --- 1. Render ---
        terminal.draw(|f| ui::draw(f, &mut app_state))?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                None => {
                    debug!("input channel closed");
                    break;
                }
            },

            // Dispatch results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, dispatcher.clone());
            }
        }
    }

    info!("event loop stopped");
    Ok(())
}

/// Hands a palette selection to the dispatcher. The palette has already
/// closed, so failures are only logged.
pub(crate) fn handle_command(command: Command, dispatcher: Arc<dyn Dispatcher>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = match &command {
            Command::Navigate(destination) => dispatcher.navigate(destination).await,
            Command::Invoke(handler) => dispatcher.invoke(handler).await,
        };
        if let Err(e) = result {
            warn!(?command, error = %e, "dispatch failed");
        }
    })
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
