use crate::domain::catalog::HandlerRef;

/// Side effects the runtime hands to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(String),
    Invoke(HandlerRef),
}
