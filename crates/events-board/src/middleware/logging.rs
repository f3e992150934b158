use crate::actions::Action;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState) -> bool {
        log::debug!(
            "Action: {} ({} events, {} liked)",
            action.name(),
            state.events.len(),
            state.liked_events.len()
        );
        log::trace!("Action payload: {:?}", action);

        true // Always pass action through
    }
}
