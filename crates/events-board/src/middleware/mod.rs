use crate::actions::Action;
use crate::state::AppState;

pub mod logging;

pub use logging::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware sees every dispatched action together with the state it is
/// about to be applied to. It must not perform I/O that feeds back into the
/// store; remote calls belong to the controller.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only)
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState) -> bool;
}
