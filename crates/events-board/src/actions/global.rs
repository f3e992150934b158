//! Global actions - not tied to the event list
//!
//! These actions affect the application as a whole.

/// Global actions that affect the entire application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    /// Quit the application
    Quit,
}
