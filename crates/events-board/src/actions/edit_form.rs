use events_client::Event;

/// Edit form actions
#[derive(Debug, Clone, PartialEq)]
pub enum EditFormAction {
    /// Enter edit mode for this event
    Show(Event),
    /// Leave edit mode, discarding any in-progress edit
    Hide,
}
