//! Actions module
//!
//! Every state change in the application is described by an [`Action`].
//! Actions are tagged by domain:
//! - `Events`: changes to the visible and liked event lists
//! - `EditForm`: entering and leaving edit mode
//! - `Global`: application-wide actions the reducer does not own

pub mod edit_form;
pub mod events;
pub mod global;

pub use edit_form::EditFormAction;
pub use events::EventsAction;
pub use global::GlobalAction;

use events_client::{Event, EventId};

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Event list actions
    Events(EventsAction),
    /// Edit form actions
    EditForm(EditFormAction),
    /// Global application actions (observed by middleware, ignored by the reducer)
    Global(GlobalAction),
    /// No-op action
    None,
}

impl Action {
    pub fn set_events(events: Vec<Event>) -> Action {
        Action::Events(EventsAction::Set(events))
    }

    pub fn add_event(event: Event) -> Action {
        Action::Events(EventsAction::Add(event))
    }

    pub fn delete_event(id: EventId) -> Action {
        Action::Events(EventsAction::Delete(id))
    }

    pub fn like_event(event: Event) -> Action {
        Action::Events(EventsAction::Like(event))
    }

    pub fn filter_events(events: Vec<Event>) -> Action {
        Action::Events(EventsAction::Filter(events))
    }

    pub fn update_event(event: Event) -> Action {
        Action::Events(EventsAction::Update(event))
    }

    pub fn show_edit_form(event: Event) -> Action {
        Action::EditForm(EditFormAction::Show(event))
    }

    pub fn hide_edit_form() -> Action {
        Action::EditForm(EditFormAction::Hide)
    }

    /// Short name for logging, without the payload
    pub fn name(&self) -> &'static str {
        match self {
            Action::Events(EventsAction::Set(_)) => "SetEvents",
            Action::Events(EventsAction::Add(_)) => "AddEvent",
            Action::Events(EventsAction::Delete(_)) => "DeleteEvent",
            Action::Events(EventsAction::Like(_)) => "LikeEvent",
            Action::Events(EventsAction::Filter(_)) => "FilterEvents",
            Action::Events(EventsAction::Update(_)) => "UpdateEvent",
            Action::EditForm(EditFormAction::Show(_)) => "ShowEditForm",
            Action::EditForm(EditFormAction::Hide) => "HideEditForm",
            Action::Global(GlobalAction::Quit) => "Quit",
            Action::None => "None",
        }
    }
}
