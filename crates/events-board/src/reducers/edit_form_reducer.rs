use crate::actions::EditFormAction;
use crate::state::AppState;

/// Reduce edit form state based on [`EditFormAction`]
pub fn reduce_edit_form(mut state: AppState, action: &EditFormAction) -> AppState {
    match action {
        EditFormAction::Show(event) => {
            log::debug!("Editing event {}", event.id);
            state.event_to_edit = Some(event.clone());
        }
        EditFormAction::Hide => {
            state.event_to_edit = None;
        }
    }
    state
}
