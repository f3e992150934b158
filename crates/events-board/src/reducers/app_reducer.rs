use crate::actions::Action;
use crate::reducers::{edit_form_reducer, events_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
///
/// This is the root reducer that routes tagged actions to sub-reducers.
/// Actions it does not own come back as the very same state.
pub fn reduce(state: AppState, action: &Action) -> AppState {
    match action {
        Action::Events(action) => events_reducer::reduce_events(state, action),
        Action::EditForm(action) => edit_form_reducer::reduce_edit_form(state, action),
        Action::Global(_) | Action::None => state,
    }
}
