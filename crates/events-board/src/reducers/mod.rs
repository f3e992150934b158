pub mod app_reducer;
pub mod edit_form_reducer;
pub mod events_reducer;

pub use app_reducer::reduce;
