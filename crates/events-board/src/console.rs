//! Line-oriented front end
//!
//! Renders the controller's state as text and turns input lines into
//! controller calls. The board starts on a welcome screen; `join` switches
//! to the main view (the event list, or the edit form while editing).

use crate::actions::{Action, GlobalAction};
use crate::commands::{self, Command, HELP_TEXT};
use crate::controller::EventsController;
use events_client::{Event, EventFilter};
use std::io::Write;

/// Which screen is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Welcome,
    Main,
}

/// Whether the input loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<W: Write> {
    controller: EventsController,
    screen: Screen,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(controller: EventsController, out: W) -> Self {
        Self {
            controller,
            screen: Screen::default(),
            out,
        }
    }

    pub fn controller(&self) -> &EventsController {
        &self.controller
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Kick off the initial load and show the welcome screen
    pub async fn start(&mut self) -> std::io::Result<()> {
        // Failure is recorded in the load status and rendered by the main view.
        let _ = self.controller.load().await;
        self.render()
    }

    /// Handle one line of input
    pub async fn handle_line(&mut self, line: &str) -> std::io::Result<Flow> {
        let command = match commands::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Quit => {
                self.controller.dispatch(Action::Global(GlobalAction::Quit));
                return Ok(Flow::Quit);
            }
            Command::Help => {
                writeln!(self.out, "{}", HELP_TEXT)?;
                return Ok(Flow::Continue);
            }
            Command::Join => {
                self.screen = Screen::Main;
            }
            _ if self.screen == Screen::Welcome => {
                writeln!(self.out, "Type `join` to see the events.")?;
                return Ok(Flow::Continue);
            }
            other => self.execute(other).await?,
        }

        self.render()?;
        Ok(Flow::Continue)
    }

    /// Run a main-view command
    ///
    /// Remote failures are already logged by the controller and are not
    /// shown here; only the initial load reports errors on screen.
    async fn execute(&mut self, command: Command) -> std::io::Result<()> {
        match command {
            Command::List => {
                let _ = self.controller.refresh().await;
            }
            Command::Add(new_event) => {
                let _ = self.controller.add_event(new_event).await;
            }
            Command::Delete(id) => {
                let _ = self.controller.delete_event(id).await;
            }
            Command::Like(id) => match self.controller.state().find_event(id).cloned() {
                Some(event) => self.controller.like_event(event),
                None => writeln!(self.out, "No event {} in the list.", id)?,
            },
            Command::Filter(filter) => {
                log::info!("Filtering by {}", describe_filter(&filter));
                let _ = self.controller.filter_events(&filter).await;
            }
            Command::Edit(id) => match self.controller.state().find_event(id).cloned() {
                Some(event) => self.controller.edit_event(event),
                None => writeln!(self.out, "No event {} in the list.", id)?,
            },
            Command::Update(patch) => match self.controller.state().event_to_edit.clone() {
                Some(editing) => {
                    let _ = self.controller.update_event(patch.apply(&editing)).await;
                }
                None => writeln!(self.out, "Nothing is being edited; use `edit <id>` first.")?,
            },
            Command::Cancel => self.controller.cancel_edit(),
            Command::Join | Command::Help | Command::Quit => {}
        }
        Ok(())
    }

    fn render(&mut self) -> std::io::Result<()> {
        match self.screen {
            Screen::Welcome => {
                writeln!(self.out, "Welcome to the event board!")?;
                writeln!(self.out, "Type `join` to enter, `help` for commands.")?;
            }
            Screen::Main => self.render_main()?,
        }
        self.out.flush()
    }

    fn render_main(&mut self) -> std::io::Result<()> {
        let status = self.controller.load_status();
        if status.is_loading() {
            return writeln!(self.out, "Loading events...");
        }
        if let Some(message) = status.error() {
            return writeln!(self.out, "{}", message);
        }

        let state = self.controller.state();
        if let Some(event) = &state.event_to_edit {
            writeln!(self.out, "Editing event:")?;
            writeln!(self.out, "  {}", format_event(event))?;
            return writeln!(self.out, "Use `update field=value | ...` to save or `cancel`.");
        }

        writeln!(self.out, "Events ({}):", state.events.len())?;
        if state.events.is_empty() {
            writeln!(self.out, "  (none)")?;
        }
        for event in state.events.iter() {
            writeln!(self.out, "  {}", format_event(event))?;
        }
        Ok(())
    }
}

/// One-line rendering of an event
pub fn format_event(event: &Event) -> String {
    format!(
        "[{}] {} {}  {} @ {} ({})  ${:.2}",
        event.id,
        event.date,
        event.time,
        event.band.name,
        event.venue.name,
        event.venue.address,
        event.ticket_price
    )
}

/// Describe a filter for the log
pub fn describe_filter(filter: &EventFilter) -> String {
    if filter.liked {
        return "liked".to_string();
    }
    if filter.is_empty() {
        return "no criteria".to_string();
    }
    filter
        .query_pairs()
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{LoadStatus, LOAD_ERROR_MESSAGE};
    use crate::store::Store;
    use crate::test_support::{event, MockClient};
    use events_client::EventId;
    use std::sync::Arc;

    async fn started(client: &MockClient) -> Console<Vec<u8>> {
        let controller = EventsController::new(Arc::new(client.clone()), Store::default());
        let mut console = Console::new(controller, Vec::new());
        console.start().await.unwrap();
        console
    }

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_welcome_gate() {
        let client = MockClient::new(vec![event(1)]);
        let mut console = started(&client).await;

        console.handle_line("delete 1").await.unwrap();
        assert_eq!(console.screen(), Screen::Welcome);
        assert_eq!(console.controller().state().events.len(), 1);

        console.handle_line("join").await.unwrap();
        assert_eq!(console.screen(), Screen::Main);

        let text = output(console);
        assert!(text.contains("Welcome to the event board!"));
        assert!(text.contains("Type `join` to see the events."));
        assert!(text.contains(&format_event(&event(1))));
    }

    #[tokio::test]
    async fn test_load_error_is_shown() {
        let client = MockClient::new(vec![]).failing();
        let mut console = started(&client).await;

        console.handle_line("join").await.unwrap();

        assert!(output(console).contains("Failed to load events"));
    }

    #[tokio::test]
    async fn test_failed_list_keeps_showing_events() {
        let client = MockClient::new(vec![event(1), event(2)]);
        let mut console = started(&client).await;
        console.handle_line("join").await.unwrap();

        client.set_failing(true);
        console.handle_line("list").await.unwrap();
        client.set_failing(false);
        console.handle_line("like 1").await.unwrap();

        assert_eq!(console.controller().load_status(), &LoadStatus::Loaded);
        assert_eq!(console.controller().state().events.len(), 2);

        let text = output(console);
        assert!(!text.contains(LOAD_ERROR_MESSAGE));
        let last_render = text.rsplit("Events (").next().unwrap();
        assert!(last_render.contains(&format_event(&event(1))));
        assert!(last_render.contains(&format_event(&event(2))));
    }

    #[tokio::test]
    async fn test_list_recovers_from_failed_start() {
        let client = MockClient::new(vec![event(1)]).failing();
        let mut console = started(&client).await;
        console.handle_line("join").await.unwrap();

        client.set_failing(false);
        console.handle_line("list").await.unwrap();

        assert_eq!(console.controller().load_status(), &LoadStatus::Loaded);
        assert!(output(console).contains(&format_event(&event(1))));
    }

    #[tokio::test]
    async fn test_filter_without_keys_searches_unfiltered() {
        let client = MockClient::new(vec![event(1)]);
        client.set_search_results(vec![event(1)]);
        let mut console = started(&client).await;

        console.handle_line("join").await.unwrap();
        console.handle_line("filter").await.unwrap();

        assert_eq!(client.calls(), vec!["list", "search"]);
        assert_eq!(client.last_filter(), Some(EventFilter::default()));
    }

    #[tokio::test]
    async fn test_like_then_show_liked() {
        let client = MockClient::new(vec![event(1), event(2)]);
        let mut console = started(&client).await;

        for line in ["join", "like 2", "liked"] {
            assert_eq!(console.handle_line(line).await.unwrap(), Flow::Continue);
        }

        assert_eq!(*console.controller().state().events, vec![event(2)]);
        assert_eq!(client.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_edit_and_update() {
        let client = MockClient::new(vec![event(1)]);
        let mut console = started(&client).await;

        for line in ["join", "edit 1", "update price=99"] {
            console.handle_line(line).await.unwrap();
        }

        let state = console.controller().state();
        assert!(!state.show_edit_form());
        assert_eq!(state.events[0].ticket_price, 99.0);
        assert_eq!(state.events[0].id, EventId::from_raw(1));
    }

    #[tokio::test]
    async fn test_update_without_edit() {
        let client = MockClient::new(vec![event(1)]);
        let mut console = started(&client).await;

        console.handle_line("join").await.unwrap();
        console.handle_line("update price=5").await.unwrap();

        assert!(output(console).contains("Nothing is being edited"));
        assert_eq!(client.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_parse_error_and_quit() {
        let client = MockClient::new(vec![]);
        let mut console = started(&client).await;

        assert_eq!(console.handle_line("dance").await.unwrap(), Flow::Continue);
        assert_eq!(console.handle_line("quit").await.unwrap(), Flow::Quit);

        assert!(output(console).contains("unknown command `dance`"));
    }

    #[test]
    fn test_format_event() {
        assert_eq!(
            format_event(&event(2)),
            "[2] 2024-11-03 20:00  Band 2 @ Venue 2 (2 Main St)  $12.00"
        );
    }

    #[test]
    fn test_describe_filter() {
        assert_eq!(describe_filter(&EventFilter::liked()), "liked");
        assert_eq!(describe_filter(&EventFilter::default()), "no criteria");
        let filter = EventFilter {
            band: Some("Glass Harbor".to_string()),
            date: Some("2024-11-22".to_string()),
            ..EventFilter::default()
        };
        assert_eq!(describe_filter(&filter), "date=2024-11-22, band=Glass Harbor");
    }
}
