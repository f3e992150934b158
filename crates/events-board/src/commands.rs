//! Console commands
//!
//! Parses one input line into a [`Command`]. Multi-field arguments are
//! separated by `|` so values may contain spaces:
//!
//! ```text
//! add 2024-11-22 | 20:00 | 35 | Glass Harbor | Fox Theater | 1807 Telegraph Ave
//! filter band=Glass Harbor | venue=Fox Theater
//! update price=40 | time=21:00
//! ```

use events_client::{Band, Event, EventFilter, EventId, NewEvent, Venue};

/// Errors produced while parsing a command line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("`{0}` is not an event id")]
    InvalidId(String),
    #[error("`{0}` is not a price")]
    InvalidPrice(String),
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// Changes entered for the event being edited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub ticket_price: Option<f64>,
    pub band: Option<String>,
    pub venue: Option<String>,
    pub address: Option<String>,
}

impl EventPatch {
    /// Apply the changes on top of `event`, keeping its id
    pub fn apply(&self, event: &Event) -> Event {
        let mut patched = event.clone();
        if let Some(date) = &self.date {
            patched.date = date.clone();
        }
        if let Some(time) = &self.time {
            patched.time = time.clone();
        }
        if let Some(price) = self.ticket_price {
            patched.ticket_price = price;
        }
        if let Some(band) = &self.band {
            patched.band.name = band.clone();
        }
        if let Some(venue) = &self.venue {
            patched.venue.name = venue.clone();
        }
        if let Some(address) = &self.address {
            patched.venue.address = address.clone();
        }
        patched
    }
}

/// A parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Join,
    List,
    Add(NewEvent),
    Delete(EventId),
    Like(EventId),
    Filter(EventFilter),
    Edit(EventId),
    Update(EventPatch),
    Cancel,
    Help,
    Quit,
}

const ADD_USAGE: &str = "add <date> | <time> | <price> | <band> | <venue> | <address>";
const UPDATE_USAGE: &str = "update <field>=<value> | ...  (fields: date time price band venue address)";

pub const HELP_TEXT: &str = "\
Commands:
  join                 enter the event board
  list                 reload all events
  liked                show liked events
  add <date> | <time> | <price> | <band> | <venue> | <address>
  delete <id>          delete an event
  like <id>            like an event
  filter date=.. | band=.. | venue=..   (no keys: unfiltered search)
  filter liked         same as `liked`
  edit <id>            open the edit form
  update field=value | ...   save changes (fields: date time price band venue address)
  cancel               close the edit form
  help                 show this help
  quit                 exit";

/// Parse one input line; `Ok(None)` for a blank line
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "join" => Command::Join,
        "list" => Command::List,
        "liked" => Command::Filter(EventFilter::liked()),
        "add" => Command::Add(parse_new_event(rest)?),
        "delete" | "rm" => Command::Delete(parse_id(rest)?),
        "like" => Command::Like(parse_id(rest)?),
        "filter" => Command::Filter(parse_filter(rest)?),
        "edit" => Command::Edit(parse_id(rest)?),
        "update" | "save" => Command::Update(parse_patch(rest)?),
        "cancel" => Command::Cancel,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_id(arg: &str) -> Result<EventId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::Usage("<command> <id>"));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

fn parse_price(value: &str) -> Result<f64, CommandError> {
    let trimmed = value.trim().trim_start_matches('$');
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| CommandError::InvalidPrice(value.to_string()))
}

fn split_fields(rest: &str) -> Vec<&str> {
    rest.split('|').map(str::trim).collect()
}

fn parse_new_event(rest: &str) -> Result<NewEvent, CommandError> {
    let fields = split_fields(rest);
    let [date, time, price, band, venue, address] = fields.as_slice() else {
        return Err(CommandError::Usage(ADD_USAGE));
    };
    Ok(NewEvent {
        date: date.to_string(),
        time: time.to_string(),
        ticket_price: parse_price(price)?,
        band: Band {
            name: band.to_string(),
        },
        venue: Venue {
            name: venue.to_string(),
            address: address.to_string(),
        },
    })
}

/// Split `key=value` pairs, skipping empty segments
fn key_values(rest: &str) -> Result<Vec<(String, String)>, CommandError> {
    split_fields(rest)
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => Ok((key.trim().to_lowercase(), value.trim().to_string())),
            None => Err(CommandError::UnknownField(segment.to_string())),
        })
        .collect()
}

fn parse_filter(rest: &str) -> Result<EventFilter, CommandError> {
    if rest.eq_ignore_ascii_case("liked") {
        return Ok(EventFilter::liked());
    }
    let mut filter = EventFilter::default();
    for (key, value) in key_values(rest)? {
        match key.as_str() {
            "date" => filter.date = Some(value),
            "band" => filter.band = Some(value),
            "venue" => filter.venue = Some(value),
            _ => return Err(CommandError::UnknownField(key)),
        }
    }
    Ok(filter)
}

fn parse_patch(rest: &str) -> Result<EventPatch, CommandError> {
    let mut patch = EventPatch::default();
    for (key, value) in key_values(rest)? {
        match key.as_str() {
            "date" => patch.date = Some(value),
            "time" => patch.time = Some(value),
            "price" | "ticketprice" => patch.ticket_price = Some(parse_price(&value)?),
            "band" => patch.band = Some(value),
            "venue" => patch.venue = Some(value),
            "address" => patch.address = Some(value),
            _ => return Err(CommandError::UnknownField(key)),
        }
    }
    if patch == EventPatch::default() {
        return Err(CommandError::Usage(UPDATE_USAGE));
    }
    Ok(patch)
}
