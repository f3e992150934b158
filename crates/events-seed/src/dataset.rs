//! The fixed seed dataset
//!
//! Each [`SeedEvent`] becomes one row of the `events` table. The data is
//! compiled in; there is no input file.

/// A band as written in the dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedBand {
    pub name: &'static str,
}

/// A venue as written in the dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedVenue {
    pub name: &'static str,
    pub address: &'static str,
}

/// One pre-defined event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedEvent {
    pub date: &'static str,
    pub time: &'static str,
    pub ticket_price: f64,
    pub band: SeedBand,
    pub venue: SeedVenue,
}

/// The six scalar columns of one `events` row
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRow {
    pub date: String,
    pub time: String,
    pub ticket_price: f64,
    pub band_name: String,
    pub venue_name: String,
    pub venue_address: String,
}

impl SeedEvent {
    /// Flatten into table columns
    pub fn to_row(&self) -> SeedRow {
        SeedRow {
            date: self.date.to_string(),
            time: self.time.to_string(),
            ticket_price: self.ticket_price,
            band_name: self.band.name.to_string(),
            venue_name: self.venue.name.to_string(),
            venue_address: self.venue.address.to_string(),
        }
    }
}

const fn seed(
    date: &'static str,
    time: &'static str,
    ticket_price: f64,
    band: &'static str,
    venue: &'static str,
    address: &'static str,
) -> SeedEvent {
    SeedEvent {
        date,
        time,
        ticket_price,
        band: SeedBand { name: band },
        venue: SeedVenue {
            name: venue,
            address,
        },
    }
}

/// Events inserted by `events-seed`, in insert order
pub const EVENT_DATA: &[SeedEvent] = &[
    seed("2024-11-08", "20:00", 35.0, "The Night Owls", "Fox Theater", "1807 Telegraph Ave, Oakland, CA"),
    seed("2024-11-09", "19:30", 28.5, "Glass Harbor", "The Chapel", "777 Valencia St, San Francisco, CA"),
    seed("2024-11-15", "21:00", 22.0, "Velvet Static", "Knitting Factory", "416 S Main St, Boise, ID"),
    seed("2024-11-16", "20:30", 45.0, "Copper Lanterns", "Revolution Hall", "1300 SE Stark St, Portland, OR"),
    seed("2024-11-22", "19:00", 18.0, "Paper Satellites", "The Pine Box", "1600 Melrose Ave, Seattle, WA"),
    seed("2024-11-29", "20:00", 30.0, "Hollow Pines", "Fox Theater", "1807 Telegraph Ave, Oakland, CA"),
    seed("2024-12-06", "21:30", 25.0, "Midnight Ferry", "The Chapel", "777 Valencia St, San Francisco, CA"),
    seed("2024-12-13", "20:00", 40.0, "Static Bloom", "Revolution Hall", "1300 SE Stark St, Portland, OR"),
    seed("2024-12-20", "19:30", 20.0, "Glass Harbor", "Knitting Factory", "416 S Main St, Boise, ID"),
    seed("2024-12-31", "22:00", 60.0, "The Night Owls", "The Pine Box", "1600 Melrose Ave, Seattle, WA"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_is_not_empty() {
        assert!(!EVENT_DATA.is_empty());
    }

    #[test]
    fn test_dataset_rows_are_complete() {
        for event in EVENT_DATA {
            let row = event.to_row();
            assert!(!row.date.is_empty());
            assert!(!row.time.is_empty());
            assert!(!row.band_name.is_empty());
            assert!(!row.venue_name.is_empty());
            assert!(!row.venue_address.is_empty());
            assert!(row.ticket_price >= 0.0);
        }
    }

    #[test]
    fn test_to_row_flattens_nested_fields() {
        let row = EVENT_DATA[1].to_row();
        assert_eq!(row.band_name, "Glass Harbor");
        assert_eq!(row.venue_name, "The Chapel");
        assert_eq!(row.venue_address, "777 Valencia St, San Francisco, CA");
        assert_eq!(row.ticket_price, 28.5);
    }
}
