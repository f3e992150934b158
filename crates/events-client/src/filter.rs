//! Event filter
//!
//! Filtering options for the events list. A filter either selects the
//! locally liked events or is translated into a search query.

/// Filter criteria entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub date: Option<String>,
    pub band: Option<String>,
    pub venue: Option<String>,
    /// Show only liked events (resolved locally, never sent to the API)
    pub liked: bool,
}

impl EventFilter {
    /// Filter that shows only liked events
    pub fn liked() -> Self {
        Self {
            liked: true,
            ..Self::default()
        }
    }

    /// Query parameters for the search endpoint
    ///
    /// Keys are emitted in the fixed order `date`, `band`, `venue`.
    /// Absent or empty values are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("date", self.date.as_deref()),
            ("band", self.band.as_deref()),
            ("venue", self.venue.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some((key, v)),
            _ => None,
        })
        .collect()
    }

    /// True if no criterion is set
    pub fn is_empty(&self) -> bool {
        !self.liked && self.query_pairs().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_fixed_order() {
        let filter = EventFilter {
            venue: Some("Fox Theater".to_string()),
            date: Some("2024-11-22".to_string()),
            band: Some("Glass Harbor".to_string()),
            liked: false,
        };

        assert_eq!(
            filter.query_pairs(),
            vec![
                ("date", "2024-11-22"),
                ("band", "Glass Harbor"),
                ("venue", "Fox Theater"),
            ]
        );
    }

    #[test]
    fn test_query_pairs_skip_absent_and_empty() {
        let filter = EventFilter {
            date: Some(String::new()),
            band: None,
            venue: Some("The Chapel".to_string()),
            liked: false,
        };

        assert_eq!(filter.query_pairs(), vec![("venue", "The Chapel")]);
    }

    #[test]
    fn test_is_empty() {
        assert!(EventFilter::default().is_empty());
        assert!(!EventFilter::liked().is_empty());
        assert!(!EventFilter {
            band: Some("x".to_string()),
            ..EventFilter::default()
        }
        .is_empty());
    }
}
