// Destinations searched on the booking form, most recent on top
use crate::error::{BookingError, ValidationError};
use crate::stack::BoundedStack;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SearchHistory {
    searches: BoundedStack<String>,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self {
            searches: BoundedStack::new(usize::MAX),
        }
    }
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, destination: &str) -> Result<(), BookingError> {
        if destination.is_empty() {
            return Err(ValidationError::EmptyField("destination").into());
        }
        self.searches.push(destination.to_string())?;
        debug!(destination, "recorded search");
        Ok(())
    }

    // Pops the most recent search
    pub fn last(&mut self) -> Option<String> {
        self.searches.pop().ok()
    }

    pub fn len(&self) -> usize {
        self.searches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.searches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_search_is_popped_in_reverse() {
        let mut history = SearchHistory::new();
        history.record("Mount Bisoke").unwrap();
        history.record("Kivu Beach Rubavu").unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.last().as_deref(), Some("Kivu Beach Rubavu"));
        assert_eq!(history.last().as_deref(), Some("Mount Bisoke"));
        assert_eq!(history.last(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_empty_destination_rejected() {
        let mut history = SearchHistory::new();
        assert_eq!(
            history.record(""),
            Err(BookingError::Validation(ValidationError::EmptyField(
                "destination"
            )))
        );
        assert!(history.is_empty());
    }
}
