// Form controller: validate the three fields, mutate the store, report back.
//
// The controller knows nothing about widgets. Each action returns a `Feedback`
// for the frontend to show and the frontend re-renders the whole table from
// `rows()` afterwards.
use crate::booking::Booking;
use crate::config::BookingConfig;
use crate::error::{BookingError, ConfigError};
use crate::store::{BookingContainer, BookingStore, ContainerKind};
use crate::validation::validate_submission;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Feedback {
    fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }
}

pub struct FormController<S: BookingStore = BookingContainer> {
    store: S,
    selected: Option<usize>,
}

impl FormController<BookingContainer> {
    pub fn for_kind(kind: ContainerKind, config: &BookingConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(BookingContainer::new(kind, config)?))
    }
}

impl<S: BookingStore> FormController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            selected: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // Full table contents in display order
    pub fn rows(&self) -> Vec<Booking> {
        self.store.snapshot()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    // Selecting a row turns the next submit into a replace
    pub fn select(&mut self, row: usize) -> Result<(), BookingError> {
        let len = self.store.len();
        if row >= len {
            return Err(BookingError::IndexOutOfRange { index: row, len });
        }
        self.selected = Some(row);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // Text for the confirmation dialog shown before a replace
    pub fn replace_prompt(booking: &Booking) -> String {
        format!(
            "Do you want to replace the selected booking with:\n\nName: {}\nPhone: {}\nBooking: {}?",
            booking.name, booking.phone, booking.description
        )
    }

    pub fn submit(&mut self, name: &str, phone: &str, description: &str) -> Feedback {
        let booking = match validate_submission(name, phone, description) {
            Ok(booking) => booking,
            Err(e) => {
                warn!(store = self.store.label(), error = %e, "submission rejected");
                return Feedback::new(Severity::Warning, "Warning", e.to_string());
            }
        };

        match self.selected.take() {
            Some(row) => self.replace(row, booking),
            None => self.insert(booking),
        }
    }

    fn insert(&mut self, booking: Booking) -> Feedback {
        let description = booking.description.clone();
        match self.store.insert(booking) {
            Ok(()) => {
                info!(store = self.store.label(), len = self.store.len(), "booking added");
                Feedback::new(
                    Severity::Success,
                    "Success",
                    format!("Booking for '{}' added successfully.", description),
                )
            }
            Err(e) => self.failure(e),
        }
    }

    fn replace(&mut self, row: usize, booking: Booking) -> Feedback {
        let description = booking.description.clone();
        match self.store.replace(row, booking) {
            Ok(previous) => {
                info!(store = self.store.label(), row, "booking replaced");
                Feedback::new(
                    Severity::Success,
                    "Booking Replaced",
                    format!(
                        "Booking for {} replaced with '{}'.",
                        previous.name, description
                    ),
                )
            }
            Err(e) => self.failure(e),
        }
    }

    pub fn remove(&mut self) -> Feedback {
        self.selected = None;
        match self.store.remove() {
            Ok(removed) => {
                info!(store = self.store.label(), len = self.store.len(), "booking removed");
                Feedback::new(
                    Severity::Success,
                    "Booking Removed",
                    format!("Booking for {} has been removed.", removed.name),
                )
            }
            Err(e) => self.failure(e),
        }
    }

    fn failure(&self, error: BookingError) -> Feedback {
        let label = self.store.label();
        match error {
            BookingError::Full { capacity } => {
                warn!(store = label, capacity, "store is full");
                let message = if label == "queue" {
                    "The booking queue is full. Please process some bookings.".to_string()
                } else {
                    format!("You cannot add more bookings. The {} is full.", label)
                };
                Feedback::new(Severity::Warning, format!("{} Full", title_case(label)), message)
            }
            BookingError::Empty => {
                info!(store = label, "nothing to remove");
                Feedback::new(
                    Severity::Info,
                    format!("Empty {}", title_case(label)),
                    "No bookings to remove.",
                )
            }
            other => {
                warn!(store = label, error = %other, "booking action failed");
                Feedback::new(Severity::Warning, "Warning", other.to_string())
            }
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
