// Main library file for the booking desk containers

// Records, validation and configuration
pub mod booking;
pub mod config;
pub mod error;
pub mod validation;

// Containers
pub mod binary_tree;
pub mod category_tree;
pub mod circular_queue;
pub mod linked_list;
pub mod search_history;
pub mod stack;

// Form plumbing shared by every container
pub mod controller;
pub mod store;

// Re-export key types for convenience
pub use binary_tree::{KeyedBinaryTree, TreeNodeId};
pub use booking::Booking;
pub use category_tree::{CategoryTree, NodeId};
pub use circular_queue::CircularQueue;
pub use config::BookingConfig;
pub use controller::{Feedback, FormController, Severity};
pub use error::{BookingError, ConfigError, ValidationError};
pub use linked_list::CappedLinkedList;
pub use search_history::SearchHistory;
pub use stack::BoundedStack;
pub use store::{BookingContainer, BookingStore, ContainerKind};
pub use validation::{is_valid_phone, validate_submission};
