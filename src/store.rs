// The insert/remove/enumerate capability shared by every booking container,
// and a tagged enum so one form controller can drive any of them.
use crate::binary_tree::KeyedBinaryTree;
use crate::booking::Booking;
use crate::circular_queue::CircularQueue;
use crate::config::BookingConfig;
use crate::error::{BookingError, ConfigError};
use crate::linked_list::CappedLinkedList;
use crate::stack::BoundedStack;
use serde::{Deserialize, Serialize};

pub trait BookingStore {
    // Short noun used in user-facing messages ("stack", "queue", ...)
    fn label(&self) -> &'static str;

    fn insert(&mut self, booking: Booking) -> Result<(), BookingError>;

    fn remove(&mut self) -> Result<Booking, BookingError>;

    // Positional overwrite counted from the first displayed row
    fn replace(&mut self, _index: usize, _booking: Booking) -> Result<Booking, BookingError> {
        Err(BookingError::Unsupported("replace"))
    }

    // Rows in display order, rebuilt on every call
    fn snapshot(&self) -> Vec<Booking>;

    fn len(&self) -> usize;

    // None when the store has no upper bound
    fn capacity(&self) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BookingStore for BoundedStack<Booking> {
    fn label(&self) -> &'static str {
        "stack"
    }

    fn insert(&mut self, booking: Booking) -> Result<(), BookingError> {
        self.push(booking)
    }

    fn remove(&mut self) -> Result<Booking, BookingError> {
        self.pop()
    }

    fn snapshot(&self) -> Vec<Booking> {
        self.to_vec()
    }

    fn len(&self) -> usize {
        BoundedStack::len(self)
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.max_size())
    }
}

impl BookingStore for CircularQueue<Booking> {
    fn label(&self) -> &'static str {
        "queue"
    }

    fn insert(&mut self, booking: Booking) -> Result<(), BookingError> {
        self.enqueue(booking)
    }

    fn remove(&mut self) -> Result<Booking, BookingError> {
        self.dequeue()
    }

    fn replace(&mut self, index: usize, booking: Booking) -> Result<Booking, BookingError> {
        CircularQueue::replace(self, index, booking)
    }

    fn snapshot(&self) -> Vec<Booking> {
        self.display()
    }

    fn len(&self) -> usize {
        CircularQueue::len(self)
    }

    fn capacity(&self) -> Option<usize> {
        Some(CircularQueue::capacity(self))
    }
}

impl BookingStore for CappedLinkedList<Booking> {
    fn label(&self) -> &'static str {
        "list"
    }

    fn insert(&mut self, booking: Booking) -> Result<(), BookingError> {
        self.add(booking)
    }

    fn remove(&mut self) -> Result<Booking, BookingError> {
        self.remove_front()
    }

    fn snapshot(&self) -> Vec<Booking> {
        self.to_sequence()
    }

    fn len(&self) -> usize {
        CappedLinkedList::len(self)
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.max_len())
    }
}

// The history table of the tree form lists bookings in sorted order
impl BookingStore for KeyedBinaryTree<Booking> {
    fn label(&self) -> &'static str {
        "tree"
    }

    fn insert(&mut self, booking: Booking) -> Result<(), BookingError> {
        KeyedBinaryTree::insert(self, booking);
        Ok(())
    }

    fn remove(&mut self) -> Result<Booking, BookingError> {
        Err(BookingError::Unsupported("remove"))
    }

    fn snapshot(&self) -> Vec<Booking> {
        self.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        KeyedBinaryTree::len(self)
    }

    fn capacity(&self) -> Option<usize> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Stack,
    Queue,
    List,
    Tree,
}

#[derive(Debug, Clone)]
pub enum BookingContainer {
    Stack(BoundedStack<Booking>),
    Queue(CircularQueue<Booking>),
    List(CappedLinkedList<Booking>),
    Tree(KeyedBinaryTree<Booking>),
}

impl BookingContainer {
    pub fn new(kind: ContainerKind, config: &BookingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(match kind {
            ContainerKind::Stack => {
                BookingContainer::Stack(BoundedStack::new(config.stack_max_size))
            }
            ContainerKind::Queue => {
                BookingContainer::Queue(CircularQueue::new(config.queue_capacity)?)
            }
            ContainerKind::List => {
                BookingContainer::List(CappedLinkedList::new(config.list_max_len)?)
            }
            ContainerKind::Tree => BookingContainer::Tree(KeyedBinaryTree::new()),
        })
    }

    pub fn kind(&self) -> ContainerKind {
        match self {
            BookingContainer::Stack(_) => ContainerKind::Stack,
            BookingContainer::Queue(_) => ContainerKind::Queue,
            BookingContainer::List(_) => ContainerKind::List,
            BookingContainer::Tree(_) => ContainerKind::Tree,
        }
    }

    fn as_store(&self) -> &dyn BookingStore {
        match self {
            BookingContainer::Stack(s) => s,
            BookingContainer::Queue(q) => q,
            BookingContainer::List(l) => l,
            BookingContainer::Tree(t) => t,
        }
    }

    fn as_store_mut(&mut self) -> &mut dyn BookingStore {
        match self {
            BookingContainer::Stack(s) => s,
            BookingContainer::Queue(q) => q,
            BookingContainer::List(l) => l,
            BookingContainer::Tree(t) => t,
        }
    }
}

impl BookingStore for BookingContainer {
    fn label(&self) -> &'static str {
        self.as_store().label()
    }

    fn insert(&mut self, booking: Booking) -> Result<(), BookingError> {
        self.as_store_mut().insert(booking)
    }

    fn remove(&mut self) -> Result<Booking, BookingError> {
        self.as_store_mut().remove()
    }

    fn replace(&mut self, index: usize, booking: Booking) -> Result<Booking, BookingError> {
        self.as_store_mut().replace(index, booking)
    }

    fn snapshot(&self) -> Vec<Booking> {
        self.as_store().snapshot()
    }

    fn len(&self) -> usize {
        self.as_store().len()
    }

    fn capacity(&self) -> Option<usize> {
        self.as_store().capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn booking(name: &str) -> Booking {
        Booking::new(name, "0781234567", "Mount Sabyinyo")
    }

    fn names(store: &impl BookingStore) -> Vec<String> {
        store.snapshot().into_iter().map(|b| b.name).collect()
    }

    #[test_case(ContainerKind::Stack, Some(3), vec!["Bob", "Alice", "Carol"]; "#1 stack keeps push order")]
    #[test_case(ContainerKind::Queue, Some(5), vec!["Bob", "Alice", "Carol"]; "#2 queue keeps arrival order")]
    #[test_case(ContainerKind::List, Some(3), vec!["Bob", "Alice", "Carol"]; "#3 list keeps arrival order")]
    #[test_case(ContainerKind::Tree, None, vec!["Alice", "Bob", "Carol"]; "#4 tree is sorted")]
    fn test_snapshot_order_per_kind(
        kind: ContainerKind,
        capacity: Option<usize>,
        expected: Vec<&str>,
    ) {
        let mut store = BookingContainer::new(kind, &BookingConfig::default()).unwrap();
        for name in ["Bob", "Alice", "Carol"] {
            store.insert(booking(name)).unwrap();
        }

        assert_eq!(store.kind(), kind);
        assert_eq!(store.capacity(), capacity);
        assert_eq!(store.len(), 3);
        assert_eq!(names(&store), expected);
    }

    #[test_case(ContainerKind::Stack, "Carol"; "#1 stack removes the newest")]
    #[test_case(ContainerKind::Queue, "Bob"; "#2 queue removes the oldest")]
    #[test_case(ContainerKind::List, "Bob"; "#3 list removes the head")]
    fn test_remove_per_kind(kind: ContainerKind, expected: &str) {
        let mut store = BookingContainer::new(kind, &BookingConfig::default()).unwrap();
        assert_eq!(store.remove(), Err(BookingError::Empty));

        for name in ["Bob", "Alice", "Carol"] {
            store.insert(booking(name)).unwrap();
        }
        assert_eq!(store.remove().unwrap().name, expected);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_tree_does_not_remove() {
        let mut store =
            BookingContainer::new(ContainerKind::Tree, &BookingConfig::default()).unwrap();
        store.insert(booking("Bob")).unwrap();
        assert_eq!(store.remove(), Err(BookingError::Unsupported("remove")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_only_queue_replaces() {
        let config = BookingConfig::default();
        let mut queue = BookingContainer::new(ContainerKind::Queue, &config).unwrap();
        queue.insert(booking("Bob")).unwrap();
        assert_eq!(queue.replace(0, booking("Eve")).unwrap().name, "Bob");
        assert_eq!(names(&queue), vec!["Eve"]);

        let mut stack = BookingContainer::new(ContainerKind::Stack, &config).unwrap();
        stack.insert(booking("Bob")).unwrap();
        assert_eq!(
            stack.replace(0, booking("Eve")),
            Err(BookingError::Unsupported("replace"))
        );
    }

    #[test]
    fn test_capacity_from_config() {
        let config = BookingConfig {
            stack_max_size: 1,
            queue_capacity: 2,
            list_max_len: 1,
        };
        let mut stack = BookingContainer::new(ContainerKind::Stack, &config).unwrap();
        stack.insert(booking("A")).unwrap();
        assert_eq!(
            stack.insert(booking("B")),
            Err(BookingError::Full { capacity: 1 })
        );

        let invalid = BookingConfig {
            queue_capacity: 0,
            ..BookingConfig::default()
        };
        assert!(BookingContainer::new(ContainerKind::Tree, &invalid).is_err());
    }
}
