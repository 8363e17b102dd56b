// LIFO container with a fixed maximum size
use crate::error::BookingError;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    max_size: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(max_size: usize) -> Self {
        Self {
            items: Vec::new(),
            max_size,
        }
    }

    // Fails without touching the stack when it is full
    pub fn push(&mut self, item: T) -> Result<(), BookingError> {
        if self.is_full() {
            debug!(max_size = self.max_size, "stack push rejected, stack is full");
            return Err(BookingError::Full {
                capacity: self.max_size,
            });
        }
        self.items.push(item);
        debug!(len = self.items.len(), "pushed onto stack");
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, BookingError> {
        let item = self.items.pop().ok_or(BookingError::Empty)?;
        debug!(len = self.items.len(), "popped from stack");
        Ok(item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    // Bottom to top, the order the stack table is rendered in
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> BoundedStack<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}
