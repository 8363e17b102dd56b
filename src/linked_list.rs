// Capacity-limited singly linked list: insert at the tail, remove at the head.
//
// Nodes live in a slot arena and link to each other by index. Freed slots go
// on a free list and are reused by later inserts, so the arena never grows
// past the maximum length.
use crate::error::{BookingError, ConfigError};
use tracing::debug;

#[derive(Debug, Clone)]
struct ListNode<T> {
    value: T,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct CappedLinkedList<T> {
    nodes: Vec<Option<ListNode<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    max_len: usize,
}

impl<T> CappedLinkedList<T> {
    pub fn new(max_len: usize) -> Result<Self, ConfigError> {
        if max_len == 0 {
            return Err(ConfigError::ZeroCapacity("list_max_len"));
        }
        Ok(Self {
            nodes: Vec::with_capacity(max_len),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            max_len,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.max_len
    }

    pub fn add(&mut self, value: T) -> Result<(), BookingError> {
        if self.is_full() {
            debug!(max_len = self.max_len, "list add rejected, list is full");
            return Err(BookingError::Full {
                capacity: self.max_len,
            });
        }

        let node = ListNode { value, next: None };
        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        match self.tail.and_then(|tail| self.nodes[tail].as_mut()) {
            Some(tail_node) => tail_node.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;

        debug!(len = self.len, slot = index, "added booking at list tail");
        Ok(())
    }

    pub fn remove_front(&mut self) -> Result<T, BookingError> {
        let head = self.head.ok_or(BookingError::Empty)?;
        let node = self.nodes[head].take().ok_or(BookingError::Empty)?;
        self.free.push(head);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        debug!(len = self.len, "removed booking from list head");
        Ok(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|head| self.nodes[head].as_ref())
            .map(|node| &node.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail
            .and_then(|tail| self.nodes[tail].as_ref())
            .map(|node| &node.value)
    }

    // Head to tail, does not touch the list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
        }
    }
}

impl<T: Clone> CappedLinkedList<T> {
    pub fn to_sequence(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

pub struct Iter<'a, T> {
    nodes: &'a [Option<ListNode<T>>],
    current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = nodes.get(self.current?)?.as_ref()?;
        self.current = node.next;
        Some(&node.value)
    }
}
