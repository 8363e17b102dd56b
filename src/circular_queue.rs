// Fixed-size ring buffer of bookings
//
// An occupancy counter tells "empty" apart from "full" so front and rear
// never need a -1 sentinel. The sentinel is still visible to callers as
// `front_index() == None` while the queue is empty.
use crate::error::{BookingError, ConfigError};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    rear: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity("queue_capacity"));
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            front: 0,
            rear: 0,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn front_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.front)
    }

    pub fn rear_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.rear)
    }

    pub fn enqueue(&mut self, item: T) -> Result<(), BookingError> {
        if self.is_full() {
            debug!(capacity = self.capacity(), "enqueue rejected, queue is full");
            return Err(BookingError::Full {
                capacity: self.capacity(),
            });
        }

        if self.is_empty() {
            self.front = 0;
            self.rear = 0;
        } else {
            self.rear = (self.rear + 1) % self.capacity();
        }
        self.slots[self.rear] = Some(item);
        self.len += 1;

        debug!(front = self.front, rear = self.rear, len = self.len, "enqueued");
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, BookingError> {
        if self.is_empty() {
            return Err(BookingError::Empty);
        }

        let item = self.slots[self.front].take().ok_or(BookingError::Empty)?;
        self.len -= 1;
        if self.is_empty() {
            self.front = 0;
            self.rear = 0;
        } else {
            self.front = (self.front + 1) % self.capacity();
        }

        debug!(front = self.front, rear = self.rear, len = self.len, "dequeued");
        Ok(item)
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    // Overwrites the booking at a position counted from the front.
    // Occupancy, front and rear stay where they are.
    pub fn replace(&mut self, logical_index: usize, item: T) -> Result<T, BookingError> {
        if logical_index >= self.len {
            return Err(BookingError::IndexOutOfRange {
                index: logical_index,
                len: self.len,
            });
        }

        let slot = self.physical_index(logical_index);
        let previous = self.slots[slot]
            .replace(item)
            .ok_or(BookingError::IndexOutOfRange {
                index: logical_index,
                len: self.len,
            })?;

        debug!(logical_index, slot, "replaced queued booking");
        Ok(previous)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    fn physical_index(&self, logical_index: usize) -> usize {
        (self.front + logical_index) % self.capacity()
    }
}

impl<T: Clone> CircularQueue<T> {
    // Front to rear: [front, rear] when contiguous, [front, N-1] + [0, rear] when wrapped
    pub fn display(&self) -> Vec<T> {
        if self.is_empty() {
            return Vec::new();
        }

        let collect = |range: std::ops::RangeInclusive<usize>| {
            self.slots[range]
                .iter()
                .filter_map(|slot| slot.clone())
                .collect::<Vec<T>>()
        };

        if self.rear >= self.front {
            collect(self.front..=self.rear)
        } else {
            let mut items = collect(self.front..=self.capacity() - 1);
            items.extend(collect(0..=self.rear));
            items
        }
    }
}

pub struct Iter<'a, T> {
    queue: &'a CircularQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let queue = self.queue;
        if self.offset >= queue.len {
            return None;
        }
        let slot = queue.physical_index(self.offset);
        self.offset += 1;
        queue.slots[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len.saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}
