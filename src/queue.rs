//! A singly linked FIFO queue

use alloc::rc::{Rc, Weak};

use core::fmt;

use crate::node::{unlink_chain, Entry, Iter, Node};

/// Singly linked queue. Values are pushed at the rear and popped at the
/// front.
///
/// The `front` chain owns every node; `rear` is a weak anchor to the
/// last node and is cleared whenever the queue drains, so the two
/// anchors are always either both set or both empty.
pub struct Queue<T> {
    front: Option<Rc<Node<T>>>,
    rear: Option<Weak<Node<T>>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            front: None,
            rear: None,
        }
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Appends a value at the rear of the queue.
    pub fn push(&mut self, elt: T) {
        let new_node = Node::new(elt);
        match self.rear.take().and_then(|rear| rear.upgrade()) {
            Some(rear) => {
                *rear.next.borrow_mut() = Some(new_node.clone());
            }
            None => {
                self.front = Some(new_node.clone());
            }
        }
        self.rear = Some(Rc::downgrade(&new_node));
    }

    /// Removes the front value and returns it, or None if the queue is
    /// empty.
    pub fn pop(&mut self) -> Option<Entry<T>> {
        let node = self.front.take()?;
        self.front = node.next.take();
        if self.front.is_none() {
            // no front, no rear
            self.rear = None;
        }
        Some(Entry(node))
    }

    /// Returns the front value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.front.as_deref().map(Node::value)
    }

    /// Returns the number of values by walking the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator from the front of the queue to the rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.front.as_ref())
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        unlink_chain(self.front.take());
    }
}

/// Renders the queue front to rear as `a->b->c`, or `Empty queue`.
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty queue");
        }
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "->")?;
            }
            write!(f, "{}", *entry)?;
        }
        Ok(())
    }
}
