//! A singly linked LIFO stack

use alloc::rc::Rc;

use core::fmt;

use crate::node::{unlink_chain, Entry, Iter, Node};

/// Singly linked stack. The most recently pushed value sits on top.
pub struct Stack<T> {
    top: Option<Rc<Node<T>>>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { top: None }
    }

    /// Returns true if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Pushes a value onto the top of the stack.
    pub fn push(&mut self, elt: T) {
        let new_node = Node::new(elt);
        *new_node.next.borrow_mut() = self.top.take();
        self.top = Some(new_node);
    }

    /// Removes the top value and returns it, or None if the stack is empty.
    pub fn pop(&mut self) -> Option<Entry<T>> {
        let node = self.top.take()?;
        // detach so the returned entry does not pin the rest of the chain
        self.top = node.next.take();
        Some(Entry(node))
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(Node::value)
    }

    /// Returns the number of values by walking the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.top.as_ref())
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        unlink_chain(self.top.take());
    }
}

/// Renders the stack top to bottom as `a->b->c`, or `Empty stack`.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty stack");
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
