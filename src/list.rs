//! A head and tail anchored singly linked list

use alloc::rc::{Rc, Weak};

use core::fmt;

use crate::node::{unlink_chain, Entry, Iter, Node};

/// Error returned by the fallible `LinkedList` operations.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ListError {
    /// the operation needs at least one node
    Empty,
    /// indexed access out of range after negative translation
    OutOfBounds { index: isize, len: usize },
    /// no node matches the target value
    NotFound,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Empty => write!(f, "linked list is empty"),
            ListError::OutOfBounds { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            ListError::NotFound => write!(f, "no node with the target value"),
        }
    }
}

impl core::error::Error for ListError {}

/// Singly linked list with head and tail anchors.
///
/// The head chain owns every node; `tail` is a weak anchor to the last
/// node. Positional access supports negative indices counted from the
/// end, and value based insertion and removal target the first node
/// comparing equal.
pub struct LinkedList<T> {
    head: Option<Rc<Node<T>>>,
    tail: Option<Weak<Node<T>>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes by walking the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the first element of the list, or None if the list is empty.
    pub fn front(&self) -> Option<Entry<T>> {
        self.head.clone().map(Entry)
    }

    /// Returns the last element of the list, or None if the list is empty.
    pub fn back(&self) -> Option<Entry<T>> {
        // the tail anchor is always live while the list is non-empty
        self.tail.as_ref().and_then(Weak::upgrade).map(Entry)
    }

    /// Prepends a value at the head of the list.
    pub fn push_front(&mut self, elt: T) {
        let new_node = Node::new(elt);
        match self.head.take() {
            Some(head) => {
                *new_node.next.borrow_mut() = Some(head);
            }
            None => {
                self.tail = Some(Rc::downgrade(&new_node));
            }
        }
        self.head = Some(new_node);
    }

    /// Appends a value at the tail of the list.
    pub fn push_back(&mut self, elt: T) {
        let new_node = Node::new(elt);
        match self.tail.take().and_then(|tail| tail.upgrade()) {
            Some(tail) => {
                *tail.next.borrow_mut() = Some(new_node.clone());
            }
            None => {
                self.head = Some(new_node.clone());
            }
        }
        self.tail = Some(Rc::downgrade(&new_node));
    }

    /// Returns the element at `index`.
    ///
    /// Negative indices count from the end, `-1` being the last element.
    pub fn get(&self, index: isize) -> Result<Entry<T>, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let len = self.len();
        let resolved = if index < 0 { index + len as isize } else { index };
        if resolved < 0 || resolved as usize >= len {
            return Err(ListError::OutOfBounds { index, len });
        }
        self.iter()
            .nth(resolved as usize)
            .ok_or(ListError::OutOfBounds { index, len })
    }

    /// Returns an iterator over the elements of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_ref())
    }

    /// Reverses the list in place by rewriting every link, then swaps
    /// the anchors. Empty and single node lists are left untouched.
    pub fn reverse(&mut self) {
        let Some(old_head) = self.head.take() else {
            return;
        };
        let mut prev: Option<Rc<Node<T>>> = None;
        let mut curr = Some(old_head.clone());
        while let Some(node) = curr {
            let next = node.next.replace(prev.take());
            prev = Some(node);
            curr = next;
        }
        // prev now holds the old tail
        self.head = prev;
        self.tail = Some(Rc::downgrade(&old_head));
    }

    /// Returns a displayable view of the head and tail values, e.g.
    /// `head: a` and `tail: c` on two lines. Renders nothing for an
    /// empty list.
    pub fn head_tail(&self) -> HeadTail<'_, T> {
        HeadTail(self)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `value`, or None
    /// if no element matches.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|entry| *entry == *value)
    }

    /// Returns true if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Inserts `elt` immediately after the first element equal to
    /// `target`.
    pub fn insert_after(&mut self, target: &T, elt: T) -> Result<(), ListError> {
        // an empty list trivially has no match
        let mut curr = self.head.clone().ok_or(ListError::NotFound)?;
        loop {
            if curr.value == *target {
                let new_node = Node::new(elt);
                match curr.next.replace(Some(new_node.clone())) {
                    Some(next) => {
                        *new_node.next.borrow_mut() = Some(next);
                    }
                    None => {
                        // inserted after the old tail
                        self.tail = Some(Rc::downgrade(&new_node));
                    }
                }
                return Ok(());
            }
            let next = curr.next.borrow().clone();
            match next {
                Some(node) => curr = node,
                None => return Err(ListError::NotFound),
            }
        }
    }

    /// Inserts `elt` immediately before the first element equal to
    /// `target`.
    pub fn insert_before(&mut self, target: &T, elt: T) -> Result<(), ListError> {
        let head = self.head.clone().ok_or(ListError::Empty)?;
        if head.value == *target {
            self.push_front(elt);
            return Ok(());
        }
        let mut prev = head;
        loop {
            let next = prev.next.borrow().clone();
            let Some(curr) = next else {
                return Err(ListError::NotFound);
            };
            if curr.value == *target {
                let new_node = Node::new(elt);
                *new_node.next.borrow_mut() = Some(curr);
                *prev.next.borrow_mut() = Some(new_node);
                return Ok(());
            }
            prev = curr;
        }
    }

    /// Unlinks the first element equal to `target` and returns it.
    pub fn remove(&mut self, target: &T) -> Result<Entry<T>, ListError> {
        let head = self.head.clone().ok_or(ListError::Empty)?;
        if head.value == *target {
            let next = head.next.take();
            if next.is_none() {
                self.tail = None;
            }
            self.head = next;
            return Ok(Entry(head));
        }
        let mut prev = head;
        loop {
            let next = prev.next.borrow().clone();
            let Some(curr) = next else {
                return Err(ListError::NotFound);
            };
            if curr.value == *target {
                let next = curr.next.take();
                if next.is_none() {
                    // removed the old tail
                    self.tail = Some(Rc::downgrade(&prev));
                }
                *prev.next.borrow_mut() = next;
                return Ok(Entry(curr));
            }
            prev = curr;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for elt in iter {
            list.push_back(elt);
        }
        list
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        unlink_chain(self.head.take());
    }
}

/// Renders the list head to tail as `[a, b, c]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", *entry)?;
        }
        write!(f, "]")
    }
}

/// Displayable head/tail view of a list.
///
/// This `struct` is created by [`LinkedList::head_tail()`].
pub struct HeadTail<'a, T>(&'a LinkedList<T>);

impl<T: fmt::Display> fmt::Display for HeadTail<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0.front(), self.0.back()) {
            (Some(front), Some(back)) => write!(f, "head: {}\ntail: {}", *front, *back),
            _ => Ok(()),
        }
    }
}
