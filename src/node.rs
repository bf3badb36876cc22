//! The shared singly linked node primitive

use alloc::rc::Rc;

use core::cell::RefCell;
use core::marker::PhantomData;
use core::ops::Deref;
use core::{cmp, fmt};

/// A single chain unit: one value and an owning link to its successor.
///
/// A node has exactly one strong owner, either its predecessor in the
/// chain or the container itself for the first node. Tail/rear anchors
/// hold `Weak` references, so no cycle can form.
pub struct Node<T> {
    pub(crate) value: T,
    // the value never changes after insertion, only the link does
    pub(crate) next: RefCell<Option<Rc<Node<T>>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Rc<Self> {
        Rc::new(Node {
            value,
            next: RefCell::new(None),
        })
    }

    /// Returns a reference to the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?})", self.value)
    }
}

/// An entry in one of the containers. You can `deref` it to get the value.
#[derive(Clone)]
pub struct Entry<T>(pub(crate) Rc<Node<T>>);

impl<T> Deref for Entry<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.0.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({:?})", self.0.value)
    }
}

impl<T: PartialEq> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.value == other.0.value
    }
}

impl<T> AsRef<T> for Entry<T> {
    fn as_ref(&self) -> &T {
        self.deref()
    }
}

impl<T: PartialOrd> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Entry<T>) -> Option<cmp::Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Entry<T> {
    fn cmp(&self, other: &Entry<T>) -> cmp::Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Eq> Eq for Entry<T> {}

/// A lazy forward iterator over the values of a chain.
///
/// Yielded by the `iter()` method of every container; restartable by
/// calling `iter()` again.
pub struct Iter<'a, T: 'a> {
    curr: Option<Rc<Node<T>>>,
    _chain: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(start: Option<&'a Rc<Node<T>>>) -> Self {
        Iter {
            curr: start.cloned(),
            _chain: PhantomData,
        }
    }
}

impl<T> Iterator for Iter<'_, T> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr.take()?;
        self.curr = node.next.borrow().clone();
        Some(Entry(node))
    }
}

/// Unlink a chain front to back so that dropping a long container does
/// not recurse once per node.
pub(crate) fn unlink_chain<T>(start: Option<Rc<Node<T>>>) {
    let mut curr = start;
    while let Some(node) = curr {
        curr = node.next.take();
    }
}
