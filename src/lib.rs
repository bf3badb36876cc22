#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

pub mod list;
pub mod node;
pub mod queue;
pub mod stack;

pub use list::{LinkedList, ListError};
pub use node::{Entry, Node};
pub use queue::Queue;
pub use stack::Stack;
