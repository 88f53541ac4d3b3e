//! Double-ended queue over a sparse, signed logical index space.
//!
//! Unlike a ring buffer, [`Deque`] never relocates elements: values live in
//! a sparse map keyed by `i64`, and two boundary integers track the logical
//! span. Appending ([`push`](Deque::push)) and prepending
//! ([`unshift`](Deque::unshift)) each move one bound by exactly one, so an
//! index obtained once stays valid for the life of the element — including
//! negative indices for everything added at the front. Random-access writes
//! ([`set`](Deque::set)) may land anywhere, leaving gaps that reads resolve
//! to `None`.
//!
//! Cursors produced by [`iterator`](Deque::iterator) and
//! [`reverse_iterator`](Deque::reverse_iterator) come from the companion
//! `iterator` crate.
//!
//! # Example
//!
//! ```
//! use deque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.push(1).push(3).push(5);
//!
//! assert_eq!(deque.first(), Some(1));
//! assert_eq!(deque.last(), Some(5));
//! assert_eq!((deque.lower_bound(), deque.upper_bound()), (0, 3));
//!
//! deque.unshift(100);
//! assert_eq!(deque.first(), Some(100));
//! assert_eq!(deque.get(-1), Some(&100));
//! ```
//!
//! The structure is a plain value with no interior synchronization; wrap it
//! in a lock for shared mutation across threads.

mod deque;
mod error;
mod nested;

pub use crate::deque::Deque;
pub use crate::error::DequeError;
pub use crate::nested::{AsDeque, FlatEntry};
