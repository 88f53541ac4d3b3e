//! Recursive flattening support.
//!
//! [`Deque::to_array_recursive`](crate::Deque::to_array_recursive) needs to
//! ask each element "are you a deque yourself?". That question is answered by
//! the [`AsDeque`] capability trait rather than by runtime type inspection:
//! an element type that can embed a deque implements the trait on its
//! deque-carrying variant, and everything else falls back to the default
//! answer.

use crate::Deque;

/// Capability check for elements that may themselves be deques.
///
/// The default implementation answers "not a deque", so plain value types
/// opt in with an empty impl:
///
/// ```
/// use deque::AsDeque;
///
/// #[derive(Clone)]
/// struct Sample(u32);
///
/// impl AsDeque for Sample {}
/// ```
///
/// A tagged element type routes its deque variant through the trait:
///
/// ```
/// use deque::{AsDeque, Deque};
///
/// #[derive(Clone)]
/// enum Value {
///     Int(i64),
///     List(Deque<Value>),
/// }
///
/// impl AsDeque for Value {
///     fn as_deque(&self) -> Option<&Deque<Value>> {
///         match self {
///             Value::List(inner) => Some(inner),
///             Value::Int(_) => None,
///         }
///     }
/// }
/// ```
pub trait AsDeque: Sized {
    /// Returns the embedded deque when this value carries one.
    fn as_deque(&self) -> Option<&Deque<Self>> {
        None
    }
}

/// One entry of a recursively flattened deque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatEntry<T> {
    /// A slot in the index span; `None` when nothing is stored there.
    Slot(Option<T>),
    /// An element that was itself a deque, flattened depth-first.
    Nested(Vec<FlatEntry<T>>),
}
