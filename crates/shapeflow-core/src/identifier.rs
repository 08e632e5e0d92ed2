//! Handles for elements stored in a process graph arena.
//!
//! Elements never hold pointers to each other. Every cross-reference in the
//! model (a connector's target, a process's flow elements, a lane's members)
//! is an [`ElementRef`] into the arena that owns the elements.

use std::fmt;

/// Copyable handle addressing one element in an
/// [`ElementArena`](crate::semantic::ElementArena) or
/// [`ProcessGraph`](crate::semantic::ProcessGraph).
///
/// # Examples
///
/// ```
/// use shapeflow_core::identifier::ElementRef;
///
/// let handle = ElementRef::new(3);
/// assert_eq!(handle.index(), 3);
/// assert_eq!(handle.to_string(), "#3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef(usize);

impl ElementRef {
    /// Creates a handle for the arena slot at `index`.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena slot this handle addresses.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
