//! Unresolved outgoing references captured during construction.

use indexmap::IndexMap;

use shapeflow_core::identifier::ElementRef;

/// Outgoing reference ids of every constructed element.
///
/// Every element gets an entry, even one with no outgoing ids: an empty
/// list means "no edges", while a missing entry means the element was never
/// built. Entries keep construction order.
#[derive(Debug, Default)]
pub(crate) struct PendingEdgeTable {
    entries: IndexMap<ElementRef, Vec<String>>,
}

impl PendingEdgeTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record the outgoing ids of a newly constructed element, verbatim.
    pub(crate) fn record(&mut self, owner: ElementRef, ids: Vec<String>) {
        self.entries.insert(owner, ids);
    }

    /// Get the recorded outgoing ids of `owner`.
    pub(crate) fn outgoing(&self, owner: ElementRef) -> Option<&[String]> {
        self.entries.get(&owner).map(Vec::as_slice)
    }

    /// Returns `true` if `owner` was recorded with an empty outgoing list.
    pub(crate) fn has_no_outgoing(&self, owner: ElementRef) -> bool {
        self.outgoing(owner).is_some_and(<[String]>::is_empty)
    }

    /// Elements with an entry, in construction order.
    #[cfg(test)]
    pub(crate) fn owners(&self) -> impl Iterator<Item = ElementRef> + '_ {
        self.entries.keys().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Consume the table, yielding each owner with its ids in construction order.
    pub(crate) fn into_entries(self) -> impl Iterator<Item = (ElementRef, Vec<String>)> {
        self.entries.into_iter()
    }
}
