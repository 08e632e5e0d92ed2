//! Element storage for process graphs.
//!
//! Translation fills an [`ElementArena`] and, once every reference has been
//! resolved, freezes it into a read-only [`ProcessGraph`].

use std::collections::HashMap;

use log::debug;

use crate::{
    identifier::ElementRef,
    semantic::element::{Definitions, Element, ElementKind},
};

/// Growable element storage used while a graph is under construction.
#[derive(Debug, Default)]
pub struct ElementArena {
    elements: Vec<Element>,
}

impl ElementArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an element and return its handle.
    pub fn push(&mut self, element: Element) -> ElementRef {
        let handle = ElementRef::new(self.elements.len());
        self.elements.push(element);
        handle
    }

    /// Borrow the element behind `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not produced by this arena.
    pub fn get(&self, handle: ElementRef) -> &Element {
        &self.elements[handle.index()]
    }

    /// Mutably borrow the element behind `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not produced by this arena.
    pub fn get_mut(&mut self, handle: ElementRef) -> &mut Element {
        &mut self.elements[handle.index()]
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Freeze the arena into a graph rooted at `root`.
    ///
    /// `index` maps source identifiers to the elements registered under them.
    /// Returns the arena unchanged if `root` is not a [`Definitions`] element.
    pub fn into_graph(
        self,
        root: ElementRef,
        index: HashMap<String, ElementRef>,
    ) -> Result<ProcessGraph, Self> {
        if !matches!(self.get(root).kind(), ElementKind::Definitions(_)) {
            return Err(self);
        }

        debug!(elements = self.elements.len(); "Freezing element arena");
        Ok(ProcessGraph {
            elements: self.elements,
            root,
            index,
        })
    }
}

/// A fully translated process graph.
///
/// The root is always a [`Definitions`] element. Every handle stored inside
/// the graph's elements addresses an element of this same graph.
#[derive(Debug)]
pub struct ProcessGraph {
    elements: Vec<Element>,
    root: ElementRef,
    index: HashMap<String, ElementRef>,
}

impl ProcessGraph {
    /// Handle of the document root.
    pub fn root_ref(&self) -> ElementRef {
        self.root
    }

    /// Borrow the document root element.
    pub fn root(&self) -> &Element {
        self.get(self.root)
    }

    /// Borrow the document root's definitions data.
    pub fn definitions(&self) -> &Definitions {
        match self.root().kind() {
            ElementKind::Definitions(definitions) => definitions,
            _ => unreachable!("graph root is checked to be a definitions element"),
        }
    }

    /// Borrow the element behind `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not belong to this graph.
    pub fn get(&self, handle: ElementRef) -> &Element {
        &self.elements[handle.index()]
    }

    /// Find the element registered under a source identifier.
    pub fn lookup(&self, source_id: &str) -> Option<ElementRef> {
        self.index.get(source_id).copied()
    }

    /// Iterate every element with its handle, in construction order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementRef, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| (ElementRef::new(index), element))
    }

    /// Number of elements in the graph.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the graph holds no elements.
    ///
    /// A translated graph always holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
