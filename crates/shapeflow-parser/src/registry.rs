//! Identifier bookkeeping for one translation.
//!
//! The forward registry records, for each constructed element, the id it had
//! in the source document. It is written once per element during construction
//! and never changed. After the whole tree exists it is inverted exactly once
//! into a [`ReverseRegistry`] used to resolve references.
//!
//! Source ids are interned, so each distinct id string is stored once no
//! matter how many outgoing lists mention it.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use log::trace;
use string_interner::{DefaultStringInterner, DefaultSymbol};

use shapeflow_core::identifier::ElementRef;

use crate::{
    DuplicateIdPolicy,
    error::{Result, TranslateError},
};

/// Forward mapping from elements to their source ids.
pub(crate) struct IdentifierRegistry {
    interner: DefaultStringInterner,
    forward: IndexMap<ElementRef, DefaultSymbol>,
}

impl IdentifierRegistry {
    pub(crate) fn new() -> Self {
        Self {
            interner: DefaultStringInterner::new(),
            forward: IndexMap::new(),
        }
    }

    /// Record the source id of a newly constructed element.
    ///
    /// An element is registered at most once; a second call for the same
    /// element keeps the first id.
    pub(crate) fn register(&mut self, element: ElementRef, source_id: &str) {
        let symbol = self.interner.get_or_intern(source_id);
        self.forward.entry(element).or_insert(symbol);
        trace!(element:% = element, source_id; "Registered element");
    }

    /// Get the source id an element was registered under.
    pub(crate) fn source_id(&self, element: ElementRef) -> Option<&str> {
        let symbol = self.forward.get(&element)?;
        self.interner.resolve(*symbol)
    }

    /// Number of registered elements.
    pub(crate) fn len(&self) -> usize {
        self.forward.len()
    }

    /// Build the id-to-element mapping.
    ///
    /// # Errors
    ///
    /// With [`DuplicateIdPolicy::Reject`], returns
    /// [`TranslateError::DuplicateIdentifier`] if two elements share an id.
    /// With [`DuplicateIdPolicy::LastWins`], the element registered last owns
    /// the id.
    pub(crate) fn invert(&self, policy: DuplicateIdPolicy) -> Result<ReverseRegistry<'_>> {
        let mut by_symbol = HashMap::with_capacity(self.forward.len());

        for (&element, &symbol) in &self.forward {
            if by_symbol.insert(symbol, element).is_some() && policy == DuplicateIdPolicy::Reject {
                let id = self.interner.resolve(symbol).unwrap_or_default();
                return Err(TranslateError::DuplicateIdentifier(id.to_string()));
            }
        }

        Ok(ReverseRegistry {
            interner: &self.interner,
            by_symbol,
        })
    }
}

/// Id-to-element mapping derived from an [`IdentifierRegistry`].
pub(crate) struct ReverseRegistry<'a> {
    interner: &'a DefaultStringInterner,
    by_symbol: HashMap<DefaultSymbol, ElementRef>,
}

impl ReverseRegistry<'_> {
    /// Find the element registered under `source_id`.
    pub(crate) fn resolve(&self, source_id: &str) -> Option<ElementRef> {
        let symbol = self.interner.get(source_id)?;
        self.by_symbol.get(&symbol).copied()
    }

    /// Convert into a plain string-keyed index for the finished graph.
    pub(crate) fn into_index(self) -> HashMap<String, ElementRef> {
        self.by_symbol
            .into_iter()
            .filter_map(|(symbol, element)| {
                self.interner
                    .resolve(symbol)
                    .map(|id| (id.to_string(), element))
            })
            .collect()
    }
}

/// Ids named as targets by some connector's outgoing list.
///
/// Filled during construction, before any reference is resolved, and only
/// consulted when the document root composes its children.
#[derive(Debug, Default)]
pub(crate) struct SequenceFlowTargets {
    ids: HashSet<String>,
}

impl SequenceFlowTargets {
    pub(crate) fn extend<'a>(&mut self, ids: impl IntoIterator<Item = &'a String>) {
        self.ids.extend(ids.into_iter().cloned());
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}
