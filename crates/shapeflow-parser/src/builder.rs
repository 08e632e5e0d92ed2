//! Node Builder: recursive, bottom-up construction of the element tree.
//!
//! Children are fully built before their parent finishes. Building an element
//! registers its source id, records its outgoing reference ids and, for
//! connectors, notes those ids as connector targets. Containers compose their
//! children as soon as they themselves are built. Once the whole tree exists,
//! the flow reconnector runs exactly once and the arena is frozen into a
//! [`ProcessGraph`].

use log::{debug, info, trace};
use serde::Deserialize;

use shapeflow_core::{
    identifier::ElementRef,
    semantic::{Element, ElementArena, ElementKind, ProcessGraph},
    stencil::create_element,
};

use crate::{
    compose::{CompositionContext, LaneMembers, compose},
    error::{ErrorCode, Result, TranslateError, display_id},
    pending::PendingEdgeTable,
    properties::apply_properties,
    raw::RawNode,
    reconnect::reconnect,
    registry::{IdentifierRegistry, SequenceFlowTargets},
};

/// What to do when two shapes share a `resourceId`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// Fail the translation.
    #[default]
    Reject,
    /// The shape built last owns the id.
    LastWins,
}

/// Translation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    duplicate_ids: DuplicateIdPolicy,
    task_type_key: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            duplicate_ids: DuplicateIdPolicy::default(),
            task_type_key: "tasktype".to_string(),
        }
    }
}

impl TranslateConfig {
    /// Get the duplicate identifier policy.
    pub fn duplicate_ids(&self) -> DuplicateIdPolicy {
        self.duplicate_ids
    }

    /// Get the property key holding the task subtype hint.
    pub fn task_type_key(&self) -> &str {
        &self.task_type_key
    }

    /// Set the duplicate identifier policy.
    pub fn with_duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }

    /// Set the property key holding the task subtype hint.
    pub fn with_task_type_key(mut self, key: impl Into<String>) -> Self {
        self.task_type_key = key.into();
        self
    }
}

/// Construction state of a single translation.
///
/// Every registry lives here and dies with the translator, so concurrent
/// translations never share state.
pub(crate) struct Translator<'a> {
    config: &'a TranslateConfig,
    arena: ElementArena,
    registry: IdentifierRegistry,
    pending: PendingEdgeTable,
    flow_targets: SequenceFlowTargets,
    lane_members: LaneMembers,
}

impl<'a> Translator<'a> {
    pub(crate) fn new(config: &'a TranslateConfig) -> Self {
        Self {
            config,
            arena: ElementArena::new(),
            registry: IdentifierRegistry::new(),
            pending: PendingEdgeTable::new(),
            flow_targets: SequenceFlowTargets::default(),
            lane_members: LaneMembers::default(),
        }
    }

    /// Build the whole tree below `raw`, resolve its references and freeze it.
    ///
    /// # Errors
    ///
    /// Fails if any shape is malformed or unknown, if the outermost shape is
    /// not a diagram, or if reconnection fails. No partial graph is returned.
    pub(crate) fn translate(mut self, raw: RawNode) -> Result<ProcessGraph> {
        info!("Translating diagram");

        let root = self.build_node(raw)?;
        if !matches!(self.arena.get(root).kind(), ElementKind::Definitions(_)) {
            return Err(TranslateError::malformed(
                ErrorCode::E103,
                format!(
                    "the outermost shape is a {}, not a diagram",
                    self.arena.get(root).kind()
                ),
            ));
        }
        debug!(
            elements = self.arena.len(),
            registered = self.registry.len(),
            pending = self.pending.len();
            "Tree built"
        );

        let index = reconnect(
            &mut self.arena,
            &self.registry,
            self.pending,
            self.config.duplicate_ids(),
        )?;

        let elements = self.arena.len();
        // The root was checked above; the arena only comes back for a non-diagram root.
        let graph = self.arena.into_graph(root, index).map_err(|_| {
            TranslateError::malformed(ErrorCode::E103, "the outermost shape is not a diagram")
        })?;
        info!(elements; "Translation complete");
        Ok(graph)
    }

    /// Build one shape after all of its children.
    fn build_node(&mut self, raw: RawNode) -> Result<ElementRef> {
        let RawNode {
            resource_id,
            properties,
            stencil,
            child_shapes,
            outgoing,
            ..
        } = raw;

        let children = child_shapes
            .into_iter()
            .map(|child| self.build_node(child))
            .collect::<Result<Vec<_>>>()?;

        let stencil = stencil.ok_or_else(|| {
            TranslateError::malformed(
                ErrorCode::E102,
                format!(
                    "shape `{}` has no stencil",
                    display_id(resource_id.as_deref())
                ),
            )
        })?;
        let task_type = properties
            .get(self.config.task_type_key())
            .map(String::as_str);
        let kind = create_element(&stencil, task_type).map_err(|source| {
            TranslateError::UnknownShape {
                resource_id: resource_id.clone(),
                source,
            }
        })?;
        let is_connector = matches!(kind, ElementKind::SequenceFlow(_));

        let element = self
            .arena
            .push(Element::new(kind).with_source_id(resource_id));
        if let Some(id) = self.arena.get(element).source_id() {
            self.registry.register(element, id);
        }
        if is_connector {
            self.flow_targets.extend(&outgoing);
        }
        self.pending.record(element, outgoing);

        apply_properties(self.arena.get_mut(element), &properties);
        trace!(element:% = self.arena.get(element), children = children.len(); "Built element");

        let mut ctx = CompositionContext {
            pending: &self.pending,
            flow_targets: &self.flow_targets,
            lane_members: &mut self.lane_members,
        };
        compose(&mut self.arena, element, &children, &mut ctx);

        Ok(element)
    }
}
