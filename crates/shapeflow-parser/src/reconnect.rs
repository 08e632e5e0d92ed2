//! Flow Reconnector: the single post-construction pass that turns recorded
//! outgoing ids into element references.
//!
//! - A connector's outgoing id names the flow node it leads to. The last id
//!   in the list wins; the connector also joins the node's incoming list.
//! - A flow node's outgoing ids name connectors, appended to the node's
//!   outgoing list in order. Each connector records the node as its source.

use std::collections::HashMap;

use log::{debug, trace};

use shapeflow_core::{
    identifier::ElementRef,
    semantic::{ElementArena, ElementKind},
};

use crate::{
    DuplicateIdPolicy,
    error::{Result, TranslateError, display_id},
    pending::PendingEdgeTable,
    registry::{IdentifierRegistry, ReverseRegistry},
};

/// Resolve every pending reference, consuming the table.
///
/// Returns the id-to-element index of the finished graph.
///
/// # Errors
///
/// - [`TranslateError::DuplicateIdentifier`] if the registry cannot be
///   inverted under `policy`.
/// - [`TranslateError::UnresolvedReference`] for an id that names no element.
/// - [`TranslateError::InvalidReference`] for an id that names an element of
///   the wrong kind, or an owner that cannot carry outgoing references.
pub(crate) fn reconnect(
    arena: &mut ElementArena,
    registry: &IdentifierRegistry,
    pending: PendingEdgeTable,
    policy: DuplicateIdPolicy,
) -> Result<HashMap<String, ElementRef>> {
    let reverse = registry.invert(policy)?;
    let mut resolved = 0usize;

    for (owner, ids) in pending.into_entries() {
        for id in &ids {
            let target = resolve(&reverse, registry, owner, id)?;
            let kind = arena.get(owner).kind();
            let is_connector = matches!(kind, ElementKind::SequenceFlow(_));
            let is_flow_node = kind.is_flow_node();

            if is_connector {
                connect_target(arena, registry, owner, target, id)?;
            } else if is_flow_node {
                connect_outgoing(arena, registry, owner, target, id)?;
            } else {
                return Err(invalid(
                    registry,
                    owner,
                    id,
                    "only flow nodes and sequence flows have outgoing references",
                ));
            }
            resolved += 1;
        }
    }

    debug!(resolved; "References resolved");
    Ok(reverse.into_index())
}

fn resolve(
    reverse: &ReverseRegistry<'_>,
    registry: &IdentifierRegistry,
    owner: ElementRef,
    id: &str,
) -> Result<ElementRef> {
    reverse
        .resolve(id)
        .ok_or_else(|| TranslateError::UnresolvedReference {
            owner: display_id(registry.source_id(owner)).to_string(),
            target: id.to_string(),
        })
}

/// Point `connector` at the flow node `target`, replacing any earlier target.
fn connect_target(
    arena: &mut ElementArena,
    registry: &IdentifierRegistry,
    connector: ElementRef,
    target: ElementRef,
    id: &str,
) -> Result<()> {
    if !arena.get(target).kind().is_flow_node() {
        return Err(invalid(
            registry,
            connector,
            id,
            "a sequence flow must lead to a flow node",
        ));
    }

    let previous = match arena.get_mut(connector).kind_mut() {
        ElementKind::SequenceFlow(flow) => {
            let previous = flow.target_ref();
            flow.set_target_ref(Some(target));
            previous
        }
        _ => None,
    };
    if let Some(node) = previous {
        if let Some(links) = arena.get_mut(node).flow_links_mut() {
            links.remove_incoming(connector);
        }
    }
    if let Some(links) = arena.get_mut(target).flow_links_mut() {
        links.add_incoming(connector);
    }

    trace!(connector:% = connector, target:% = target; "Connected sequence flow target");
    Ok(())
}

/// Append the connector `flow` to the outgoing list of `node`.
fn connect_outgoing(
    arena: &mut ElementArena,
    registry: &IdentifierRegistry,
    node: ElementRef,
    flow: ElementRef,
    id: &str,
) -> Result<()> {
    match arena.get_mut(flow).kind_mut() {
        ElementKind::SequenceFlow(connector) => connector.set_source_ref(Some(node)),
        _ => {
            return Err(invalid(
                registry,
                node,
                id,
                "a flow node's outgoing references must name sequence flows",
            ));
        }
    }
    if let Some(links) = arena.get_mut(node).flow_links_mut() {
        links.add_outgoing(flow);
    }

    trace!(node:% = node, flow:% = flow; "Connected outgoing sequence flow");
    Ok(())
}

fn invalid(
    registry: &IdentifierRegistry,
    owner: ElementRef,
    target: &str,
    reason: &'static str,
) -> TranslateError {
    TranslateError::InvalidReference {
        owner: display_id(registry.source_id(owner)).to_string(),
        target: target.to_string(),
        reason,
    }
}
