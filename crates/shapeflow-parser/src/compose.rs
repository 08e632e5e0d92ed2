//! Container assembly rules.
//!
//! A container element absorbs its already-built children, in document order,
//! once the children and the container itself have been constructed.
//!
//! - The document root reclassifies free-standing tasks as task templates,
//!   routes flow content into one implicit root process and attaches
//!   everything else directly.
//! - A process routes lanes into its single lane set, artifacts into its
//!   artifact list and flow content into its flow-element list, hoisting the
//!   content drawn inside its lanes.
//! - A lane records the flow nodes drawn inside it.

use std::collections::HashMap;

use log::{debug, trace};

use shapeflow_core::{
    identifier::ElementRef,
    semantic::{Element, ElementArena, ElementKind, GlobalTask, Process},
};

use crate::{pending::PendingEdgeTable, registry::SequenceFlowTargets};

/// Construction state the composition rules consult.
pub(crate) struct CompositionContext<'a> {
    pub(crate) pending: &'a PendingEdgeTable,
    pub(crate) flow_targets: &'a SequenceFlowTargets,
    pub(crate) lane_members: &'a mut LaneMembers,
}

/// Flow content and artifacts drawn inside each lane, in document order,
/// waiting for the enclosing process to adopt them.
#[derive(Debug, Default)]
pub(crate) struct LaneMembers {
    by_lane: HashMap<ElementRef, Vec<ElementRef>>,
}

impl LaneMembers {
    fn extend(&mut self, lane: ElementRef, members: impl IntoIterator<Item = ElementRef>) {
        self.by_lane.entry(lane).or_default().extend(members);
    }

    fn take(&mut self, lane: ElementRef) -> Vec<ElementRef> {
        self.by_lane.remove(&lane).unwrap_or_default()
    }
}

/// Compose `parent` from its children. Elements that are not containers are
/// left untouched.
pub(crate) fn compose(
    arena: &mut ElementArena,
    parent: ElementRef,
    children: &[ElementRef],
    ctx: &mut CompositionContext<'_>,
) {
    match arena.get(parent).kind() {
        ElementKind::Definitions(_) => compose_definitions(arena, parent, children, ctx),
        ElementKind::Process(_) => compose_process(arena, parent, children, ctx.lane_members),
        ElementKind::Lane(_) => compose_lane(arena, parent, children, ctx.lane_members),
        _ => {}
    }
}

/// Children of the document root routed during composition.
struct RootComposition {
    process_name: Option<String>,
    root_elements: Vec<ElementRef>,
    process: Option<(ElementRef, Process)>,
}

impl RootComposition {
    /// Get the implicit root process, creating and attaching it on first use.
    fn process(&mut self, arena: &mut ElementArena) -> &mut Process {
        let (_, process) = self.process.get_or_insert_with(|| {
            let mut element = Element::new(ElementKind::Process(Process::default()));
            element.set_name(self.process_name.clone());
            let handle = arena.push(element);
            self.root_elements.push(handle);
            debug!(process:% = handle; "Created implicit root process");
            (handle, Process::default())
        });
        process
    }
}

fn compose_definitions(
    arena: &mut ElementArena,
    root: ElementRef,
    children: &[ElementRef],
    ctx: &CompositionContext<'_>,
) {
    let mut composition = RootComposition {
        process_name: arena.get(root).name().map(str::to_string),
        root_elements: Vec::with_capacity(children.len()),
        process: None,
    };

    for &child in children {
        match root_route(arena.get(child), child, ctx) {
            RootRoute::Template => {
                reclassify_as_template(arena.get_mut(child));
                composition.root_elements.push(child);
            }
            RootRoute::FlowElement => composition.process(arena).add_flow_element(child),
            RootRoute::Artifact => composition.process(arena).add_artifact(child),
            RootRoute::Root => composition.root_elements.push(child),
        }
    }

    if let Some((handle, process)) = composition.process {
        arena.get_mut(handle).set_kind(ElementKind::Process(process));
    }
    if let ElementKind::Definitions(definitions) = arena.get_mut(root).kind_mut() {
        for element in composition.root_elements {
            definitions.add_root_element(element);
        }
    }
}

/// Destination of a child of the document root.
enum RootRoute {
    Template,
    FlowElement,
    Artifact,
    Root,
}

fn root_route(element: &Element, handle: ElementRef, ctx: &CompositionContext<'_>) -> RootRoute {
    match element.kind() {
        ElementKind::Task(_) if is_free_standing(element, handle, ctx) => RootRoute::Template,
        ElementKind::Task(_)
        | ElementKind::SequenceFlow(_)
        | ElementKind::Gateway(_)
        | ElementKind::Event(_) => RootRoute::FlowElement,
        ElementKind::Artifact(_) => RootRoute::Artifact,
        _ => RootRoute::Root,
    }
}

/// A root-level task with no outgoing connector that is no connector's target.
///
/// Both directions must be checked: a task that is only ever a target has an
/// empty outgoing list too.
fn is_free_standing(element: &Element, handle: ElementRef, ctx: &CompositionContext<'_>) -> bool {
    ctx.pending.has_no_outgoing(handle)
        && element
            .source_id()
            .is_none_or(|id| !ctx.flow_targets.contains(id))
}

/// Turn a task into the matching task template, keeping its arena slot,
/// source id, name and documentation.
fn reclassify_as_template(element: &mut Element) {
    let ElementKind::Task(task) = element.kind() else {
        return;
    };
    let template = GlobalTask::new(
        task.kind().global_counterpart(),
        task.io_specification().cloned(),
    );
    trace!(task:? = element.source_id(), template:% = template.kind(); "Reclassified free-standing task");
    element.set_kind(ElementKind::GlobalTask(template));
}

fn compose_process(
    arena: &mut ElementArena,
    parent: ElementRef,
    children: &[ElementRef],
    lane_members: &mut LaneMembers,
) {
    let mut lanes = Vec::new();
    let mut artifacts = Vec::new();
    let mut flow_elements = Vec::new();

    for &child in children {
        match arena.get(child).kind() {
            ElementKind::Lane(_) => {
                lanes.push(child);
                for member in lane_members.take(child) {
                    if matches!(arena.get(member).kind(), ElementKind::Artifact(_)) {
                        artifacts.push(member);
                    } else {
                        flow_elements.push(member);
                    }
                }
            }
            ElementKind::Artifact(_) => artifacts.push(child),
            ElementKind::Task(_)
            | ElementKind::SequenceFlow(_)
            | ElementKind::Gateway(_)
            | ElementKind::Event(_) => flow_elements.push(child),
            _ => {}
        }
    }

    if let ElementKind::Process(process) = arena.get_mut(parent).kind_mut() {
        for lane in lanes {
            process.lane_set_mut().add_lane(lane);
        }
        for artifact in artifacts {
            process.add_artifact(artifact);
        }
        for element in flow_elements {
            process.add_flow_element(element);
        }
    }
}

/// Nested lanes pass their members up to the enclosing lane.
fn compose_lane(
    arena: &mut ElementArena,
    parent: ElementRef,
    children: &[ElementRef],
    lane_members: &mut LaneMembers,
) {
    let mut flow_nodes = Vec::new();
    let mut members = Vec::new();
    for &child in children {
        match arena.get(child).kind() {
            kind if kind.is_flow_node() => {
                flow_nodes.push(child);
                members.push(child);
            }
            ElementKind::SequenceFlow(_) | ElementKind::Artifact(_) => members.push(child),
            ElementKind::Lane(_) => members.extend(lane_members.take(child)),
            _ => {}
        }
    }
    lane_members.extend(parent, members);

    if let ElementKind::Lane(lane) = arena.get_mut(parent).kind_mut() {
        for node in flow_nodes {
            lane.add_flow_node_ref(node);
        }
    }
}
