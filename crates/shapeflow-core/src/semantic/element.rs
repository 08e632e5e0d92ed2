//! Element types for the process graph model.

use std::fmt;

use crate::{
    identifier::ElementRef,
    semantic::{
        kind::{ArtifactKind, EventPosition, EventTrigger, GatewayKind, GlobalTaskKind, ProcessType, TaskKind},
        record::{Auditing, Documentation, Expression, IoSpecification, Monitoring},
    },
};

/// A node of the process graph.
///
/// Fields common to every element live here; variant-specific data lives
/// in [`ElementKind`].
#[derive(Debug, Clone)]
pub struct Element {
    source_id: Option<String>,
    name: Option<String>,
    documentation: Vec<Documentation>,
    kind: ElementKind,
}

impl Element {
    /// Create an unnamed, undocumented element of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            source_id: None,
            name: None,
            documentation: Vec::new(),
            kind,
        }
    }

    /// Attach the identifier the element had in the source document.
    pub fn with_source_id(mut self, source_id: Option<String>) -> Self {
        self.source_id = source_id;
        self
    }

    /// Get the identifier the element had in the source document.
    ///
    /// Elements synthesized during translation (such as the implicit root
    /// process) have none.
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Get the element name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace the element name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Borrow the documentation entries, in attachment order.
    pub fn documentation(&self) -> &[Documentation] {
        &self.documentation
    }

    /// Append a documentation entry.
    pub fn add_documentation(&mut self, documentation: Documentation) {
        self.documentation.push(documentation);
    }

    /// Borrow the variant-specific data.
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Mutably borrow the variant-specific data.
    pub fn kind_mut(&mut self) -> &mut ElementKind {
        &mut self.kind
    }

    /// Replace the variant-specific data, keeping name, documentation and source id.
    pub fn set_kind(&mut self, kind: ElementKind) {
        self.kind = kind;
    }

    /// Borrow the incoming/outgoing connector lists if this is a flow node.
    pub fn flow_links(&self) -> Option<&FlowLinks> {
        match &self.kind {
            ElementKind::Task(task) => Some(&task.links),
            ElementKind::Gateway(gateway) => Some(&gateway.links),
            ElementKind::Event(event) => Some(&event.links),
            _ => None,
        }
    }

    /// Mutably borrow the incoming/outgoing connector lists if this is a flow node.
    pub fn flow_links_mut(&mut self) -> Option<&mut FlowLinks> {
        match &mut self.kind {
            ElementKind::Task(task) => Some(&mut task.links),
            ElementKind::Gateway(gateway) => Some(&mut gateway.links),
            ElementKind::Event(event) => Some(&mut event.links),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(name) = &self.name {
            write!(f, " \"{name}\"")?;
        }
        if let Some(id) = &self.source_id {
            write!(f, " [{id}]")?;
        }
        Ok(())
    }
}

/// Variant-specific data of an [`Element`].
#[derive(Debug, Clone)]
pub enum ElementKind {
    Definitions(Definitions),
    Process(Process),
    Lane(Lane),
    Task(Task),
    Gateway(Gateway),
    Event(Event),
    SequenceFlow(SequenceFlow),
    Artifact(Artifact),
    GlobalTask(GlobalTask),
}

impl ElementKind {
    /// Returns `true` for kinds that carry incoming and outgoing connectors.
    pub fn is_flow_node(&self) -> bool {
        matches!(self, Self::Task(_) | Self::Gateway(_) | Self::Event(_))
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definitions(_) => f.write_str("definitions"),
            Self::Process(_) => f.write_str("process"),
            Self::Lane(_) => f.write_str("lane"),
            Self::Task(task) => write!(f, "{}", task.kind),
            Self::Gateway(gateway) => write!(f, "{}", gateway.kind),
            Self::Event(event) => write!(f, "{:?} {:?} event", event.position, event.trigger),
            Self::SequenceFlow(_) => f.write_str("sequence flow"),
            Self::Artifact(artifact) => write!(f, "{:?}", artifact.kind),
            Self::GlobalTask(task) => write!(f, "{}", task.kind),
        }
    }
}

/// Document root: holds every top-level element.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    type_language: Option<String>,
    target_namespace: Option<String>,
    expression_language: Option<String>,
    root_elements: Vec<ElementRef>,
}

impl Definitions {
    /// Get the type language URI.
    pub fn type_language(&self) -> Option<&str> {
        self.type_language.as_deref()
    }

    /// Get the target namespace.
    pub fn target_namespace(&self) -> Option<&str> {
        self.target_namespace.as_deref()
    }

    /// Get the expression language URI.
    pub fn expression_language(&self) -> Option<&str> {
        self.expression_language.as_deref()
    }

    /// Top-level elements, in attachment order.
    pub fn root_elements(&self) -> &[ElementRef] {
        &self.root_elements
    }

    pub fn set_type_language(&mut self, value: Option<String>) {
        self.type_language = value;
    }

    pub fn set_target_namespace(&mut self, value: Option<String>) {
        self.target_namespace = value;
    }

    pub fn set_expression_language(&mut self, value: Option<String>) {
        self.expression_language = value;
    }

    /// Attach a top-level element.
    pub fn add_root_element(&mut self, element: ElementRef) {
        self.root_elements.push(element);
    }
}

/// A process container.
#[derive(Debug, Clone, Default)]
pub struct Process {
    process_type: Option<ProcessType>,
    is_closed: bool,
    auditing: Option<Auditing>,
    flow_elements: Vec<ElementRef>,
    artifacts: Vec<ElementRef>,
    lane_set: Option<LaneSet>,
}

impl Process {
    pub fn process_type(&self) -> Option<ProcessType> {
        self.process_type
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn auditing(&self) -> Option<&Auditing> {
        self.auditing.as_ref()
    }

    /// Tasks, connectors, gateways and events of this process, in document order.
    pub fn flow_elements(&self) -> &[ElementRef] {
        &self.flow_elements
    }

    /// Artifacts of this process, in document order.
    pub fn artifacts(&self) -> &[ElementRef] {
        &self.artifacts
    }

    /// The lane set, if any lane has been added.
    pub fn lane_set(&self) -> Option<&LaneSet> {
        self.lane_set.as_ref()
    }

    pub fn set_process_type(&mut self, value: Option<ProcessType>) {
        self.process_type = value;
    }

    pub fn set_closed(&mut self, value: bool) {
        self.is_closed = value;
    }

    pub fn set_auditing(&mut self, value: Option<Auditing>) {
        self.auditing = value;
    }

    pub fn add_flow_element(&mut self, element: ElementRef) {
        self.flow_elements.push(element);
    }

    pub fn add_artifact(&mut self, element: ElementRef) {
        self.artifacts.push(element);
    }

    /// Get the lane set, creating it on first use.
    ///
    /// A process only ever owns a single lane set; every lane is added to it.
    pub fn lane_set_mut(&mut self) -> &mut LaneSet {
        self.lane_set.get_or_insert_with(LaneSet::default)
    }
}

/// Grouping of the lanes of a process.
#[derive(Debug, Clone, Default)]
pub struct LaneSet {
    lanes: Vec<ElementRef>,
}

impl LaneSet {
    pub fn lanes(&self) -> &[ElementRef] {
        &self.lanes
    }

    pub fn add_lane(&mut self, lane: ElementRef) {
        self.lanes.push(lane);
    }
}

/// A lane partitioning a process.
#[derive(Debug, Clone, Default)]
pub struct Lane {
    flow_node_refs: Vec<ElementRef>,
}

impl Lane {
    /// Flow nodes drawn inside this lane.
    pub fn flow_node_refs(&self) -> &[ElementRef] {
        &self.flow_node_refs
    }

    pub fn add_flow_node_ref(&mut self, node: ElementRef) {
        self.flow_node_refs.push(node);
    }
}

/// Connector lists of a flow node.
#[derive(Debug, Clone, Default)]
pub struct FlowLinks {
    incoming: Vec<ElementRef>,
    outgoing: Vec<ElementRef>,
}

impl FlowLinks {
    /// Connectors targeting this node.
    pub fn incoming(&self) -> &[ElementRef] {
        &self.incoming
    }

    /// Connectors leaving this node, in source order.
    pub fn outgoing(&self) -> &[ElementRef] {
        &self.outgoing
    }

    pub fn add_incoming(&mut self, connector: ElementRef) {
        self.incoming.push(connector);
    }

    pub fn add_outgoing(&mut self, connector: ElementRef) {
        self.outgoing.push(connector);
    }

    /// Drop `connector` from the incoming list, e.g. when it is retargeted.
    pub fn remove_incoming(&mut self, connector: ElementRef) {
        self.incoming.retain(|&incoming| incoming != connector);
    }
}

/// An in-process task.
#[derive(Debug, Clone, Default)]
pub struct Task {
    kind: TaskKind,
    io_specification: Option<IoSpecification>,
    links: FlowLinks,
}

impl Task {
    pub fn new(kind: TaskKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut TaskKind {
        &mut self.kind
    }

    pub fn io_specification(&self) -> Option<&IoSpecification> {
        self.io_specification.as_ref()
    }

    pub fn set_io_specification(&mut self, value: Option<IoSpecification>) {
        self.io_specification = value;
    }

    pub fn links(&self) -> &FlowLinks {
        &self.links
    }
}

/// A branching or merging point.
#[derive(Debug, Clone)]
pub struct Gateway {
    kind: GatewayKind,
    links: FlowLinks,
}

impl Gateway {
    pub fn new(kind: GatewayKind) -> Self {
        Self {
            kind,
            links: FlowLinks::default(),
        }
    }

    pub fn kind(&self) -> GatewayKind {
        self.kind
    }

    pub fn links(&self) -> &FlowLinks {
        &self.links
    }
}

/// A start, intermediate or end event.
#[derive(Debug, Clone)]
pub struct Event {
    position: EventPosition,
    trigger: EventTrigger,
    auditing: Option<Auditing>,
    monitoring: Option<Monitoring>,
    links: FlowLinks,
}

impl Event {
    pub fn new(position: EventPosition, trigger: EventTrigger) -> Self {
        Self {
            position,
            trigger,
            auditing: None,
            monitoring: None,
            links: FlowLinks::default(),
        }
    }

    pub fn position(&self) -> EventPosition {
        self.position
    }

    pub fn trigger(&self) -> EventTrigger {
        self.trigger
    }

    pub fn auditing(&self) -> Option<&Auditing> {
        self.auditing.as_ref()
    }

    pub fn monitoring(&self) -> Option<&Monitoring> {
        self.monitoring.as_ref()
    }

    pub fn set_auditing(&mut self, value: Option<Auditing>) {
        self.auditing = value;
    }

    pub fn set_monitoring(&mut self, value: Option<Monitoring>) {
        self.monitoring = value;
    }

    pub fn links(&self) -> &FlowLinks {
        &self.links
    }
}

/// A directed connector between two flow nodes.
#[derive(Debug, Clone, Default)]
pub struct SequenceFlow {
    source_ref: Option<ElementRef>,
    target_ref: Option<ElementRef>,
    condition_expression: Option<Expression>,
    auditing: Option<Auditing>,
    monitoring: Option<Monitoring>,
    is_immediate: bool,
}

impl SequenceFlow {
    /// The flow node whose outgoing list names this connector.
    pub fn source_ref(&self) -> Option<ElementRef> {
        self.source_ref
    }

    /// The flow node this connector leads to.
    pub fn target_ref(&self) -> Option<ElementRef> {
        self.target_ref
    }

    pub fn condition_expression(&self) -> Option<&Expression> {
        self.condition_expression.as_ref()
    }

    pub fn auditing(&self) -> Option<&Auditing> {
        self.auditing.as_ref()
    }

    pub fn monitoring(&self) -> Option<&Monitoring> {
        self.monitoring.as_ref()
    }

    pub fn is_immediate(&self) -> bool {
        self.is_immediate
    }

    pub fn set_source_ref(&mut self, value: Option<ElementRef>) {
        self.source_ref = value;
    }

    pub fn set_target_ref(&mut self, value: Option<ElementRef>) {
        self.target_ref = value;
    }

    pub fn set_condition_expression(&mut self, value: Option<Expression>) {
        self.condition_expression = value;
    }

    pub fn set_auditing(&mut self, value: Option<Auditing>) {
        self.auditing = value;
    }

    pub fn set_monitoring(&mut self, value: Option<Monitoring>) {
        self.monitoring = value;
    }

    pub fn set_immediate(&mut self, value: bool) {
        self.is_immediate = value;
    }
}

/// An annotation that does not take part in the flow.
#[derive(Debug, Clone)]
pub struct Artifact {
    kind: ArtifactKind,
}

impl Artifact {
    pub fn new(kind: ArtifactKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }
}

/// A reusable, connector-free task template.
#[derive(Debug, Clone, Default)]
pub struct GlobalTask {
    kind: GlobalTaskKind,
    io_specification: Option<IoSpecification>,
}

impl GlobalTask {
    pub fn new(kind: GlobalTaskKind, io_specification: Option<IoSpecification>) -> Self {
        Self {
            kind,
            io_specification,
        }
    }

    pub fn kind(&self) -> &GlobalTaskKind {
        &self.kind
    }

    pub fn io_specification(&self) -> Option<&IoSpecification> {
        self.io_specification.as_ref()
    }
}
