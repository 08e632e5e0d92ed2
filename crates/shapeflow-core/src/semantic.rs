//! Typed process graph model.
//!
//! The model is a tree of [`Element`]s rooted at a [`Definitions`] element,
//! with flow references (connector sources and targets, flow node incoming
//! and outgoing lists) expressed as [`ElementRef`](crate::identifier::ElementRef)
//! handles into a shared arena.

mod element;
mod graph;
mod kind;
mod record;

pub use element::{
    Artifact, Definitions, Element, ElementKind, Event, FlowLinks, Gateway, GlobalTask, Lane,
    LaneSet, Process, SequenceFlow, Task,
};
pub use graph::{ElementArena, ProcessGraph};
pub use kind::{
    ArtifactKind, EventPosition, EventTrigger, GatewayKind, GlobalTaskKind, ProcessType, Script,
    TaskKind,
};
pub use record::{Auditing, Documentation, Expression, IoSpecification, Monitoring};
