//! Element factory keyed by diagram stencil identifiers.
//!
//! The diagram editor tags every shape with a stencil id (`Task`,
//! `ParallelGateway`, `StartTimerEvent`, ...). [`create_element`] maps such an
//! id, plus the optional task subtype hint, onto a new, empty [`ElementKind`].
//!
//! # Example
//!
//! ```
//! use shapeflow_core::{semantic::ElementKind, stencil::create_element};
//!
//! let kind = create_element("Task", Some("User")).expect("known stencil");
//! assert!(matches!(kind, ElementKind::Task(_)));
//!
//! assert!(create_element("Hexagon", None).is_err());
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::semantic::{
    Artifact, ArtifactKind, Definitions, ElementKind, Event, EventPosition, EventTrigger, Gateway,
    GatewayKind, Lane, Process, SequenceFlow, Task, TaskKind,
};

/// Errors raised by the element factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StencilError {
    #[error("unknown stencil `{0}`")]
    UnknownStencil(String),

    #[error("unknown task type `{0}`")]
    UnknownTaskType(String),
}

/// Shape category named by a stencil id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stencil {
    Diagram,
    Process,
    Lane,
    Task,
    Gateway(GatewayKind),
    Event(EventPosition, EventTrigger),
    SequenceFlow,
    Artifact(ArtifactKind),
}

impl FromStr for Stencil {
    type Err = StencilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stencil = match s {
            "BPMNDiagram" => Self::Diagram,
            "Pool" | "Process" => Self::Process,
            "Lane" => Self::Lane,
            "Task" => Self::Task,
            "SequenceFlow" => Self::SequenceFlow,
            "Exclusive_Databased_Gateway" => Self::Gateway(GatewayKind::Exclusive),
            "EventbasedGateway" => Self::Gateway(GatewayKind::EventBased),
            "ParallelGateway" => Self::Gateway(GatewayKind::Parallel),
            "InclusiveGateway" => Self::Gateway(GatewayKind::Inclusive),
            "ComplexGateway" => Self::Gateway(GatewayKind::Complex),
            "DataObject" => Self::Artifact(ArtifactKind::DataObject),
            "TextAnnotation" => Self::Artifact(ArtifactKind::TextAnnotation),
            "Group" => Self::Artifact(ArtifactKind::Group),
            other => {
                let (position, trigger) = parse_event_stencil(other)
                    .ok_or_else(|| StencilError::UnknownStencil(other.to_string()))?;
                Self::Event(position, trigger)
            }
        };
        Ok(stencil)
    }
}

/// Split an event stencil id such as `IntermediateMessageEventThrowing` into
/// its position and trigger.
///
/// Intermediate events without a `Catching`/`Throwing` suffix catch, except
/// the bare `IntermediateEvent`, which is the untriggered throw event.
fn parse_event_stencil(id: &str) -> Option<(EventPosition, EventTrigger)> {
    if let Some(rest) = id.strip_prefix("Start") {
        let trigger = rest.strip_suffix("Event")?.parse().ok()?;
        return Some((EventPosition::Start, trigger));
    }
    if let Some(rest) = id.strip_prefix("End") {
        let trigger = rest.strip_suffix("Event")?.parse().ok()?;
        return Some((EventPosition::End, trigger));
    }

    let rest = id.strip_prefix("Intermediate")?;
    let (middle, position) = if let Some(middle) = rest.strip_suffix("EventCatching") {
        (middle, EventPosition::IntermediateCatch)
    } else if let Some(middle) = rest.strip_suffix("EventThrowing") {
        (middle, EventPosition::IntermediateThrow)
    } else {
        let middle = rest.strip_suffix("Event")?;
        let position = if middle.is_empty() {
            EventPosition::IntermediateThrow
        } else {
            EventPosition::IntermediateCatch
        };
        (middle, position)
    };
    let trigger = middle.parse().ok()?;
    Some((position, trigger))
}

/// Create a new, empty element for a stencil id.
///
/// `task_type` is only consulted for `Task` stencils.
///
/// # Errors
///
/// Returns [`StencilError`] if the stencil id or, for tasks, the task type
/// hint is not recognized.
pub fn create_element(stencil_id: &str, task_type: Option<&str>) -> Result<ElementKind, StencilError> {
    let kind = match stencil_id.parse::<Stencil>()? {
        Stencil::Diagram => ElementKind::Definitions(Definitions::default()),
        Stencil::Process => ElementKind::Process(Process::default()),
        Stencil::Lane => ElementKind::Lane(Lane::default()),
        Stencil::Task => {
            let kind = TaskKind::from_hint(task_type).ok_or_else(|| {
                StencilError::UnknownTaskType(task_type.unwrap_or_default().to_string())
            })?;
            ElementKind::Task(Task::new(kind))
        }
        Stencil::Gateway(kind) => ElementKind::Gateway(Gateway::new(kind)),
        Stencil::Event(position, trigger) => ElementKind::Event(Event::new(position, trigger)),
        Stencil::SequenceFlow => ElementKind::SequenceFlow(SequenceFlow::default()),
        Stencil::Artifact(kind) => ElementKind::Artifact(Artifact::new(kind)),
    };
    Ok(kind)
}
