//! Subtype enumerations for the element variants.

use std::{fmt, str::FromStr};

/// Script body and language carried by script tasks and script templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    body: Option<String>,
    language: Option<String>,
}

impl Script {
    /// Create a script from an optional body and language.
    pub fn new(body: Option<String>, language: Option<String>) -> Self {
        Self { body, language }
    }

    /// Get the script body.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Get the script language.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Replace the script body.
    pub fn set_body(&mut self, body: Option<String>) {
        self.body = body;
    }

    /// Replace the script language.
    pub fn set_language(&mut self, language: Option<String>) {
        self.language = language;
    }
}

/// Subvariant of an in-process task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskKind {
    #[default]
    Plain,
    Script(Script),
    User,
    Service,
    Manual,
    BusinessRule,
}

impl TaskKind {
    /// Parse the task subtype hint found in a shape's property bag.
    ///
    /// A missing or empty hint, as well as `None`, selects a plain task.
    /// Returns `None` for hints that name no known subtype.
    pub fn from_hint(hint: Option<&str>) -> Option<Self> {
        match hint.map(str::trim).unwrap_or_default() {
            "" | "None" => Some(Self::Plain),
            "Script" => Some(Self::Script(Script::default())),
            "User" => Some(Self::User),
            "Service" => Some(Self::Service),
            "Manual" => Some(Self::Manual),
            "Business Rule" | "BusinessRule" => Some(Self::BusinessRule),
            _ => None,
        }
    }

    /// The template subvariant a free-standing task of this kind becomes.
    ///
    /// There is no service template; service tasks fall back to the generic one.
    pub fn global_counterpart(&self) -> GlobalTaskKind {
        match self {
            Self::Script(script) => GlobalTaskKind::Script(script.clone()),
            Self::User => GlobalTaskKind::User,
            Self::BusinessRule => GlobalTaskKind::BusinessRule,
            Self::Manual => GlobalTaskKind::Manual,
            Self::Plain | Self::Service => GlobalTaskKind::Generic,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plain => "task",
            Self::Script(_) => "script task",
            Self::User => "user task",
            Self::Service => "service task",
            Self::Manual => "manual task",
            Self::BusinessRule => "business rule task",
        };
        f.write_str(name)
    }
}

/// Subvariant of a reusable task template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GlobalTaskKind {
    #[default]
    Generic,
    Script(Script),
    User,
    BusinessRule,
    Manual,
}

impl fmt::Display for GlobalTaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Generic => "global task",
            Self::Script(_) => "global script task",
            Self::User => "global user task",
            Self::BusinessRule => "global business rule task",
            Self::Manual => "global manual task",
        };
        f.write_str(name)
    }
}

/// Gateway branching behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayKind {
    Exclusive,
    EventBased,
    Parallel,
    Inclusive,
    Complex,
}

impl fmt::Display for GatewayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exclusive => "exclusive gateway",
            Self::EventBased => "event-based gateway",
            Self::Parallel => "parallel gateway",
            Self::Inclusive => "inclusive gateway",
            Self::Complex => "complex gateway",
        };
        f.write_str(name)
    }
}

/// Where an event sits in a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPosition {
    Start,
    IntermediateCatch,
    IntermediateThrow,
    End,
}

/// What triggers (or is produced by) an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventTrigger {
    #[default]
    None,
    Message,
    Timer,
    Error,
    Signal,
    Conditional,
    Terminate,
    Escalation,
    Compensation,
    Multiple,
    Link,
    Cancel,
}

impl FromStr for EventTrigger {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "None" => Ok(Self::None),
            "Message" => Ok(Self::Message),
            "Timer" => Ok(Self::Timer),
            "Error" => Ok(Self::Error),
            "Signal" => Ok(Self::Signal),
            "Conditional" => Ok(Self::Conditional),
            "Terminate" => Ok(Self::Terminate),
            "Escalation" => Ok(Self::Escalation),
            "Compensation" => Ok(Self::Compensation),
            "Multiple" => Ok(Self::Multiple),
            "Link" => Ok(Self::Link),
            "Cancel" => Ok(Self::Cancel),
            _ => Err("Invalid event trigger"),
        }
    }
}

/// Kind of a non-flow annotation element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    DataObject,
    TextAnnotation,
    Group,
}

/// Process visibility, looked up by exact name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessType {
    None,
    Public,
    Private,
}

impl FromStr for ProcessType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Public" => Ok(Self::Public),
            "Private" => Ok(Self::Private),
            _ => Err("Invalid process type"),
        }
    }
}
