//! Text-bearing records attached to elements.
//!
//! Every optional block in the model (auditing, monitoring, a connector's
//! condition) carries its content as a single [`Documentation`] entry. The
//! condition expression is documentation, not executable syntax.

/// A free-text documentation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documentation {
    text: String,
}

impl Documentation {
    /// Create a documentation entry holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the documentation text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Auditing block of a process, event or connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auditing {
    documentation: Documentation,
}

impl Auditing {
    /// Create an auditing block documented by `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            documentation: Documentation::new(text),
        }
    }

    /// Borrow the auditing documentation.
    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }
}

/// Monitoring block of an event or connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitoring {
    documentation: Documentation,
}

impl Monitoring {
    /// Create a monitoring block documented by `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            documentation: Documentation::new(text),
        }
    }

    /// Borrow the monitoring documentation.
    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }
}

/// A connector condition, kept as documentation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    documentation: Documentation,
}

impl Expression {
    /// Create an expression documented by `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            documentation: Documentation::new(text),
        }
    }

    /// Borrow the expression documentation.
    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }
}

/// Named data inputs and outputs of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoSpecification {
    data_inputs: Vec<String>,
    data_outputs: Vec<String>,
}

impl IoSpecification {
    /// Create an I/O specification from input and output names.
    pub fn new(data_inputs: Vec<String>, data_outputs: Vec<String>) -> Self {
        Self {
            data_inputs,
            data_outputs,
        }
    }

    /// Names of the data inputs, in declaration order.
    pub fn data_inputs(&self) -> &[String] {
        &self.data_inputs
    }

    /// Names of the data outputs, in declaration order.
    pub fn data_outputs(&self) -> &[String] {
        &self.data_outputs
    }

    /// Returns `true` if neither inputs nor outputs are declared.
    pub fn is_empty(&self) -> bool {
        self.data_inputs.is_empty() && self.data_outputs.is_empty()
    }
}
