//! Mapping of a shape's flat property bag onto a typed element.
//!
//! Base fields shared by every element are applied first, then the fields of
//! the element's variant. A property that is missing and one that is present
//! with an empty value are treated alike whenever they would create an
//! optional block (documentation, auditing, monitoring, condition).

use shapeflow_core::semantic::{
    Auditing, Documentation, Element, ElementKind, Expression, IoSpecification, Monitoring,
    TaskKind,
};

use crate::raw::PropertyBag;

/// Property keys understood by the translator.
mod key {
    pub(super) const DOCUMENTATION: &str = "documentation";
    pub(super) const NAME: &str = "name";
    pub(super) const TYPE_LANGUAGE: &str = "typelanguage";
    pub(super) const TARGET_NAMESPACE: &str = "targetnamespace";
    pub(super) const EXPRESSION_LANGUAGE: &str = "expressionlanguage";
    pub(super) const AUDITING: &str = "auditing";
    pub(super) const MONITORING: &str = "monitoring";
    pub(super) const PROCESS_TYPE: &str = "processtype";
    pub(super) const IS_CLOSED: &str = "isclosed";
    pub(super) const SCRIPT: &str = "script";
    pub(super) const SCRIPT_LANGUAGE: &str = "script_language";
    pub(super) const CONDITION_EXPRESSION: &str = "conditionexpression";
    pub(super) const IS_IMMEDIATE: &str = "isimmediate";
    pub(super) const DATA_INPUT_SET: &str = "datainputset";
    pub(super) const DATA_OUTPUT_SET: &str = "dataoutputset";
}

/// Apply `properties` to a freshly created element.
pub(crate) fn apply_properties(element: &mut Element, properties: &PropertyBag) {
    if let Some(text) = non_empty(properties, key::DOCUMENTATION) {
        element.add_documentation(Documentation::new(text));
    }

    // Artifacts carry base fields only.
    if !matches!(element.kind(), ElementKind::Artifact(_)) {
        element.set_name(verbatim(properties, key::NAME));
    }

    match element.kind_mut() {
        ElementKind::Definitions(definitions) => {
            definitions.set_type_language(verbatim(properties, key::TYPE_LANGUAGE));
            definitions.set_target_namespace(verbatim(properties, key::TARGET_NAMESPACE));
            definitions.set_expression_language(verbatim(properties, key::EXPRESSION_LANGUAGE));
        }
        ElementKind::Process(process) => {
            process.set_auditing(non_empty(properties, key::AUDITING).map(Auditing::new));
            process.set_process_type(
                properties
                    .get(key::PROCESS_TYPE)
                    .and_then(|name| name.parse().ok()),
            );
            process.set_closed(flag(properties, key::IS_CLOSED));
        }
        ElementKind::Task(task) => {
            task.set_io_specification(io_specification(properties));
            if let TaskKind::Script(script) = task.kind_mut() {
                script.set_body(verbatim(properties, key::SCRIPT));
                script.set_language(verbatim(properties, key::SCRIPT_LANGUAGE));
            }
        }
        ElementKind::SequenceFlow(flow) => {
            flow.set_auditing(non_empty(properties, key::AUDITING).map(Auditing::new));
            flow.set_condition_expression(
                non_empty(properties, key::CONDITION_EXPRESSION).map(Expression::new),
            );
            flow.set_monitoring(non_empty(properties, key::MONITORING).map(Monitoring::new));
            flow.set_immediate(flag(properties, key::IS_IMMEDIATE));
        }
        ElementKind::Event(event) => {
            event.set_auditing(non_empty(properties, key::AUDITING).map(Auditing::new));
            event.set_monitoring(non_empty(properties, key::MONITORING).map(Monitoring::new));
        }
        // A template's I/O specification is copied from its source task, never from properties.
        ElementKind::Lane(_)
        | ElementKind::Gateway(_)
        | ElementKind::GlobalTask(_)
        | ElementKind::Artifact(_) => {}
    }
}

/// The value of `key`, copied as is. Absent stays absent.
fn verbatim(properties: &PropertyBag, key: &str) -> Option<String> {
    properties.get(key).cloned()
}

/// The value of `key` if present and non-empty.
fn non_empty<'a>(properties: &'a PropertyBag, key: &str) -> Option<&'a str> {
    properties
        .get(key)
        .map(String::as_str)
        .filter(|text| !text.is_empty())
}

/// Boolean-like value of `key`: `true` in any letter case, otherwise false.
fn flag(properties: &PropertyBag, key: &str) -> bool {
    properties
        .get(key)
        .is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

/// Task I/O specification from comma-separated input and output name lists.
fn io_specification(properties: &PropertyBag) -> Option<IoSpecification> {
    let names = |key: &str| -> Vec<String> {
        non_empty(properties, key)
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    };

    let io = IoSpecification::new(names(key::DATA_INPUT_SET), names(key::DATA_OUTPUT_SET));
    (!io.is_empty()).then_some(io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeflow_core::{
        semantic::{ArtifactKind, ProcessType},
        stencil::create_element,
    };

    fn bag(pairs: &[(&str, &str)]) -> PropertyBag {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn element(stencil: &str, task_type: Option<&str>, properties: &PropertyBag) -> Element {
        let kind = create_element(stencil, task_type).expect("known stencil");
        let mut element = Element::new(kind);
        apply_properties(&mut element, properties);
        element
    }

    #[test]
    fn test_documentation_requires_non_empty_value() {
        let documented = element("Task", None, &bag(&[("documentation", "Read me")]));
        assert_eq!(documented.documentation().len(), 1);
        assert_eq!(documented.documentation()[0].text(), "Read me");

        let empty = element("Task", None, &bag(&[("documentation", "")]));
        assert!(empty.documentation().is_empty());

        let missing = element("Task", None, &bag(&[]));
        assert!(missing.documentation().is_empty());
    }

    #[test]
    fn test_definitions_fields() {
        let root = element(
            "BPMNDiagram",
            None,
            &bag(&[
                ("name", "Orders"),
                ("typelanguage", "http://www.w3.org/2001/XMLSchema"),
                ("targetnamespace", "http://example.com/orders"),
            ]),
        );

        assert_eq!(root.name(), Some("Orders"));
        let ElementKind::Definitions(definitions) = root.kind() else {
            panic!("Expected definitions");
        };
        assert_eq!(
            definitions.type_language(),
            Some("http://www.w3.org/2001/XMLSchema")
        );
        assert_eq!(
            definitions.target_namespace(),
            Some("http://example.com/orders")
        );
        assert_eq!(definitions.expression_language(), None);
    }

    #[test]
    fn test_process_fields() {
        let process = element(
            "Pool",
            None,
            &bag(&[
                ("name", "Billing"),
                ("auditing", "audit trail"),
                ("processtype", "Private"),
                ("isclosed", "TRUE"),
            ]),
        );

        assert_eq!(process.name(), Some("Billing"));
        let ElementKind::Process(process) = process.kind() else {
            panic!("Expected process");
        };
        assert_eq!(
            process.auditing().map(|a| a.documentation().text()),
            Some("audit trail")
        );
        assert_eq!(process.process_type(), Some(ProcessType::Private));
        assert!(process.is_closed());
    }

    #[test]
    fn test_process_lenient_values() {
        let process = element(
            "Pool",
            None,
            &bag(&[("processtype", "Secret"), ("isclosed", "yes"), ("auditing", "")]),
        );

        let ElementKind::Process(process) = process.kind() else {
            panic!("Expected process");
        };
        assert_eq!(process.process_type(), None);
        assert!(!process.is_closed());
        assert!(process.auditing().is_none());
    }

    #[test]
    fn test_script_task_fields() {
        let task = element(
            "Task",
            Some("Script"),
            &bag(&[
                ("name", "Compute"),
                ("script", "total = a + b"),
                ("script_language", "groovy"),
            ]),
        );

        assert_eq!(task.name(), Some("Compute"));
        let ElementKind::Task(task) = task.kind() else {
            panic!("Expected task");
        };
        let TaskKind::Script(script) = task.kind() else {
            panic!("Expected script task");
        };
        assert_eq!(script.body(), Some("total = a + b"));
        assert_eq!(script.language(), Some("groovy"));
    }

    #[test]
    fn test_task_io_specification() {
        let task = element(
            "Task",
            None,
            &bag(&[("datainputset", "order, customer,,"), ("dataoutputset", "")]),
        );

        let ElementKind::Task(task) = task.kind() else {
            panic!("Expected task");
        };
        let io = task.io_specification().expect("io specification");
        assert_eq!(io.data_inputs(), ["order", "customer"]);
        assert!(io.data_outputs().is_empty());

        let bare = element("Task", None, &bag(&[("datainputset", " , ")]));
        let ElementKind::Task(bare) = bare.kind() else {
            panic!("Expected task");
        };
        assert!(bare.io_specification().is_none());
    }

    #[test]
    fn test_sequence_flow_fields() {
        let flow = element(
            "SequenceFlow",
            None,
            &bag(&[
                ("name", "approved"),
                ("conditionexpression", "amount < 1000"),
                ("monitoring", "count approvals"),
                ("auditing", ""),
                ("isimmediate", "true"),
            ]),
        );

        assert_eq!(flow.name(), Some("approved"));
        let ElementKind::SequenceFlow(flow) = flow.kind() else {
            panic!("Expected sequence flow");
        };
        assert_eq!(
            flow.condition_expression()
                .map(|expr| expr.documentation().text()),
            Some("amount < 1000")
        );
        assert_eq!(
            flow.monitoring().map(|m| m.documentation().text()),
            Some("count approvals")
        );
        assert!(flow.auditing().is_none());
        assert!(flow.is_immediate());
    }

    #[test]
    fn test_event_fields() {
        let event = element(
            "StartNoneEvent",
            None,
            &bag(&[("name", "Begin"), ("auditing", "log start")]),
        );

        assert_eq!(event.name(), Some("Begin"));
        let ElementKind::Event(event) = event.kind() else {
            panic!("Expected event");
        };
        assert!(event.auditing().is_some());
        assert!(event.monitoring().is_none());
    }

    #[test]
    fn test_name_only_kinds() {
        let gateway = element("ParallelGateway", None, &bag(&[("name", "Fork")]));
        let lane = element("Lane", None, &bag(&[("name", "Clerk")]));

        assert_eq!(gateway.name(), Some("Fork"));
        assert_eq!(lane.name(), Some("Clerk"));
    }

    #[test]
    fn test_artifact_keeps_base_fields_only() {
        let artifact = element(
            "TextAnnotation",
            None,
            &bag(&[("name", "Note"), ("documentation", "see policy")]),
        );

        assert_eq!(artifact.name(), None);
        assert_eq!(artifact.documentation().len(), 1);
        assert!(matches!(
            artifact.kind(),
            ElementKind::Artifact(a) if a.kind() == ArtifactKind::TextAnnotation
        ));
    }

    #[test]
    fn test_empty_name_is_copied_verbatim() {
        let task = element("Task", None, &bag(&[("name", "")]));
        assert_eq!(task.name(), Some(""));
    }
}
