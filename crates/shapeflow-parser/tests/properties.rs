use proptest::prelude::*;
use serde_json::{Map, Value, json};

use shapeflow_core::semantic::{ElementKind, ProcessGraph};
use shapeflow_parser::{TranslateConfig, translate_str};

// ===================
// Strategies
// ===================

/// A property value that is missing, empty, or holds some text.
fn optional_text_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-zA-Z0-9 <>=]{1,16}".prop_map(Some),
    ]
}

/// Stencils of root-level shapes that never become templates.
fn root_child_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("ParallelGateway"),
        Just("Exclusive_Databased_Gateway"),
        Just("StartNoneEvent"),
        Just("EndErrorEvent"),
        Just("DataObject"),
        Just("TextAnnotation"),
        Just("Task"),
    ]
}

// ===================
// Helpers
// ===================

fn diagram(children: Vec<Value>) -> String {
    json!({
        "resourceId": "canvas",
        "properties": {"name": "Generated"},
        "stencil": {"id": "BPMNDiagram"},
        "childShapes": children,
    })
    .to_string()
}

fn translate(json: &str) -> Result<ProcessGraph, TestCaseError> {
    translate_str(json, &TranslateConfig::default())
        .map_err(|err| TestCaseError::fail(format!("translation failed: {err}")))
}

fn source_ids<'a>(graph: &'a ProcessGraph, handles: &[shapeflow_core::identifier::ElementRef]) -> Vec<&'a str> {
    handles
        .iter()
        .filter_map(|&handle| graph.get(handle).source_id())
        .collect()
}

// ===================
// Property Test Functions
// ===================

/// Optional blocks exist exactly when their property holds non-empty text.
fn check_optional_blocks(
    documentation: Option<String>,
    auditing: Option<String>,
    monitoring: Option<String>,
    condition: Option<String>,
) -> Result<(), TestCaseError> {
    let mut properties = Map::new();
    for (key, value) in [
        ("documentation", &documentation),
        ("auditing", &auditing),
        ("monitoring", &monitoring),
        ("conditionexpression", &condition),
    ] {
        if let Some(text) = value {
            properties.insert(key.to_string(), Value::String(text.clone()));
        }
    }

    let json = diagram(vec![
        json!({"resourceId": "a", "stencil": {"id": "Task"}, "outgoing": [{"resourceId": "f"}]}),
        json!({"resourceId": "f", "stencil": {"id": "SequenceFlow"}, "properties": properties,
               "outgoing": [{"resourceId": "b"}]}),
        json!({"resourceId": "b", "stencil": {"id": "EndNoneEvent"}}),
    ]);
    let graph = translate(&json)?;

    let expected = |value: &Option<String>| value.as_deref().is_some_and(|text| !text.is_empty());
    let flow_element = graph.get(graph.lookup("f").expect("f is registered"));
    let ElementKind::SequenceFlow(flow) = flow_element.kind() else {
        return Err(TestCaseError::fail("f is not a sequence flow"));
    };

    prop_assert_eq!(!flow_element.documentation().is_empty(), expected(&documentation));
    prop_assert_eq!(flow.auditing().is_some(), expected(&auditing));
    prop_assert_eq!(flow.monitoring().is_some(), expected(&monitoring));
    prop_assert_eq!(flow.condition_expression().is_some(), expected(&condition));
    Ok(())
}

/// Root-level children keep their input order in every container they land in.
fn check_child_order(stencils: &[&'static str]) -> Result<(), TestCaseError> {
    let children = stencils
        .iter()
        .enumerate()
        .map(|(index, stencil)| json!({"resourceId": format!("c{index}"), "stencil": {"id": stencil}}))
        .collect();
    let graph = translate(&diagram(children))?;

    let mut templates = Vec::new();
    let mut flow_elements = Vec::new();
    let mut artifacts = Vec::new();
    for (index, stencil) in stencils.iter().enumerate() {
        let id = format!("c{index}");
        match *stencil {
            "Task" => templates.push(id),
            "DataObject" | "TextAnnotation" => artifacts.push(id),
            _ => flow_elements.push(id),
        }
    }

    let definitions = graph.definitions();
    let mut root_templates = Vec::new();
    let mut processes = Vec::new();
    for &handle in definitions.root_elements() {
        match graph.get(handle).kind() {
            ElementKind::GlobalTask(_) => {
                root_templates.extend(graph.get(handle).source_id().map(str::to_string));
            }
            ElementKind::Process(process) => processes.push(process),
            other => return Err(TestCaseError::fail(format!("unexpected root element {other:?}"))),
        }
    }

    prop_assert_eq!(&root_templates, &templates);
    let needs_process = !flow_elements.is_empty() || !artifacts.is_empty();
    prop_assert_eq!(processes.len(), usize::from(needs_process));
    if let Some(process) = processes.first() {
        prop_assert_eq!(source_ids(&graph, process.flow_elements()), flow_elements);
        prop_assert_eq!(source_ids(&graph, process.artifacts()), artifacts);
    }
    Ok(())
}

/// Any chain of connected root-level tasks stays in the implicit process.
fn check_connected_tasks_stay_in_process(length: usize) -> Result<(), TestCaseError> {
    let mut children = Vec::new();
    for index in 0..length {
        children.push(json!({
            "resourceId": format!("t{index}"),
            "stencil": {"id": "Task"},
            "outgoing": [{"resourceId": format!("f{index}")}],
        }));
        children.push(json!({
            "resourceId": format!("f{index}"),
            "stencil": {"id": "SequenceFlow"},
            "outgoing": [{"resourceId": format!("t{}", index + 1)}],
        }));
    }
    children.push(json!({"resourceId": format!("t{length}"), "stencil": {"id": "Task"}}));

    let graph = translate(&diagram(children))?;

    for (_, element) in graph.elements() {
        prop_assert!(
            !matches!(element.kind(), ElementKind::GlobalTask(_)),
            "connected task {:?} became a template",
            element.source_id()
        );
        if let ElementKind::SequenceFlow(flow) = element.kind() {
            let target = flow.target_ref().expect("connector has a target");
            prop_assert!(graph.get(target).kind().is_flow_node());
        }
    }
    Ok(())
}

// ===================
// Proptest Wrappers
// ===================

proptest! {
    #[test]
    fn optional_blocks_follow_property_text(
        documentation in optional_text_strategy(),
        auditing in optional_text_strategy(),
        monitoring in optional_text_strategy(),
        condition in optional_text_strategy(),
    ) {
        check_optional_blocks(documentation, auditing, monitoring, condition)?;
    }

    #[test]
    fn child_order_is_preserved(stencils in prop::collection::vec(root_child_strategy(), 0..12)) {
        check_child_order(&stencils)?;
    }

    #[test]
    fn connected_tasks_stay_in_process(length in 1usize..8) {
        check_connected_tasks_stay_in_process(length)?;
    }
}
