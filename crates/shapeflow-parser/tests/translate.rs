use shapeflow_core::semantic::{
    ElementKind, GlobalTaskKind, Process, ProcessGraph, SequenceFlow, TaskKind,
};
use shapeflow_parser::{
    DuplicateIdPolicy, TranslateConfig, TranslateError, error::ErrorCode, translate_reader,
    translate_slice, translate_str,
};

fn translate(json: &str) -> ProcessGraph {
    translate_str(json, &TranslateConfig::default()).expect("Failed to translate")
}

fn process(graph: &ProcessGraph, index: usize) -> &Process {
    let handle = graph.definitions().root_elements()[index];
    match graph.get(handle).kind() {
        ElementKind::Process(process) => process,
        other => panic!("Expected process, got {other:?}"),
    }
}

fn sequence_flow<'a>(graph: &'a ProcessGraph, id: &str) -> &'a SequenceFlow {
    let handle = graph.lookup(id).expect("sequence flow is registered");
    match graph.get(handle).kind() {
        ElementKind::SequenceFlow(flow) => flow,
        other => panic!("Expected sequence flow, got {other:?}"),
    }
}

const CONNECTED: &str = r#"{
    "resourceId": "canvas",
    "properties": {"name": "Orders", "targetnamespace": "http://example.com/orders"},
    "stencil": {"id": "BPMNDiagram"},
    "childShapes": [
        {
            "resourceId": "n1",
            "properties": {"name": "Receive", "tasktype": "User"},
            "stencil": {"id": "Task"},
            "childShapes": [],
            "outgoing": [{"resourceId": "n3"}],
            "bounds": {"lowerRight": {"x": 200, "y": 120}, "upperLeft": {"x": 100, "y": 40}}
        },
        {
            "resourceId": "n2",
            "properties": {"name": "Ship"},
            "stencil": {"id": "Task"},
            "childShapes": [],
            "outgoing": []
        },
        {
            "resourceId": "n3",
            "properties": {"name": "", "conditionexpression": "paid"},
            "stencil": {"id": "SequenceFlow"},
            "childShapes": [],
            "outgoing": [{"resourceId": "n2"}],
            "dockers": [{"x": 50, "y": 40}, {"x": 50, "y": 40}],
            "target": {"resourceId": "n2"}
        }
    ]
}"#;

#[test]
fn test_free_standing_task_becomes_template() {
    let graph = translate(
        r#"{
            "resourceId": "canvas",
            "stencil": {"id": "BPMNDiagram"},
            "childShapes": [
                {"resourceId": "n1", "properties": {}, "stencil": {"id": "Task"}, "childShapes": [], "outgoing": []}
            ]
        }"#,
    );

    let roots = graph.definitions().root_elements();
    assert_eq!(roots.len(), 1);
    let template = graph.get(roots[0]);
    assert_eq!(template.source_id(), Some("n1"));
    assert!(matches!(
        template.kind(),
        ElementKind::GlobalTask(task) if task.kind() == &GlobalTaskKind::Generic
    ));
    assert!(
        graph
            .elements()
            .all(|(_, element)| !matches!(element.kind(), ElementKind::Process(_))),
        "no process should be created"
    );
}

#[test]
fn test_connector_wiring() {
    let graph = translate(CONNECTED);

    let n1 = graph.lookup("n1").expect("n1");
    let n2 = graph.lookup("n2").expect("n2");
    let n3 = graph.lookup("n3").expect("n3");

    let links = graph.get(n1).flow_links().expect("n1 is a flow node");
    assert_eq!(links.outgoing(), [n3]);

    let flow = sequence_flow(&graph, "n3");
    assert_eq!(flow.target_ref(), Some(n2));
    assert_eq!(flow.source_ref(), Some(n1));
    assert_eq!(
        flow.condition_expression()
            .map(|expr| expr.documentation().text()),
        Some("paid")
    );
    assert_eq!(
        graph.get(n2).flow_links().expect("n2 is a flow node").incoming(),
        [n3]
    );
}

#[test]
fn test_implicit_process_named_after_root() {
    let graph = translate(CONNECTED);

    assert_eq!(graph.root().name(), Some("Orders"));
    assert_eq!(
        graph.definitions().target_namespace(),
        Some("http://example.com/orders")
    );

    let roots = graph.definitions().root_elements();
    assert_eq!(roots.len(), 1);
    assert_eq!(graph.get(roots[0]).name(), Some("Orders"));

    let ids: Vec<_> = process(&graph, 0)
        .flow_elements()
        .iter()
        .map(|&handle| graph.get(handle).source_id())
        .collect();
    assert_eq!(ids, [Some("n1"), Some("n2"), Some("n3")]);

    match graph.get(graph.lookup("n1").expect("n1")).kind() {
        ElementKind::Task(task) => assert_eq!(task.kind(), &TaskKind::User),
        other => panic!("Expected task, got {other:?}"),
    }
}

#[test]
fn test_pool_with_lanes() {
    let graph = translate(
        r#"{
            "resourceId": "canvas",
            "stencil": {"id": "BPMNDiagram"},
            "childShapes": [{
                "resourceId": "pool",
                "properties": {"name": "Billing", "processtype": "Private", "isclosed": "false"},
                "stencil": {"id": "Pool"},
                "childShapes": [
                    {
                        "resourceId": "clerk",
                        "properties": {"name": "Clerk"},
                        "stencil": {"id": "Lane"},
                        "childShapes": [
                            {"resourceId": "s", "stencil": {"id": "StartNoneEvent"}, "outgoing": [{"resourceId": "f"}]},
                            {"resourceId": "f", "stencil": {"id": "SequenceFlow"}, "outgoing": [{"resourceId": "t"}]}
                        ]
                    },
                    {
                        "resourceId": "manager",
                        "properties": {"name": "Manager"},
                        "stencil": {"id": "Lane"},
                        "childShapes": [
                            {"resourceId": "t", "properties": {"name": "Approve"}, "stencil": {"id": "Task"}}
                        ]
                    },
                    {"resourceId": "note", "stencil": {"id": "TextAnnotation"}}
                ]
            }]
        }"#,
    );

    let pool = process(&graph, 0);
    let lane_set = pool.lane_set().expect("lane set");
    assert_eq!(
        lane_set.lanes(),
        [
            graph.lookup("clerk").expect("clerk"),
            graph.lookup("manager").expect("manager")
        ]
    );
    assert_eq!(pool.artifacts(), [graph.lookup("note").expect("note")]);
    assert_eq!(
        pool.flow_elements(),
        [
            graph.lookup("s").expect("s"),
            graph.lookup("f").expect("f"),
            graph.lookup("t").expect("t")
        ]
    );

    let t = graph.lookup("t").expect("t");
    assert!(
        matches!(graph.get(t).kind(), ElementKind::Task(_)),
        "tasks inside a pool are never templates"
    );
    assert_eq!(sequence_flow(&graph, "f").target_ref(), Some(t));
}

#[test]
fn test_lane_content_belongs_to_process() {
    let graph = translate(
        r#"{
            "stencil": {"id": "BPMNDiagram"},
            "childShapes": [{
                "resourceId": "pool",
                "stencil": {"id": "Pool"},
                "childShapes": [{
                    "resourceId": "lane",
                    "stencil": {"id": "Lane"},
                    "childShapes": [
                        {"resourceId": "a", "stencil": {"id": "Task"}, "outgoing": [{"resourceId": "f"}]},
                        {"resourceId": "f", "stencil": {"id": "SequenceFlow"}, "outgoing": [{"resourceId": "b"}]},
                        {"resourceId": "b", "stencil": {"id": "Task"}},
                        {"resourceId": "doc", "stencil": {"id": "DataObject"}}
                    ]
                }]
            }]
        }"#,
    );

    let pool = process(&graph, 0);
    let ids: Vec<_> = pool
        .flow_elements()
        .iter()
        .map(|&handle| graph.get(handle).source_id())
        .collect();
    assert_eq!(ids, [Some("a"), Some("f"), Some("b")]);
    assert_eq!(pool.artifacts(), [graph.lookup("doc").expect("doc")]);

    let lane = graph.lookup("lane").expect("lane");
    match graph.get(lane).kind() {
        ElementKind::Lane(lane) => assert_eq!(
            lane.flow_node_refs(),
            [
                graph.lookup("a").expect("a"),
                graph.lookup("b").expect("b")
            ]
        ),
        other => panic!("Expected lane, got {other:?}"),
    }
}

#[test]
fn test_every_connector_target_exists() {
    let graph = translate(CONNECTED);

    for (_, element) in graph.elements() {
        if let ElementKind::SequenceFlow(flow) = element.kind() {
            let target = flow.target_ref().expect("connector has a target");
            assert!(target.index() < graph.len());
            assert!(graph.get(target).kind().is_flow_node());
        }
    }
}

#[test]
fn test_unresolved_reference() {
    let err = translate_str(
        r#"{
            "stencil": {"id": "BPMNDiagram"},
            "childShapes": [
                {"resourceId": "n1", "stencil": {"id": "Task"}, "outgoing": [{"resourceId": "missing"}]}
            ]
        }"#,
        &TranslateConfig::default(),
    )
    .expect_err("dangling reference");

    assert_eq!(err.code(), Some(ErrorCode::E300));
    match err {
        TranslateError::UnresolvedReference { owner, target } => {
            assert_eq!(owner, "n1");
            assert_eq!(target, "missing");
        }
        other => panic!("Expected UnresolvedReference, got {other:?}"),
    }
}

const DUPLICATED: &str = r#"{
    "stencil": {"id": "BPMNDiagram"},
    "childShapes": [
        {"resourceId": "dup", "stencil": {"id": "Task"}, "outgoing": [{"resourceId": "f"}]},
        {"resourceId": "f", "stencil": {"id": "SequenceFlow"}, "outgoing": [{"resourceId": "dup"}]},
        {"resourceId": "dup", "stencil": {"id": "EndNoneEvent"}}
    ]
}"#;

#[test]
fn test_duplicate_identifier_rejected_by_default() {
    let err = translate_str(DUPLICATED, &TranslateConfig::default()).expect_err("duplicate id");

    assert_eq!(err.code(), Some(ErrorCode::E400));
    assert!(matches!(err, TranslateError::DuplicateIdentifier(ref id) if id == "dup"));
}

#[test]
fn test_duplicate_identifier_last_wins() {
    let config = TranslateConfig::default().with_duplicate_ids(DuplicateIdPolicy::LastWins);
    let graph = translate_str(DUPLICATED, &config).expect("lenient policy");

    let dup = graph.lookup("dup").expect("dup");
    assert!(matches!(graph.get(dup).kind(), ElementKind::Event(_)));
    assert_eq!(sequence_flow(&graph, "f").target_ref(), Some(dup));
}

#[test]
fn test_unknown_shape() {
    let err = translate_str(
        r#"{"stencil": {"id": "BPMNDiagram"}, "childShapes": [{"resourceId": "x", "stencil": {"id": "Hexagon"}}]}"#,
        &TranslateConfig::default(),
    )
    .expect_err("unknown stencil");

    assert_eq!(err.code(), Some(ErrorCode::E200));
    assert!(err.help().is_some());
}

#[test]
fn test_unknown_task_type() {
    let err = translate_str(
        r#"{"stencil": {"id": "BPMNDiagram"}, "childShapes": [
            {"stencil": {"id": "Task"}, "properties": {"tasktype": "Telepathic"}}
        ]}"#,
        &TranslateConfig::default(),
    )
    .expect_err("unknown task type");

    assert_eq!(err.code(), Some(ErrorCode::E201));
}

#[test]
fn test_malformed_json() {
    let err = translate_str(
        r#"{"stencil": {"id": "BPMNDiagram"}, "childShapes": ["#,
        &TranslateConfig::default(),
    )
    .expect_err("truncated document");

    match err {
        TranslateError::Malformed { code, line, .. } => {
            assert_eq!(code, ErrorCode::E100);
            assert_eq!(line, Some(1));
        }
        other => panic!("Expected Malformed, got {other:?}"),
    }
}

#[test]
fn test_wrong_field_type_is_malformed() {
    let err = translate_str(
        r#"{"stencil": {"id": "BPMNDiagram"}, "childShapes": {"not": "an array"}}"#,
        &TranslateConfig::default(),
    )
    .expect_err("childShapes must be an array");

    assert_eq!(err.code(), Some(ErrorCode::E101));
}

#[test]
fn test_root_must_be_diagram() {
    let err = translate_str(
        r#"{"resourceId": "p", "stencil": {"id": "Pool"}}"#,
        &TranslateConfig::default(),
    )
    .expect_err("pool root");

    assert_eq!(err.code(), Some(ErrorCode::E103));
}

#[test]
fn test_slice_and_reader_entry_points() {
    let config = TranslateConfig::default();

    let from_slice = translate_slice(CONNECTED.as_bytes(), &config).expect("slice");
    let from_reader = translate_reader(CONNECTED.as_bytes(), &config).expect("reader");

    assert_eq!(from_slice.len(), from_reader.len());
    assert_eq!(from_slice.lookup("n3"), from_reader.lookup("n3"));
}

#[test]
fn test_script_template_keeps_script() {
    let graph = translate(
        r#"{
            "stencil": {"id": "BPMNDiagram"},
            "childShapes": [{
                "resourceId": "calc",
                "properties": {
                    "name": "Compute total",
                    "documentation": "sums the order lines",
                    "tasktype": "Script",
                    "script": "total = lines.sum()",
                    "script_language": "groovy",
                    "datainputset": "lines"
                },
                "stencil": {"id": "Task"}
            }]
        }"#,
    );

    let template = graph.get(graph.lookup("calc").expect("calc"));
    assert_eq!(template.name(), Some("Compute total"));
    assert_eq!(template.documentation()[0].text(), "sums the order lines");
    match template.kind() {
        ElementKind::GlobalTask(task) => {
            let GlobalTaskKind::Script(script) = task.kind() else {
                panic!("Expected global script task, got {:?}", task.kind());
            };
            assert_eq!(script.body(), Some("total = lines.sum()"));
            assert_eq!(script.language(), Some("groovy"));
            assert_eq!(
                task.io_specification().map(|io| io.data_inputs().to_vec()),
                Some(vec!["lines".to_string()])
            );
        }
        other => panic!("Expected global task, got {other:?}"),
    }
}
