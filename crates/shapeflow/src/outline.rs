//! Plain-text outline of a translated process graph.
//!
//! Containers are walked from the document root; each element is printed on
//! its own line, indented by depth:
//!
//! ```text
//! definitions "Orders" [canvas]
//!   process "Orders"
//!     user task "Receive" [n1] out=[n3]
//!     sequence flow [n3] n1 -> n2
//!     task "Ship" [n2] in=[n3]
//! ```

use std::fmt::{self, Write};

use shapeflow_core::{
    identifier::ElementRef,
    semantic::{ElementKind, FlowLinks, ProcessGraph},
};

const INDENT: &str = "  ";

/// Render `graph` as an indented outline.
pub(crate) fn render(graph: &ProcessGraph) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_element(&mut out, graph, graph.root_ref(), 0)?;
    Ok(out)
}

fn write_element(
    out: &mut String,
    graph: &ProcessGraph,
    handle: ElementRef,
    depth: usize,
) -> fmt::Result {
    let element = graph.get(handle);
    write!(out, "{}{element}", INDENT.repeat(depth))?;

    match element.kind() {
        ElementKind::SequenceFlow(flow) => {
            let end = |end: Option<ElementRef>| end.map_or("?".to_string(), |h| label(graph, h));
            write!(out, " {} -> {}", end(flow.source_ref()), end(flow.target_ref()))?;
            if let Some(condition) = flow.condition_expression() {
                write!(out, " when {:?}", condition.documentation().text())?;
            }
        }
        _ => {
            if let Some(links) = element.flow_links() {
                write_links(out, graph, links)?;
            }
        }
    }
    writeln!(out)?;

    match element.kind() {
        ElementKind::Definitions(definitions) => {
            for &child in definitions.root_elements() {
                write_element(out, graph, child, depth + 1)?;
            }
        }
        ElementKind::Process(process) => {
            if let Some(lane_set) = process.lane_set() {
                for &lane in lane_set.lanes() {
                    write_element(out, graph, lane, depth + 1)?;
                }
            }
            for &child in process.flow_elements().iter().chain(process.artifacts()) {
                write_element(out, graph, child, depth + 1)?;
            }
        }
        ElementKind::Lane(lane) if !lane.flow_node_refs().is_empty() => {
            let refs = labels(graph, lane.flow_node_refs());
            writeln!(out, "{}nodes=[{refs}]", INDENT.repeat(depth + 1))?;
        }
        _ => {}
    }
    Ok(())
}

fn write_links(out: &mut String, graph: &ProcessGraph, links: &FlowLinks) -> fmt::Result {
    if !links.incoming().is_empty() {
        write!(out, " in=[{}]", labels(graph, links.incoming()))?;
    }
    if !links.outgoing().is_empty() {
        write!(out, " out=[{}]", labels(graph, links.outgoing()))?;
    }
    Ok(())
}

/// Source id of an element, or its handle when it has none.
fn label(graph: &ProcessGraph, handle: ElementRef) -> String {
    graph
        .get(handle)
        .source_id()
        .map_or_else(|| handle.to_string(), str::to_string)
}

fn labels(graph: &ProcessGraph, handles: &[ElementRef]) -> String {
    handles
        .iter()
        .map(|&handle| label(graph, handle))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeflow_parser::{TranslateConfig, translate_str};

    #[test]
    fn test_outline_of_connected_tasks() {
        let graph = translate_str(
            r#"{
                "resourceId": "canvas",
                "properties": {"name": "Orders"},
                "stencil": {"id": "BPMNDiagram"},
                "childShapes": [
                    {"resourceId": "n1", "properties": {"name": "Receive", "tasktype": "User"},
                     "stencil": {"id": "Task"}, "outgoing": [{"resourceId": "n3"}]},
                    {"resourceId": "n3", "stencil": {"id": "SequenceFlow"},
                     "outgoing": [{"resourceId": "n2"}]},
                    {"resourceId": "n2", "properties": {"name": "Ship"}, "stencil": {"id": "Task"}}
                ]
            }"#,
            &TranslateConfig::default(),
        )
        .expect("valid diagram");

        let outline = render(&graph).expect("rendering into a string");
        let lines: Vec<_> = outline.lines().collect();
        assert_eq!(
            lines,
            [
                "definitions \"Orders\" [canvas]",
                "  process \"Orders\"",
                "    user task \"Receive\" [n1] out=[n3]",
                "    sequence flow [n3] n1 -> n2",
                "    task \"Ship\" [n2] in=[n3]",
            ]
        );
    }

    #[test]
    fn test_outline_of_lanes() {
        let graph = translate_str(
            r#"{
                "stencil": {"id": "BPMNDiagram"},
                "childShapes": [{
                    "resourceId": "pool", "stencil": {"id": "Pool"},
                    "childShapes": [{
                        "resourceId": "lane", "stencil": {"id": "Lane"},
                        "childShapes": [{"resourceId": "g", "stencil": {"id": "ParallelGateway"}}]
                    }]
                }]
            }"#,
            &TranslateConfig::default(),
        )
        .expect("valid diagram");

        let outline = render(&graph).expect("rendering into a string");
        assert!(outline.contains("    lane [lane]\n      nodes=[g]\n"));
        assert!(outline.contains("    parallel gateway [g]\n"));
    }
}
