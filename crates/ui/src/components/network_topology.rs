//! Network topology page: a static service map rendered as SVG

use dioxus::prelude::*;

/// A node in the topology diagram
struct TopoNode {
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    x: i32,
    y: i32,
}

/// An undirected link between two nodes
struct TopoEdge {
    from: &'static str,
    to: &'static str,
}

const NODES: &[TopoNode] = &[
    TopoNode { id: "edge", label: "edge proxy", kind: "ingress", x: 400, y: 60 },
    TopoNode { id: "web", label: "homepage", kind: "app", x: 220, y: 180 },
    TopoNode { id: "api", label: "api", kind: "app", x: 580, y: 180 },
    TopoNode { id: "db", label: "sqlite", kind: "storage", x: 400, y: 300 },
    TopoNode { id: "cache", label: "cache", kind: "storage", x: 660, y: 300 },
    TopoNode { id: "ci", label: "ci runner", kind: "worker", x: 140, y: 300 },
];

const EDGES: &[TopoEdge] = &[
    TopoEdge { from: "edge", to: "web" },
    TopoEdge { from: "edge", to: "api" },
    TopoEdge { from: "web", to: "db" },
    TopoEdge { from: "api", to: "db" },
    TopoEdge { from: "api", to: "cache" },
    TopoEdge { from: "web", to: "ci" },
];

fn node(id: &str) -> Option<&'static TopoNode> {
    NODES.iter().find(|n| n.id == id)
}

/// NetworkTopology view
#[component]
pub fn NetworkTopology() -> Element {
    // Resolve edges to coordinates up front; unknown endpoints are skipped
    let lines: Vec<(i32, i32, i32, i32)> = EDGES
        .iter()
        .filter_map(|e| Some((node(e.from)?, node(e.to)?)))
        .map(|(a, b)| (a.x, a.y, b.x, b.y))
        .collect();
    let labels: Vec<(&str, &str, i32, i32, i32, i32)> = NODES
        .iter()
        .map(|n| (n.label, n.kind, n.x, n.y, n.y - 38, n.y + 48))
        .collect();

    rsx! {
        div { class: "page",
            h1 { "Network topology" }
            p {
                "The small constellation of services behind my projects, drawn "
                "from a static node/edge description. No live probing — just a map."
            }

            svg {
                class: "topo-canvas",
                view_box: "0 0 800 380",
                for (x1, y1, x2, y2) in lines {
                    line {
                        class: "topo-link",
                        x1: "{x1}",
                        y1: "{y1}",
                        x2: "{x2}",
                        y2: "{y2}",
                    }
                }
                for (label, kind, x, y, label_y, kind_y) in labels {
                    circle {
                        class: "topo-node",
                        cx: "{x}",
                        cy: "{y}",
                        r: "28",
                    }
                    text {
                        class: "topo-label",
                        x: "{x}",
                        y: "{label_y}",
                        "{label}"
                    }
                    text {
                        class: "topo-kind",
                        x: "{x}",
                        y: "{kind_y}",
                        "{kind}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_edge_endpoint_is_a_known_node() {
        for edge in EDGES {
            assert!(node(edge.from).is_some(), "unknown node {}", edge.from);
            assert!(node(edge.to).is_some(), "unknown node {}", edge.to);
        }
    }

    #[test]
    fn node_ids_are_unique() {
        for (i, a) in NODES.iter().enumerate() {
            for b in &NODES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
