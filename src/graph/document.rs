use super::legend::LegendPlacement;
use crate::model::Edge;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeSet, HashMap};

/// A drawn connection between two applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub label: String,
    pub color: Option<&'static str>,
    pub two_way: bool,
}

impl Connection {
    pub fn from_edge(edge: &Edge) -> Self {
        Self {
            label: edge.interface_name.clone(),
            color: edge.kind().color(),
            two_way: edge.is_two_way(),
        }
    }

    /// Graphviz `dir` attribute for this connection.
    pub fn arrow(&self) -> &'static str {
        if self.two_way { "both" } else { "forward" }
    }
}

/// Interface map ready for serialization.
///
/// Nodes are inserted in sorted order and connections in encounter order, so
/// iterating the underlying graph is deterministic. Parallel connections
/// between the same pair of applications are kept.
#[derive(Debug, Clone)]
pub struct GraphDocument {
    graph: DiGraph<String, Connection>,
    legend: LegendPlacement,
}

impl GraphDocument {
    pub fn from_edges(edges: &[Edge]) -> Self {
        let names: BTreeSet<&str> = edges
            .iter()
            .flat_map(|e| [e.source.as_str(), e.destination.as_str()])
            .collect();

        let mut graph = DiGraph::with_capacity(names.len(), edges.len());
        let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(names.len());
        for &name in &names {
            indices.insert(name, graph.add_node(name.to_string()));
        }

        for edge in edges {
            let from = indices[edge.source.as_str()];
            let to = indices[edge.destination.as_str()];
            graph.add_edge(from, to, Connection::from_edge(edge));
        }

        let legend = LegendPlacement::anchored_to(names.first().copied());

        Self { graph, legend }
    }

    /// Node names in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// `(source, destination, connection)` in the order the rows were read.
    pub fn connections(&self) -> impl Iterator<Item = (&str, &str, &Connection)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
                e.weight(),
            )
        })
    }

    pub fn legend(&self) -> &LegendPlacement {
        &self.legend
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: &str, destination: &str, name: &str) -> Edge {
        Edge {
            source: source.into(),
            destination: destination.into(),
            interface_name: name.into(),
            interface_type: None,
            direction: None,
        }
    }

    #[test]
    fn test_nodes_are_sorted_union_of_endpoints() {
        let doc = GraphDocument::from_edges(&[
            edge("ERP", "CRM", "a"),
            edge("CRM", "BI", "b"),
            edge("crm", "ERP", "c"),
        ]);

        let nodes: Vec<_> = doc.nodes().collect();
        assert_eq!(nodes, vec!["BI", "CRM", "ERP", "crm"]);
    }

    #[test]
    fn test_parallel_connections_are_kept_in_order() {
        let doc = GraphDocument::from_edges(&[
            edge("A", "B", "first"),
            edge("A", "B", "second"),
            edge("B", "A", "third"),
        ]);

        assert_eq!(doc.node_count(), 2);
        assert_eq!(doc.connection_count(), 3);
        let labels: Vec<_> = doc.connections().map(|(_, _, c)| c.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_connection_styling() {
        let mut e = edge("A", "B", "x");

        e.interface_type = Some("File Transfer".into());
        assert_eq!(Connection::from_edge(&e).color, Some("red"));
        e.interface_type = Some("WebService".into());
        assert_eq!(Connection::from_edge(&e).color, Some("blue"));
        e.interface_type = Some("Web Service".into());
        assert_eq!(Connection::from_edge(&e).color, Some("blue"));
        e.interface_type = Some("Message Queue".into());
        assert_eq!(Connection::from_edge(&e).color, None);
    }

    #[test]
    fn test_connection_arrows() {
        let mut e = edge("A", "B", "x");
        let cases = [
            (Some(2), "both"),
            (Some(1), "forward"),
            (None, "forward"),
            (Some(3), "forward"),
        ];
        for (direction, arrow) in cases {
            e.direction = direction;
            assert_eq!(Connection::from_edge(&e).arrow(), arrow, "direction {:?}", direction);
        }
    }

    #[test]
    fn test_legend_anchors_to_first_node() {
        let doc = GraphDocument::from_edges(&[edge("Zeta", "Alpha", "x")]);
        assert_eq!(doc.legend(), &LegendPlacement::Anchored("Alpha".to_string()));

        let empty = GraphDocument::from_edges(&[]);
        assert_eq!(empty.legend(), &LegendPlacement::Unpositioned);
    }
}
