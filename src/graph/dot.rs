//! Graphviz DOT serialization.

use super::document::GraphDocument;
use super::legend::{LEGEND_ID, LEGEND_LABEL, LegendPlacement};
use std::fmt;

pub const GRAPH_NAME: &str = "Architecture";

impl GraphDocument {
    /// Render the document as DOT source. Same document, same text.
    pub fn to_dot(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GraphDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {} {{", GRAPH_NAME)?;
        writeln!(f, "\trankdir=LR")?;
        writeln!(f, "\tsplines=true")?;
        writeln!(f, "\tnodesep=0.4")?;
        writeln!(f, "\tranksep=0.6")?;

        for node in self.nodes() {
            writeln!(f, "\t{} [shape=box]", quote(node))?;
        }

        let legend = quote(LEGEND_ID);
        match self.legend() {
            LegendPlacement::Anchored(anchor) => {
                writeln!(f, "\tsubgraph cluster_legend {{")?;
                writeln!(f, "\t\trank=sink")?;
                writeln!(f, "\t\t{} [label={} shape=none]", legend, LEGEND_LABEL)?;
                writeln!(f, "\t}}")?;
                writeln!(
                    f,
                    "\t{} -> {} [constraint=true style=invis weight=100]",
                    legend,
                    quote(anchor)
                )?;
            }
            LegendPlacement::Unpositioned => {
                writeln!(f, "\t{} [label={} shape=none]", legend, LEGEND_LABEL)?;
            }
        }

        for (source, destination, connection) in self.connections() {
            write!(
                f,
                "\t{} -> {} [label={}",
                quote(source),
                quote(destination),
                quote(&connection.label)
            )?;
            if let Some(color) = connection.color {
                write!(f, " color={} fontcolor={}", color, color)?;
            }
            writeln!(
                f,
                " dir={} fontsize=10 labelangle=0 labeldistance=1.0]",
                connection.arrow()
            )?;
        }

        writeln!(f, "}}")
    }
}

/// Quote a string as a DOT ID.
fn quote(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Edge;
    use pretty_assertions::assert_eq;

    fn edge(source: &str, destination: &str, name: &str, kind: Option<&str>, dir: Option<i64>) -> Edge {
        Edge {
            source: source.into(),
            destination: destination.into(),
            interface_name: name.into(),
            interface_type: kind.map(Into::into),
            direction: dir,
        }
    }

    #[test]
    fn test_to_dot() {
        let doc = GraphDocument::from_edges(&[
            edge("ERP", "CRM", "Orders", Some("File Transfer"), Some(1)),
            edge("CRM", "BI", "Leads", Some("WebService"), Some(2)),
            edge("ERP", "CRM", "Customers", Some("Message Queue"), None),
        ]);

        let expected = format!(
            r#"digraph Architecture {{
	rankdir=LR
	splines=true
	nodesep=0.4
	ranksep=0.6
	"BI" [shape=box]
	"CRM" [shape=box]
	"ERP" [shape=box]
	subgraph cluster_legend {{
		rank=sink
		"__legend__" [label={legend} shape=none]
	}}
	"__legend__" -> "BI" [constraint=true style=invis weight=100]
	"ERP" -> "CRM" [label="Orders" color=red fontcolor=red dir=forward fontsize=10 labelangle=0 labeldistance=1.0]
	"CRM" -> "BI" [label="Leads" color=blue fontcolor=blue dir=both fontsize=10 labelangle=0 labeldistance=1.0]
	"ERP" -> "CRM" [label="Customers" dir=forward fontsize=10 labelangle=0 labeldistance=1.0]
}}
"#,
            legend = LEGEND_LABEL
        );

        assert_eq!(doc.to_dot(), expected);
    }

    #[test]
    fn test_unpositioned_legend_without_nodes() {
        let dot = GraphDocument::from_edges(&[]).to_dot();
        assert!(dot.contains(&format!("\t\"__legend__\" [label={} shape=none]\n", LEGEND_LABEL)));
        assert!(!dot.contains("cluster_legend"));
        assert!(!dot.contains("style=invis"));
    }

    #[test]
    fn test_dot_is_deterministic() {
        let edges = [
            edge("b", "a", "x", None, None),
            edge("c", "a", "y", Some("file"), Some(2)),
        ];
        assert_eq!(
            GraphDocument::from_edges(&edges).to_dot(),
            GraphDocument::from_edges(&edges).to_dot()
        );
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("two\nlines"), "\"two\\nlines\"");
    }
}
