/// Node id used for the legend.
pub const LEGEND_ID: &str = "__legend__";

/// HTML-like label listing the interface colours.
pub const LEGEND_LABEL: &str = concat!(
    r#"<<TABLE BORDER="0" CELLBORDER="0" CELLSPACING="2">"#,
    r#"<TR><TD><FONT POINT-SIZE="8" COLOR="red">&#9632;</FONT></TD>"#,
    r#"<TD><FONT POINT-SIZE="8">File-based interfaces</FONT></TD></TR>"#,
    r#"<TR><TD><FONT POINT-SIZE="8" COLOR="blue">&#9632;</FONT></TD>"#,
    r#"<TD><FONT POINT-SIZE="8">Webservice interfaces</FONT></TD></TR>"#,
    r#"</TABLE>>"#,
);

/// Where the legend goes in the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegendPlacement {
    /// Sink-ranked cluster tied to this node by a heavy invisible edge.
    Anchored(String),
    /// Plain node; Graphviz places it wherever it likes.
    Unpositioned,
}

impl LegendPlacement {
    pub fn anchored_to(node: Option<&str>) -> Self {
        match node {
            Some(node) => LegendPlacement::Anchored(node.to_string()),
            None => LegendPlacement::Unpositioned,
        }
    }
}
