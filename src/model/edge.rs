/// Direction code meaning data flows both ways.
pub const TWO_WAY: i64 = 2;

/// A validated inventory row: one interface between two applications.
///
/// `source`, `destination` and `interface_name` are always non-empty and
/// trimmed; rows that cannot satisfy this never become an `Edge`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub destination: String,
    pub interface_name: String,
    pub interface_type: Option<String>,
    pub direction: Option<i64>,
}

impl Edge {
    pub fn is_two_way(&self) -> bool {
        self.direction == Some(TWO_WAY)
    }

    pub fn kind(&self) -> InterfaceKind {
        self.interface_type
            .as_deref()
            .map(InterfaceKind::classify)
            .unwrap_or(InterfaceKind::Other)
    }

    /// Case-insensitive exact match against either endpoint.
    pub fn touches(&self, node: &str) -> bool {
        let node = node.to_lowercase();
        self.source.to_lowercase() == node || self.destination.to_lowercase() == node
    }
}

/// Interface family, derived from the free-text interface type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    File,
    WebService,
    Other,
}

impl InterfaceKind {
    /// File-based wins over webservice when both words appear.
    pub fn classify(interface_type: &str) -> Self {
        let t = interface_type.to_lowercase();
        if t.contains("file") {
            InterfaceKind::File
        } else if t.contains("webservice") || t.contains("web service") {
            InterfaceKind::WebService
        } else {
            InterfaceKind::Other
        }
    }

    pub fn color(self) -> Option<&'static str> {
        match self {
            InterfaceKind::File => Some("red"),
            InterfaceKind::WebService => Some("blue"),
            InterfaceKind::Other => None,
        }
    }
}
