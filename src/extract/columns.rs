//! Header heuristics: map free-form spreadsheet headers onto logical fields.

use crate::config::ColumnCandidates;
use std::fmt;

/// Return the first column whose lowercased, trimmed name contains a
/// candidate. Candidates are tried in priority order, and for each candidate
/// columns are scanned in their original order.
pub fn find_column<'a, S, C>(columns: &'a [S], candidates: &[C]) -> Option<&'a str>
where
    S: AsRef<str>,
    C: AsRef<str>,
{
    let normalized: Vec<String> = columns
        .iter()
        .map(|c| c.as_ref().trim().to_lowercase())
        .collect();

    candidates.iter().find_map(|candidate| {
        let candidate = candidate.as_ref();
        normalized
            .iter()
            .position(|name| name.contains(candidate))
            .map(|idx| columns[idx].as_ref())
    })
}

/// Column names chosen for each logical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub source: String,
    pub destination: String,
    pub interface_name: String,
    pub interface_type: Option<String>,
    pub direction: Option<String>,
}

/// One or more required fields had no matching header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedColumns {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub interface_name: Option<String>,
    /// Every header in the sheet, verbatim and in order.
    pub available: Vec<String>,
}

impl UnresolvedColumns {
    /// Logical names of the required fields that were not found.
    pub fn missing(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, found)| found.is_none())
            .map(|(field, _)| field)
            .collect()
    }

    /// Resolution of each required field, found or not.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("source", self.source.as_deref()),
            ("destination", self.destination.as_deref()),
            ("interface name", self.interface_name.as_deref()),
        ]
    }
}

impl fmt::Display for UnresolvedColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not locate required columns: {}",
            self.missing().join(", ")
        )
    }
}

impl std::error::Error for UnresolvedColumns {}

impl fmt::Display for ColumnMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source={:?} destination={:?} interface={:?} type={:?} direction={:?}",
            self.source, self.destination, self.interface_name, self.interface_type, self.direction
        )
    }
}

/// Resolve every logical field. Interface type and direction are optional.
pub fn resolve_columns<S: AsRef<str>>(
    columns: &[S],
    candidates: &ColumnCandidates,
) -> Result<ColumnMapping, UnresolvedColumns> {
    let owned = |found: Option<&str>| found.map(str::to_string);

    let source = owned(find_column(columns, candidates.source.as_slice()));
    let destination = owned(find_column(columns, candidates.destination.as_slice()));
    let interface_name = owned(find_column(columns, candidates.interface_name.as_slice()));

    match (source, destination, interface_name) {
        (Some(source), Some(destination), Some(interface_name)) => Ok(ColumnMapping {
            source,
            destination,
            interface_name,
            interface_type: owned(find_column(columns, candidates.interface_type.as_slice())),
            direction: owned(find_column(columns, candidates.direction.as_slice())),
        }),
        (source, destination, interface_name) => Err(UnresolvedColumns {
            source,
            destination,
            interface_name,
            available: columns.iter().map(|c| c.as_ref().to_string()).collect(),
        }),
    }
}
