use std::fmt;

/// One flattened output line: a root subject, the predicate and index
/// chains walked from it, and the object reached at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatLine {
    pub subject: String,
    pub predicates: Vec<String>,
    /// 1-based statement positions, parallel to `predicates`.
    pub indices: Vec<usize>,
    pub object: String,
}

impl FlatLine {
    /// The predicate chain as written in the line, e.g. `p:knows|p:name`.
    pub fn predicate_chain(&self) -> String {
        self.predicates.join("|")
    }

    /// The index chain as written in the line, e.g. `2,1`.
    pub fn index_chain(&self) -> String {
        let parts: Vec<String> = self.indices.iter().map(usize::to_string).collect();
        parts.join(",")
    }
}

impl fmt::Display for FlatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}>[{}] {}",
            self.subject,
            self.predicate_chain(),
            self.index_chain(),
            self.object
        )
    }
}

/// Render, sort by byte order and join with newlines.
pub fn render_sorted(lines: &[FlatLine]) -> String {
    let mut rendered: Vec<String> = lines.iter().map(FlatLine::to_string).collect();
    rendered.sort_unstable();
    rendered.join("\n")
}
