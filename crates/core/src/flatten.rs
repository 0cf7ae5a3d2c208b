//! Stage 2: walk every root subject depth-first and emit one line per
//! (root, predicate chain, index chain, object).
//!
//! There is no visited set. The same subject reached along two paths is
//! expanded twice with different chains, and a cyclic document recurses
//! without bound.

use crate::line::FlatLine;
use crate::options::ConvertOptions;
use crate::sections::Sections;

/// Predicate and index chains for one traversal path.
///
/// Extending a chain yields a new value; the parent stays untouched, so
/// sibling statements and sibling objects never see each other's hops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    predicates: Vec<String>,
    indices: Vec<usize>,
}

impl Chain {
    pub fn extended(&self, predicate: &str, index: usize) -> Chain {
        let mut next = self.clone();
        next.predicates.push(predicate.to_owned());
        next.indices.push(index);
        next
    }

    pub fn depth(&self) -> usize {
        self.predicates.len()
    }

    fn line(&self, root: &str, object: &str) -> FlatLine {
        FlatLine {
            subject: root.to_owned(),
            predicates: self.predicates.clone(),
            indices: self.indices.clone(),
            object: object.to_owned(),
        }
    }
}

/// Flatten every root subject. Line order is unspecified.
pub fn flatten(sections: &Sections, options: &ConvertOptions) -> Vec<FlatLine> {
    let mut lines = Vec::new();
    for root in sections.subjects().filter(|s| options.is_root(s)) {
        walk(sections, root, root, &Chain::default(), &mut lines);
    }
    lines
}

/// Flatten from a single root. Exposed for callers that pick their own roots.
pub fn flatten_root(sections: &Sections, root: &str) -> Vec<FlatLine> {
    let mut lines = Vec::new();
    walk(sections, root, root, &Chain::default(), &mut lines);
    lines
}

fn walk(sections: &Sections, root: &str, current: &str, chain: &Chain, lines: &mut Vec<FlatLine>) {
    let Some(statements) = sections.get(current) else {
        return;
    };

    for (pos, statement) in statements.iter().enumerate() {
        let chain = chain.extended(statement.predicate(), pos + 1);
        for object in statement.objects() {
            let object = strip_trailing_comma(object);
            lines.push(chain.line(root, object));
            if sections.contains(object) {
                walk(sections, root, object, &chain, lines);
            }
        }
    }
}

fn strip_trailing_comma(object: &str) -> &str {
    object.strip_suffix(',').unwrap_or(object)
}
