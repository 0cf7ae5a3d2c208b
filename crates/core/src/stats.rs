//! Column analysis over the flattened lines: how many distinct values
//! each output column holds and how many bits a dense code for it needs.

use crate::line::FlatLine;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnStats {
    pub column: &'static str,
    pub unique: usize,
    pub bits_required: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub sections: usize,
    pub roots: usize,
    pub lines: usize,
    pub columns: Vec<ColumnStats>,
}

impl ConversionStats {
    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.column == name)
    }
}

/// `ceil(log2(unique))`, with a floor of one bit.
pub fn bits_required(unique: usize) -> u32 {
    if unique <= 1 {
        1
    } else {
        usize::BITS - (unique - 1).leading_zeros()
    }
}

pub fn collect_stats(sections: usize, roots: usize, lines: &[FlatLine]) -> ConversionStats {
    let mut subjects = HashSet::new();
    let mut predicates = HashSet::new();
    let mut indices = HashSet::new();
    let mut objects = HashSet::new();

    for line in lines {
        subjects.insert(line.subject.as_str());
        predicates.insert(line.predicate_chain());
        indices.insert(line.index_chain());
        objects.insert(line.object.as_str());
    }

    let column = |column: &'static str, unique: usize| ColumnStats {
        column,
        unique,
        bits_required: bits_required(unique),
    };

    ConversionStats {
        sections,
        roots,
        lines: lines.len(),
        columns: vec![
            column("subject", subjects.len()),
            column("predicate", predicates.len()),
            column("index", indices.len()),
            column("object", objects.len()),
        ],
    }
}
