//! Stage 1: build the subject -> statements map from normalized text.

use crate::error::ConvertError;
use crate::lexer::tokenize;
use crate::split::{split_outside_quotes, Delimiter};
use std::collections::HashMap;

/// One `[predicate, object_1, ..., object_n]` statement. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    tokens: Vec<String>,
}

impl Statement {
    /// Build a statement from its tokens; `None` when there are none.
    pub fn new(tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Statement { tokens })
        }
    }

    pub fn predicate(&self) -> &str {
        &self.tokens[0]
    }

    /// Object tokens as lexed, trailing commas included.
    pub fn objects(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Subject -> ordered statements. Built once, read-only afterwards.
///
/// Iteration order is unspecified; callers that need determinism sort
/// their own output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    map: HashMap<String, Vec<Statement>>,
}

impl Sections {
    pub fn get(&self, subject: &str) -> Option<&[Statement]> {
        self.map.get(subject).map(Vec::as_slice)
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.map.contains_key(subject)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Insert a section, returning the statements it replaced.
    pub fn insert(&mut self, subject: String, statements: Vec<Statement>) -> Option<Vec<Statement>> {
        self.map.insert(subject, statements)
    }
}

impl FromIterator<(String, Vec<Statement>)> for Sections {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Statement>)>>(iter: I) -> Self {
        Sections {
            map: iter.into_iter().collect(),
        }
    }
}

/// Split normalized text into sections and statements.
///
/// The subject is the first token of a section's first statement and is
/// dropped from any statement that starts with it. A subject seen in an
/// earlier section is overwritten by the later one. A dangling `;` right
/// before a section's end is tolerated; any other empty statement, or a
/// section with no subject, is an error.
pub fn build_sections(normalized: &str) -> Result<Sections, ConvertError> {
    let mut sections = Sections::default();
    if normalized.trim().is_empty() {
        return Ok(sections);
    }

    for (section_pos, section) in split_outside_quotes(normalized, Delimiter::SECTION)
        .into_iter()
        .enumerate()
    {
        let section_no = section_pos + 1;
        let raw_statements = split_outside_quotes(section, Delimiter::STATEMENT);

        let subject = raw_statements
            .first()
            .and_then(|first| tokenize(first).into_iter().next())
            .ok_or(ConvertError::EmptySection {
                section: section_no,
            })?;

        let last = raw_statements.len() - 1;
        let mut statements = Vec::with_capacity(raw_statements.len());
        for (stmt_pos, raw) in raw_statements.iter().enumerate() {
            let mut tokens = tokenize(raw);
            if tokens.first() == Some(&subject) {
                tokens.remove(0);
            }
            match Statement::new(tokens) {
                Some(statement) => statements.push(statement),
                None if stmt_pos == last && stmt_pos > 0 && raw.is_empty() => {
                    tracing::debug!(subject = %subject, "dropping empty trailing statement");
                }
                None => {
                    return Err(ConvertError::EmptyStatement {
                        subject,
                        statement: stmt_pos + 1,
                    });
                }
            }
        }

        if sections.insert(subject.clone(), statements).is_some() {
            tracing::warn!(
                subject = %subject,
                section = section_no,
                "subject repeated in a later section; earlier statements overwritten"
            );
        }
    }

    Ok(sections)
}
