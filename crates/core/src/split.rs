//! Quote-aware splitting shared by the section and statement stages.

/// A syntax separator that may only split text outside `"..."` literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    symbol: char,
    /// When set, the symbol only counts if at least one whitespace
    /// character follows it (so `3.14` or `ex:a.b` never split).
    requires_whitespace: bool,
}

impl Delimiter {
    /// Section terminator: `.` followed by whitespace.
    pub const SECTION: Delimiter = Delimiter {
        symbol: '.',
        requires_whitespace: true,
    };

    /// Statement separator: `;`, with or without following whitespace.
    pub const STATEMENT: Delimiter = Delimiter {
        symbol: ';',
        requires_whitespace: false,
    };

    pub fn symbol(&self) -> char {
        self.symbol
    }
}

/// Split `text` on `delimiter`, never inside a double-quoted literal.
///
/// Whitespace following a delimiter belongs to the delimiter, and every
/// piece is trimmed. A `\"` inside a literal does not close it. Empty
/// pieces are kept, so the result always has at least one element.
pub fn split_outside_quotes(text: &str, delimiter: Delimiter) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0usize;
    let mut in_quote = false;
    let mut escaped = false;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if in_quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_quote = false;
            }
            continue;
        }

        if c == '"' {
            in_quote = true;
            continue;
        }

        if c != delimiter.symbol {
            continue;
        }

        let mut end = pos + c.len_utf8();
        let mut saw_whitespace = false;
        while let Some(&(next_pos, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            saw_whitespace = true;
            end = next_pos + next.len_utf8();
            chars.next();
        }

        if delimiter.requires_whitespace && !saw_whitespace {
            continue;
        }

        pieces.push(text[start..pos].trim());
        start = end;
    }

    pieces.push(text[start..].trim());
    pieces
}
