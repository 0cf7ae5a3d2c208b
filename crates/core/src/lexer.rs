/// Split one statement into whitespace-delimited tokens.
///
/// A double-quoted literal is a single token even when it contains
/// spaces, and any non-whitespace suffix glued to its closing quote
/// (`@en`, `^^xsd:date`, a trailing `,`) stays part of it. `\"` inside a
/// literal does not close it. A `"` that is never closed is skipped and
/// lexing resumes right after it.
pub fn tokenize(statement: &str) -> Vec<String> {
    let chars: Vec<char> = statement.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0usize;

    while pos < chars.len() {
        let c = chars[pos];

        if c.is_whitespace() {
            pos += 1;
            continue;
        }

        // Quoted literal plus suffix
        if c == '"' {
            match closing_quote(&chars, pos) {
                Some(close) => {
                    let start = pos;
                    pos = close + 1;
                    while pos < chars.len() && !chars[pos].is_whitespace() {
                        pos += 1;
                    }
                    tokens.push(chars[start..pos].iter().collect());
                }
                None => pos += 1,
            }
            continue;
        }

        // Bare word: stops at whitespace or at the start of a literal
        let start = pos;
        while pos < chars.len() && !chars[pos].is_whitespace() && chars[pos] != '"' {
            pos += 1;
        }
        tokens.push(chars[start..pos].iter().collect());
    }

    tokens
}

/// Index of the quote closing the literal opened at `open`, honouring
/// backslash escapes.
fn closing_quote(chars: &[char], open: usize) -> Option<usize> {
    let mut pos = open + 1;
    while pos < chars.len() {
        match chars[pos] {
            '\\' => {
                if pos + 1 >= chars.len() {
                    return None;
                }
                pos += 2;
            }
            '"' => return Some(pos),
            _ => pos += 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words_split_on_spaces() {
        assert_eq!(tokenize("a:1 p:knows a:2"), vec!["a:1", "p:knows", "a:2"]);
    }

    #[test]
    fn literal_with_spaces_is_one_token() {
        assert_eq!(
            tokenize("p:note \"Section 1; see note.\""),
            vec!["p:note", "\"Section 1; see note.\""]
        );
    }

    #[test]
    fn suffix_stays_attached_to_literal() {
        assert_eq!(
            tokenize("rdfs:label \"Universe\"@en"),
            vec!["rdfs:label", "\"Universe\"@en"]
        );
        assert_eq!(
            tokenize("p:t \"2020-01-01\"^^xsd:date"),
            vec!["p:t", "\"2020-01-01\"^^xsd:date"]
        );
    }

    #[test]
    fn trailing_comma_is_kept_on_objects() {
        assert_eq!(
            tokenize("ex:tag \"a\", \"b\", ex:c, ex:d"),
            vec!["ex:tag", "\"a\",", "\"b\",", "ex:c,", "ex:d"]
        );
    }

    #[test]
    fn escaped_quote_does_not_end_literal() {
        assert_eq!(
            tokenize("p:q \"say \\\"hi there\\\"\" p:r"),
            vec!["p:q", "\"say \\\"hi there\\\"\"", "p:r"]
        );
    }

    #[test]
    fn word_stops_at_an_opening_quote() {
        assert_eq!(tokenize("abc\"def ghi\""), vec!["abc", "\"def ghi\""]);
    }

    #[test]
    fn unterminated_quote_is_skipped() {
        assert_eq!(tokenize("p:x \"open words"), vec!["p:x", "open", "words"]);
    }

    #[test]
    fn empty_and_blank_statements_have_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
