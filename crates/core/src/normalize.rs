//! Stage 0: whitespace normalization.
//!
//! Flattens the document onto one line so later stages only ever see
//! single spaces between tokens and a space after every `;` and `,`.

/// Normalize raw Turtle text:
///
/// 1. collapse every whitespace run to one space,
/// 2. insert a space after each `;` or `,` not already followed by one,
/// 3. collapse whitespace before a `.` to a single space,
/// 4. trim both ends and drop one trailing `.`.
///
/// Quoted literals are not special here; their whitespace is collapsed too.
pub fn normalize(ttl_text: &str) -> String {
    let collapsed = collapse_whitespace(ttl_text);
    let spaced = space_after_separators(&collapsed);
    let spaced = space_before_periods(&spaced);

    let mut out = spaced.trim().to_owned();
    if out.ends_with('.') {
        out.pop();
    }
    out
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn space_after_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if matches!(c, ';' | ',') && !chars.peek().is_some_and(|n| n.is_whitespace()) {
            out.push(' ');
        }
    }
    out
}

fn space_before_periods(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            run.push(c);
            continue;
        }
        if !run.is_empty() {
            if c == '.' {
                out.push(' ');
            } else {
                out.push_str(&run);
            }
            run.clear();
        }
        out.push(c);
    }
    out.push_str(&run);
    out
}
