//! Whitespace flattening for extracted text.

/// Characters that end a line: `\n`, `\r`, VT, FF, FS, GS, RS, NEL, LS, PS.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Flatten extracted text into a single line.
///
/// Each line is trimmed and split on runs of two or more spaces; the trimmed,
/// non-empty fragments are joined with single spaces. Single spaces inside a
/// fragment are kept as they are.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    let fragments = text
        .split(is_line_break)
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty());

    for fragment in fragments {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(fragment);
    }
    out
}
