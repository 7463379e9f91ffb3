// src/key.rs

/// Field delimiters: ASCII space and tab, nothing locale-dependent.
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Derive the comparison key for `line`: the suffix left after skipping
/// `skip_fields` whitespace-delimited fields and then `skip_chars`
/// characters. Returns a view into `line`, never a copy.
///
/// Skipping never moves past the end of the line; over-skipping yields
/// the empty string, so two exhausted keys compare equal.
pub fn comparison_key(line: &str, skip_fields: usize, skip_chars: usize) -> &str {
    skip_leading_chars(skip_leading_fields(line, skip_fields), skip_chars)
}

/// One field-skip consumes a run of non-blank characters followed by a
/// run of blank characters. A line with leading blanks has a zero-width
/// non-blank run, so its leading blank run alone satisfies one skip.
fn skip_leading_fields(line: &str, fields: usize) -> &str {
    let mut rest = line;
    for _ in 0..fields {
        if rest.is_empty() {
            break;
        }
        rest = rest.trim_start_matches(|c| !is_blank(c));
        rest = rest.trim_start_matches(is_blank);
    }
    rest
}

fn skip_leading_chars(line: &str, chars: usize) -> &str {
    match line.char_indices().nth(chars) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
