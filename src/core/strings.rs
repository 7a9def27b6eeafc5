use unicode_segmentation::UnicodeSegmentation;

/// Title-case each whitespace-separated token: first grapheme title-cased,
/// the remainder lower-cased. Whitespace runs are copied through unchanged.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_token_start = true;

    for g in s.graphemes(true) {
        if g.chars().all(char::is_whitespace) {
            out.push_str(g);
            at_token_start = true;
        } else if at_token_start {
            push_titlecase(&mut out, g);
            at_token_start = false;
        } else {
            out.push_str(&g.to_lowercase());
        }
    }
    out
}

/// Title case differs from upper case for the Latin digraphs and for
/// characters whose upper case expands (`ß` -> `Ss`, not `SS`).
fn push_titlecase(out: &mut String, grapheme: &str) {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return;
    };

    match first {
        '\u{01C4}'..='\u{01C6}' => out.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => out.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => out.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => out.push('\u{01F2}'),
        _ => {
            let mut upper = first.to_uppercase();
            if let Some(lead) = upper.next() {
                out.push(lead);
            }
            out.extend(upper.flat_map(char::to_lowercase));
        }
    }

    out.extend(chars.flat_map(char::to_lowercase));
}

/// Remove a single leading `v` or `V`.
pub fn strip_leading_v(s: &str) -> &str {
    s.strip_prefix(['v', 'V']).unwrap_or(s)
}

/// First `max` characters of `s`, or all of `s` when shorter.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
