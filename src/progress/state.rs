use std::collections::HashSet;

/// Recover the names of lessons marked done in a previous checklist.
///
/// Best-effort: lines that do not look like a checked task are skipped, so a
/// hand-edited or truncated checklist never fails the run. Names with no
/// matching file are returned as-is and simply never joined.
pub fn extract(previous: Option<&str>) -> HashSet<String> {
    previous
        .map(|text| text.lines().filter_map(checked_item).collect())
        .unwrap_or_default()
}

/// Parse one checklist line.
///
/// Returns the bracketed item name for lines shaped like
/// `- [x] <anything> [name]...` (bullet `-`, `*` or `+`; marker `x` or `X`),
/// and `None` for everything else, unchecked tasks included.
pub fn checked_item(line: &str) -> Option<String> {
    let rest = line
        .trim_start()
        .strip_prefix(|c: char| matches!(c, '-' | '*' | '+'))?;
    let rest = rest.strip_prefix(char::is_whitespace)?.trim_start();
    let rest = checked_box(rest)?;
    let open = rest.find('[')?;
    bracketed(&rest[open + 1..])
}

/// Strip a checked `[x]` box, returning what follows it.
fn checked_box(s: &str) -> Option<&str> {
    let mut chars = s.strip_prefix('[')?.chars();
    match chars.next()? {
        'x' | 'X' => chars.as_str().strip_prefix(']'),
        _ => None,
    }
}

/// Read a name up to its closing bracket. Nested brackets must balance,
/// `\n` and `\r` are line breaks and `\` escapes any other character.
fn bracketed(s: &str) -> Option<String> {
    let mut name = String::new();
    let mut depth = 0usize;
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => name.push(match chars.next()? {
                'n' => '\n',
                'r' => '\r',
                other => other,
            }),
            '[' => {
                depth += 1;
                name.push(c);
            }
            ']' if depth == 0 => return (!name.is_empty()).then_some(name),
            ']' => {
                depth -= 1;
                name.push(c);
            }
            _ => name.push(c),
        }
    }

    None
}
