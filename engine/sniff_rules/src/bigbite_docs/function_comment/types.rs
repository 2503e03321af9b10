//! Doc-comment type names.

/// Canonical spelling of a documented type.
///
/// Allowed types pass through; common aliases (`boolean`, `integer`,
/// `double`, `real`) map to their short form; `array(k => v)` and
/// `array<k, v>` are normalised to `array<k,v>`. Anything else is a
/// custom type and is returned as written.
pub(super) fn suggest_type(var_type: &str, allowed: &[String]) -> String {
    if var_type.is_empty() {
        return String::new();
    }
    if allowed.iter().any(|t| t == var_type) {
        return var_type.to_owned();
    }

    let lower = var_type.to_ascii_lowercase();
    match lower.as_str() {
        "bool" | "boolean" => return "bool".to_owned(),
        "double" | "real" | "float" => return "float".to_owned(),
        "int" | "integer" => return "int".to_owned(),
        "array()" | "array" => return "array".to_owned(),
        _ => {}
    }
    if allowed.contains(&lower) {
        return lower;
    }

    let syntax = if lower.contains("array(") {
        ARRAY_OLD
    } else if lower.contains("array<") {
        ARRAY_GENERIC
    } else {
        return var_type.to_owned();
    };
    let parts = lower
        .starts_with(syntax.prefix)
        .then(|| array_parts(&var_type[syntax.prefix.len()..], syntax))
        .flatten();
    match parts {
        Some((key, value)) => {
            let key = suggest_type(key, allowed);
            let value = suggest_type(value, allowed);
            if value.is_empty() {
                format!("array<{key}>")
            } else {
                format!("array<{key},{value}>")
            }
        }
        None => "array".to_owned(),
    }
}

/// Punctuation of one array spelling.
struct ArraySyntax {
    prefix: &'static str,
    separator: &'static str,
    closer: char,
    /// Characters that end the first type besides whitespace.
    stops: &'static [char],
}

const ARRAY_OLD: &ArraySyntax = &ArraySyntax {
    prefix: "array(",
    separator: "=>",
    closer: ')',
    stops: &['^', '=', '>'],
};

const ARRAY_GENERIC: &ArraySyntax = &ArraySyntax {
    prefix: "array<",
    separator: ",",
    closer: '>',
    stops: &['^', ','],
};

/// Key and value types of an array spelling, given the text after its
/// prefix. `None` when the text is not a well-formed array type.
///
/// The first type is the longest run that still leaves a closer reachable,
/// so `array(int)` yields `int`.
fn array_parts<'t>(after_prefix: &'t str, syntax: &ArraySyntax) -> Option<(&'t str, &'t str)> {
    let body = after_prefix.trim_start();
    let run = body
        .find(|c: char| c.is_whitespace() || syntax.stops.contains(&c))
        .unwrap_or(body.len());

    for end in (0..=run).rev().filter(|&e| body.is_char_boundary(e)) {
        let rest = body[end..].trim_start();
        if let Some(value) = rest.strip_prefix(syntax.separator) {
            let value = value.trim_start();
            if let Some(close) = value.rfind(syntax.closer) {
                return Some((&body[..end], value[..close].trim_end()));
            }
        }
        if rest.starts_with(syntax.closer) {
            return Some((&body[..end], ""));
        }
    }
    None
}

/// Length of the type list at the start of a `@return` string.
///
/// The list is a `|`-separated run of `array(...)` forms and names made of
/// ASCII letters, digits, `\`, `[` and `]`.
pub(super) fn return_type_len(content: &str) -> usize {
    let bytes = content.as_bytes();
    let mut at = 0;
    loop {
        let mut next = at;
        if bytes.get(next) == Some(&b'|') {
            next += 1;
        }
        let rest = &bytes[next..];
        if rest.len() >= 6 && rest[..6].eq_ignore_ascii_case(b"array(") {
            if let Some(close) = rest[6..].iter().position(|&b| b == b')') {
                at = next + 6 + close + 1;
                continue;
            }
        }
        let run = rest
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'\\' | b'[' | b']'))
            .count();
        if run == 0 {
            return at;
        }
        at = next + run;
    }
}
