//! File and class name helpers shared by naming rule modules.

/// Convert a name to kebab-case.
///
/// A hyphen goes between every lowercase letter and the uppercase letter
/// after it, everything is lowercased, and underscores become hyphens.
/// `WordPress` stays one word.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous: Option<char> = None;
    for c in name.chars() {
        if c.is_ascii_uppercase() && previous.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push('-');
        }
        if c == '_' {
            out.push('-');
        } else {
            out.push(c.to_ascii_lowercase());
        }
        previous = Some(c);
    }
    if name.contains("WordPress") {
        out = out.replace("word-press", "wordpress");
    }
    out
}

/// Whether a name is already lowercase and hyphenated.
pub fn is_hyphenated(name: &str) -> bool {
    kebab_case(name) == name
}

/// Whether `stem` is `prefix` followed by the kebab-case form of `name`.
pub fn matches_prefix_pattern(stem: &str, prefix: &str, name: &str) -> bool {
    stem.strip_prefix(prefix)
        .is_some_and(|rest| rest == kebab_case(name))
}

/// Split a file name into stem and extension at the last dot.
pub fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file_name, None),
    }
}

/// Last component of a path, with any surrounding quotes removed.
///
/// Both `/` and `\` separate components.
pub fn base_name(path: &str) -> &str {
    let path = strip_quotes(path);
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn strip_quotes(path: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = path
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    path
}

/// Theme template names exempt from the hyphenation check.
///
/// Template prefixes followed by a dash (`single-my_post.php`), and MIME
/// type templates optionally followed by an underscore subtype
/// (`text_plain.php`), ending in `.php` or `.inc`.
pub fn is_theme_exception(file_name: &str) -> bool {
    const TEMPLATES: &[&str] = &[
        "archive", "category", "content", "embed", "page", "single", "tag", "taxonomy",
    ];
    const MIME_TYPES: &[&str] = &[
        "application",
        "audio",
        "example",
        "image",
        "message",
        "model",
        "multipart",
        "text",
        "video",
    ];

    let Some((stem, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    if ext != "php" && ext != "inc" {
        return false;
    }
    let rest_ok = |rest: &str| !rest.is_empty() && !rest.contains('.');
    let template = TEMPLATES.iter().any(|prefix| {
        stem.strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(rest_ok)
    });
    let mime = MIME_TYPES.iter().any(|prefix| {
        stem.strip_prefix(prefix).is_some_and(|rest| {
            rest.is_empty() || rest.strip_prefix('_').is_some_and(rest_ok)
        })
    });
    template || mime
}
