use regex_lite::Regex;
use std::sync::LazyLock;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([a-z0-9]+(-[a-z0-9]+)*(/[a-z0-9]+(-[a-z0-9]+)*)*)?$").expect("slug pattern"));

static CLOSING_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(script)").expect("script close pattern"));

static CLOSING_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(style)").expect("style close pattern"));

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("separator pattern"));

/// Derive a URL slug from a page name: `"Pricing & Plans"` -> `/pricing-plans`.
///
/// Names with no usable characters map to `/`.
pub fn slugify(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let dashed = NON_SLUG_CHARS.replace_all(&lower, "-");
    format!("/{}", dashed.trim_matches('-'))
}

/// Normalize user-entered slugs: ensure a single leading slash, lowercase,
/// and no trailing slash (except for the root).
pub fn normalize_slug(raw: &str) -> String {
    let segments: Vec<String> = raw
        .trim()
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| slugify(s).trim_start_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Escape text for use inside HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep inline script bodies from closing their own `<script>` element.
/// Tag names match in any letter case, as HTML parsers do.
pub fn escape_script(js: &str) -> String {
    CLOSING_SCRIPT.replace_all(js, r"<\/${1}").into_owned()
}

/// Keep inline style bodies from closing their own `<style>` element.
pub fn escape_style(css: &str) -> String {
    CLOSING_STYLE.replace_all(css, r"<\/${1}").into_owned()
}
