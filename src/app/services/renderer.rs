//! Preview document generation.
//!
//! `render` turns a theme and a selected slug into one self-contained HTML
//! document for a sandboxed frame. It is pure: the same inputs always give
//! byte-identical output, and nothing outside its arguments is read.
//!
//! Navigation inside the preview never calls into the host. Links carry a
//! `data-slug` attribute and a small bridge script posts
//! `{ type: "navigate", url }` to the parent window instead.

use crate::app::domain::page::PageDefinition;
use crate::app::domain::theme::{ScaleName, Shade, ThemeConfiguration};
use crate::app::services::text_ops::{escape_html, escape_script, escape_style};

/// Pages listed in the generated navigation header.
pub const MAX_NAV_PAGES: usize = 5;

/// Posts navigation requests to the host frame.
const NAV_BRIDGE_JS: &str = r#"document.querySelectorAll('[data-slug]').forEach(function (link) {
  link.addEventListener('click', function (event) {
    event.preventDefault();
    window.parent.postMessage({ type: 'navigate', url: link.getAttribute('data-slug') }, '*');
  });
});"#;

const BASE_CSS: &str = r#"*, *::before, *::after { box-sizing: border-box; }
body {
  margin: 0;
  font-family: var(--font-sans);
  font-size: var(--font-size-base);
  line-height: var(--line-height-normal);
  color: var(--text-primary);
  background: var(--bg-primary);
}
h1, h2, h3 { line-height: var(--line-height-tight); font-weight: var(--font-weight-bold); }
code, pre { font-family: var(--font-mono); }
a { color: var(--color-primary); }
.container { max-width: var(--container-max-width); margin: 0 auto; padding: 0 var(--spacing-md); }
.site-header { height: var(--header-height); background: var(--bg-primary); border-bottom: var(--border-width-thin) solid var(--border-color); }
.site-header .container { display: flex; align-items: center; justify-content: space-between; height: 100%; }
.site-logo { font-weight: var(--font-weight-bold); font-size: var(--font-size-xl); color: var(--text-primary); }
.site-nav a { margin-left: var(--spacing-lg); color: var(--text-secondary); text-decoration: none; transition: color var(--duration-fast) var(--easing); }
.site-nav a.active, .site-nav a:hover { color: var(--color-primary); }
.hero { padding: var(--spacing-2xl) 0; background: var(--bg-secondary); text-align: center; }
.hero h1 { font-size: var(--font-size-3xl); margin: 0 0 var(--spacing-md); }
.hero p { color: var(--text-secondary); font-size: var(--font-size-lg); }
.features { padding: var(--spacing-2xl) 0; }
.feature-grid { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: var(--spacing-lg); }
.site-footer { padding: var(--spacing-xl) 0; background: var(--color-neutral-900); color: var(--color-neutral-300); font-size: var(--font-size-sm); }
"#;

/// Placeholder cards shown when a page has no HTML of its own.
const PLACEHOLDER_FEATURES: [(&str, &str); 3] = [
    ("Fast Performance", "Pages load quickly on every device."),
    ("Secure Checkout", "Payments are processed safely and reliably."),
    ("Friendly Support", "Our team is here to help whenever you need it."),
];

/// The page shown for `selected_slug`: exact slug match, else the first page.
pub fn resolve_page<'a>(theme: &'a ThemeConfiguration, selected_slug: &str) -> Option<&'a PageDefinition> {
    theme
        .pages
        .find_by_slug(selected_slug)
        .or_else(|| theme.pages.first())
}

/// Flat list of CSS custom properties derived from the theme tokens.
pub fn css_variables(theme: &ThemeConfiguration) -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = Vec::new();
    let mut push = |name: &str, value: &str| vars.push((format!("--{}", name), value.to_string()));

    let colors = &theme.colors;
    for scale_name in ScaleName::ALL {
        let scale = colors.scale(scale_name);
        for (shade, value) in scale.iter() {
            push(&format!("color-{}-{}", scale_name.as_str(), shade.value()), value);
        }
    }
    for scale_name in ScaleName::ALL {
        push(
            &format!("color-{}", scale_name.as_str()),
            colors.scale(scale_name).get(Shade::S500),
        );
    }

    push("bg-primary", &colors.background.primary);
    push("bg-secondary", &colors.background.secondary);
    push("bg-tertiary", &colors.background.tertiary);
    push("text-primary", &colors.text.primary);
    push("text-secondary", &colors.text.secondary);
    push("text-tertiary", &colors.text.tertiary);
    push("text-inverse", &colors.text.inverse);
    push("border-light", &colors.border.light);
    push("border-color", &colors.border.medium);
    push("border-dark", &colors.border.dark);

    let t = &theme.typography;
    push("font-sans", &t.font_family.sans);
    push("font-serif", &t.font_family.serif);
    push("font-mono", &t.font_family.mono);
    push("font-size-xs", &t.font_size.xs);
    push("font-size-sm", &t.font_size.sm);
    push("font-size-base", &t.font_size.base);
    push("font-size-lg", &t.font_size.lg);
    push("font-size-xl", &t.font_size.xl);
    push("font-size-2xl", &t.font_size.xxl);
    push("font-size-3xl", &t.font_size.xxxl);
    push("font-weight-light", &t.font_weight.light.to_string());
    push("font-weight-normal", &t.font_weight.normal.to_string());
    push("font-weight-medium", &t.font_weight.medium.to_string());
    push("font-weight-semibold", &t.font_weight.semibold.to_string());
    push("font-weight-bold", &t.font_weight.bold.to_string());
    push("line-height-tight", &t.line_height.tight);
    push("line-height-normal", &t.line_height.normal);
    push("line-height-relaxed", &t.line_height.relaxed);

    let s = &theme.spacing;
    push("spacing-xs", &s.xs);
    push("spacing-sm", &s.sm);
    push("spacing-md", &s.md);
    push("spacing-lg", &s.lg);
    push("spacing-xl", &s.xl);
    push("spacing-2xl", &s.xxl);

    let b = &theme.borders;
    push("radius-none", &b.radius.none);
    push("radius-sm", &b.radius.sm);
    push("radius-md", &b.radius.md);
    push("radius-lg", &b.radius.lg);
    push("radius-full", &b.radius.full);
    push("border-width-thin", &b.width.thin);
    push("border-width-medium", &b.width.medium);
    push("border-width-thick", &b.width.thick);

    push("shadow-sm", &theme.shadows.sm);
    push("shadow-md", &theme.shadows.md);
    push("shadow-lg", &theme.shadows.lg);
    push("shadow-xl", &theme.shadows.xl);

    push("duration-fast", &theme.animations.duration.fast);
    push("duration-normal", &theme.animations.duration.normal);
    push("duration-slow", &theme.animations.duration.slow);
    push("easing", &theme.animations.easing);

    push("container-max-width", &theme.layout.container_max_width);
    push("header-height", &theme.layout.header_height);
    push("sidebar-width", &theme.layout.sidebar_width);
    push("grid-columns", &theme.layout.grid_columns.to_string());

    vars
}

/// `:root { ... }` block plus the base site stylesheet.
pub fn global_styles(theme: &ThemeConfiguration) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in css_variables(theme) {
        css.push_str(&format!("  {}: {};\n", name, value));
    }
    css.push_str("}\n");
    css.push_str(BASE_CSS);
    escape_style(&css)
}

/// One rule per entry in `component_styles`, selector `.<component>`.
fn component_styles(theme: &ThemeConfiguration) -> String {
    let mut css = String::new();
    for (component, style) in &theme.component_styles {
        css.push_str(&format!(".{} {{\n", component));
        for (property, value) in &style.properties {
            css.push_str(&format!("  {}: {};\n", property, value));
        }
        css.push_str("}\n");
    }
    escape_style(&css)
}

fn navigation(theme: &ThemeConfiguration, current: Option<&PageDefinition>) -> String {
    let mut html = String::from("<header class=\"site-header\">\n<div class=\"container\">\n");
    html.push_str(&format!(
        "<span class=\"site-logo\">{}</span>\n<nav class=\"site-nav\">\n",
        escape_html(&theme.name)
    ));
    for page in theme.pages.iter().take(MAX_NAV_PAGES) {
        let active = current.is_some_and(|c| c.id == page.id);
        html.push_str(&format!(
            "<a href=\"#\" data-slug=\"{}\"{}>{}</a>\n",
            escape_html(&page.slug),
            if active { " class=\"active\"" } else { "" },
            escape_html(&page.name)
        ));
    }
    html.push_str("</nav>\n</div>\n</header>\n");
    html
}

/// Built-in layout for pages without HTML: a welcome hero and three feature cards.
pub fn placeholder_body(theme: &ThemeConfiguration) -> String {
    let name = escape_html(&theme.name);
    let mut html = String::new();
    html.push_str("<section class=\"hero\">\n<div class=\"container\">\n");
    html.push_str(&format!("<h1>Welcome to {}</h1>\n", name));
    html.push_str("<p>Start editing this page to replace the placeholder content.</p>\n");
    html.push_str("<a class=\"button\" href=\"#\">Get Started</a>\n");
    html.push_str("</div>\n</section>\n");
    html.push_str("<section class=\"features\">\n<div class=\"container feature-grid\">\n");
    for (title, text) in PLACEHOLDER_FEATURES {
        html.push_str(&format!(
            "<div class=\"card feature-card\">\n<h3>{}</h3>\n<p>{}</p>\n</div>\n",
            title, text
        ));
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn footer(theme: &ThemeConfiguration) -> String {
    format!(
        "<footer class=\"site-footer\">\n<div class=\"container\">\n<p>&copy; {}. All rights reserved.</p>\n</div>\n</footer>\n",
        escape_html(&theme.name)
    )
}

/// Render `theme` with the page at `selected_slug` into a complete HTML document.
pub fn render(theme: &ThemeConfiguration, selected_slug: &str) -> String {
    let page = resolve_page(theme, selected_slug);

    let title = match page {
        Some(p) => format!("{} | {}", escape_html(&p.name), escape_html(&theme.name)),
        None => escape_html(&theme.name),
    };

    let mut doc = String::with_capacity(16 * 1024);
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"utf-8\">\n");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    doc.push_str(&format!("<title>{}</title>\n", title));

    doc.push_str("<style id=\"theme-variables\">\n");
    doc.push_str(&global_styles(theme));
    doc.push_str("</style>\n");

    doc.push_str("<style id=\"component-styles\">\n");
    doc.push_str(&component_styles(theme));
    doc.push_str("</style>\n");

    if !theme.custom_css.is_empty() {
        doc.push_str("<style id=\"custom-css\">\n");
        doc.push_str(&escape_style(&theme.custom_css));
        doc.push_str("\n</style>\n");
    }

    if let Some(p) = page.filter(|p| !p.css.is_empty()) {
        doc.push_str("<style id=\"page-css\">\n");
        doc.push_str(&escape_style(&p.css));
        doc.push_str("\n</style>\n");
    }
    doc.push_str("</head>\n<body>\n");

    doc.push_str(&navigation(theme, page));

    let slug = page.map(|p| p.slug.as_str()).unwrap_or("");
    doc.push_str(&format!("<main id=\"page-content\" data-page=\"{}\">\n", escape_html(slug)));
    match page {
        Some(p) if !p.html.trim().is_empty() => {
            doc.push_str(&p.html);
            doc.push('\n');
        }
        _ => doc.push_str(&placeholder_body(theme)),
    }
    doc.push_str("</main>\n");

    doc.push_str(&footer(theme));

    doc.push_str("<script id=\"navigation-bridge\">\n");
    doc.push_str(NAV_BRIDGE_JS);
    doc.push_str("\n</script>\n");

    if let Some(p) = page.filter(|p| !p.js.is_empty()) {
        doc.push_str("<script id=\"page-js\">\n");
        doc.push_str(&escape_script(&p.js));
        doc.push_str("\n</script>\n");
    }

    if !theme.custom_js.is_empty() {
        doc.push_str("<script id=\"custom-js\">\n");
        doc.push_str(&escape_script(&theme.custom_js));
        doc.push_str("\n</script>\n");
    }

    doc.push_str("</body>\n</html>\n");
    doc
}
