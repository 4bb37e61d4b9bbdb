use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub String);

impl PageId {
    /// Fresh random id for a page created in the editor.
    pub fn generate() -> Self {
        PageId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        PageId(s.to_string())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Homepage,
    About,
    Contact,
    Blog,
    Product,
    Landing,
    #[default]
    Custom,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Homepage => "homepage",
            PageKind::About => "about",
            PageKind::Contact => "contact",
            PageKind::Blog => "blog",
            PageKind::Product => "product",
            PageKind::Landing => "landing",
            PageKind::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<PageKind> {
        match s.to_lowercase().as_str() {
            "homepage" | "home" => Some(PageKind::Homepage),
            "about" => Some(PageKind::About),
            "contact" => Some(PageKind::Contact),
            "blog" => Some(PageKind::Blog),
            "product" => Some(PageKind::Product),
            "landing" => Some(PageKind::Landing),
            "custom" => Some(PageKind::Custom),
            _ => None,
        }
    }

    /// Template name suggested for new pages of this kind.
    pub fn default_template(&self) -> &'static str {
        match self {
            PageKind::Homepage => "home",
            PageKind::Blog => "blog-index",
            PageKind::Product => "product-detail",
            PageKind::Landing => "landing",
            PageKind::About | PageKind::Contact | PageKind::Custom => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDefinition {
    pub id: PageId,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type", default)]
    pub kind: PageKind,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub css: String,
    #[serde(default)]
    pub js: String,
    #[serde(default)]
    pub modified: bool,
}

impl PageDefinition {
    pub fn new(id: PageId, name: impl Into<String>, slug: impl Into<String>, kind: PageKind) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            kind,
            template: kind.default_template().to_string(),
            html: String::new(),
            css: String::new(),
            js: String::new(),
            modified: false,
        }
    }
}

/// Partial update for a page. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub kind: Option<PageKind>,
    pub template: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
    pub js: Option<String>,
}

impl PagePatch {
    pub fn html(html: impl Into<String>) -> Self {
        Self { html: Some(html.into()), ..Default::default() }
    }

    pub fn css(css: impl Into<String>) -> Self {
        Self { css: Some(css.into()), ..Default::default() }
    }

    pub fn js(js: impl Into<String>) -> Self {
        Self { js: Some(js.into()), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply every set field to `page`. Does not touch `modified`.
    pub fn apply_to(&self, page: &mut PageDefinition) {
        if let Some(ref name) = self.name {
            page.name = name.clone();
        }
        if let Some(ref slug) = self.slug {
            page.slug = slug.clone();
        }
        if let Some(kind) = self.kind {
            page.kind = kind;
        }
        if let Some(ref template) = self.template {
            page.template = template.clone();
        }
        if let Some(ref html) = self.html {
            page.html = html.clone();
        }
        if let Some(ref css) = self.css {
            page.css = css.clone();
        }
        if let Some(ref js) = self.js {
            page.js = js.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_uses_kind_template() {
        let page = PageDefinition::new(PageId::from("p1"), "Blog", "/blog", PageKind::Blog);
        assert_eq!(page.template, "blog-index");
        assert!(!page.modified);
        assert!(page.html.is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(PageId::generate(), PageId::generate());
    }

    #[test]
    fn test_page_kind_serializes_as_type() {
        let page = PageDefinition::new(PageId::from("home"), "Home", "/", PageKind::Homepage);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["type"], "homepage");
        assert_eq!(json["id"], "home");
    }

    #[test]
    fn test_page_kind_parse() {
        assert_eq!(PageKind::parse("Home"), Some(PageKind::Homepage));
        assert_eq!(PageKind::parse("landing"), Some(PageKind::Landing));
        assert_eq!(PageKind::parse("wiki"), None);
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut page = PageDefinition::new(PageId::from("p"), "Old", "/old", PageKind::Custom);
        page.css = "h1{}".to_string();
        let patch = PagePatch {
            name: Some("New".to_string()),
            html: Some("<p>hi</p>".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut page);
        assert_eq!(page.name, "New");
        assert_eq!(page.slug, "/old");
        assert_eq!(page.html, "<p>hi</p>");
        assert_eq!(page.css, "h1{}");
    }

    #[test]
    fn test_empty_patch() {
        assert!(PagePatch::default().is_empty());
        assert!(!PagePatch::js("x").is_empty());
    }
}
