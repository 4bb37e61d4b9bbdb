use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::app::domain::page::{PageDefinition, PageId, PageKind, PagePatch};

/// Ordered collection of page definitions.
///
/// Ids are generated by the caller and are not deduplicated here; slugs are
/// not forced to be unique either (see `duplicate_slugs`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRegistry {
    pages: Vec<PageDefinition>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&mut self, page: PageDefinition) {
        self.pages.push(page);
    }

    /// Merge `patch` into the page with `id` and flag it modified.
    /// Returns false if no such page exists.
    pub fn update_page(&mut self, id: &PageId, patch: &PagePatch) -> bool {
        match self.find_by_id_mut(id) {
            Some(page) => {
                patch.apply_to(page);
                page.modified = true;
                true
            }
            None => false,
        }
    }

    /// Remove the page with `id`. Returns the removed page, if any.
    pub fn delete_page(&mut self, id: &PageId) -> Option<PageDefinition> {
        let idx = self.pages.iter().position(|p| &p.id == id)?;
        Some(self.pages.remove(idx))
    }

    pub fn find_by_id(&self, id: &PageId) -> Option<&PageDefinition> {
        self.pages.iter().find(|p| &p.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: &PageId) -> Option<&mut PageDefinition> {
        self.pages.iter_mut().find(|p| &p.id == id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&PageDefinition> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// First page of kind homepage, else the first page.
    pub fn homepage(&self) -> Option<&PageDefinition> {
        self.pages
            .iter()
            .find(|p| p.kind == PageKind::Homepage)
            .or_else(|| self.pages.first())
    }

    pub fn first(&self) -> Option<&PageDefinition> {
        self.pages.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageDefinition> {
        self.pages.iter()
    }

    pub fn as_slice(&self) -> &[PageDefinition] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Slugs used by more than one page, with the ids that share them.
    pub fn duplicate_slugs(&self) -> BTreeMap<String, Vec<PageId>> {
        let mut by_slug: BTreeMap<String, Vec<PageId>> = BTreeMap::new();
        for page in &self.pages {
            by_slug.entry(page.slug.clone()).or_default().push(page.id.clone());
        }
        by_slug.retain(|_, ids| ids.len() > 1);
        by_slug
    }

    /// Number of pages of kind homepage.
    pub fn homepage_count(&self) -> usize {
        self.pages.iter().filter(|p| p.kind == PageKind::Homepage).count()
    }

    pub fn mark_all_clean(&mut self) {
        for page in &mut self.pages {
            page.modified = false;
        }
    }
}

impl<'a> IntoIterator for &'a PageRegistry {
    type Item = &'a PageDefinition;
    type IntoIter = std::slice::Iter<'a, PageDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: &str, slug: &str, kind: PageKind) -> PageDefinition {
        PageDefinition::new(PageId::from(id), id, slug, kind)
    }

    fn registry() -> PageRegistry {
        let mut r = PageRegistry::new();
        r.add_page(page("home", "/", PageKind::Homepage));
        r.add_page(page("about", "/about", PageKind::About));
        r
    }

    #[test]
    fn test_add_page() {
        let mut r = registry();
        r.add_page(page("pricing", "/pricing", PageKind::Landing));
        assert_eq!(r.len(), 3);
        assert_eq!(r.find_by_slug("/pricing").unwrap().id, PageId::from("pricing"));
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut r = registry();
        r.add_page(page("about", "/about", PageKind::About));
        assert_eq!(r.len(), 3);
        assert_eq!(r.duplicate_slugs().len(), 1);
    }

    #[test]
    fn test_update_page_sets_modified() {
        let mut r = registry();
        assert!(r.update_page(&PageId::from("about"), &PagePatch::html("<h1>About us</h1>")));
        let about = r.find_by_id(&PageId::from("about")).unwrap();
        assert!(about.modified);
        assert_eq!(about.html, "<h1>About us</h1>");
        assert!(!r.find_by_id(&PageId::from("home")).unwrap().modified);
    }

    #[test]
    fn test_update_unknown_page_is_noop() {
        let mut r = registry();
        let before = r.clone();
        assert!(!r.update_page(&PageId::from("ghost"), &PagePatch::css("x")));
        assert_eq!(r, before);
    }

    #[test]
    fn test_delete_page() {
        let mut r = registry();
        let removed = r.delete_page(&PageId::from("home")).unwrap();
        assert_eq!(removed.slug, "/");
        assert_eq!(r.len(), 1);
        assert!(r.delete_page(&PageId::from("home")).is_none());
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_homepage_falls_back_to_first() {
        let mut r = PageRegistry::new();
        assert!(r.homepage().is_none());
        r.add_page(page("blog", "/blog", PageKind::Blog));
        r.add_page(page("main", "/main", PageKind::Homepage));
        assert_eq!(r.homepage().unwrap().id, PageId::from("main"));
        r.delete_page(&PageId::from("main"));
        assert_eq!(r.homepage().unwrap().id, PageId::from("blog"));
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_value(registry()).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_mark_all_clean() {
        let mut r = registry();
        r.update_page(&PageId::from("home"), &PagePatch::js("console.log(1)"));
        r.mark_all_clean();
        assert!(r.iter().all(|p| !p.modified));
    }
}
