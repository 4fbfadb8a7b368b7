//! Content template registry
//!
//! Maps `(section, item label)` to a content descriptor. Custom per-item
//! templates win; otherwise the section's generic content is used.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::{info, warn};

use crate::content::ContentDescriptor;
use crate::site::SiteMarkup;

/// Sections every site is expected to provide generic content for
pub const REQUIRED_SECTIONS: [&str; 4] = ["services", "products", "contact", "about"];

static STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("strip regex should compile"));
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s-]+").expect("separator regex should compile"));

/// Slug of a menu label: lower-case, punctuation dropped, words joined by `-`
pub fn slugify(label: &str) -> String {
    let lowered = label.to_lowercase();
    let stripped = STRIP.replace_all(&lowered, "");
    SEPARATORS
        .replace_all(&stripped, "-")
        .trim_matches('-')
        .to_string()
}

/// Normalized lookup key for a menu item
pub fn content_key(section_id: &str, label: &str) -> String {
    format!("{}-{}", section_id.to_lowercase(), slugify(label))
}

#[derive(Debug, Default)]
pub struct TemplateRegistry {
    custom: HashMap<String, Arc<ContentDescriptor>>,
    sections: HashMap<String, Arc<ContentDescriptor>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from site markup, once at startup
    pub fn from_site(site: &SiteMarkup) -> Self {
        let mut registry = Self::new();

        for section in &site.sections {
            let key = section.id.to_lowercase();
            registry.register_section(
                &key,
                ContentDescriptor::new(format!("{key}-content"), section.generic.clone()),
            );
        }

        for custom in &site.custom {
            let key = content_key(&custom.section, &custom.label);
            registry.register(key.clone(), ContentDescriptor::new(key, custom.fragment.clone()));
        }

        for required in REQUIRED_SECTIONS {
            if !registry.sections.contains_key(required) {
                warn!(section = required, "site markup has no generic content for section");
            }
        }

        info!(
            sections = registry.sections.len(),
            custom = registry.custom.len(),
            "content registry built"
        );
        registry
    }

    /// Register a custom template under an exact key; a later registration replaces it
    pub fn register(&mut self, key: impl Into<String>, descriptor: ContentDescriptor) {
        let key = key.into();
        if self.custom.insert(key.clone(), Arc::new(descriptor)).is_some() {
            warn!(key = %key, "replacing custom content template");
        }
    }

    /// Register the generic fallback for a whole section
    pub fn register_section(&mut self, section_id: &str, descriptor: ContentDescriptor) {
        self.sections
            .insert(section_id.to_lowercase(), Arc::new(descriptor));
    }

    /// Custom template for the item if registered, else the section's generic content
    pub fn resolve(&self, section_id: &str, label: &str) -> Option<Arc<ContentDescriptor>> {
        let key = content_key(section_id, label);
        if let Some(descriptor) = self.custom.get(&key) {
            return Some(Arc::clone(descriptor));
        }

        let fallback = self.sections.get(&section_id.to_lowercase()).cloned();
        if fallback.is_none() {
            warn!(key = %key, section = section_id, "no content registered for menu item or its section");
        }
        fallback
    }

    pub fn has_custom(&self, key: &str) -> bool {
        self.custom.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Fragment;

    fn fragment(title: &str) -> Fragment {
        Fragment {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    #[test]
    fn test_slug_ignores_case_and_punctuation() {
        assert_eq!(slugify("Wedding Cakes!"), "wedding-cakes");
        assert_eq!(slugify("wedding-cakes"), "wedding-cakes");
        assert_eq!(slugify("  Birthday   Cakes "), "birthday-cakes");
        assert_eq!(slugify("Pies & Tarts"), "pies-tarts");
    }

    #[test]
    fn test_content_key() {
        assert_eq!(content_key("Products", "Wedding Cakes"), "products-wedding-cakes");
        assert_eq!(content_key("contact", "Contact Form"), "contact-contact-form");
    }

    #[test]
    fn test_resolve_prefers_custom() {
        let mut registry = TemplateRegistry::new();
        registry.register_section("products", ContentDescriptor::new("products-content", fragment("Products")));
        registry.register(
            "products-wedding-cakes",
            ContentDescriptor::new("products-wedding-cakes", fragment("Wedding Cakes")),
        );

        let resolved = registry.resolve("products", "Wedding Cakes!").unwrap();
        assert_eq!(resolved.key(), "products-wedding-cakes");
    }

    #[test]
    fn test_resolve_falls_back_to_section() {
        let mut registry = TemplateRegistry::new();
        registry.register_section("products", ContentDescriptor::new("products-content", fragment("Products")));

        let resolved = registry.resolve("PRODUCTS", "Pies").unwrap();
        assert_eq!(resolved.key(), "products-content");
    }

    #[test]
    fn test_resolve_missing_section() {
        let registry = TemplateRegistry::new();
        assert!(registry.resolve("services", "Our Mission").is_none());
    }

    #[test]
    fn test_from_site_registers_everything() {
        let site = SiteMarkup::bakery();
        let registry = TemplateRegistry::from_site(&site);

        for section in REQUIRED_SECTIONS {
            assert!(registry.resolve(section, "no such item").is_some(), "{section}");
        }
        assert!(registry.has_custom("products-wedding-cakes"));
        assert!(registry.has_custom("contact-contact-form"));
    }
}
