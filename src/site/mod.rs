//! Site markup provider
//!
//! Describes the accordion menu, each section's generic content and any
//! per-item custom content. Loaded from a JSON file or taken from the
//! built-in bakery site.

mod bakery;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::content::Fragment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMarkup {
    pub sections: Vec<SectionMarkup>,
    #[serde(default)]
    pub custom: Vec<CustomMarkup>,
}

/// One accordion section and its generic content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMarkup {
    pub id: String,
    pub title: String,
    pub items: Vec<String>,
    pub generic: Fragment,
}

/// Content for a single menu item, overriding its section's generic content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMarkup {
    pub section: String,
    pub label: String,
    pub fragment: Fragment,
}

impl SiteMarkup {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site markup from {:?}", path))?;

        let site: SiteMarkup = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse site markup from {:?}", path))?;

        if site.sections.is_empty() {
            bail!("Site markup {:?} defines no sections", path);
        }

        info!(
            path = %path.display(),
            sections = site.sections.len(),
            custom = site.custom.len(),
            "Loaded site markup"
        );
        Ok(site)
    }

    /// The Cake Walk Baking Co. site
    pub fn bakery() -> Self {
        bakery::site()
    }
}
