//! Panel content templates and their live instances
//!
//! A [`ContentDescriptor`] is an immutable archetype: the fragment itself is
//! shared behind an `Arc` and never mutated. Every activation asks it for a
//! fresh [`ContentInstance`] with its own id, so two live copies of the same
//! template never collide on element ids.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Renderable fragment as supplied by the site markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Paragraph { text: String },
    List { items: Vec<String> },
    /// Rotating product ring
    Carousel { figures: Vec<Figure> },
    /// Contact form placeholder, fields are owned by the form handler
    ContactForm,
}

/// One product card on a carousel ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub name: String,
    /// Image reference, e.g. `images/wedding-cake.jpg`
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Post-insert initializer a template needs, fixed at registration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Carousel,
    ContactForm,
}

/// Immutable content template plus the initializers to run on each instance
#[derive(Debug)]
pub struct ContentDescriptor {
    key: String,
    template: Arc<Fragment>,
    capabilities: Vec<Capability>,
}

impl ContentDescriptor {
    pub fn new(key: impl Into<String>, fragment: Fragment) -> Self {
        let mut capabilities = Vec::new();
        for block in &fragment.blocks {
            let capability = match block {
                Block::Carousel { .. } => Capability::Carousel,
                Block::ContactForm => Capability::ContactForm,
                _ => continue,
            };
            if !capabilities.contains(&capability) {
                capabilities.push(capability);
            }
        }

        Self {
            key: key.into(),
            template: Arc::new(fragment),
            capabilities,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn requires(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Produce a fresh, independently addressable copy of this template
    pub fn instantiate(&self, id: InstanceId) -> ContentInstance {
        ContentInstance {
            id,
            key: self.key.clone(),
            template: Arc::clone(&self.template),
            carousel_id: self
                .requires(Capability::Carousel)
                .then(|| format!("panel-product-carousel-{}", id.0)),
            form_id: self
                .requires(Capability::ContactForm)
                .then(|| format!("panel-contact-form-{}", id.0)),
        }
    }
}

/// Identity of one inserted copy of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

/// Hands out instance ids; never reuses one
#[derive(Debug, Default)]
pub struct InstanceIds {
    next: u64,
}

impl InstanceIds {
    pub fn allocate(&mut self) -> InstanceId {
        self.next += 1;
        InstanceId(self.next)
    }
}

/// Live copy of a template inserted into the panel
#[derive(Debug, Clone)]
pub struct ContentInstance {
    id: InstanceId,
    key: String,
    template: Arc<Fragment>,
    carousel_id: Option<String>,
    form_id: Option<String>,
}

impl ContentInstance {
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Registry key of the descriptor this was cloned from
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn fragment(&self) -> &Fragment {
        &self.template
    }

    /// Element id of the embedded carousel, unique to this instance
    pub fn carousel_id(&self) -> Option<&str> {
        self.carousel_id.as_deref()
    }

    /// Element id of the embedded contact form, unique to this instance
    pub fn form_id(&self) -> Option<&str> {
        self.form_id.as_deref()
    }

    /// Figures of the first carousel block, if any
    pub fn figures(&self) -> &[Figure] {
        self.template
            .blocks
            .iter()
            .find_map(|block| match block {
                Block::Carousel { figures } => Some(figures.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}
