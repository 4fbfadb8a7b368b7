//! Panel navigation coordinator
//!
//! Keeps the accordion menu, the single detail panel and the panel's content
//! consistent. Owns which menu item is active, swaps the panel content on
//! activation, and drives the deferred work (default content, delegated
//! section-label clicks, carousel setup) through a generation-keyed queue.
//!
//! Invariants:
//! - at most one menu item is active;
//! - the panel is open iff an item is active;
//! - while open, exactly the active item's accordion section is expanded.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::autofit::{AutoFit, Size};
use crate::carousel::{CarouselRing, RotatingCarousel};
use crate::config::Config;
use crate::content::{ContentInstance, InstanceId, InstanceIds};
use crate::deferred::{Debouncer, DeferredQueue, Generation};
use crate::form::ContactForm;
use crate::registry::{TemplateRegistry, content_key};
use crate::site::SiteMarkup;

/// Position of a menu item: section index, item index within the section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId {
    pub section: usize,
    pub item: usize,
}

impl ItemId {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub section_id: String,
    pub label: String,
    /// Normalized key used to look up custom content
    pub target_key: String,
    active: bool,
}

impl MenuItem {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone)]
pub struct AccordionSection {
    pub id: String,
    pub title: String,
    pub items: Vec<MenuItem>,
    expanded: bool,
}

impl AccordionSection {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// Build the accordion from site markup
pub fn build_menu(site: &SiteMarkup) -> Vec<AccordionSection> {
    site.sections
        .iter()
        .map(|section| AccordionSection {
            id: section.id.clone(),
            title: section.title.clone(),
            items: section
                .items
                .iter()
                .map(|label| MenuItem {
                    section_id: section.id.clone(),
                    label: label.clone(),
                    target_key: content_key(&section.id, label),
                    active: false,
                })
                .collect(),
            expanded: false,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelState {
    pub is_open: bool,
    pub active_item: Option<ItemId>,
    pub current_scale: f32,
}

/// Outcome of a requested transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened(ItemId),
    Switched { from: ItemId, to: ItemId },
    Closed,
    /// Already in the requested state; nothing was touched
    Unchanged,
    /// Content could not be resolved; prior state kept
    Aborted,
}

/// Content currently inserted in the panel, with its live widgets
#[derive(Debug)]
pub struct PanelContent {
    instance: ContentInstance,
    title: String,
    pub carousel: Option<RotatingCarousel>,
    pub form: Option<ContactForm>,
}

impl PanelContent {
    /// Panel header text: the label of the item that opened it
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The instance alongside its live widgets, borrowed separately for rendering
    pub fn split_mut(&mut self) -> (&ContentInstance, Option<&mut RotatingCarousel>, Option<&mut ContactForm>) {
        (&self.instance, self.carousel.as_mut(), self.form.as_mut())
    }
}

#[derive(Debug)]
enum PanelTask {
    ShowDefault,
    ActivateFirstItem { section: usize },
    InitCarousel { instance: InstanceId },
}

#[derive(Debug)]
pub struct PanelCoordinator {
    sections: Vec<AccordionSection>,
    registry: Arc<TemplateRegistry>,
    config: Config,
    state: PanelState,
    content: Option<PanelContent>,
    autofit: AutoFit,
    ids: InstanceIds,
    generation: Generation,
    tasks: DeferredQueue<PanelTask>,
    relayout: Debouncer,
    viewport: Size,
    last_tick: Instant,
}

impl PanelCoordinator {
    /// Mount the panel for a viewport. Returns `None` when the environment
    /// can't host it (viewport below the desktop breakpoint, or no menu items).
    pub fn mount(
        site: &SiteMarkup,
        registry: Arc<TemplateRegistry>,
        config: &Config,
        viewport: Size,
        now: Instant,
    ) -> Option<Self> {
        if viewport.width < config.panel.desktop_breakpoint {
            debug!(
                width = viewport.width,
                breakpoint = config.panel.desktop_breakpoint,
                "viewport below desktop breakpoint, content panel not mounted"
            );
            return None;
        }

        let sections = build_menu(site);
        if sections.iter().all(|s| s.items.is_empty()) {
            info!("no menu items, content panel not mounted");
            return None;
        }

        let mut coordinator = Self {
            sections,
            registry,
            config: config.clone(),
            state: PanelState {
                is_open: false,
                active_item: None,
                current_scale: 1.0,
            },
            content: None,
            autofit: AutoFit::new(config.zoom.step, config.zoom.floor),
            ids: InstanceIds::default(),
            generation: Generation::default(),
            tasks: DeferredQueue::new(),
            relayout: Debouncer::new(config.panel.resize_debounce()),
            viewport,
            last_tick: now,
        };

        coordinator.tasks.schedule(
            now,
            config.panel.default_content_delay(),
            coordinator.generation,
            PanelTask::ShowDefault,
        );

        info!(sections = coordinator.sections.len(), "content panel mounted");
        Some(coordinator)
    }

    pub fn sections(&self) -> &[AccordionSection] {
        &self.sections
    }

    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.sections.get(id.section)?.items.get(id.item)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut MenuItem> {
        self.sections.get_mut(id.section)?.items.get_mut(id.item)
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut PanelContent> {
        self.content.as_mut()
    }

    /// Menu item activation
    pub fn activate(&mut self, id: ItemId, now: Instant) -> Transition {
        let Some(item) = self.item(id) else {
            warn!(?id, "activation of unknown menu item ignored");
            return Transition::Aborted;
        };

        if self.state.active_item == Some(id) {
            debug!(item = %item.label, "item already active, nothing to do");
            return Transition::Unchanged;
        }

        let Some(descriptor) = self.registry.resolve(&item.section_id, &item.label) else {
            info!(key = %item.target_key, "activation aborted, panel left as is");
            return Transition::Aborted;
        };
        let label = item.label.clone();

        let previous = self.state.active_item;
        if let Some(prev) = previous
            && let Some(prev_item) = self.item_mut(prev)
        {
            prev_item.active = false;
        }
        if let Some(item) = self.item_mut(id) {
            item.active = true;
        }

        self.generation = self.generation.next();

        // Replacing the previous content drops its widgets with it
        let instance = descriptor.instantiate(self.ids.allocate());
        let content = self.initialize(instance, label.clone(), now);
        self.content = Some(content);

        self.autofit.new_content();
        self.state.current_scale = self.autofit.scale();

        self.state.is_open = true;
        self.state.active_item = Some(id);

        for (index, section) in self.sections.iter_mut().enumerate() {
            section.expanded = index == id.section;
        }

        info!(item = %label, key = %descriptor.key(), "panel content switched");
        match previous {
            Some(from) => Transition::Switched { from, to: id },
            None => Transition::Opened(id),
        }
    }

    /// Run the descriptor's initializers against a freshly inserted instance
    fn initialize(&mut self, instance: ContentInstance, title: String, now: Instant) -> PanelContent {
        let form = instance.form_id().map(|form_id| {
            ContactForm::bind(
                form_id,
                self.config.form.validation_debounce(),
                self.config.form.success_reset(),
            )
        });

        if instance.carousel_id().is_some() {
            self.tasks.schedule(
                now,
                self.config.panel.carousel_init_delay(),
                self.generation,
                PanelTask::InitCarousel { instance: instance.id() },
            );
        }

        PanelContent {
            instance,
            title,
            carousel: None,
            form,
        }
    }

    fn init_carousel(&mut self, instance: InstanceId) {
        let depth = self.carousel_depth();
        let hover_scale = self.config.carousel.hover_scale;
        let period = Duration::from_secs_f32(self.config.carousel.rotation_period_secs);

        match self.content.as_mut() {
            Some(content) if content.instance.id() == instance => {
                let count = content.instance.figures().len();
                let ring = CarouselRing::mount(count, depth, hover_scale);
                content.carousel = Some(RotatingCarousel::new(ring, period));
                debug!(key = content.instance.key(), figures = count, depth, "panel carousel initialised");
            }
            _ => debug!(?instance, "carousel anchor gone, skipping initialisation"),
        }
    }

    /// Section label click: activate that section's first item after a short delay
    pub fn click_section_label(&mut self, section: usize, now: Instant) {
        if self.sections.get(section).is_none_or(|s| s.items.is_empty()) {
            return;
        }
        self.tasks.schedule(
            now,
            self.config.panel.first_item_delay(),
            self.generation,
            PanelTask::ActivateFirstItem { section },
        );
    }

    /// Close button
    pub fn close(&mut self) -> Transition {
        if !self.state.is_open {
            return Transition::Unchanged;
        }

        for section in &mut self.sections {
            section.expanded = false;
            for item in &mut section.items {
                item.active = false;
            }
        }
        self.state.is_open = false;
        self.state.active_item = None;
        self.generation = self.generation.next();

        info!("content panel closed");
        Transition::Closed
    }

    /// Viewport resize notification. Shrinking below the breakpoint hides
    /// the panel right away; carousel depth follows after the debounce.
    pub fn resize(&mut self, viewport: Size, now: Instant) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        if viewport.width < self.config.panel.desktop_breakpoint {
            self.close();
        }
        self.relayout.trigger(now);
    }

    fn carousel_depth(&self) -> f32 {
        self.config
            .carousel
            .depth_for(self.viewport.width, self.config.panel.desktop_breakpoint)
    }

    /// Drive time-based work. Returns transitions started by deferred tasks.
    pub fn tick(&mut self, now: Instant) -> Vec<Transition> {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        if self.relayout.fire(now) {
            let depth = self.carousel_depth();
            if let Some(carousel) = self.content.as_mut().and_then(|c| c.carousel.as_mut()) {
                carousel.ring_mut().apply(depth);
            }
        }

        if let Some(content) = self.content.as_mut() {
            if let Some(carousel) = content.carousel.as_mut() {
                carousel.tick(elapsed);
            }
            if let Some(form) = content.form.as_mut() {
                form.tick(now);
            }
        }

        let mut transitions = Vec::new();
        while let Some(task) = self.tasks.pop_due(now, self.generation) {
            match task {
                PanelTask::ShowDefault => {
                    if let Some(first) = self.first_item() {
                        transitions.push(self.activate(first, now));
                    }
                }
                PanelTask::ActivateFirstItem { section } => {
                    if self.sections.get(section).is_some_and(|s| !s.items.is_empty()) {
                        transitions.push(self.activate(ItemId::new(section, 0), now));
                    }
                }
                PanelTask::InitCarousel { instance } => self.init_carousel(instance),
            }
        }
        transitions
    }

    fn first_item(&self) -> Option<ItemId> {
        self.sections
            .iter()
            .position(|s| !s.items.is_empty())
            .map(|section| ItemId::new(section, 0))
    }

    /// Measurement of the panel's viewport and the content's natural size.
    /// Refits whenever either changed since the last call.
    pub fn measured(&mut self, container: Size, content: Size) {
        if let Some(scale) = self.autofit.observe(container, content) {
            self.state.current_scale = scale;
        }
    }

    pub fn zoom_in(&mut self) {
        self.state.current_scale = self.autofit.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.state.current_scale = self.autofit.zoom_out();
    }

    pub fn zoom_reset(&mut self) {
        self.state.current_scale = self.autofit.reset();
    }

    pub fn wheel(&mut self, delta_y: f32, ctrl: bool) {
        if let Some(scale) = self.autofit.wheel(delta_y, ctrl) {
            self.state.current_scale = scale;
        }
    }

    /// Earliest instant at which `tick` has pending work
    pub fn next_deadline(&self) -> Option<Instant> {
        let form = self
            .content
            .as_ref()
            .and_then(|c| c.form.as_ref())
            .and_then(|f| f.next_deadline());
        [self.tasks.next_due(), self.relayout.deadline(), form]
            .into_iter()
            .flatten()
            .min()
    }

    /// True while an embedded carousel is rotating and needs continuous repaints
    pub fn animating(&self) -> bool {
        self.state.is_open
            && self
                .content
                .as_ref()
                .and_then(|c| c.carousel.as_ref())
                .is_some_and(|c| !c.is_paused())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Block, ContentDescriptor, Figure, Fragment};
    use crate::site::{CustomMarkup, SectionMarkup};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn fragment(title: &str, blocks: Vec<Block>) -> Fragment {
        Fragment {
            title: title.to_string(),
            blocks,
        }
    }

    fn section(id: &str, items: &[&str]) -> SectionMarkup {
        SectionMarkup {
            id: id.to_string(),
            title: id.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            generic: fragment(id, vec![]),
        }
    }

    /// services: Our Mission; products: Gallery, Wedding Cakes
    fn site() -> SiteMarkup {
        SiteMarkup {
            sections: vec![
                section("services", &["Our Mission"]),
                section("products", &["Gallery", "Wedding Cakes"]),
            ],
            custom: vec![
                CustomMarkup {
                    section: "products".to_string(),
                    label: "Wedding Cakes".to_string(),
                    fragment: fragment("Wedding Cakes", vec![Block::Paragraph { text: "Tiers".to_string() }]),
                },
                CustomMarkup {
                    section: "products".to_string(),
                    label: "Gallery".to_string(),
                    fragment: fragment(
                        "Gallery",
                        vec![Block::Carousel {
                            figures: ["Cupcakes", "Pies", "Cookies"]
                                .iter()
                                .map(|name| Figure {
                                    name: name.to_string(),
                                    image: String::new(),
                                    details: vec![],
                                })
                                .collect(),
                        }],
                    ),
                },
            ],
        }
    }

    fn mount_at(site: &SiteMarkup, now: Instant) -> PanelCoordinator {
        let registry = Arc::new(TemplateRegistry::from_site(site));
        PanelCoordinator::mount(site, registry, &Config::default(), Size::new(1280.0, 800.0), now)
            .expect("desktop viewport mounts the panel")
    }

    /// Item shown in the panel, `None` while it is closed
    fn shown(coordinator: &PanelCoordinator) -> Option<ItemId> {
        let state = coordinator.state();
        state.active_item.filter(|_| state.is_open)
    }

    fn active_items(coordinator: &PanelCoordinator) -> Vec<String> {
        coordinator
            .sections()
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|i| i.is_active())
            .map(|i| i.label.clone())
            .collect()
    }

    fn expanded(coordinator: &PanelCoordinator) -> Vec<String> {
        coordinator
            .sections()
            .iter()
            .filter(|s| s.is_expanded())
            .map(|s| s.id.clone())
            .collect()
    }

    const SERVICES_MISSION: ItemId = ItemId { section: 0, item: 0 };
    const GALLERY: ItemId = ItemId { section: 1, item: 0 };
    const WEDDING_CAKES: ItemId = ItemId { section: 1, item: 1 };

    #[test]
    fn test_narrow_viewport_not_mounted() {
        let site = site();
        let registry = Arc::new(TemplateRegistry::from_site(&site));
        let mounted = PanelCoordinator::mount(&site, registry, &Config::default(), Size::new(600.0, 800.0), Instant::now());
        assert!(mounted.is_none());
    }

    #[test]
    fn test_menu_target_keys() {
        let menu = build_menu(&site());
        assert_eq!(menu[1].items[1].target_key, "products-wedding-cakes");
    }

    #[test]
    fn test_wedding_cakes_scenario() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);

        assert_eq!(coordinator.activate(WEDDING_CAKES, t0), Transition::Opened(WEDDING_CAKES));

        let content = coordinator.content().unwrap();
        assert_eq!(content.instance.key(), "products-wedding-cakes");
        assert_eq!(content.title(), "Wedding Cakes");
        assert_eq!(expanded(&coordinator), ["products"]);
        assert_eq!(shown(&coordinator), Some(WEDDING_CAKES));
    }

    #[test]
    fn test_fallback_to_section_content() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(SERVICES_MISSION, t0);
        assert_eq!(coordinator.content().unwrap().instance.key(), "services-content");
    }

    #[test]
    fn test_switch_across_sections_keeps_single_active() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);

        coordinator.activate(SERVICES_MISSION, t0);
        let transition = coordinator.activate(WEDDING_CAKES, t0);

        assert_eq!(transition, Transition::Switched { from: SERVICES_MISSION, to: WEDDING_CAKES });
        assert_eq!(active_items(&coordinator), ["Wedding Cakes"]);
        assert_eq!(expanded(&coordinator), ["products"]);
    }

    #[test]
    fn test_reactivation_keeps_content_instance() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(GALLERY, t0);
        let before = coordinator.content().unwrap().instance.id();

        assert_eq!(coordinator.activate(GALLERY, t0), Transition::Unchanged);
        assert_eq!(coordinator.content().unwrap().instance.id(), before);
    }

    #[test]
    fn test_unresolvable_item_aborts() {
        let mut site = site();
        site.sections.push(section("catering", &["Menus"]));
        let t0 = Instant::now();

        // Only services has generic content; catering resolves to nothing
        let mut registry = TemplateRegistry::new();
        registry.register_section("services", ContentDescriptor::new("services-content", site.sections[0].generic.clone()));
        let mut coordinator =
            PanelCoordinator::mount(&site, Arc::new(registry), &Config::default(), Size::new(1280.0, 800.0), t0).unwrap();

        coordinator.activate(SERVICES_MISSION, t0);
        let before = coordinator.content().unwrap().instance.id();

        assert_eq!(coordinator.activate(ItemId::new(2, 0), t0), Transition::Aborted);
        assert_eq!(shown(&coordinator), Some(SERVICES_MISSION));
        assert_eq!(active_items(&coordinator), ["Our Mission"]);
        assert_eq!(expanded(&coordinator), ["services"]);
        assert_eq!(coordinator.content().unwrap().instance.id(), before);
    }

    #[test]
    fn test_abort_from_closed_stays_closed() {
        let site = site();
        let t0 = Instant::now();
        let mut coordinator =
            PanelCoordinator::mount(&site, Arc::new(TemplateRegistry::new()), &Config::default(), Size::new(1280.0, 800.0), t0)
                .unwrap();

        assert_eq!(coordinator.activate(GALLERY, t0), Transition::Aborted);
        assert!(!coordinator.is_open());
        assert!(coordinator.content().is_none());
        assert!(active_items(&coordinator).is_empty());
    }

    #[test]
    fn test_close_collapses_and_keeps_content() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(WEDDING_CAKES, t0);

        assert_eq!(coordinator.close(), Transition::Closed);
        assert_eq!(shown(&coordinator), None);
        assert!(active_items(&coordinator).is_empty());
        assert!(expanded(&coordinator).is_empty());
        assert!(coordinator.content().is_some());
        assert_eq!(coordinator.close(), Transition::Unchanged);
    }

    #[test]
    fn test_default_content_after_delay() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);

        assert!(coordinator.tick(t0 + ms(499)).is_empty());
        assert_eq!(coordinator.tick(t0 + ms(500)), vec![Transition::Opened(SERVICES_MISSION)]);
    }

    #[test]
    fn test_user_click_cancels_default_content() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(WEDDING_CAKES, t0 + ms(100));

        assert!(coordinator.tick(t0 + ms(600)).is_empty());
        assert_eq!(shown(&coordinator), Some(WEDDING_CAKES));
    }

    #[test]
    fn test_section_label_delegates_to_first_item() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(SERVICES_MISSION, t0);

        coordinator.click_section_label(1, t0);
        assert_eq!(shown(&coordinator), Some(SERVICES_MISSION));

        let transitions = coordinator.tick(t0 + ms(100));
        assert_eq!(transitions, vec![Transition::Switched { from: SERVICES_MISSION, to: GALLERY }]);
    }

    #[test]
    fn test_stale_label_click_ignored() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(SERVICES_MISSION, t0);

        coordinator.click_section_label(1, t0);
        // A direct activation lands before the delegated click fires
        coordinator.activate(WEDDING_CAKES, t0 + ms(50));

        assert!(coordinator.tick(t0 + ms(200)).is_empty());
        assert_eq!(shown(&coordinator), Some(WEDDING_CAKES));
    }

    #[test]
    fn test_carousel_initialised_after_delay_with_fresh_ids() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(GALLERY, t0);
        let first_id = coordinator.content().unwrap().instance.carousel_id().map(str::to_string);

        assert!(coordinator.content().unwrap().carousel.is_none());
        coordinator.tick(t0 + ms(100));
        let carousel = coordinator.content().unwrap().carousel.as_ref().unwrap();
        assert_eq!(carousel.ring().len(), 3);
        assert!(coordinator.animating());

        coordinator.activate(WEDDING_CAKES, t0 + ms(200));
        coordinator.activate(GALLERY, t0 + ms(300));
        let second_id = coordinator.content().unwrap().instance.carousel_id().map(str::to_string);
        assert_ne!(first_id, second_id);
    }

    #[test]
    fn test_close_before_carousel_init_is_harmless() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(GALLERY, t0);
        coordinator.close();

        assert!(coordinator.tick(t0 + ms(150)).is_empty());
        assert!(coordinator.content().unwrap().carousel.is_none());
        assert!(!coordinator.animating());
    }

    #[test]
    fn test_shrinking_viewport_closes_panel() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(WEDDING_CAKES, t0);

        coordinator.resize(Size::new(700.0, 800.0), t0);
        assert!(!coordinator.is_open());
    }

    #[test]
    fn test_resize_reapplies_carousel_depth() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(GALLERY, t0);
        coordinator.tick(t0 + ms(100));

        coordinator.resize(Size::new(700.0, 800.0), t0 + ms(100));
        coordinator.tick(t0 + ms(400));

        let carousel = coordinator.content().unwrap().carousel.as_ref().unwrap();
        let ring = carousel.ring();
        let depths: Vec<f32> = (0..ring.len()).filter_map(|i| ring.transform(i)).map(|t| t.depth).collect();
        assert_eq!(depths.len(), 3);
        assert!(depths.iter().all(|d| *d == crate::constants::carousel::COMPACT_DEPTH));
    }

    #[test]
    fn test_zoom_through_coordinator() {
        let t0 = Instant::now();
        let mut coordinator = mount_at(&site(), t0);
        coordinator.activate(WEDDING_CAKES, t0);

        coordinator.measured(Size::new(600.0, 600.0), Size::new(1000.0, 800.0));
        assert!((coordinator.state().current_scale - 0.6).abs() < 1e-4);

        coordinator.zoom_in();
        coordinator.zoom_in();
        coordinator.zoom_in();
        assert!((coordinator.state().current_scale - 0.78).abs() < 1e-4);

        coordinator.zoom_reset();
        assert!((coordinator.state().current_scale - 0.6).abs() < 1e-4);

        // Zero-size measurement leaves the scale alone
        coordinator.measured(Size::new(600.0, 600.0), Size::new(0.0, 0.0));
        assert!((coordinator.state().current_scale - 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_contact_form_bound_per_instance() {
        let t0 = Instant::now();
        let site = SiteMarkup::bakery();
        let mut coordinator = mount_at(&site, t0);
        let contact = site.sections.iter().position(|s| s.id == "contact").unwrap();
        let form_item = ItemId::new(contact, 2);

        coordinator.activate(form_item, t0);
        let first = coordinator.content().unwrap().form.as_ref().unwrap().form_id().to_string();

        coordinator.close();
        coordinator.activate(form_item, t0);
        let second = coordinator.content().unwrap().form.as_ref().unwrap().form_id().to_string();

        assert_ne!(first, second);
    }
}
