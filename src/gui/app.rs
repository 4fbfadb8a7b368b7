//! Site window implemented with egui/eframe
//!
//! Desktop: accordion on the left, content panel on the right, scroll-snap
//! page in between. Below the breakpoint the side panels give way to the
//! slide-in mobile menu.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::{debug, info};

use super::components::accordion::{self, AccordionAction};
use super::components::carousel_view::CarouselAction;
use super::components::mobile_nav::{self, MobileNavAction};
use super::components::modal::{self, ModalAction};
use super::components::page;
use super::components::panel::{self, PanelAction};
use super::constants::*;
use crate::autofit::Size;
use crate::carousel::{CarouselRing, RotatingCarousel};
use crate::config::Config;
use crate::constants;
use crate::content::{Block, Figure};
use crate::coordinator::PanelCoordinator;
use crate::deferred::Debouncer;
use crate::mobile_menu::MobileMenu;
use crate::modal::{ModalContent, ProductModal};
use crate::registry::TemplateRegistry;
use crate::scroll_nav::{NavKey, ScrollSnapNav, SectionSpan};
use crate::site::SiteMarkup;

/// Figures of the first carousel on the page itself
fn page_figures(site: &SiteMarkup) -> Vec<Figure> {
    site.sections
        .iter()
        .flat_map(|section| section.generic.blocks.iter())
        .find_map(|block| match block {
            Block::Carousel { figures } => Some(figures.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

struct SiteApp {
    config: Config,
    site: SiteMarkup,
    registry: Arc<TemplateRegistry>,
    coordinator: Option<PanelCoordinator>,
    page_figures: Vec<Figure>,
    page_carousel: RotatingCarousel,
    modal: ProductModal,
    mobile_menu: MobileMenu,
    scroll_nav: ScrollSnapNav,
    relayout: Debouncer,
    viewport: Size,
    section_offsets: Vec<f32>,
    section_spans: Vec<SectionSpan>,
    last_scroll_top: f32,
    scroll_to: Option<f32>,
    last_frame: Instant,
}

impl SiteApp {
    fn new(_cc: &CreationContext<'_>, config: Config, site: SiteMarkup, registry: Arc<TemplateRegistry>) -> Self {
        info!("Initializing site window");

        let page_figures = page_figures(&site);
        let depth = config
            .carousel
            .depth_for(config.window.width, config.panel.desktop_breakpoint);
        let page_carousel = RotatingCarousel::new(
            CarouselRing::mount(page_figures.len(), depth, config.carousel.hover_scale),
            Duration::from_secs_f32(config.carousel.rotation_period_secs),
        );

        Self {
            scroll_nav: ScrollSnapNav::new(
                site.sections.len(),
                Duration::from_millis(constants::scroll::STEP_COOLDOWN_MS),
                Duration::from_millis(constants::scroll::DEBOUNCE_MS),
                Duration::from_millis(constants::scroll::BACK_TO_TOP_DEBOUNCE_MS),
            ),
            relayout: Debouncer::new(config.panel.resize_debounce()),
            modal: ProductModal::new(Duration::from_millis(constants::modal::HIDE_DELAY_MS)),
            mobile_menu: MobileMenu::new(Duration::from_millis(constants::mobile::SCROLL_DELAY_MS)),
            coordinator: None,
            page_figures,
            page_carousel,
            viewport: Size::default(),
            section_offsets: Vec::new(),
            section_spans: Vec::new(),
            last_scroll_top: 0.0,
            scroll_to: None,
            last_frame: Instant::now(),
            config,
            site,
            registry,
        }
    }

    fn is_desktop(&self) -> bool {
        self.viewport.width >= self.config.panel.desktop_breakpoint
    }

    fn scroll_to_section(&mut self, index: usize) {
        if let Some(offset) = self.section_offsets.get(index) {
            self.scroll_to = Some(*offset);
        }
    }

    /// Viewport size changes: mount or hide the panel, relayout carousels
    fn observe_viewport(&mut self, ctx: &egui::Context, now: Instant) {
        let screen = ctx.screen_rect();
        let viewport = Size::new(screen.width(), screen.height());
        if viewport == self.viewport {
            return;
        }
        let first_frame = self.viewport == Size::default();
        self.viewport = viewport;
        self.relayout.trigger(now);

        match self.coordinator.as_mut() {
            Some(coordinator) => coordinator.resize(viewport, now),
            // Widening past the breakpoint brings the panel back
            None => {
                self.coordinator =
                    PanelCoordinator::mount(&self.site, Arc::clone(&self.registry), &self.config, viewport, now);
            }
        }

        if first_frame {
            info!(width = viewport.width, height = viewport.height, "initial viewport");
        }
    }

    fn tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        if let Some(coordinator) = self.coordinator.as_mut() {
            for transition in coordinator.tick(now) {
                debug!(?transition, "deferred panel transition");
            }
        }

        if self.relayout.fire(now) {
            let depth = self
                .config
                .carousel
                .depth_for(self.viewport.width, self.config.panel.desktop_breakpoint);
            self.page_carousel.ring_mut().apply(depth);
        }

        if !self.modal.is_open() {
            self.page_carousel.tick(elapsed);
        }
        self.modal.tick(now);

        if let Some(section_id) = self.mobile_menu.take_scroll(now)
            && let Some(index) = self.site.sections.iter().position(|s| s.id == section_id)
        {
            self.scroll_to_section(index);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context, now: Instant) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.modal.escape(now);
        }

        // Typing in the contact form must not move the page
        if ctx.memory(|m| m.focused().is_some()) || self.modal.is_displayed() {
            return;
        }
        let key = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::PageDown) {
                Some(NavKey::Down)
            } else if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::PageUp) {
                Some(NavKey::Up)
            } else {
                None
            }
        });
        if let Some(target) = key.and_then(|key| self.scroll_nav.key(key)) {
            self.scroll_to_section(target);
        }
    }

    /// Touch gestures: edge swipe for the mobile menu, vertical swipe for sections
    fn handle_touch(&mut self, ctx: &egui::Context, now: Instant) {
        let (touching, pressed, released, pos) = ctx.input(|i| {
            (
                i.any_touches(),
                i.pointer.any_pressed(),
                i.pointer.any_released(),
                i.pointer.interact_pos(),
            )
        });
        let Some(pos) = pos else {
            return;
        };
        if !touching && !released {
            return;
        }

        if pressed {
            self.mobile_menu.touch_start(pos.x);
            self.scroll_nav.touch_start(pos.y);
        } else if released {
            self.mobile_menu.touch_end(pos.x);
        } else if let Some(target) = self.scroll_nav.touch_move(pos.y, &self.section_spans, now) {
            self.scroll_to_section(target);
        }
    }

    fn header(&mut self, ctx: &egui::Context, now: Instant) {
        let height = if self.scroll_nav.header_shrunk() {
            HEADER_SHRUNK_HEIGHT
        } else {
            HEADER_HEIGHT
        };
        let desktop = self.is_desktop();

        egui::TopBottomPanel::top("header")
            .exact_height(height)
            .frame(egui::Frame::new().fill(CREAM).inner_margin(PADDING))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if !desktop && mobile_nav::toggle_button(ui, &self.mobile_menu) {
                        self.mobile_menu.toggle();
                    }
                    let size = if self.scroll_nav.header_shrunk() { 18.0 } else { 24.0 };
                    ui.label(egui::RichText::new("Cake Walk Baking Co.").size(size).strong().color(COCOA));

                    if desktop {
                        ui.add_space(SECTION_SPACING);
                        let mut chosen = None;
                        for (index, section) in self.site.sections.iter().enumerate() {
                            let active = self.scroll_nav.active_link() == Some(index);
                            if ui.selectable_label(active, &section.title).clicked() {
                                chosen = Some(index);
                            }
                        }
                        if let Some(index) = chosen {
                            self.scroll_to_section(index);
                        }
                    }
                });

                // Progress bar along the bottom edge
                let rect = ui.max_rect();
                let bar = egui::Rect::from_min_size(
                    egui::pos2(rect.left() - PADDING, rect.bottom() + PADDING - PROGRESS_BAR_HEIGHT),
                    egui::vec2((rect.width() + 2.0 * PADDING) * self.scroll_nav.progress() / 100.0, PROGRESS_BAR_HEIGHT),
                );
                ui.painter().rect_filled(bar, 0.0, ACCENT);
            });

        if !desktop {
            match mobile_nav::drawer(ctx, &self.mobile_menu, &self.site.sections) {
                MobileNavAction::Close => self.mobile_menu.close(),
                MobileNavAction::Choose(section_id) => self.mobile_menu.choose(&section_id, now),
                MobileNavAction::None => {}
            }
        }
    }

    fn side_panels(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(coordinator) = self.coordinator.as_mut() else {
            return;
        };

        egui::SidePanel::left("accordion")
            .default_width(ACCORDION_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = accordion::ui(ui, coordinator.sections());
                    match action {
                        AccordionAction::ItemClicked(id) => {
                            coordinator.activate(id, now);
                        }
                        AccordionAction::SectionLabelClicked(section) => coordinator.click_section_label(section, now),
                        AccordionAction::None => {}
                    }
                });
            });

        if !coordinator.is_open() {
            return;
        }

        egui::SidePanel::right("content_panel")
            .default_width(CONTENT_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                let action = panel::ui(ui, coordinator, now);
                match action {
                    PanelAction::Close => {
                        coordinator.close();
                    }
                    PanelAction::ZoomIn => coordinator.zoom_in(),
                    PanelAction::ZoomOut => coordinator.zoom_out(),
                    PanelAction::ZoomReset => coordinator.zoom_reset(),
                    PanelAction::None => {}
                }
            });
    }

    fn page(&mut self, ctx: &egui::Context, now: Instant) {
        let revealed: Vec<bool> = (0..self.site.sections.len())
            .map(|index| self.scroll_nav.revealed(index))
            .collect();
        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                page::ui(ui, &self.site, &revealed, Some(&mut self.page_carousel), self.scroll_to.take())
            })
            .inner;

        match output.carousel {
            CarouselAction::FigureClicked(index) => {
                if let Some(figure) = self.page_figures.get(index) {
                    self.modal.open(ModalContent::from(figure));
                }
            }
            CarouselAction::TogglePause => self.page_carousel.toggle_paused(),
            CarouselAction::Dragged(dx) => self.page_carousel.drag(dx),
            CarouselAction::None => {}
        }

        if output.wheel != 0.0 {
            let direction = if output.wheel < 0.0 { 1 } else { -1 };
            if let Some(target) = self.scroll_nav.step(direction, &output.spans, now) {
                self.scroll_to = output.offsets.get(target).copied();
            }
        }

        self.scroll_nav.track(&output.spans, output.viewport_height);
        if output.metrics.scroll_top != self.last_scroll_top {
            self.last_scroll_top = output.metrics.scroll_top;
            self.scroll_nav.on_scroll(now);
        }
        self.scroll_nav.update(now, output.metrics, &output.spans);

        self.section_offsets = output.offsets;
        self.section_spans = output.spans;
    }

    fn section_dots(&mut self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        let count = self.site.sections.len();
        let mut clicked = None;

        egui::Area::new(egui::Id::new("section_dots"))
            .anchor(egui::Align2::RIGHT_CENTER, egui::vec2(-PADDING, 0.0))
            .show(ctx, |ui| {
                for index in 0..count {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(DOT_SPACING, DOT_SPACING), egui::Sense::click());
                    let active = self.scroll_nav.active_dot() == index;
                    let fill = if active { ACCENT } else { ACCENT_SOFT };
                    ui.painter().circle(rect.center(), DOT_RADIUS, fill, egui::Stroke::new(1.0, ACCENT));
                    if response.clicked() {
                        clicked = Some(index);
                    }
                }
            });

        if self.scroll_nav.back_to_top_visible() {
            egui::Area::new(egui::Id::new("back_to_top"))
                .fixed_pos(screen.right_bottom() - egui::vec2(60.0, 60.0))
                .show(ctx, |ui| {
                    if ui.button("⬆").on_hover_text("Back to top").clicked() {
                        clicked = Some(0);
                    }
                });
        }

        if let Some(index) = clicked.and_then(|index| self.scroll_nav.select_dot(index)) {
            self.scroll_to_section(index);
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let animating = !self.page_carousel.is_paused()
            || self.coordinator.as_ref().is_some_and(|c| c.animating());
        if animating {
            ctx.request_repaint();
            return;
        }

        let deadline = [
            self.coordinator.as_ref().and_then(|c| c.next_deadline()),
            self.modal.next_deadline(),
            self.mobile_menu.next_deadline(),
            self.scroll_nav.next_deadline(),
            self.relayout.deadline(),
        ]
        .into_iter()
        .flatten()
        .min();

        if let Some(deadline) = deadline {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.observe_viewport(ctx, now);
        self.tick(now);
        self.handle_keys(ctx, now);
        self.handle_touch(ctx, now);

        self.header(ctx, now);
        if self.is_desktop() {
            self.side_panels(ctx, now);
        }
        self.page(ctx, now);
        self.section_dots(ctx);

        if modal::ui(ctx, &self.modal) == ModalAction::Close {
            self.modal.close(now);
        }

        self.schedule_repaint(ctx, now);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Site window exiting");
    }
}

pub fn run_gui(config: Config, site: SiteMarkup, registry: Arc<TemplateRegistry>) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Cake Walk Baking Co."),
        ..Default::default()
    };

    eframe::run_native(
        "Cake Walk Baking Co.",
        options,
        Box::new(|cc| Ok(Box::new(SiteApp::new(cc, config, site, registry)))),
    )
    .map_err(|err| anyhow!("Failed to launch site window: {err}"))
}
