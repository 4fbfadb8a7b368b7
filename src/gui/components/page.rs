use eframe::egui;

use crate::carousel::RotatingCarousel;
use crate::gui::components::carousel_view::CarouselAction;
use crate::gui::components::content_view::{self, ContentAction, Widgets};
use crate::gui::constants::*;
use crate::scroll_nav::{ScrollMetrics, SectionSpan};
use crate::site::SiteMarkup;

pub struct PageOutput {
    pub carousel: CarouselAction,
    pub metrics: ScrollMetrics,
    /// Section spans relative to the top of the visible page
    pub spans: Vec<SectionSpan>,
    /// Section tops relative to the start of the page content
    pub offsets: Vec<f32>,
    pub viewport_height: f32,
    /// Plain wheel movement swallowed from the page, positive when scrolling up
    pub wheel: f32,
}

/// Take wheel input away from the scroll area so the page moves one
/// section at a time instead of free scrolling.
fn capture_wheel(ui: &egui::Ui) -> f32 {
    if !ui.ui_contains_pointer() {
        return 0.0;
    }
    ui.ctx().input_mut(|i| {
        if i.modifiers.command {
            return 0.0;
        }
        let delta = i.raw_scroll_delta.y;
        i.raw_scroll_delta = egui::Vec2::ZERO;
        i.smooth_scroll_delta = egui::Vec2::ZERO;
        delta
    })
}

/// Full-height sections of the site, one per accordion section. Sections
/// not yet revealed are drawn faded out and fade in once they are.
pub fn ui(
    ui: &mut egui::Ui,
    site: &SiteMarkup,
    revealed: &[bool],
    mut carousel: Option<&mut RotatingCarousel>,
    scroll_to: Option<f32>,
) -> PageOutput {
    let wheel = capture_wheel(ui);
    let viewport_height = ui.available_height();
    let mut carousel_action = CarouselAction::None;

    let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
    if let Some(offset) = scroll_to {
        scroll = scroll.vertical_scroll_offset(offset);
    }

    let output = scroll.show(ui, |ui| {
        let origin = ui.min_rect().top();
        let mut offsets = Vec::with_capacity(site.sections.len());

        for (index, section) in site.sections.iter().enumerate() {
            let top = ui.cursor().top();
            offsets.push(top - origin);

            let shown = revealed.get(index).copied().unwrap_or(true);
            let opacity = ui
                .ctx()
                .animate_bool_with_time(ui.id().with(("reveal", index)), shown, SECTION_REVEAL_SECS);

            ui.vertical(|ui| {
                ui.set_min_height(viewport_height);
                ui.multiply_opacity(opacity);
                ui.add_space(SECTION_SPACING);
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new(&section.title).size(28.0).color(COCOA));
                });
                ui.add_space(SECTION_SPACING);

                let action = content_view::ui(
                    ui,
                    &section.generic,
                    Widgets {
                        id_salt: &section.id,
                        carousel: carousel.as_deref_mut(),
                        form: None,
                    },
                );
                if let ContentAction::Carousel(action) = action {
                    carousel_action = action;
                }
            });
        }
        offsets
    });

    let scroll_top = output.state.offset.y;
    let spans = output
        .inner
        .iter()
        .enumerate()
        .map(|(index, offset)| {
            let next = output.inner.get(index + 1).copied().unwrap_or(output.content_size.y);
            SectionSpan {
                top: offset - scroll_top,
                bottom: next - scroll_top,
            }
        })
        .collect();

    PageOutput {
        carousel: carousel_action,
        metrics: ScrollMetrics {
            scroll_top,
            scroll_height: output.content_size.y,
            client_height: output.inner_rect.height(),
        },
        spans,
        offsets: output.inner,
        viewport_height,
        wheel,
    }
}
