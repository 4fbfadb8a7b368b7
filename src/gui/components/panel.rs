use std::time::Instant;

use eframe::egui;
use egui::emath::TSTransform;

use crate::autofit::Size;
use crate::coordinator::PanelCoordinator;
use crate::gui::components::carousel_view::CarouselAction;
use crate::gui::components::content_view::{self, ContentAction, Widgets};
use crate::gui::components::contact_form::FormAction;
use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    None,
    Close,
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

fn header(ui: &mut egui::Ui, title: &str, scale: f32) -> PanelAction {
    let mut action = PanelAction::None;

    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new(title).color(COCOA));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").on_hover_text("Close").clicked() {
                action = PanelAction::Close;
            }
            if ui.button("⟲").on_hover_text("Reset zoom").clicked() {
                action = PanelAction::ZoomReset;
            }
            if ui.button("+").on_hover_text("Zoom in").clicked() {
                action = PanelAction::ZoomIn;
            }
            ui.label(format!("{:.0}%", scale * 100.0));
            if ui.button("−").on_hover_text("Zoom out").clicked() {
                action = PanelAction::ZoomOut;
            }
        });
    });

    action
}

/// Ctrl+wheel over the content area
fn wheel_zoom(ui: &egui::Ui, container: egui::Rect) -> Option<f32> {
    // The scaled content sits on its own layer above the panel
    if !ui.ctx().pointer_hover_pos().is_some_and(|pos| container.contains(pos)) {
        return None;
    }
    ui.input(|i| {
        i.events.iter().find_map(|event| match event {
            egui::Event::MouseWheel { delta, modifiers, .. } if modifiers.command && delta.y != 0.0 => Some(delta.y),
            _ => None,
        })
    })
}

/// Content panel: header with zoom controls, then the active content laid
/// out at its natural width and scaled to fit the remaining space.
pub fn ui(ui: &mut egui::Ui, coordinator: &mut PanelCoordinator, now: Instant) -> PanelAction {
    let scale = coordinator.state().current_scale;
    let title = coordinator
        .content()
        .map(|content| content.title().to_string())
        .unwrap_or_default();

    ui.add_space(ITEM_SPACING);
    let action = header(ui, &title, scale);
    ui.separator();

    let container = ui.available_rect_before_wrap();
    ui.allocate_rect(container, egui::Sense::hover());

    if let Some(delta_y) = wheel_zoom(ui, container) {
        coordinator.wheel(delta_y, true);
    }

    // The scaled bounds below divide by the scale
    if !container.is_positive() || scale <= 0.0 {
        return action;
    }

    let Some(content) = coordinator.content_mut() else {
        return action;
    };
    let (instance, carousel, form) = content.split_mut();
    let salt = instance.carousel_id().unwrap_or("panel-carousel").to_string();

    let area = egui::Area::new(ui.id().with(instance.id()))
        .order(egui::Order::Middle)
        .fixed_pos(container.min)
        .show(ui.ctx(), |ui| {
            egui::ScrollArea::both()
                .max_width(container.width() / scale)
                .max_height(container.height() / scale)
                .show(ui, |ui| {
                    ui.set_width(CONTENT_NATURAL_WIDTH);
                    content_view::ui(
                        ui,
                        instance.fragment(),
                        Widgets {
                            id_salt: &salt,
                            carousel,
                            form,
                        },
                    )
                })
        });

    ui.ctx().set_transform_layer(
        area.response.layer_id,
        TSTransform::from_translation(container.min.to_vec2())
            * TSTransform::from_scaling(scale)
            * TSTransform::from_translation(-container.min.to_vec2()),
    );

    let scroll = area.inner;
    let natural = scroll.content_size;
    match scroll.inner {
        ContentAction::Carousel(carousel_action) => {
            if let Some(carousel) = content.carousel.as_mut() {
                match carousel_action {
                    CarouselAction::FigureClicked(index) => carousel.click_figure(index),
                    CarouselAction::TogglePause => carousel.toggle_paused(),
                    CarouselAction::Dragged(dx) => carousel.drag(dx),
                    CarouselAction::None => {}
                }
            }
        }
        ContentAction::Form(form_action) => {
            if let Some(form) = content.form.as_mut() {
                match form_action {
                    FormAction::Edited(field) => form.edited(field, now),
                    FormAction::Submit => {
                        form.submit(now);
                    }
                    FormAction::None => {}
                }
            }
        }
        ContentAction::None => {}
    }

    coordinator.measured(
        Size::new(container.width(), container.height()),
        Size::new(natural.x, natural.y),
    );

    action
}
