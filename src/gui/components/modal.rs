use eframe::egui;

use crate::gui::constants::*;
use crate::modal::ProductModal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Close,
}

/// Product detail modal over a dimmed backdrop. Fades out while the hide
/// delay runs after closing.
pub fn ui(ctx: &egui::Context, modal: &ProductModal) -> ModalAction {
    let Some(content) = modal.content() else {
        return ModalAction::None;
    };
    let mut action = ModalAction::None;
    let opacity = ctx.animate_bool(egui::Id::new("product_modal_open"), modal.is_open());

    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("product_modal_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter().rect_filled(screen, 0.0, BACKDROP.gamma_multiply(opacity));
            if response.clicked() {
                action = ModalAction::Close;
            }
        });

    egui::Window::new(&content.title)
        .id(egui::Id::new("product_modal"))
        .order(egui::Order::Tooltip)
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .fixed_size([MODAL_WIDTH, 0.0])
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .frame(egui::Frame::window(&ctx.style()).multiply_with_opacity(opacity))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new(&content.title).color(COCOA));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✖").clicked() {
                        action = ModalAction::Close;
                    }
                });
            });
            ui.separator();
            ui.weak(&content.image);
            ui.add_space(ITEM_SPACING);
            for detail in &content.details {
                ui.label(detail);
            }
        });

    action
}
