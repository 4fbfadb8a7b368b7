use eframe::egui;

use crate::gui::constants::*;
use crate::mobile_menu::MobileMenu;
use crate::site::SectionMarkup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MobileNavAction {
    None,
    Close,
    Choose(String),
}

/// Hamburger button; returns true when clicked
pub fn toggle_button(ui: &mut egui::Ui, menu: &MobileMenu) -> bool {
    let icon = if menu.is_open() { "✖" } else { "☰" };
    let hint = if menu.aria_expanded() { "Close menu" } else { "Open menu" };
    ui.button(icon).on_hover_text(hint).clicked()
}

/// Slide-in drawer with its overlay
pub fn drawer(ctx: &egui::Context, menu: &MobileMenu, sections: &[SectionMarkup]) -> MobileNavAction {
    let mut action = MobileNavAction::None;
    let slide = ctx.animate_bool(egui::Id::new("mobile_nav_open"), menu.is_open());
    if slide == 0.0 {
        return action;
    }

    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("mobile_nav_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter().rect_filled(screen, 0.0, BACKDROP.gamma_multiply(slide));
            if response.clicked() {
                action = MobileNavAction::Close;
            }
        });

    let offset = (slide - 1.0) * DRAWER_WIDTH;
    egui::Area::new(egui::Id::new("mobile_nav_drawer"))
        .order(egui::Order::Tooltip)
        .fixed_pos(screen.min + egui::vec2(offset, 0.0))
        .interactable(!menu.aria_hidden())
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(CREAM)
                .inner_margin(PADDING)
                .show(ui, |ui| {
                    ui.set_width(DRAWER_WIDTH - 2.0 * PADDING);
                    ui.set_min_height(screen.height() - 2.0 * PADDING);

                    ui.horizontal(|ui| {
                        ui.heading(egui::RichText::new("Menu").color(COCOA));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("✖").clicked() {
                                action = MobileNavAction::Close;
                            }
                        });
                    });
                    ui.separator();

                    for section in sections {
                        if ui.selectable_label(false, &section.title).clicked() {
                            action = MobileNavAction::Choose(section.id.clone());
                        }
                        ui.add_space(ITEM_SPACING);
                    }
                });
        });

    action
}
