use eframe::egui;

use crate::coordinator::{AccordionSection, ItemId};
use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionAction {
    None,
    ItemClicked(ItemId),
    SectionLabelClicked(usize),
}

/// Accordion menu. Expansion is driven entirely by the coordinator, so the
/// headers never toggle themselves.
pub fn ui(ui: &mut egui::Ui, sections: &[AccordionSection]) -> AccordionAction {
    let mut action = AccordionAction::None;

    ui.add_space(PADDING);
    ui.heading(egui::RichText::new("Explore").color(COCOA));
    ui.add_space(ITEM_SPACING);

    for (section_index, section) in sections.iter().enumerate() {
        let collapsing = egui::CollapsingHeader::new(egui::RichText::new(&section.title).strong())
            .id_salt(&section.id)
            .open(Some(section.is_expanded()))
            .show(ui, |ui| {
                for (item_index, item) in section.items.iter().enumerate() {
                    if ui.selectable_label(item.is_active(), &item.label).clicked() {
                        action = AccordionAction::ItemClicked(ItemId::new(section_index, item_index));
                    }
                }
            });

        if collapsing.header_response.clicked() {
            action = AccordionAction::SectionLabelClicked(section_index);
        }
        ui.add_space(ITEM_SPACING / 2.0);
    }

    action
}
