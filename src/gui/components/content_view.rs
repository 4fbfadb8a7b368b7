use eframe::egui;

use crate::carousel::RotatingCarousel;
use crate::content::{Block, Fragment};
use crate::form::ContactForm;
use crate::gui::components::carousel_view::{self, CarouselAction};
use crate::gui::components::contact_form::{self, FormAction};
use crate::gui::constants::*;

/// Live widgets a fragment's interactive blocks render into
pub struct Widgets<'a> {
    pub id_salt: &'a str,
    pub carousel: Option<&'a mut RotatingCarousel>,
    pub form: Option<&'a mut ContactForm>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentAction {
    None,
    Carousel(CarouselAction),
    Form(FormAction),
}

pub fn ui(ui: &mut egui::Ui, fragment: &Fragment, widgets: Widgets<'_>) -> ContentAction {
    let Widgets { id_salt, mut carousel, mut form } = widgets;
    let mut action = ContentAction::None;

    for block in &fragment.blocks {
        match block {
            Block::Heading { text } => {
                ui.add_space(ITEM_SPACING);
                ui.label(egui::RichText::new(text).strong().size(18.0).color(COCOA));
            }
            Block::Paragraph { text } => {
                ui.label(text);
            }
            Block::List { items } => {
                for item in items {
                    ui.label(format!("• {item}"));
                }
            }
            Block::Carousel { figures } => match carousel.as_deref_mut() {
                Some(carousel) => match carousel_view::ui(ui, id_salt, carousel, figures) {
                    CarouselAction::None => {}
                    other => action = ContentAction::Carousel(other),
                },
                None => {
                    ui.weak("Loading products...");
                }
            },
            Block::ContactForm => {
                if let Some(form) = form.as_deref_mut() {
                    match contact_form::ui(ui, form) {
                        FormAction::None => {}
                        other => action = ContentAction::Form(other),
                    }
                }
            }
        }
        ui.add_space(ITEM_SPACING / 2.0);
    }

    action
}
