use eframe::egui;

use crate::form::{ContactForm, Field, Subject};
use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Edited(Field),
    Submit,
}

pub fn ui(ui: &mut egui::Ui, form: &mut ContactForm) -> FormAction {
    let mut action = FormAction::None;

    if let Some(message) = form.success_message() {
        ui.colored_label(SUCCESS_TEXT, message);
        ui.add_space(ITEM_SPACING);
    }

    ui.group(|ui| {
        for field in Field::ALL {
            let label = match field {
                Field::Phone => "Phone (optional)".to_string(),
                _ => format!("{}*", field.label()),
            };
            ui.label(label);

            let id = egui::Id::new(form.field_id(field));
            let value = form.value_mut(field);
            let edit = match field {
                Field::Message => egui::TextEdit::multiline(value).desired_rows(4),
                _ => egui::TextEdit::singleline(value),
            };
            if ui.add(edit.id(id).desired_width(f32::INFINITY)).changed() {
                action = FormAction::Edited(field);
            }

            if let Some(error) = form.error(field) {
                ui.colored_label(ERROR_TEXT, error);
            }
            ui.add_space(ITEM_SPACING);
        }

        ui.label("Subject");
        egui::ComboBox::from_id_salt(format!("{}-subject", form.form_id()))
            .selected_text(form.subject.label())
            .show_ui(ui, |ui| {
                for subject in Subject::ALL {
                    ui.selectable_value(&mut form.subject, subject, subject.label());
                }
            });

        ui.add_space(ITEM_SPACING);
        ui.horizontal(|ui| {
            ui.label("Preferred contact:");
            ui.checkbox(&mut form.prefer_email, "Email");
            ui.checkbox(&mut form.prefer_phone, "Phone");
        });

        ui.add_space(ITEM_SPACING);
        if ui.button("Send Message").clicked() {
            action = FormAction::Submit;
        }
    });

    action
}
