use eframe::egui;

use crate::carousel::RotatingCarousel;
use crate::content::Figure;
use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselAction {
    None,
    FigureClicked(usize),
    TogglePause,
    Dragged(f32),
}

struct Projected {
    index: usize,
    rect: egui::Rect,
    z: f32,
    z_index: i32,
    facing: bool,
    hovered: bool,
}

/// Project each figure of the ring onto the stage, back to front
fn project(stage: egui::Rect, carousel: &RotatingCarousel) -> Vec<Projected> {
    let ring = carousel.ring();
    let half_width = stage.width() / 2.0 - CAROUSEL_FIGURE_SIZE.x / 2.0;

    let mut projected: Vec<Projected> = ring
        .figures()
        .iter()
        .enumerate()
        .filter_map(|(index, figure)| {
            let transform = ring.transform(index)?;
            // Shrink the whole ring when the stage is narrower than its diameter
            let fit = if transform.depth > 0.0 {
                (half_width / transform.depth).clamp(0.2, 1.0)
            } else {
                1.0
            };
            let theta = (transform.angle + carousel.rotation()).to_radians();
            let x = transform.depth * theta.sin() * fit;
            let z = transform.depth * theta.cos();
            let perspective = CAROUSEL_PERSPECTIVE / (CAROUSEL_PERSPECTIVE - z).max(1.0);
            let size = CAROUSEL_FIGURE_SIZE * (perspective * transform.scale * fit.sqrt());

            Some(Projected {
                index,
                rect: egui::Rect::from_center_size(stage.center() + egui::vec2(x, 0.0), size),
                z,
                z_index: ring.z_index(index).unwrap_or(0),
                facing: theta.cos() >= 0.0,
                hovered: figure.is_hovered(),
            })
        })
        .collect();

    projected.sort_by(|a, b| (a.z_index, a.z).partial_cmp(&(b.z_index, b.z)).unwrap_or(std::cmp::Ordering::Equal));
    projected
}

fn figure_color(index: usize) -> egui::Color32 {
    const SWATCHES: [egui::Color32; 3] = [ACCENT_SOFT, CREAM, egui::Color32::from_rgb(240, 226, 210)];
    SWATCHES[index % SWATCHES.len()]
}

/// Renders a rotating product ring. Hover state is written back to the ring
/// before painting, so the shadow and outline follow the ring's own state;
/// clicks, drags and the pause button are returned to the caller.
pub fn ui(ui: &mut egui::Ui, id_salt: &str, carousel: &mut RotatingCarousel, figures: &[Figure]) -> CarouselAction {
    let mut action = CarouselAction::None;
    if carousel.ring().is_empty() {
        ui.weak("No products to show");
        return action;
    }
    let id = ui.id().with(id_salt);

    let (stage, stage_response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), CAROUSEL_STAGE_HEIGHT),
        egui::Sense::drag(),
    );
    if stage_response.dragged() {
        let dx = stage_response.drag_delta().x;
        if dx != 0.0 {
            action = CarouselAction::Dragged(dx);
        }
    }

    // Back to front, so the frontmost figure under the pointer wins
    let mut hovered = None;
    for figure in project(stage, carousel) {
        let response = ui.interact(figure.rect, id.with(figure.index), egui::Sense::click());
        if response.hovered() {
            hovered = Some(figure.index);
        }
        if response.clicked() {
            action = CarouselAction::FigureClicked(figure.index);
        }
    }

    let ring = carousel.ring_mut();
    for index in 0..ring.len() {
        if hovered == Some(index) {
            ring.hover_enter(index);
        } else {
            ring.hover_leave(index);
        }
    }

    let painter = ui.painter_at(stage);
    for figure in project(stage, carousel) {
        let active = carousel.active_figure() == Some(figure.index);
        let mut fill = figure_color(figure.index);
        if !figure.facing {
            fill = fill.gamma_multiply(0.6);
        }
        let stroke = if active || figure.hovered {
            egui::Stroke::new(2.0, ACCENT)
        } else {
            egui::Stroke::new(1.0, COCOA.gamma_multiply(0.3))
        };

        if figure.hovered {
            painter.rect_filled(figure.rect.translate(egui::vec2(0.0, 4.0)), 8.0, egui::Color32::from_black_alpha(40));
        }
        painter.rect(figure.rect, 8.0, fill, stroke, egui::StrokeKind::Inside);

        if let Some(product) = figures.get(figure.index) {
            painter.text(
                figure.rect.center(),
                egui::Align2::CENTER_CENTER,
                &product.name,
                egui::FontId::proportional(14.0),
                COCOA,
            );
        }
    }

    ui.horizontal(|ui| {
        let label = if carousel.is_paused() { "▶ Play" } else { "⏸ Pause" };
        if ui.button(label).clicked() {
            action = CarouselAction::TogglePause;
        }
        ui.weak("Drag to spin");
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselRing;
    use std::time::Duration;

    #[test]
    fn test_project_front_figure_drawn_last() {
        let carousel = RotatingCarousel::new(CarouselRing::mount(4, 350.0, 1.05), Duration::from_secs(30));
        let stage = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, CAROUSEL_STAGE_HEIGHT));

        let projected = project(stage, &carousel);
        assert_eq!(projected.len(), 4);

        // Figure 0 faces the viewer, figure 2 sits at the back
        let front = projected.last().unwrap();
        assert_eq!(front.index, 0);
        assert!((front.rect.center().x - stage.center().x).abs() < 1e-3);
        assert_eq!(projected[0].index, 2);
        assert!(!projected[0].facing);
    }

    #[test]
    fn test_project_hovered_figure_on_top() {
        let mut carousel = RotatingCarousel::new(CarouselRing::mount(4, 350.0, 1.05), Duration::from_secs(30));
        carousel.ring_mut().hover_enter(2);
        let stage = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, CAROUSEL_STAGE_HEIGHT));

        let projected = project(stage, &carousel);
        let top = projected.last().unwrap();
        assert_eq!(top.index, 2);
        assert!(top.hovered);
        assert!(projected[..3].iter().all(|figure| !figure.hovered));
    }
}
