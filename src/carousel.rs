//! 3D product carousel positioning
//!
//! Figures sit evenly around a ring: figure `i` of `n` is rotated
//! `i * 360 / n` degrees and pushed `depth` px forward along its own axis.
//! The angle belongs to the figure's index and is fixed at mount; the depth
//! is read fresh from the environment on every layout pass.

use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::constants;

/// Per-figure angles for a ring of `count` figures. Empty for zero figures.
pub fn ring_angles(count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f32;
    (0..count).map(|i| i as f32 * step).collect()
}

/// Transform of one figure, rendered like a CSS transform list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingTransform {
    pub angle: f32,
    pub depth: f32,
    /// Extra scale layered on top, 1.0 when idle
    pub scale: f32,
}

impl RingTransform {
    fn base(angle: f32, depth: f32) -> Self {
        Self { angle, depth, scale: 1.0 }
    }
}

impl fmt::Display for RingTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotateY({}deg) translateZ({}px)", self.angle, self.depth)?;
        if self.scale != 1.0 {
            write!(f, " scale({})", self.scale)?;
        }
        Ok(())
    }
}

/// Visual state of one figure on the ring
#[derive(Debug, Clone)]
pub struct RingFigure {
    angle: f32,
    /// Cached base transform; hover state is layered on this, never recomputed from it
    base: RingTransform,
    hovered: bool,
}

impl RingFigure {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

/// Layout of every figure on one carousel
#[derive(Debug, Clone)]
pub struct CarouselRing {
    figures: Vec<RingFigure>,
    hover_scale: f32,
}

impl CarouselRing {
    /// Assign each figure its index angle and build base transforms at `depth`
    pub fn mount(count: usize, depth: f32, hover_scale: f32) -> Self {
        let figures = ring_angles(count)
            .into_iter()
            .map(|angle| RingFigure {
                angle,
                base: RingTransform::base(angle, depth),
                hovered: false,
            })
            .collect();
        Self { figures, hover_scale }
    }

    /// Reapply the ring with a fresh depth (resize, breakpoint change, becoming visible)
    pub fn apply(&mut self, depth: f32) {
        if self.figures.is_empty() {
            return;
        }
        for figure in &mut self.figures {
            figure.base = RingTransform::base(figure.angle, depth);
        }
        debug!(figures = self.figures.len(), depth, "carousel layout reapplied");
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn figures(&self) -> &[RingFigure] {
        &self.figures
    }

    pub fn hover_enter(&mut self, index: usize) {
        if let Some(figure) = self.figures.get_mut(index) {
            figure.hovered = true;
        }
    }

    pub fn hover_leave(&mut self, index: usize) {
        if let Some(figure) = self.figures.get_mut(index) {
            figure.hovered = false;
        }
    }

    /// Transform currently shown for a figure
    pub fn transform(&self, index: usize) -> Option<RingTransform> {
        self.figures.get(index).map(|figure| {
            if figure.hovered {
                RingTransform {
                    scale: self.hover_scale,
                    ..figure.base
                }
            } else {
                figure.base
            }
        })
    }

    /// Stacking order for a figure, raised while hovered
    pub fn z_index(&self, index: usize) -> Option<i32> {
        self.figures.get(index).map(|figure| {
            if figure.hovered {
                constants::carousel::HOVER_Z_INDEX
            } else {
                0
            }
        })
    }
}

/// Auto-rotation state of a carousel inserted into the panel
///
/// Clicking a figure pins it and pauses the ring; clicking it again resumes.
/// Resume continues from the angle the ring stopped at. That continuity is
/// best effort: a drag while paused simply offsets the stored angle.
#[derive(Debug, Clone)]
pub struct RotatingCarousel {
    ring: CarouselRing,
    period: Duration,
    /// Ring rotation in degrees, advanced while running
    rotation: f32,
    paused: bool,
    active_figure: Option<usize>,
}

impl RotatingCarousel {
    pub fn new(ring: CarouselRing, period: Duration) -> Self {
        Self {
            ring,
            period,
            rotation: 0.0,
            paused: false,
            active_figure: None,
        }
    }

    pub fn ring(&self) -> &CarouselRing {
        &self.ring
    }

    pub fn ring_mut(&mut self) -> &mut CarouselRing {
        &mut self.ring
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn active_figure(&self) -> Option<usize> {
        self.active_figure
    }

    /// Advance the rotation by `elapsed` unless paused
    pub fn tick(&mut self, elapsed: Duration) {
        if self.paused || self.period.is_zero() {
            return;
        }
        let degrees = 360.0 * elapsed.as_secs_f32() / self.period.as_secs_f32();
        self.rotation = (self.rotation + degrees).rem_euclid(360.0);
    }

    /// Pause/resume button
    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, rotation = self.rotation, "carousel rotation toggled");
    }

    /// Figure click: pin and pause, or release and resume when already pinned
    pub fn click_figure(&mut self, index: usize) {
        if index >= self.ring.len() {
            return;
        }
        if self.active_figure == Some(index) {
            self.active_figure = None;
            self.paused = false;
        } else {
            self.active_figure = Some(index);
            self.paused = true;
        }
    }

    /// Horizontal drag/swipe nudges the ring
    pub fn drag(&mut self, dx: f32) {
        let delta = dx * constants::carousel::DRAG_DEGREES_PER_PX;
        self.rotation = (self.rotation + delta).rem_euclid(360.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_angles_even_no_gaps() {
        for n in 1..=12 {
            let angles = ring_angles(n);
            assert_eq!(angles.len(), n);
            let step = 360.0 / n as f32;
            for (i, angle) in angles.iter().enumerate() {
                assert!((angle - i as f32 * step).abs() < 1e-4);
            }
            // Strictly increasing and below a full turn: no duplicates
            assert!(angles.windows(2).all(|w| w[0] < w[1]));
            assert!(*angles.last().unwrap() < 360.0);
        }
    }

    #[test]
    fn test_ring_angles_empty() {
        assert!(ring_angles(0).is_empty());
        let mut ring = CarouselRing::mount(0, 350.0, 1.05);
        ring.apply(250.0);
        assert!(ring.is_empty());
        assert!(ring.transform(0).is_none());
    }

    #[test]
    fn test_transform_string() {
        let ring = CarouselRing::mount(4, 350.0, 1.05);
        assert_eq!(ring.transform(1).unwrap().to_string(), "rotateY(90deg) translateZ(350px)");
    }

    #[test]
    fn test_apply_keeps_angles_changes_depth() {
        let mut ring = CarouselRing::mount(6, 350.0, 1.05);
        let before: Vec<f32> = ring.figures().iter().map(|f| f.angle).collect();

        ring.apply(250.0);
        ring.apply(250.0);

        let after: Vec<f32> = ring.figures().iter().map(|f| f.angle).collect();
        assert_eq!(before, after);
        assert!(ring.figures().iter().all(|f| f.base.depth == 250.0));
    }

    #[test]
    fn test_hover_restores_base_exactly() {
        let mut ring = CarouselRing::mount(3, 350.0, 1.05);
        let base = ring.transform(2).unwrap();

        ring.hover_enter(2);
        ring.hover_enter(2);
        assert!(ring.figures()[2].is_hovered());
        let hovered = ring.transform(2).unwrap();
        assert_eq!(hovered.scale, 1.05);
        assert_eq!(hovered.to_string(), format!("{base} scale(1.05)"));
        assert_eq!(ring.z_index(2), Some(constants::carousel::HOVER_Z_INDEX));

        ring.hover_leave(2);
        assert!(!ring.figures()[2].is_hovered());
        assert_eq!(ring.transform(2).unwrap(), base);
        assert_eq!(ring.z_index(2), Some(0));
    }

    #[test]
    fn test_hover_survives_reapply() {
        let mut ring = CarouselRing::mount(3, 350.0, 1.05);
        ring.hover_enter(0);
        ring.apply(250.0);
        ring.hover_leave(0);
        assert_eq!(ring.transform(0).unwrap().to_string(), "rotateY(0deg) translateZ(250px)");
    }

    #[test]
    fn test_rotation_pause_and_resume() {
        let mut carousel = RotatingCarousel::new(
            CarouselRing::mount(6, 250.0, 1.05),
            Duration::from_secs(30),
        );

        carousel.tick(Duration::from_secs(3));
        assert!((carousel.rotation() - 36.0).abs() < 1e-3);

        carousel.click_figure(2);
        assert!(carousel.is_paused());
        assert_eq!(carousel.active_figure(), Some(2));
        carousel.tick(Duration::from_secs(10));
        assert!((carousel.rotation() - 36.0).abs() < 1e-3);

        // Clicking the pinned figure again resumes from where it stopped
        carousel.click_figure(2);
        assert!(!carousel.is_paused());
        assert_eq!(carousel.active_figure(), None);
        carousel.tick(Duration::from_secs(3));
        assert!((carousel.rotation() - 72.0).abs() < 1e-3);
    }

    #[test]
    fn test_click_other_figure_moves_pin() {
        let mut carousel = RotatingCarousel::new(
            CarouselRing::mount(4, 250.0, 1.05),
            Duration::from_secs(30),
        );
        carousel.click_figure(0);
        carousel.click_figure(1);
        assert_eq!(carousel.active_figure(), Some(1));
        assert!(carousel.is_paused());

        carousel.click_figure(9);
        assert_eq!(carousel.active_figure(), Some(1));
    }

    #[test]
    fn test_drag_wraps() {
        let mut carousel = RotatingCarousel::new(
            CarouselRing::mount(4, 250.0, 1.05),
            Duration::from_secs(30),
        );
        carousel.drag(-40.0);
        assert!((carousel.rotation() - 350.0).abs() < 1e-3);
    }
}
