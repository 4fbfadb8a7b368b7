//! Auto-fit and manual zoom for the panel content
//!
//! `fit` computes a baseline scale that makes the content's natural size fit
//! the container, never upscaling. Manual zoom multiplies that baseline by a
//! user factor that moves in fixed steps.

use tracing::debug;

/// Width/height pair in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Scale that fits `content` inside `container`, capped at natural size.
/// `None` when either side has not been laid out yet, so the result is
/// always positive.
pub fn fit_scale(container: Size, content: Size) -> Option<f32> {
    if content.is_empty() || container.is_empty() {
        return None;
    }
    let scale_x = container.width / content.width;
    let scale_y = container.height / content.height;
    Some(scale_x.min(scale_y).min(1.0))
}

#[derive(Debug, Clone)]
pub struct AutoFit {
    baseline: f32,
    user_zoom: f32,
    step: f32,
    floor: f32,
    container: Size,
    content: Size,
}

impl AutoFit {
    pub fn new(step: f32, floor: f32) -> Self {
        Self {
            baseline: 1.0,
            user_zoom: 1.0,
            step,
            floor,
            container: Size::default(),
            content: Size::default(),
        }
    }

    /// Scale currently applied to the content
    pub fn scale(&self) -> f32 {
        self.baseline * self.user_zoom
    }

    /// Measure and recompute the baseline. Returns the applied scale, or
    /// `None` if measurement was skipped and the previous scale kept.
    pub fn fit(&mut self, container: Size, content: Size) -> Option<f32> {
        self.container = container;
        self.content = content;
        self.refit()
    }

    /// Size-change notification for the container and/or content.
    /// Only refits when something actually changed.
    pub fn observe(&mut self, container: Size, content: Size) -> Option<f32> {
        if container == self.container && content == self.content {
            return None;
        }
        self.fit(container, content)
    }

    fn refit(&mut self) -> Option<f32> {
        match fit_scale(self.container, self.content) {
            Some(baseline) => {
                self.baseline = baseline;
                debug!(baseline, scale = self.scale(), "content auto-fit");
                Some(self.scale())
            }
            None => {
                debug!(container = ?self.container, content = ?self.content, "nothing to fit, keeping scale");
                None
            }
        }
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.user_zoom += self.step;
        self.scale()
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.user_zoom = (self.user_zoom - self.step).max(self.floor);
        self.scale()
    }

    /// Back to factor 1.0 and a fresh fit against the last measurement
    pub fn reset(&mut self) -> f32 {
        self.user_zoom = 1.0;
        self.refit();
        self.scale()
    }

    /// Ctrl+wheel: scrolling up zooms in, down zooms out
    pub fn wheel(&mut self, delta_y: f32, ctrl: bool) -> Option<f32> {
        if !ctrl || delta_y == 0.0 {
            return None;
        }
        Some(if delta_y > 0.0 { self.zoom_in() } else { self.zoom_out() })
    }

    /// New content was inserted: drop the user zoom and forget the last
    /// measurement so the next `observe` always refits.
    pub fn new_content(&mut self) {
        self.user_zoom = 1.0;
        self.content = Size::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_fit_scale_never_upscales() {
        assert_eq!(fit_scale(Size::new(800.0, 600.0), Size::new(400.0, 300.0)), Some(1.0));
        assert_eq!(fit_scale(Size::new(400.0, 600.0), Size::new(800.0, 600.0)), Some(0.5));
        assert_eq!(fit_scale(Size::new(800.0, 150.0), Size::new(800.0, 600.0)), Some(0.25));
    }

    #[test]
    fn test_zero_content_keeps_previous_scale() {
        let mut fit = AutoFit::new(0.1, 0.1);
        assert_eq!(fit.fit(Size::new(300.0, 300.0), Size::new(600.0, 600.0)), Some(0.5));

        assert_eq!(fit.fit(Size::new(300.0, 300.0), Size::new(0.0, 0.0)), None);
        assert_eq!(fit.scale(), 0.5);
        assert_eq!(fit.fit(Size::new(300.0, 300.0), Size::new(0.0, 100.0)), None);
        assert_eq!(fit.scale(), 0.5);
    }

    #[test]
    fn test_empty_container_keeps_previous_scale() {
        assert_eq!(fit_scale(Size::new(0.0, 600.0), Size::new(500.0, 500.0)), None);
        assert_eq!(fit_scale(Size::new(-10.0, 600.0), Size::new(500.0, 500.0)), None);

        let mut fit = AutoFit::new(0.1, 0.1);
        assert_eq!(fit.fit(Size::new(300.0, 300.0), Size::new(600.0, 600.0)), Some(0.5));
        assert_eq!(fit.observe(Size::new(0.0, 300.0), Size::new(600.0, 600.0)), None);
        assert_eq!(fit.scale(), 0.5);

        // Zoom keeps working from the last real baseline
        assert!(approx(fit.zoom_in(), 0.55));
        assert!(approx(fit.zoom_out(), 0.5));
    }

    #[test]
    fn test_zoom_in_three_times() {
        let mut fit = AutoFit::new(0.1, 0.1);
        assert!(approx(fit.fit(Size::new(600.0, 600.0), Size::new(1000.0, 800.0)).unwrap(), 0.6));

        fit.zoom_in();
        fit.zoom_in();
        let scale = fit.zoom_in();
        assert!(approx(scale, 0.78));
    }

    #[test]
    fn test_zoom_out_floor() {
        let mut fit = AutoFit::new(0.1, 0.1);
        for _ in 0..20 {
            fit.zoom_out();
        }
        // Unfitted baseline is 1.0, so the scale is the floored factor
        assert!(approx(fit.scale(), 0.1));
        assert!(approx(fit.zoom_in(), 0.2));
    }

    #[test]
    fn test_reset_uses_recomputed_baseline() {
        let mut fit = AutoFit::new(0.1, 0.1);
        let content = Size::new(1000.0, 800.0);
        fit.fit(Size::new(600.0, 600.0), content);
        fit.zoom_in();

        // Container shrinks while zoomed
        fit.observe(Size::new(500.0, 600.0), content);
        assert!(approx(fit.scale(), 0.5 * 1.1));

        let scale = fit.reset();
        assert!(approx(scale, 0.5));
        // Factor is back to 1.0: one step in is exactly one step above baseline
        assert!(approx(fit.zoom_in(), 0.5 * 1.1));
    }

    #[test]
    fn test_observe_ignores_unchanged_sizes() {
        let mut fit = AutoFit::new(0.1, 0.1);
        let container = Size::new(600.0, 600.0);
        let content = Size::new(1200.0, 600.0);
        assert_eq!(fit.observe(container, content), Some(0.5));
        assert_eq!(fit.observe(container, content), None);

        fit.zoom_in();
        fit.new_content();
        assert_eq!(fit.observe(container, content), Some(0.5));
    }

    #[test]
    fn test_wheel_requires_ctrl() {
        let mut fit = AutoFit::new(0.1, 0.1);
        assert_eq!(fit.wheel(1.0, false), None);
        assert!(approx(fit.wheel(1.0, true).unwrap(), 1.1));
        assert!(approx(fit.wheel(-1.0, true).unwrap(), 1.0));
    }
}
