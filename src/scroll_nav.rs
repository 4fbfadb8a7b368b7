//! Scroll-snap section navigation
//!
//! Tracks which full-height section is current, drives the dot indicators
//! and progress bar, and turns wheel/touch/keyboard input into one-section
//! steps with a cooldown so a single flick never skips sections.

use std::time::{Duration, Instant};
use tracing::debug;

use crate::constants::scroll::{HEADER_SHRINK_AT, NAV_LINE, REVEAL_AT, SNAP_BAND, TOUCH_THRESHOLD};
use crate::deferred::Debouncer;

/// Vertical extent of a section relative to the top of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f32,
    pub bottom: f32,
}

impl SectionSpan {
    fn contains(&self, y: f32) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Scroll container measurements
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

/// First section crossing the horizontal line `y` px below the viewport top
pub fn section_at(spans: &[SectionSpan], y: f32) -> Option<usize> {
    spans.iter().position(|span| span.contains(y))
}

/// Percentage scrolled, 0 when the content doesn't scroll
pub fn scroll_progress(metrics: ScrollMetrics) -> f32 {
    let scrollable = metrics.scroll_height - metrics.client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
}

#[derive(Debug)]
pub struct ScrollSnapNav {
    section_count: usize,
    active_dot: usize,
    active_link: Option<usize>,
    cooldown: Duration,
    cooldown_until: Option<Instant>,
    touch_start_y: Option<f32>,
    header_shrunk: bool,
    back_to_top_visible: bool,
    progress: f32,
    /// Sticky per-section flag; once revealed a section stays revealed
    revealed: Vec<bool>,
    scroll_events: Debouncer,
    back_to_top_events: Debouncer,
}

impl ScrollSnapNav {
    pub fn new(section_count: usize, cooldown: Duration, debounce: Duration, back_to_top_debounce: Duration) -> Self {
        // The first section is on screen from the start
        let mut revealed = vec![false; section_count];
        if let Some(first) = revealed.first_mut() {
            *first = true;
        }

        Self {
            section_count,
            active_dot: 0,
            active_link: None,
            cooldown,
            cooldown_until: None,
            touch_start_y: None,
            header_shrunk: false,
            back_to_top_visible: false,
            progress: 0.0,
            revealed,
            scroll_events: Debouncer::new(debounce),
            back_to_top_events: Debouncer::new(back_to_top_debounce),
        }
    }

    pub fn active_dot(&self) -> usize {
        self.active_dot
    }

    /// Nav link highlighted for the section crossing the nav line
    pub fn active_link(&self) -> Option<usize> {
        self.active_link
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn header_shrunk(&self) -> bool {
        self.header_shrunk
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    pub fn revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Dot click: jump straight to a section
    pub fn select_dot(&mut self, index: usize) -> Option<usize> {
        if index >= self.section_count {
            return None;
        }
        self.active_dot = index;
        Some(index)
    }

    /// Dot highlight follows the section spanning a third of the viewport.
    /// Runs on every scroll/resize, not debounced.
    pub fn track(&mut self, spans: &[SectionSpan], viewport_height: f32) {
        if let Some(index) = section_at(spans, viewport_height / 3.0) {
            self.active_dot = index;
        }
    }

    /// Raw scroll notification; the heavier updates run debounced in `update`
    pub fn on_scroll(&mut self, now: Instant) {
        self.scroll_events.trigger(now);
        self.back_to_top_events.trigger(now);
    }

    /// Debounced scroll work. Header shrink, progress, section reveal and the
    /// nav link share one debounce; the back-to-top button has its own.
    /// Returns true if anything was updated.
    pub fn update(&mut self, now: Instant, metrics: ScrollMetrics, spans: &[SectionSpan]) -> bool {
        let mut updated = false;

        if self.scroll_events.fire(now) {
            self.header_shrunk = metrics.scroll_top > HEADER_SHRINK_AT;
            self.progress = scroll_progress(metrics);
            self.active_link = section_at(spans, NAV_LINE);
            self.reveal(spans, metrics.client_height);
            updated = true;
        }

        if self.back_to_top_events.fire(now) {
            self.back_to_top_visible = metrics.scroll_top > metrics.client_height / 2.0;
            updated = true;
        }

        updated
    }

    fn reveal(&mut self, spans: &[SectionSpan], viewport_height: f32) {
        let trigger = viewport_height * REVEAL_AT;
        for (index, (span, revealed)) in spans.iter().zip(self.revealed.iter_mut()).enumerate() {
            if !*revealed && span.top < trigger {
                *revealed = true;
                debug!(section = index, "section revealed");
            }
        }
    }

    fn cooling_down(&mut self, now: Instant) -> bool {
        match self.cooldown_until {
            Some(until) if now < until => true,
            _ => {
                self.cooldown_until = None;
                false
            }
        }
    }

    /// Step one section in `direction` (positive = down). Returns the target index.
    pub fn step(&mut self, direction: i32, spans: &[SectionSpan], now: Instant) -> Option<usize> {
        if direction == 0 || self.cooling_down(now) {
            return None;
        }
        let current = spans
            .iter()
            .position(|span| span.top >= -SNAP_BAND && span.top <= SNAP_BAND)?;
        let target = current as i64 + direction.signum() as i64;
        if target < 0 || target >= spans.len() as i64 {
            return None;
        }
        self.cooldown_until = Some(now + self.cooldown);
        let target = target as usize;
        self.active_dot = target;
        debug!(from = current, to = target, "scroll snap step");
        Some(target)
    }

    pub fn touch_start(&mut self, y: f32) {
        self.touch_start_y = Some(y);
    }

    /// Touch drag; steps once the finger has travelled past the threshold
    pub fn touch_move(&mut self, y: f32, spans: &[SectionSpan], now: Instant) -> Option<usize> {
        let start = self.touch_start_y?;
        let diff = start - y;
        if diff.abs() <= TOUCH_THRESHOLD {
            return None;
        }
        let target = self.step(if diff > 0.0 { 1 } else { -1 }, spans, now);
        if target.is_some() {
            self.touch_start_y = Some(y);
        }
        target
    }

    /// Arrow/Page keys move from the active dot
    pub fn key(&mut self, key: NavKey) -> Option<usize> {
        let target = match key {
            NavKey::Down if self.active_dot + 1 < self.section_count => self.active_dot + 1,
            NavKey::Up if self.active_dot > 0 => self.active_dot - 1,
            _ => return None,
        };
        self.active_dot = target;
        Some(target)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        [self.scroll_events.deadline(), self.back_to_top_events.deadline()]
            .into_iter()
            .flatten()
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(scroll_top: f32) -> Vec<SectionSpan> {
        // Four 600px sections in a 600px viewport
        (0..4)
            .map(|i| {
                let top = i as f32 * 600.0 - scroll_top;
                SectionSpan { top, bottom: top + 600.0 }
            })
            .collect()
    }

    fn nav() -> ScrollSnapNav {
        ScrollSnapNav::new(
            4,
            Duration::from_millis(1000),
            Duration::from_millis(100),
            Duration::from_millis(150),
        )
    }

    #[test]
    fn test_scroll_progress() {
        let metrics = ScrollMetrics { scroll_top: 900.0, scroll_height: 2400.0, client_height: 600.0 };
        assert_eq!(scroll_progress(metrics), 50.0);
        let flat = ScrollMetrics { scroll_top: 0.0, scroll_height: 500.0, client_height: 600.0 };
        assert_eq!(scroll_progress(flat), 0.0);
    }

    #[test]
    fn test_track_uses_third_of_viewport() {
        let mut nav = nav();
        nav.track(&spans(450.0), 600.0);
        // A third of the viewport is 200px; section 1 starts at 150px
        assert_eq!(nav.active_dot(), 1);
    }

    #[test]
    fn test_step_with_cooldown() {
        let t0 = Instant::now();
        let mut nav = nav();
        assert_eq!(nav.step(1, &spans(0.0), t0), Some(1));
        // Still cooling down
        assert_eq!(nav.step(1, &spans(600.0), t0 + Duration::from_millis(500)), None);
        assert_eq!(nav.step(1, &spans(600.0), t0 + Duration::from_millis(1000)), Some(2));
    }

    #[test]
    fn test_step_bounds_and_band() {
        let t0 = Instant::now();
        let mut nav = nav();
        assert_eq!(nav.step(-1, &spans(0.0), t0), None);
        // Mid-section: nothing is within the snap band
        assert_eq!(nav.step(1, &spans(300.0), t0), None);
        assert_eq!(nav.step(1, &spans(1800.0), t0), None);
    }

    #[test]
    fn test_touch_threshold() {
        let t0 = Instant::now();
        let mut nav = nav();
        nav.touch_start(400.0);
        assert_eq!(nav.touch_move(370.0, &spans(0.0), t0), None);
        assert_eq!(nav.touch_move(320.0, &spans(0.0), t0), Some(1));
    }

    #[test]
    fn test_keys() {
        let mut nav = nav();
        assert_eq!(nav.key(NavKey::Up), None);
        assert_eq!(nav.key(NavKey::Down), Some(1));
        nav.select_dot(3);
        assert_eq!(nav.key(NavKey::Down), None);
        assert_eq!(nav.select_dot(7), None);
    }

    #[test]
    fn test_debounced_update() {
        let t0 = Instant::now();
        let mut nav = nav();
        let metrics = ScrollMetrics { scroll_top: 650.0, scroll_height: 2400.0, client_height: 600.0 };

        nav.on_scroll(t0);
        assert!(!nav.update(t0 + Duration::from_millis(50), metrics, &spans(650.0)));
        assert!(nav.update(t0 + Duration::from_millis(100), metrics, &spans(650.0)));

        assert!(nav.header_shrunk());
        assert_eq!(nav.active_link(), Some(1));
        // The back-to-top button waits for its own, longer quiet period
        assert!(!nav.back_to_top_visible());
        assert_eq!(nav.next_deadline(), Some(t0 + Duration::from_millis(150)));

        assert!(nav.update(t0 + Duration::from_millis(150), metrics, &spans(650.0)));
        assert!(nav.back_to_top_visible());
        assert_eq!(nav.next_deadline(), None);
    }

    #[test]
    fn test_nav_link_uses_150px_line() {
        let t0 = Instant::now();
        let mut nav = nav();
        let metrics = ScrollMetrics { scroll_top: 480.0, scroll_height: 2400.0, client_height: 600.0 };

        // Section 1 starts at 120px: above the 150px line, so it is current
        nav.on_scroll(t0);
        nav.update(t0 + Duration::from_millis(100), metrics, &spans(480.0));
        assert_eq!(nav.active_link(), Some(1));

        // Section 1 starts at 160px: still below the line, section 0 stays current
        let metrics = ScrollMetrics { scroll_top: 440.0, ..metrics };
        nav.on_scroll(t0 + Duration::from_millis(200));
        nav.update(t0 + Duration::from_millis(300), metrics, &spans(440.0));
        assert_eq!(nav.active_link(), Some(0));
    }

    #[test]
    fn test_sections_stay_revealed() {
        let t0 = Instant::now();
        let mut nav = nav();
        assert!(nav.revealed(0));
        assert!(!nav.revealed(1));
        assert!(!nav.revealed(9));

        // Section 1 top at 460px, past 0.75 * 600
        let metrics = ScrollMetrics { scroll_top: 140.0, scroll_height: 2400.0, client_height: 600.0 };
        nav.on_scroll(t0);
        nav.update(t0 + Duration::from_millis(100), metrics, &spans(140.0));
        assert!(!nav.revealed(1));

        // Section 1 top at 440px
        let metrics = ScrollMetrics { scroll_top: 160.0, ..metrics };
        nav.on_scroll(t0 + Duration::from_millis(200));
        nav.update(t0 + Duration::from_millis(300), metrics, &spans(160.0));
        assert!(nav.revealed(1));
        assert!(!nav.revealed(2));

        // Scrolling back to the top does not hide it again
        let metrics = ScrollMetrics { scroll_top: 0.0, ..metrics };
        nav.on_scroll(t0 + Duration::from_millis(400));
        nav.update(t0 + Duration::from_millis(500), metrics, &spans(0.0));
        assert!(nav.revealed(1));
    }
}
