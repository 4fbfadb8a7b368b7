//! Slide-in navigation for narrow viewports
//!
//! Opened by the toggle button or a right swipe from the left edge; closed by
//! the close button, the overlay, a left swipe, or choosing a link. Choosing
//! a link scrolls to its section once the menu has slid away.

use std::time::{Duration, Instant};
use tracing::debug;

use crate::constants::mobile::{EDGE_ZONE, SWIPE_THRESHOLD};

#[derive(Debug)]
pub struct MobileMenu {
    open: bool,
    touch_start_x: Option<f32>,
    scroll_delay: Duration,
    pending_scroll: Option<(Instant, String)>,
}

impl MobileMenu {
    pub fn new(scroll_delay: Duration) -> Self {
        Self {
            open: false,
            touch_start_x: None,
            scroll_delay,
            pending_scroll: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// `aria-hidden` of the nav drawer
    pub fn aria_hidden(&self) -> bool {
        !self.open
    }

    /// `aria-expanded` of the toggle button
    pub fn aria_expanded(&self) -> bool {
        self.open
    }

    /// Nav link click: close now, scroll to `section_id` after the slide-out
    pub fn choose(&mut self, section_id: &str, now: Instant) {
        self.close();
        debug!(section = section_id, "mobile nav link chosen");
        self.pending_scroll = Some((now + self.scroll_delay, section_id.to_string()));
    }

    pub fn touch_start(&mut self, x: f32) {
        self.touch_start_x = Some(x);
    }

    pub fn touch_end(&mut self, x: f32) {
        let Some(start) = self.touch_start_x.take() else {
            return;
        };
        let distance = x - start;

        if start < EDGE_ZONE && distance > SWIPE_THRESHOLD {
            self.open();
        }
        if self.open && distance < -SWIPE_THRESHOLD {
            self.close();
        }
    }

    /// Section to scroll to, once its delay has elapsed
    pub fn take_scroll(&mut self, now: Instant) -> Option<String> {
        match &self.pending_scroll {
            Some((due, _)) if now >= *due => self.pending_scroll.take().map(|(_, id)| id),
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_scroll.as_ref().map(|(due, _)| *due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> MobileMenu {
        MobileMenu::new(Duration::from_millis(300))
    }

    #[test]
    fn test_toggle_and_aria() {
        let mut menu = menu();
        assert!(menu.aria_hidden());
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.aria_expanded());
        assert!(!menu.aria_hidden());
    }

    #[test]
    fn test_edge_swipe_opens() {
        let mut menu = menu();
        menu.touch_start(20.0);
        menu.touch_end(140.0);
        assert!(menu.is_open());
    }

    #[test]
    fn test_swipe_away_from_edge_does_not_open() {
        let mut menu = menu();
        menu.touch_start(80.0);
        menu.touch_end(300.0);
        assert!(!menu.is_open());

        // Too short
        menu.touch_start(10.0);
        menu.touch_end(100.0);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_left_swipe_closes() {
        let mut menu = menu();
        menu.open();
        menu.touch_start(300.0);
        menu.touch_end(150.0);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_choose_scrolls_after_delay() {
        let t0 = Instant::now();
        let mut menu = menu();
        menu.open();
        menu.choose("products", t0);
        assert!(!menu.is_open());

        assert_eq!(menu.take_scroll(t0 + Duration::from_millis(200)), None);
        assert_eq!(menu.take_scroll(t0 + Duration::from_millis(300)), Some("products".to_string()));
        assert_eq!(menu.take_scroll(t0 + Duration::from_secs(1)), None);
    }
}
