//! Product detail modal
//!
//! Closing drops the open state straight away and hides the modal after a
//! short delay so the exit transition can play. Reopening inside that delay
//! cancels the pending hide.

use std::time::{Duration, Instant};
use tracing::debug;

use crate::content::Figure;

#[derive(Debug, Clone, PartialEq)]
pub struct ModalContent {
    pub title: String,
    pub image: String,
    pub details: Vec<String>,
}

impl From<&Figure> for ModalContent {
    fn from(figure: &Figure) -> Self {
        Self {
            title: figure.name.clone(),
            image: figure.image.clone(),
            details: figure.details.clone(),
        }
    }
}

#[derive(Debug)]
pub struct ProductModal {
    content: Option<ModalContent>,
    open: bool,
    hide_at: Option<Instant>,
    hide_delay: Duration,
}

impl ProductModal {
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            content: None,
            open: false,
            hide_at: None,
            hide_delay,
        }
    }

    pub fn open(&mut self, content: ModalContent) {
        debug!(product = %content.title, "opening product modal");
        self.content = Some(content);
        self.open = true;
        self.hide_at = None;
    }

    /// Close button or backdrop click
    pub fn close(&mut self, now: Instant) {
        if !self.open {
            return;
        }
        self.open = false;
        self.hide_at = Some(now + self.hide_delay);
    }

    /// Escape only closes a modal that is currently displayed
    pub fn escape(&mut self, now: Instant) {
        if self.is_displayed() {
            self.close(now);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(hide_at) = self.hide_at
            && now >= hide_at
        {
            self.hide_at = None;
            self.content = None;
        }
    }

    /// Open class applied
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Still on screen, either open or playing its exit
    pub fn is_displayed(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.hide_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cupcakes() -> ModalContent {
        ModalContent {
            title: "Cupcakes".to_string(),
            image: "images/cupcakes.jpg".to_string(),
            details: vec!["Dozen: $30".to_string()],
        }
    }

    #[test]
    fn test_close_hides_after_delay() {
        let t0 = Instant::now();
        let mut modal = ProductModal::new(Duration::from_millis(300));
        modal.open(cupcakes());
        assert!(modal.is_open());

        modal.close(t0);
        assert!(!modal.is_open());
        assert!(modal.is_displayed());

        modal.tick(t0 + Duration::from_millis(299));
        assert!(modal.is_displayed());
        modal.tick(t0 + Duration::from_millis(300));
        assert!(!modal.is_displayed());
    }

    #[test]
    fn test_reopen_cancels_hide() {
        let t0 = Instant::now();
        let mut modal = ProductModal::new(Duration::from_millis(300));
        modal.open(cupcakes());
        modal.close(t0);
        modal.open(cupcakes());

        modal.tick(t0 + Duration::from_secs(1));
        assert!(modal.is_open());
        assert_eq!(modal.content().unwrap().title, "Cupcakes");
    }

    #[test]
    fn test_escape_ignored_when_hidden() {
        let t0 = Instant::now();
        let mut modal = ProductModal::new(Duration::from_millis(300));
        modal.escape(t0);
        assert!(modal.next_deadline().is_none());
    }
}
