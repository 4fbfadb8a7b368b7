//! Application-wide constants
//!
//! Default values for every tunable in the config file plus the fixed
//! thresholds lifted from the site behaviour. Config defaults point here so
//! there is a single source of truth.

/// Config file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "cakewalk-panel";

    /// Config filename
    pub const FILENAME: &str = "config.json";
}

/// Panel coordinator timings and environment thresholds
pub mod panel {
    /// Minimum viewport width (px) for the desktop panel to mount
    pub const DESKTOP_BREAKPOINT: f32 = 768.0;

    /// Delay before a section-label click activates the section's first item
    pub const FIRST_ITEM_DELAY_MS: u64 = 100;

    /// Delay before the default content is shown after mount
    pub const DEFAULT_CONTENT_DELAY_MS: u64 = 500;

    /// Delay before a freshly inserted carousel is initialised
    pub const CAROUSEL_INIT_DELAY_MS: u64 = 100;

    /// Quiet period before a resize burst triggers a refit
    pub const RESIZE_DEBOUNCE_MS: u64 = 250;
}

/// Carousel ring defaults
pub mod carousel {
    /// Forward offset of each figure along its rotation axis (px)
    pub const DEPTH: f32 = 350.0;

    /// Depth used below the desktop breakpoint
    pub const COMPACT_DEPTH: f32 = 250.0;

    /// Full turn duration of the auto-rotation
    pub const ROTATION_PERIOD_SECS: f32 = 30.0;

    /// Scale applied on hover/active
    pub const HOVER_SCALE: f32 = 1.05;

    /// Stacking order raised on hover
    pub const HOVER_Z_INDEX: i32 = 100;

    /// Degrees of ring rotation per pixel of horizontal drag
    pub const DRAG_DEGREES_PER_PX: f32 = 0.25;
}

/// Manual zoom defaults
pub mod zoom {
    /// Increment per zoom in/out action
    pub const STEP: f32 = 0.1;

    /// Lowest user zoom factor
    pub const FLOOR: f32 = 0.1;
}

/// Contact form behaviour
pub mod form {
    /// How long the success message stays before the form resets
    pub const SUCCESS_RESET_MS: u64 = 3000;

    /// Live validation debounce after the last keystroke
    pub const VALIDATION_DEBOUNCE_MS: u64 = 300;

    pub const MIN_NAME_LEN: usize = 2;
    pub const MIN_MESSAGE_LEN: usize = 10;

    pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
}

/// Modal viewer behaviour
pub mod modal {
    /// Delay between removing the open state and hiding the modal
    pub const HIDE_DELAY_MS: u64 = 300;
}

/// Mobile slide-in menu thresholds
pub mod mobile {
    /// Swipes must start this close to the left edge to open the menu (px)
    pub const EDGE_ZONE: f32 = 50.0;

    /// Minimum horizontal swipe distance (px)
    pub const SWIPE_THRESHOLD: f32 = 100.0;

    /// Delay between closing the menu and scrolling to the chosen section
    pub const SCROLL_DELAY_MS: u64 = 300;
}

/// Scroll-snap navigation thresholds
pub mod scroll {
    /// Line (px from the top) a section must cross for its nav link to highlight
    pub const NAV_LINE: f32 = 150.0;

    /// A section is revealed once its top rises above this fraction of the viewport
    pub const REVEAL_AT: f32 = 0.75;

    /// A section counts as "current" for stepping when its top is within this band
    pub const SNAP_BAND: f32 = 100.0;

    /// Cooldown after a wheel/touch step
    pub const STEP_COOLDOWN_MS: u64 = 1000;

    /// Minimum vertical touch travel for a step (px)
    pub const TOUCH_THRESHOLD: f32 = 50.0;

    /// Scroll offset past which the header shrinks (px)
    pub const HEADER_SHRINK_AT: f32 = 50.0;

    /// Debounce for scroll notifications
    pub const DEBOUNCE_MS: u64 = 100;

    /// Separate, slower debounce for the back-to-top button
    pub const BACK_TO_TOP_DEBOUNCE_MS: u64 = 150;
}

/// Validation bounds for config values
pub mod validation {
    pub const MIN_BREAKPOINT: f32 = 320.0;
    pub const MAX_BREAKPOINT: f32 = 4096.0;
    pub const MAX_DELAY_MS: u64 = 10_000;
    pub const MIN_DEPTH: f32 = 50.0;
    pub const MAX_DEPTH: f32 = 2000.0;
    pub const MIN_ROTATION_PERIOD_SECS: f32 = 1.0;
    pub const MIN_ZOOM_STEP: f32 = 0.01;
    pub const MAX_ZOOM_STEP: f32 = 1.0;
    pub const MIN_WINDOW_DIMENSION: f32 = 320.0;
}
