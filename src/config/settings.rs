//! User-tunable settings loaded from `config.json`
//!
//! Everything the style layer would otherwise own (breakpoints, depths,
//! delays) lives here so the interactive components never hard-code it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::constants;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub panel: PanelSettings,
    #[serde(default)]
    pub carousel: CarouselSettings,
    #[serde(default)]
    pub zoom: ZoomSettings,
    #[serde(default)]
    pub form: FormSettings,
}

/// Initial native window size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

/// Panel coordinator environment and timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Viewports narrower than this get the mobile menu instead of the panel
    pub desktop_breakpoint: f32,
    pub first_item_delay_ms: u64,
    pub default_content_delay_ms: u64,
    pub carousel_init_delay_ms: u64,
    pub resize_debounce_ms: u64,
}

/// Carousel ring geometry and motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub depth: f32,
    /// Depth used when the viewport is below the desktop breakpoint
    pub compact_depth: f32,
    pub rotation_period_secs: f32,
    pub hover_scale: f32,
}

/// Manual zoom increments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub step: f32,
    pub floor: f32,
}

/// Contact form timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    pub success_reset_ms: u64,
    pub validation_debounce_ms: u64,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            window: WindowSettings::default(),
            panel: PanelSettings::default(),
            carousel: CarouselSettings::default(),
            zoom: ZoomSettings::default(),
            form: FormSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: crate::gui::constants::WINDOW_WIDTH,
            height: crate::gui::constants::WINDOW_HEIGHT,
        }
    }
}

impl Default for PanelSettings {
    fn default() -> Self {
        use constants::panel::*;
        Self {
            desktop_breakpoint: DESKTOP_BREAKPOINT,
            first_item_delay_ms: FIRST_ITEM_DELAY_MS,
            default_content_delay_ms: DEFAULT_CONTENT_DELAY_MS,
            carousel_init_delay_ms: CAROUSEL_INIT_DELAY_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        use constants::carousel::*;
        Self {
            depth: DEPTH,
            compact_depth: COMPACT_DEPTH,
            rotation_period_secs: ROTATION_PERIOD_SECS,
            hover_scale: HOVER_SCALE,
        }
    }
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            step: constants::zoom::STEP,
            floor: constants::zoom::FLOOR,
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            success_reset_ms: constants::form::SUCCESS_RESET_MS,
            validation_debounce_ms: constants::form::VALIDATION_DEBOUNCE_MS,
        }
    }
}

impl PanelSettings {
    pub fn first_item_delay(&self) -> Duration {
        Duration::from_millis(self.first_item_delay_ms)
    }

    pub fn default_content_delay(&self) -> Duration {
        Duration::from_millis(self.default_content_delay_ms)
    }

    pub fn carousel_init_delay(&self) -> Duration {
        Duration::from_millis(self.carousel_init_delay_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

impl CarouselSettings {
    /// Depth for the current viewport width, read fresh on every layout pass
    pub fn depth_for(&self, viewport_width: f32, breakpoint: f32) -> f32 {
        if viewport_width < breakpoint {
            self.compact_depth
        } else {
            self.depth
        }
    }
}

impl FormSettings {
    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }

    pub fn validation_debounce(&self) -> Duration {
        Duration::from_millis(self.validation_debounce_ms)
    }
}

impl Config {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(constants::config::APP_DIR);
        path.push(constants::config::FILENAME);
        path
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, creating default config");
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        config.validate_and_clamp();
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, json).with_context(|| format!("Failed to write config to {:?}", path))?;

        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Clamp values to ranges the components can work with
    pub fn validate_and_clamp(&mut self) {
        use constants::validation::*;

        let breakpoint = self.panel.desktop_breakpoint;
        if !(MIN_BREAKPOINT..=MAX_BREAKPOINT).contains(&breakpoint) {
            let clamped = if breakpoint.is_nan() {
                constants::panel::DESKTOP_BREAKPOINT
            } else {
                breakpoint.clamp(MIN_BREAKPOINT, MAX_BREAKPOINT)
            };
            warn!(desktop_breakpoint = breakpoint, using = clamped, "desktop_breakpoint out of range, clamping");
            self.panel.desktop_breakpoint = clamped;
        }

        for (name, delay) in [
            ("first_item_delay_ms", &mut self.panel.first_item_delay_ms),
            ("default_content_delay_ms", &mut self.panel.default_content_delay_ms),
            ("carousel_init_delay_ms", &mut self.panel.carousel_init_delay_ms),
            ("resize_debounce_ms", &mut self.panel.resize_debounce_ms),
            ("success_reset_ms", &mut self.form.success_reset_ms),
            ("validation_debounce_ms", &mut self.form.validation_debounce_ms),
        ] {
            if *delay > MAX_DELAY_MS {
                warn!(field = name, value = *delay, max = MAX_DELAY_MS, "delay exceeds maximum, clamping");
                *delay = MAX_DELAY_MS;
            }
        }

        for (name, depth) in [
            ("depth", &mut self.carousel.depth),
            ("compact_depth", &mut self.carousel.compact_depth),
        ] {
            if !(MIN_DEPTH..=MAX_DEPTH).contains(&*depth) {
                let clamped = if depth.is_nan() {
                    constants::carousel::DEPTH
                } else {
                    depth.clamp(MIN_DEPTH, MAX_DEPTH)
                };
                warn!(field = name, value = *depth, using = clamped, "carousel depth out of range, clamping");
                *depth = clamped;
            }
        }

        if !(self.carousel.rotation_period_secs >= MIN_ROTATION_PERIOD_SECS) {
            warn!(
                rotation_period_secs = self.carousel.rotation_period_secs,
                min = MIN_ROTATION_PERIOD_SECS,
                "rotation_period_secs below minimum, using default"
            );
            self.carousel.rotation_period_secs = constants::carousel::ROTATION_PERIOD_SECS;
        }

        if !(self.carousel.hover_scale >= 1.0) {
            warn!(hover_scale = self.carousel.hover_scale, "hover_scale below 1.0, using default");
            self.carousel.hover_scale = constants::carousel::HOVER_SCALE;
        }

        if !(MIN_ZOOM_STEP..=MAX_ZOOM_STEP).contains(&self.zoom.step) {
            warn!(step = self.zoom.step, "zoom step out of range, using default");
            self.zoom.step = constants::zoom::STEP;
        }

        if !(self.zoom.floor > 0.0 && self.zoom.floor <= 1.0) {
            warn!(floor = self.zoom.floor, "zoom floor out of range, using default");
            self.zoom.floor = constants::zoom::FLOOR;
        }

        if !(self.window.width >= MIN_WINDOW_DIMENSION) {
            warn!(width = self.window.width, min = MIN_WINDOW_DIMENSION, "window width below minimum, clamping");
            self.window.width = MIN_WINDOW_DIMENSION;
        }

        if !(self.window.height >= MIN_WINDOW_DIMENSION) {
            warn!(height = self.window.height, min = MIN_WINDOW_DIMENSION, "window height below minimum, clamping");
            self.window.height = MIN_WINDOW_DIMENSION;
        }
    }
}
