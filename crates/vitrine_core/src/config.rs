//! Vitrine configuration
//!
//! Every section falls back to the page defaults, so an empty TOML document is
//! a valid configuration:
//!
//! ```toml
//! [typing]
//! phrases = ["Engineer", "Writer"]
//! typing_ms = 80
//!
//! [counters]
//! steps = 30
//! ```

use crate::error::Result;
use crate::visibility::ObserveOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct VitrineConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub counters: CounterConfig,
    #[serde(default)]
    pub skill_bars: SkillBarConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub preloader: PreloaderConfig,
}

impl VitrineConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

/// Theme persistence and toggle control
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preference store key
    pub storage_key: String,
    /// Attribute set on the document root
    pub attribute: String,
    /// Toggle button (receives the title and its icon markup)
    pub toggle: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
            toggle: ".theme-toggle".to_string(),
        }
    }
}

/// Typing effect
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TypingConfig {
    pub target: String,
    pub phrases: Vec<String>,
    pub typing_ms: u64,
    pub deleting_ms: u64,
    /// Pause once a phrase is fully typed
    pub hold_full_ms: u64,
    /// Pause once a phrase is fully deleted
    pub hold_empty_ms: u64,
}

impl TypingConfig {
    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_ms)
    }

    pub fn deleting_interval(&self) -> Duration {
        Duration::from_millis(self.deleting_ms)
    }

    pub fn hold_full(&self) -> Duration {
        Duration::from_millis(self.hold_full_ms)
    }

    pub fn hold_empty(&self) -> Duration {
        Duration::from_millis(self.hold_empty_ms)
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            target: ".hero-subtitle".to_string(),
            phrases: vec![
                "Associate Data Engineer".to_string(),
                "GOLD - Microsoft Student Ambassador".to_string(),
                "Passionate Learner".to_string(),
                "AI and ML Enthusiast".to_string(),
            ],
            typing_ms: 100,
            deleting_ms: 50,
            hold_full_ms: 2000,
            hold_empty_ms: 500,
        }
    }
}

/// Counter animations
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Elements to animate
    pub selector: String,
    /// Attribute holding the integer target
    pub attribute: String,
    pub duration_ms: u64,
    pub steps: u32,
    pub threshold: f64,
    pub root_margin: String,
}

impl CounterConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn observe_options(&self) -> ObserveOptions {
        ObserveOptions::new(self.threshold).with_root_margin(self.root_margin.clone())
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: ".stat-number[data-count]".to_string(),
            attribute: "data-count".to_string(),
            duration_ms: 2000,
            steps: 60,
            threshold: 0.5,
            root_margin: "0px 0px -100px 0px".to_string(),
        }
    }
}

/// Skill bar fill animation
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SkillBarConfig {
    pub selector: String,
    pub threshold: f64,
    /// Delay between collapsing the bar and restoring its width
    pub delay_ms: u64,
}

impl SkillBarConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for SkillBarConfig {
    fn default() -> Self {
        Self {
            selector: ".skill-progress".to_string(),
            threshold: 0.5,
            delay_ms: 100,
        }
    }
}

/// Timeline fade-up animation
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub selector: String,
    pub threshold: f64,
    pub offset_px: f64,
    pub transition: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            selector: ".timeline-item".to_string(),
            threshold: 0.2,
            offset_px: 20.0,
            transition: "all 0.5s ease-out".to_string(),
        }
    }
}

/// Navbar scroll styling and scroll spy
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavConfig {
    pub navbar: String,
    pub back_to_top: String,
    pub links: String,
    pub sections: String,
    /// Offset past which the navbar gets the `scrolled` class
    pub scrolled_threshold: f64,
    /// Offset past which the navbar switches from transparent to reduced
    pub reduce_threshold: f64,
    pub back_to_top_threshold: f64,
    /// Scroll distance over which background and shadow fade in
    pub fade_distance: f64,
    pub max_background_alpha: f64,
    pub max_shadow_alpha: f64,
    /// How far above a section its scroll-spy range starts
    pub spy_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            navbar: ".navbar".to_string(),
            back_to_top: ".back-to-top".to_string(),
            links: ".navbar-nav .nav-link".to_string(),
            sections: "section[id]".to_string(),
            scrolled_threshold: 50.0,
            reduce_threshold: 20.0,
            back_to_top_threshold: 300.0,
            fade_distance: 200.0,
            max_background_alpha: 0.98,
            max_shadow_alpha: 0.1,
            spy_offset: 100.0,
        }
    }
}

/// Smooth scrolling
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub anchor_duration_ms: u64,
    pub back_to_top_duration_ms: u64,
    /// Added back after subtracting the navbar height from the anchor position
    pub anchor_adjust_px: f64,
    /// Interval between scroll frames
    pub frame_ms: u64,
}

impl ScrollConfig {
    pub fn anchor_duration(&self) -> Duration {
        Duration::from_millis(self.anchor_duration_ms)
    }

    pub fn back_to_top_duration(&self) -> Duration {
        Duration::from_millis(self.back_to_top_duration_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            anchor_duration_ms: 1000,
            back_to_top_duration_ms: 1500,
            anchor_adjust_px: 5.0,
            frame_ms: 16,
        }
    }
}

/// Preloader fade-out
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PreloaderConfig {
    pub selector: String,
    pub fade_ms: u64,
}

impl PreloaderConfig {
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            selector: "#preloader".to_string(),
            fade_ms: 300,
        }
    }
}
