//! Navbar scroll state

use vitrine_core::config::NavConfig;
use vitrine_core::{ElementId, UiContext};
use vitrine_theme::ThemeMode;

/// Navbar appearance at a given scroll offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarState {
    /// Past the `scrolled` threshold
    pub scrolled: bool,
    /// Compact navbar (`navbar-reduce`) instead of transparent (`navbar-trans`)
    pub reduced: bool,
    pub back_to_top: bool,
    pub background_alpha: f64,
    pub shadow_alpha: f64,
}

impl NavbarState {
    pub fn at(offset: f64, config: &NavConfig) -> Self {
        let offset = offset.max(0.0);
        let fade = if config.fade_distance > 0.0 {
            offset / config.fade_distance
        } else {
            1.0
        };

        Self {
            scrolled: offset > config.scrolled_threshold,
            reduced: offset > config.reduce_threshold,
            back_to_top: offset > config.back_to_top_threshold,
            background_alpha: fade.min(config.max_background_alpha),
            shadow_alpha: fade.min(config.max_shadow_alpha),
        }
    }

    /// CSS background color for the navbar in `mode`
    pub fn background(&self, mode: ThemeMode) -> String {
        let (r, g, b) = if mode.is_dark() {
            (26, 26, 26)
        } else {
            (255, 255, 255)
        };
        format!("rgba({}, {}, {}, {})", r, g, b, self.background_alpha)
    }

    /// CSS box shadow for the navbar
    pub fn shadow(&self) -> String {
        format!("0 4px 30px rgba(0, 0, 0, {})", self.shadow_alpha)
    }

    /// Write classes and inline styles to the navbar and back-to-top button
    pub fn apply(&self, ctx: &UiContext, config: &NavConfig, mode: ThemeMode) {
        let document = ctx.document();
        let navbar = ElementId::new(config.navbar.as_str());
        if document.contains(&navbar) {
            document.set_class(&navbar, "scrolled", self.scrolled);
            document.set_class(&navbar, "navbar-reduce", self.reduced);
            document.set_class(&navbar, "navbar-trans", !self.reduced);
            document.set_style(&navbar, "background-color", &self.background(mode));
            document.set_style(&navbar, "box-shadow", &self.shadow());
        }

        let back_to_top = ElementId::new(config.back_to_top.as_str());
        document.set_class(&back_to_top, "show", self.back_to_top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_of_page() {
        let state = NavbarState::at(0.0, &NavConfig::default());
        assert!(!state.scrolled);
        assert!(!state.reduced);
        assert!(!state.back_to_top);
        assert_eq!(state.background_alpha, 0.0);
        assert_eq!(state.shadow(), "0 4px 30px rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let config = NavConfig::default();
        assert!(!NavbarState::at(20.0, &config).reduced);
        assert!(NavbarState::at(21.0, &config).reduced);
        assert!(!NavbarState::at(50.0, &config).scrolled);
        assert!(NavbarState::at(51.0, &config).scrolled);
        assert!(!NavbarState::at(300.0, &config).back_to_top);
        assert!(NavbarState::at(301.0, &config).back_to_top);
    }

    #[test]
    fn test_alpha_is_clamped() {
        let config = NavConfig::default();
        let mid = NavbarState::at(100.0, &config);
        assert_eq!(mid.background_alpha, 0.5);
        assert_eq!(mid.shadow_alpha, 0.1);

        let far = NavbarState::at(5000.0, &config);
        assert_eq!(far.background_alpha, 0.98);
        assert_eq!(far.background(ThemeMode::Dark), "rgba(26, 26, 26, 0.98)");
        assert_eq!(far.background(ThemeMode::Light), "rgba(255, 255, 255, 0.98)");
    }

    #[test]
    fn test_negative_offset_treated_as_top() {
        let state = NavbarState::at(-40.0, &NavConfig::default());
        assert_eq!(state, NavbarState::at(0.0, &NavConfig::default()));
    }
}
