//! Toggle button appearance

use crate::mode::ThemeMode;

/// What the theme toggle shows: the mode a click switches *to*
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleAffordance {
    pub icon_class: &'static str,
    pub title: &'static str,
}

impl ToggleAffordance {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                icon_class: "fa fa-sun-o",
                title: "Switch to Light Theme",
            },
            ThemeMode::Light => Self {
                icon_class: "fa fa-moon-o",
                title: "Switch to Dark Theme",
            },
        }
    }

    /// Markup placed inside the toggle button
    pub fn icon_html(&self) -> String {
        format!(r#"<i class="{}" aria-hidden="true"></i>"#, self.icon_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_html() {
        assert_eq!(
            ToggleAffordance::for_mode(ThemeMode::Light).icon_html(),
            r#"<i class="fa fa-moon-o" aria-hidden="true"></i>"#
        );
    }
}
