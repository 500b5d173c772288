//! Scroll spy

use vitrine_core::config::NavConfig;
use vitrine_core::UiContext;

/// A page section the navbar links to
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section containing `offset`
///
/// Each section's range starts `spy_offset` pixels above its top. When ranges
/// overlap the later section wins.
pub fn active_section(offset: f64, sections: &[Section], spy_offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let start = s.top - spy_offset;
            offset >= start && offset < start + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

/// Measure the sections matching the configured selector
///
/// Sections without an `id` or without layout are skipped.
pub fn collect_sections(ctx: &UiContext, config: &NavConfig) -> Vec<Section> {
    let document = ctx.document();
    document
        .query_all(&config.sections)
        .iter()
        .filter_map(|element| {
            let id = document.attribute(element, "id")?;
            let bounds = document.bounds(element)?;
            Some(Section {
                id,
                top: bounds.top,
                height: bounds.height,
            })
        })
        .collect()
}

/// Mark the link pointing at `active` and clear the rest
pub fn highlight(ctx: &UiContext, config: &NavConfig, active: Option<&str>) {
    let document = ctx.document();
    for link in document.query_all(&config.links) {
        let is_active = match (active, document.attribute(&link, "href")) {
            (Some(id), Some(href)) => href.strip_prefix('#') == Some(id),
            _ => false,
        };
        document.set_class(&link, "active", is_active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section {
                id: "home".into(),
                top: 0.0,
                height: 600.0,
            },
            Section {
                id: "about".into(),
                top: 600.0,
                height: 800.0,
            },
            Section {
                id: "contact".into(),
                top: 1400.0,
                height: 400.0,
            },
        ]
    }

    #[test]
    fn test_picks_containing_section() {
        let sections = sections();
        assert_eq!(active_section(0.0, &sections, 100.0), Some("home"));
        assert_eq!(active_section(499.0, &sections, 100.0), Some("home"));
        assert_eq!(active_section(500.0, &sections, 100.0), Some("about"));
        assert_eq!(active_section(1350.0, &sections, 100.0), Some("contact"));
    }

    #[test]
    fn test_past_last_section() {
        assert_eq!(active_section(5000.0, &sections(), 100.0), None);
    }

    #[test]
    fn test_later_section_wins_overlap() {
        let overlapping = vec![
            Section {
                id: "a".into(),
                top: 0.0,
                height: 1000.0,
            },
            Section {
                id: "b".into(),
                top: 200.0,
                height: 300.0,
            },
        ];
        assert_eq!(active_section(250.0, &overlapping, 0.0), Some("b"));
        assert_eq!(active_section(700.0, &overlapping, 0.0), Some("a"));
    }
}
