use serde::Serialize;

/// A portfolio tile. Display order is the order of the containing slice.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
    /// Seconds before the entry animation starts
    pub reveal_delay: f64,
    /// Corner label on the kinetic grid, e.g. "01 / RECO"
    pub badge: Option<&'static str>,
}

impl ProjectEntry {
    pub const fn new(
        title: &'static str,
        category: &'static str,
        image_url: &'static str,
        reveal_delay: f64,
    ) -> Self {
        Self {
            title,
            category,
            image_url,
            reveal_delay,
            badge: None,
        }
    }

    pub const fn with_badge(self, badge: &'static str) -> Self {
        Self {
            badge: Some(badge),
            ..self
        }
    }

    /// All display strings are present
    #[cfg(test)]
    pub(crate) fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.category.trim().is_empty()
            && !self.image_url.trim().is_empty()
    }
}

/// A plain image slot (hero, mosaic, full-bleed backgrounds)
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Picture {
    pub src: &'static str,
    pub alt: &'static str,
}

impl Picture {
    pub const fn new(src: &'static str, alt: &'static str) -> Self {
        Self { src, alt }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_is_optional() {
        let entry = ProjectEntry::new("Void House", "Tokyo • 2025", "https://x/y.jpg", 0.0);
        assert_eq!(entry.badge, None);
        assert_eq!(entry.with_badge("02 / LAB").badge, Some("02 / LAB"));
    }

    #[test]
    fn blank_strings_are_incomplete() {
        assert!(ProjectEntry::new("A", "B", "C", 0.1).is_complete());
        assert!(!ProjectEntry::new(" ", "B", "C", 0.1).is_complete());
        assert!(!ProjectEntry::new("A", "B", "", 0.1).is_complete());
    }
}
