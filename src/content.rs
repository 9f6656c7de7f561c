//! Literal page content: projects, imagery and contact details per variant.

use crate::models::{ContactLink, Picture, ProjectEntry};

// Home ("Silent Space")

pub const HOME_HERO: Picture = Picture::new(
    "https://images.unsplash.com/photo-1511818966892-d7d671e672a2?q=80&w=1600",
    "Architecture",
);

pub const HOME_PROJECTS: &[ProjectEntry] = &[
    ProjectEntry::new(
        "Concrete Sanctuary",
        "Architecture — Zurich",
        "https://images.unsplash.com/photo-1518005020951-eccb494ad742?q=80&w=1200",
        0.1,
    ),
    ProjectEntry::new(
        "Minimalist Loft No. 04",
        "Interior — London",
        "https://images.unsplash.com/photo-1494438639946-1ebd1d20bf85?q=80&w=1200",
        0.2,
    ),
    ProjectEntry::new(
        "Shadow & Timber Villa",
        "Residential — Kyoto",
        "https://images.unsplash.com/photo-1505330622279-bf7d7fc918f4?q=80&w=1200",
        0.3,
    ),
];

pub const CLOSING_SPACE: Picture = Picture::new(
    "https://images.unsplash.com/photo-1501183638710-841dd1904471?q=80&w=1600",
    "Final space",
);

pub const STUDIO_EMAIL: ContactLink = ContactLink::Mail("studio@email.com");

// Studio ("Architecture & Interior Design")

pub const STUDIO_HERO: Picture = Picture::new(
    "https://images.unsplash.com/photo-1511818966892-d7d671e672a2?q=80&w=1600&auto=format&fit=crop",
    "Architecture exterior",
);

pub const STUDIO_MOSAIC: &[Picture] = &[
    Picture::new(
        "https://images.unsplash.com/photo-1502005229762-cf1b2da7c5d6?q=80&w=1200&auto=format&fit=crop",
        "Minimal interior",
    ),
    Picture::new(
        "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?q=80&w=1200&auto=format&fit=crop",
        "Interior material detail",
    ),
    Picture::new(
        "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?q=80&w=1200&auto=format&fit=crop",
        "Modern exterior",
    ),
];

pub const STUDIO_LIVING: Picture = Picture::new(
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=1400&auto=format&fit=crop",
    "Living space interior",
);

pub const STUDIO_CLOSING: Picture = Picture::new(
    "https://images.unsplash.com/photo-1501183638710-841dd1904471?q=80&w=1600&auto=format&fit=crop",
    "Architectural space ending",
);

// Portfolio ("Studio / Ar—ch")

pub const PORTFOLIO_HERO: Picture = Picture::new(
    "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?q=80&w=1000",
    "interior",
);

pub const PORTFOLIO_PROJECTS: &[ProjectEntry] = &[
    ProjectEntry::new(
        "The Concrete Sanctuary",
        "Architecture • Zurich",
        "https://images.unsplash.com/photo-1518005020951-eccb494ad742?q=80&w=1200",
        0.1,
    ),
    ProjectEntry::new(
        "Minimalist Loft No. 04",
        "Interior • London",
        "https://images.unsplash.com/photo-1494438639946-1ebd1d20bf85?q=80&w=1200",
        0.2,
    ),
    ProjectEntry::new(
        "Shadow & Timber Villa",
        "Residential • Kyoto",
        "https://images.unsplash.com/photo-1505330622279-bf7d7fc918f4?q=80&w=1200",
        0.3,
    ),
];

pub const PORTFOLIO_EMAIL: ContactLink = ContactLink::Mail("contact@studio.com");

pub const GRAIN_TEXTURE: &str = "https://grainy-gradients.vercel.app/noise.svg";

// Kinetic ("Raw Form")

pub const KINETIC_HERO: Picture = Picture::new(
    "https://images.unsplash.com/photo-1481026469463-66327c86e544?q=80&w=1200",
    "Architecture",
);

pub const KINETIC_WORKS: [ProjectEntry; 2] = [
    ProjectEntry::new(
        "The Concrete Monolith",
        "Berlin • 2024",
        "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=1200",
        0.0,
    )
    .with_badge("01 / RECO"),
    ProjectEntry::new(
        "Void House",
        "Tokyo • 2025",
        "https://images.unsplash.com/photo-1448630359122-06170664a274?q=80&w=1200",
        0.0,
    )
    .with_badge("02 / LAB"),
];

pub const MARQUEE_WORDS: &[&str] = &["Structure", "Material", "Light", "Purpose"];

pub const KINETIC_EMAIL: ContactLink = ContactLink::Mail("contact@gautam.com");
pub const KINETIC_PHONE: ContactLink = ContactLink::Tel("+919876543210");
/// Social handles shown beside the contact links; display only.
pub const KINETIC_SOCIALS: &[&str] = &["IG", "TW", "LI"];

/// Marquee band text: the word list twice, each word followed by a bullet.
pub fn marquee_text(words: &[&str]) -> String {
    words
        .iter()
        .chain(words.iter())
        .map(|w| format!("{w} • "))
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_is_complete() {
        for entry in HOME_PROJECTS
            .iter()
            .chain(PORTFOLIO_PROJECTS)
            .chain(KINETIC_WORKS.iter())
        {
            assert!(entry.is_complete(), "{entry:?}");
        }
    }

    #[test]
    fn card_delays_follow_display_order() {
        let delays: Vec<f64> = HOME_PROJECTS.iter().map(|p| p.reveal_delay).collect();
        assert_eq!(delays, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn kinetic_contact_is_literal() {
        assert_eq!(KINETIC_EMAIL.href(), "mailto:contact@gautam.com");
        assert_eq!(KINETIC_PHONE.href(), "tel:+919876543210");
    }

    #[test]
    fn marquee_repeats_words() {
        assert_eq!(
            marquee_text(&["A", "B"]),
            "A • B • A • B •"
        );
    }
}
