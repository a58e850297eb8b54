//! Copy, portfolio data and per-item animation schedules.
//!
//! Every repeated animated element is rendered from one of these tables; its
//! delay is derived from its index and nothing is shared between items.

use serde::Serialize;

/// Brand accent used on badges and card chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Accent {
    Teal,
    Orange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Company {
    pub name: &'static str,
    pub initials: &'static str,
    pub accent: Accent,
}

pub const COMPANIES: [Company; 5] = [
    Company {
        name: "Care.ai",
        initials: "Ai",
        accent: Accent::Teal,
    },
    Company {
        name: "HealthGrid",
        initials: "Hg",
        accent: Accent::Orange,
    },
    Company {
        name: "Galvanon",
        initials: "Gv",
        accent: Accent::Teal,
    },
    Company {
        name: "Oncologic",
        initials: "On",
        accent: Accent::Orange,
    },
    Company {
        name: "DifGen",
        initials: "Dg",
        accent: Accent::Teal,
    },
];

//=============================================================================
// Animation schedules (seconds)
//=============================================================================

/// Gap between consecutive floating cards starting their cycle.
pub const FLOATING_CARD_STAGGER: f64 = 2.2;
/// Length of one float-up-and-fade cycle.
pub const FLOATING_CARD_CYCLE: f64 = 11.0;

/// One stop of the floating card cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    /// Fraction of the cycle, 0 to 1.
    pub at: f64,
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

/// Fade in while rising, drift, then fade out near the top.
pub const FLOATING_CARD_KEYFRAMES: [CardPose; 4] = [
    CardPose { at: 0.0, opacity: 0.0, x: 0.0, y: 0.0, scale: 0.8, rotate: 0.0 },
    CardPose { at: 0.2, opacity: 1.0, x: 50.0, y: -75.0, scale: 1.0, rotate: 2.5 },
    CardPose { at: 0.8, opacity: 1.0, x: 200.0, y: -290.0, scale: 1.0, rotate: 8.0 },
    CardPose { at: 1.0, opacity: 0.0, x: 250.0, y: -350.0, scale: 0.9, rotate: 10.0 },
];

pub const MARQUEE_REPEATS: usize = 4;
pub const MARQUEE_DURATION: f64 = 25.0;
/// Horizontal distance covered by one marquee loop, in layout units.
pub const MARQUEE_TRAVEL: f64 = 1000.0;

pub const STAT_STAGGER: f64 = 0.1;

/// Entrance played the first time an element scrolls into view: it rises
/// by `rise` layout units while fading in over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMotion {
    pub rise: f64,
    pub duration: f64,
}

pub const CARD_REVEAL: RevealMotion = RevealMotion {
    rise: 50.0,
    duration: 0.6,
};
pub const STAT_REVEAL: RevealMotion = RevealMotion {
    rise: 20.0,
    duration: 0.5,
};

/// Entrance delays of the hero pieces. They start late on purpose so they
/// play after the loader has faded.
pub mod hero_delay {
    pub const BADGES: f64 = 1.8;
    pub const HEADLINE: f64 = 2.0;
    pub const TAGLINE: f64 = 2.2;
    pub const CTA: f64 = 2.4;
}

/// Loader blocks: orange, teal, dark, in that order, then the label.
pub const LOADER_BLOCK_DELAYS: [f64; 3] = [0.2, 0.4, 0.6];
pub const LOADER_LABEL_DELAY: f64 = 1.2;

pub fn floating_card_delay(index: usize) -> f64 {
    index as f64 * FLOATING_CARD_STAGGER
}

/// The `@keyframes` rule for the floating cards, built from
/// [`FLOATING_CARD_KEYFRAMES`].
pub fn floating_card_keyframes(name: &str) -> String {
    let stops: String = FLOATING_CARD_KEYFRAMES
        .iter()
        .map(|pose| {
            format!(
                "{}% {{ opacity: {}; transform: translate({}px, {}px) scale({}) rotate({}deg); }} ",
                pose.at * 100.0,
                pose.opacity,
                pose.x,
                pose.y,
                pose.scale,
                pose.rotate,
            )
        })
        .collect();
    format!("@keyframes {name} {{ {stops}}}")
}

pub fn stat_delay(index: usize) -> f64 {
    index as f64 * STAT_STAGGER
}

/// The marquee strip: every company name, repeated so the strip is wider
/// than its travel.
pub fn marquee_names() -> impl Iterator<Item = (usize, &'static str)> {
    (0..MARQUEE_REPEATS)
        .flat_map(|round| COMPANIES.iter().map(move |c| (round, c.name)))
}

//=============================================================================
// Home page
//=============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Assets Under Management",
        value: "$450M+",
    },
    Stat {
        label: "Successful Exits",
        value: "12",
    },
    Stat {
        label: "Years of Experience",
        value: "20+",
    },
    Stat {
        label: "Active Investments",
        value: "8",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Sector {
    pub name: &'static str,
    pub blurb: &'static str,
}

pub const SECTORS: [Sector; 2] = [
    Sector {
        name: "Healthcare",
        blurb: "We invest in digital health, AI-driven diagnostics, and patient engagement platforms that improve outcomes and streamline care delivery.",
    },
    Sector {
        name: "Real Estate",
        blurb: "We back technologies that modernize property management, construction, and the built environment.",
    },
];

//=============================================================================
// Portfolio page
//=============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::EnumIs)]
pub enum Status {
    Active,
    Acquired { by: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Holding {
    pub company: &'static str,
    pub category: &'static str,
    pub status: Status,
    pub accent: Accent,
    pub image: &'static str,
}

impl Holding {
    /// Caption revealed when the card is hovered.
    pub fn caption(&self) -> String {
        match self.status {
            Status::Active => "Fueling growth and innovation.".to_string(),
            Status::Acquired { .. } => {
                format!("A success story in {}.", self.category.to_lowercase())
            }
        }
    }

    pub fn acquired_by(&self) -> Option<&'static str> {
        match self.status {
            Status::Acquired { by } => Some(by),
            Status::Active => None,
        }
    }
}

pub const PORTFOLIO: [Holding; 5] = [
    Holding {
        company: "Care.ai",
        category: "Healthcare AI",
        status: Status::Acquired { by: "Stryker" },
        accent: Accent::Teal,
        image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?q=80&w=1000&auto=format&fit=crop",
    },
    Holding {
        company: "HealthGrid",
        category: "Patient Engagement",
        status: Status::Acquired { by: "Allscripts" },
        accent: Accent::Orange,
        image: "https://images.unsplash.com/photo-1579684385136-137af7513528?q=80&w=1000&auto=format&fit=crop",
    },
    Holding {
        company: "Galvanon",
        category: "Patient Experience",
        status: Status::Acquired { by: "NCR" },
        accent: Accent::Teal,
        image: "https://images.unsplash.com/photo-1516574187841-69301976e499?q=80&w=1000&auto=format&fit=crop",
    },
    Holding {
        company: "Oncologic",
        category: "Oncology",
        status: Status::Active,
        accent: Accent::Orange,
        image: "https://images.unsplash.com/photo-1579165466741-7f35a4755657?q=80&w=1000&auto=format&fit=crop",
    },
    Holding {
        company: "DifGen",
        category: "Pharmaceuticals",
        status: Status::Active,
        accent: Accent::Teal,
        image: "https://images.unsplash.com/photo-1631549916768-4119b2e5f926?q=80&w=1000&auto=format&fit=crop",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Criterion {
    pub title: &'static str,
    pub body: &'static str,
    /// CSS class colouring the title.
    pub tone: &'static str,
}

pub const INVESTMENT_CRITERIA: [Criterion; 3] = [
    Criterion {
        title: "Sector",
        body: "Healthcare IT, Real Estate Tech, and Digital Infrastructure.",
        tone: "text-teal",
    },
    Criterion {
        title: "Stage",
        body: "Series A through Growth Equity. Revenue generating with proven product-market fit.",
        tone: "text-orange",
    },
    Criterion {
        title: "Geography",
        body: "Primary focus on North America and Europe.",
        tone: "text-dark",
    },
];

//=============================================================================
// Footer
//=============================================================================

/// Placeholder links; they only point at `#`.
pub const FOOTER_EXPLORE: [&str; 3] = ["Expertise", "Team", "Contact"];
pub const FOOTER_SOCIAL: [&str; 3] = ["LinkedIn", "Twitter", "Crunchbase"];
pub const FOOTER_LEGAL: [&str; 2] = ["Privacy Policy", "Terms of Service"];
pub const COPYRIGHT: &str = "© 2024 TCapital. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floating_delays_follow_index() {
        let delays: Vec<f64> = (0..COMPANIES.len()).map(floating_card_delay).collect();
        assert_eq!(delays[0], 0.0);
        assert!((delays[4] - 8.8).abs() < 1e-9);
        assert!(delays.windows(2).all(|w| w[1] > w[0]));
        // the last card starts inside the first card's cycle
        assert!(delays[4] < FLOATING_CARD_CYCLE);
    }

    #[test]
    fn floating_keyframes_cover_the_whole_cycle() {
        let times: Vec<f64> = FLOATING_CARD_KEYFRAMES.iter().map(|p| p.at).collect();
        assert_eq!(times, [0.0, 0.2, 0.8, 1.0]);

        let css = floating_card_keyframes("float-card");
        assert!(css.starts_with("@keyframes float-card {"));
        assert!(css.contains("0% { opacity: 0; transform: translate(0px, 0px) scale(0.8) rotate(0deg); }"));
        assert!(css.contains("20% { opacity: 1;"));
        assert!(css.contains("80% { opacity: 1; transform: translate(200px, -290px)"));
        assert!(css.contains("100% { opacity: 0;"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn marquee_repeats_every_name() {
        let names: Vec<_> = marquee_names().collect();
        assert_eq!(names.len(), MARQUEE_REPEATS * COMPANIES.len());
        assert_eq!(names[0], (0, "Care.ai"));
        assert_eq!(names[5], (1, "Care.ai"));
        assert_eq!(names.last(), Some(&(3, "DifGen")));
    }

    #[test]
    fn captions_depend_on_status() {
        assert_eq!(PORTFOLIO[0].caption(), "A success story in healthcare ai.");
        assert_eq!(PORTFOLIO[0].acquired_by(), Some("Stryker"));
        assert_eq!(PORTFOLIO[3].caption(), "Fueling growth and innovation.");
        assert_eq!(PORTFOLIO[3].acquired_by(), None);
    }

    #[test]
    fn portfolio_and_companies_agree() {
        let portfolio: Vec<_> = PORTFOLIO.iter().map(|h| h.company).collect();
        let floating: Vec<_> = COMPANIES.iter().map(|c| c.name).collect();
        assert_eq!(portfolio, floating);
    }

    #[test]
    fn accent_class_names() {
        assert_eq!(Accent::Teal.as_ref(), "teal");
        assert_eq!(Accent::Orange.as_ref(), "orange");
        assert!((stat_delay(3) - 0.3).abs() < 1e-9);
    }
}
