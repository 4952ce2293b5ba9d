//! Literal copy for the site. Pages hand these slices to the section
//! components; nothing here changes at runtime.

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Activity,
    ArrowRight,
    CheckCircle,
    Gauge,
    Instagram,
    Leaf,
    Lightbulb,
    Linkedin,
    Lock,
    Rocket,
    Shield,
    ShieldCheck,
    Sparkles,
    TrendingUp,
    Twitter,
    Waves,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Activity => "📶",
            Icon::ArrowRight => "→",
            Icon::CheckCircle => "✅",
            Icon::Gauge => "🎛️",
            Icon::Instagram => "📷",
            Icon::Leaf => "🍃",
            Icon::Lightbulb => "💡",
            Icon::Linkedin => "in",
            Icon::Lock => "🔒",
            Icon::Rocket => "🚀",
            Icon::Shield => "🛡️",
            Icon::ShieldCheck => "🛡️",
            Icon::Sparkles => "✨",
            Icon::TrendingUp => "📈",
            Icon::Twitter => "𝕏",
            Icon::Waves => "🌊",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentBlock {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub end: u64,
    pub suffix: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub quote: &'static str,
    pub attribution: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub icon: Option<Icon>,
    pub link: Option<Route>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub aspect: &'static str,
    pub ours: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

// Home

pub const VALUES: &[ContentBlock] = &[
    ContentBlock {
        title: "Innovation",
        description: "We push the boundaries of smart technology.",
        icon: Icon::Sparkles,
    },
    ContentBlock {
        title: "Sustainability",
        description: "Energy-efficient designs for a greener tomorrow.",
        icon: Icon::Leaf,
    },
    ContentBlock {
        title: "Security",
        description: "Your home, your data, always protected.",
        icon: Icon::ShieldCheck,
    },
];

pub const ECOSYSTEM: &[Product] = &[
    Product {
        name: "BrightSense",
        status: "Launching Q4 2025",
        description: "Our flagship smart lighting system with AI-powered zone detection and adaptive brightness.",
        icon: None,
        link: Some(Route::BrightSense),
    },
    Product {
        name: "Smart Locks",
        status: "Coming Soon",
        description: "Advanced biometric locks for next-level home security.",
        icon: Some(Icon::Lock),
        link: None,
    },
    Product {
        name: "Home Sensors",
        status: "Coming Soon",
        description: "Environmental and security sensors for complete awareness.",
        icon: Some(Icon::Activity),
        link: None,
    },
    Product {
        name: "Surveillance Systems",
        status: "Coming Soon",
        description: "AI-driven, privacy-focused home monitoring.",
        icon: Some(Icon::Gauge),
        link: None,
    },
];

pub const QUOTES: &[Quote] = &[
    Quote {
        quote: "The most thoughtfully designed smart home experience we've tested.",
        attribution: "Modern Living Journal",
    },
    Quote {
        quote: "Seculinx blends privacy-first design with brilliant automation.",
        attribution: "Tech & Home",
    },
    Quote { quote: "Lighting that actually understands your life.", attribution: "Beta User" },
];

/// Hotspots over the hero image: (top, left, right, bottom, size) as CSS
/// lengths, empty when unset.
pub const HERO_LIGHTS: &[(&str, &str, &str, &str, &str)] = &[
    ("20%", "25%", "", "", "4rem"),
    ("25%", "", "30%", "", "3rem"),
    ("45%", "15%", "", "", "2.5rem"),
    ("", "", "25%", "30%", "3.5rem"),
    ("", "40%", "", "40%", "2rem"),
];

pub const SOCIAL: &[ExternalLink] = &[
    ExternalLink { label: "Instagram", href: "https://www.instagram.com/seculinx/", icon: Icon::Instagram },
    ExternalLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/company/seculinx/?viewAsMember=true",
        icon: Icon::Linkedin,
    },
    ExternalLink { label: "X (Twitter)", href: "https://x.com/seculinx", icon: Icon::Twitter },
];

// BrightSense

pub const HOW_IT_WORKS: &[Step] = &[
    Step {
        title: "Detect",
        description: "Advanced mmWave sensing detects motion and activity zones without compromising privacy.",
    },
    Step {
        title: "Adapt",
        description: "Lighting adjusts brightness, warmth, and coverage based on your presence and needs.",
    },
    Step {
        title: "Optimize",
        description: "AI learns your preferences to reduce energy use while maximizing comfort.",
    },
];

pub const BRIGHTSENSE_FEATURES: &[ContentBlock] = &[
    ContentBlock {
        title: "Zone Detection",
        description: "Knows exactly where you are in the room.",
        icon: Icon::Waves,
    },
    ContentBlock {
        title: "Activity Awareness",
        description: "Recognizes if you’re reading, working, or relaxing.",
        icon: Icon::Activity,
    },
    ContentBlock {
        title: "Energy Optimization",
        description: "Only lights where and when needed.",
        icon: Icon::Shield,
    },
    ContentBlock {
        title: "Multi-Device Sync",
        description: "Seamlessly integrates with other Seculinx products.",
        icon: Icon::Sparkles,
    },
];

pub const USE_CASES: &[Step] = &[
    Step { title: "Home Office", description: "Focus lighting during work hours." },
    Step { title: "Living Room", description: "Ambient glow for movie nights." },
    Step { title: "Bedroom", description: "Warm light transition for winding down." },
];

// Invest

pub const PRINCIPLES: &[&str] = &["Innovation", "Sustainability", "Customer-first", "Seamless Integration"];

pub const MARKET: &[Stat] = &[
    Stat { label: "Smart home market by 2030", end: 200, suffix: "B+" },
    Stat { label: "Projected CAGR", end: 14, suffix: "%" },
    Stat { label: "IoT-enabled households by 2030", end: 1000, suffix: "M" },
    Stat { label: "Avg. energy savings", end: 30, suffix: "%" },
];

pub const ADVANTAGES: &[&str] = &[
    "Proprietary designs and mmWave-driven zone-based lighting",
    "Intuitive control interfaces with AI personalization",
    "Privacy-first architecture and sustainability commitment",
    "Seamless ecosystem integration across devices",
];

pub const VERSUS: &[Comparison] = &[
    Comparison { aspect: "Zone detection", ours: "Advanced, room-level" },
    Comparison { aspect: "Energy optimization", ours: "AI-driven, context aware" },
    Comparison { aspect: "Privacy", ours: "Privacy-first, local processing" },
    Comparison { aspect: "Integration", ours: "Ecosystem-native" },
];

pub const PORTFOLIO: &[Product] = &[
    Product {
        name: "BrightSense",
        status: "Launching Q4 2025",
        description: "Intelligent, zone-based lighting that adapts to presence and activity.",
        icon: None,
        link: Some(Route::BrightSense),
    },
    Product {
        name: "Smart Locks",
        status: "Coming Soon",
        description: "Advanced biometric security with seamless entry.",
        icon: None,
        link: None,
    },
    Product {
        name: "Energy Management",
        status: "Coming Soon",
        description: "Optimize home energy usage without compromise.",
        icon: None,
        link: None,
    },
];

pub const GROWTH_PLAN: &[ContentBlock] = &[
    ContentBlock {
        title: "Short-term",
        description: "BrightSense launch, early adopter programs, and strategic pilots.",
        icon: Icon::Rocket,
    },
    ContentBlock {
        title: "Mid-term",
        description: "Expand product lines and partnerships across key markets.",
        icon: Icon::TrendingUp,
    },
    ContentBlock {
        title: "Long-term",
        description: "Sustainable, privacy-first ecosystem leadership globally.",
        icon: Icon::Leaf,
    },
];

pub const MILESTONES: &[&str] = &[
    "Q4 2025 — BrightSense Launch",
    "2026 — Ecosystem Expansion",
    "2027+ — Global Scale",
];

pub const PARTNER_REASONS: &[&str] = &[
    "Visionary brand and early-mover advantage",
    "Scalable business model with strong unit economics",
    "Deep product focus and commitment to innovation",
    "Experienced leadership and strategic advisory network",
];

pub const INVESTOR_DECK: &str = "/investor-deck.pdf";

// Contact

pub const CHANNELS: &[(&str, &str)] = &[
    ("Email", "hello@seculinx.com"),
    ("Press", "press@seculinx.com"),
    ("Partnerships", "partners@seculinx.com"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_rotates_three_quotes() {
        assert_eq!(QUOTES.len(), 3);
        assert!(QUOTES.iter().all(|q| !q.quote.is_empty() && !q.attribution.is_empty()));
    }

    #[test]
    fn market_statistics() {
        let targets: Vec<_> = MARKET.iter().map(|s| (s.end, s.suffix)).collect();
        assert_eq!(targets, vec![(200, "B+"), (14, "%"), (1000, "M"), (30, "%")]);
    }

    #[test]
    fn only_brightsense_links_to_a_page() {
        for product in ECOSYSTEM.iter().chain(PORTFOLIO) {
            assert_eq!(product.link.is_some(), product.name == "BrightSense", "{}", product.name);
        }
    }

    #[test]
    fn social_links_are_absolute() {
        assert!(SOCIAL.iter().all(|l| l.href.starts_with("https://")));
    }
}
