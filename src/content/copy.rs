//! Marketing copy shared by the home, about and detail sections.

/// Short trust signals under the hero buttons.
pub const HERO_HIGHLIGHTS: &[&str] = &["Founder‑friendly", "Flexible engagement", "Global network"];

/// Tags on the hero's "runway" card.
pub const HERO_CARD_TAGS: &[&str] = &["Investor Connects", "Pitch Decks", "Growth Experiments", "Dev Sprints"];

/// Bullets on the hero's "what you get" card.
pub const HERO_BENEFITS: &[&str] = &[
    "Strategic guidance from operators",
    "Plug‑and‑play growth & engineering",
    "Templates that save weeks of work",
];

pub const FULL_STACK_PILLARS: &[&str] = &["Capital readiness", "GTM & lifecycle", "Design & engineering", "Ops & finance"];

/// Value tags beside every section shell.
pub const SHELL_TAGS: &[&str] = &["Founder‑led", "Operator‑grade", "Flexible", "Global", "Hands‑on", "Outcome‑driven"];

pub const TESTIMONIAL: &str =
    "\"We shipped our MVP in 6 weeks and closed a pre‑seed — thanks to Launch & Lift!\" — Ananya, Fintech founder";

pub const ABOUT_SUBTITLE: &str =
    "We’re a collective of operators, builders and growth leaders helping founders move faster.";

pub const ABOUT_BULLETS: &[&str] = &[
    "10+ years shipping zero‑to‑one products",
    "Network of 300+ angels & VC partners",
    "Portfolio companies across SaaS, fintech, AI and consumer",
    "Remote‑first with on‑ground partners in key hubs",
];

/// Lead paragraph under every service detail header.
pub const SERVICE_HEADER_BLURB: &str =
    "Tailored packages for pre‑seed to Series A startups. Choose what you need, when you need it.";
