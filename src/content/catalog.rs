//! Service catalog data. One entry per `Slug`, in `Slug::ALL` order.

use super::{IconName, Package, ServiceEntry, Slug};

pub static SERVICES: [ServiceEntry; Slug::COUNT] = [
    ServiceEntry {
        slug: Slug::InvestorConnects,
        title: "Investor Connects",
        subtitle: "Warm intros to the right money — not just any money.",
        icon: IconName::Handshake,
        bullets: &[
            "Curated list of angels & funds by stage, sector & geo",
            "Warm introductions via our operator network",
            "Data‑backed ICP for investors & outreach strategy",
            "CRM setup, pipeline, email scripts & tracking",
        ],
        packages: &[
            Package {
                name: "Starter",
                price: "₹49k",
                items: &["20 investor targets", "Intro email scripts", "CRM template"],
            },
            Package {
                name: "Pro",
                price: "₹1.2L",
                items: &["60 targets + warm intros", "Narrative review", "Weekly pipeline standup"],
            },
            Package {
                name: "Custom",
                price: "Talk to us",
                items: &["Partner‑led BD", "Demo days", "Strategic angels hunt"],
            },
        ],
        outcomes: &["Faster first meetings", "Higher hit‑rate on follow‑ups", "Clear pipeline analytics"],
        process: &["Discovery & thesis", "Investor ICP & long‑list", "Warm intros & outreach", "Follow‑ups & tracking"],
        nav_label: "Investor Connects",
        nav_blurb: "Warm VC & angel intros",
        card_title: "Investor Connects",
        card_blurb: "Warm intros to angels & VC partners matched to your stage, sector & geography.",
        hue: "#efe9ff",
    },
    ServiceEntry {
        slug: Slug::FundraisingSupport,
        title: "Fundraising Support",
        subtitle: "Run a tight, data‑driven raise with speed and clarity.",
        icon: IconName::Building,
        bullets: &[
            "Narrative crafting and memo development",
            "Data room checklist & audits (metrics, compliance)",
            "Term sheet review & negotiation support",
            "Weekly standups until money hits the bank",
        ],
        packages: &[
            Package {
                name: "Prep",
                price: "₹79k",
                items: &["Narrative + memo", "KPIs & cohort setup", "Data room checklist"],
            },
            Package {
                name: "Drive",
                price: "₹1.8L",
                items: &["Investor pipeline", "Meeting readiness", "Due‑diligence support"],
            },
        ],
        outcomes: &["Compelling story", "Clean data room", "Confident close"],
        process: &["Audit", "Narrative & metrics", "Outreach", "Diligence & close"],
        nav_label: "Fundraising Support",
        nav_blurb: "Narrative, CRM & data room",
        card_title: "Fundraising Support",
        card_blurb: "Narrative, data room, pipeline & CRM setup to run an efficient raise.",
        hue: "#fff2db",
    },
    ServiceEntry {
        slug: Slug::PitchDecksTemplates,
        title: "Pitch Deck & Legal Templates",
        subtitle: "Beautiful decks and founder‑friendly templates, ready to use.",
        icon: IconName::Presentation,
        bullets: &[
            "Investor deck, teaser, and product one‑pagers",
            "SAFE/SAFT, ESOP, NDAs, MoUs — customizable",
            "Template library & walkthroughs",
            "Optional legal review via partners",
        ],
        packages: &[
            Package {
                name: "Deck Sprint",
                price: "₹59k",
                items: &["3 rounds of design", "Story coaching", "Export kit"],
            },
            Package {
                name: "Legal Kit",
                price: "₹39k",
                items: &["SAFE/SAFT", "ESOP & NDA", "Filling guide"],
            },
        ],
        outcomes: &["Investor‑ready materials", "Time saved", "Consistent brand"],
        process: &["Content intake", "Design & iterate", "Finalize & export"],
        nav_label: "Pitch & Legal Templates",
        nav_blurb: "Decks, SAFE/SAFT, ESOP",
        card_title: "Pitch Deck & Legal Templates",
        card_blurb: "Pro‑grade pitch deck, SAFT/SAFE, ESOP, NDAs and more. Battle‑tested by founders.",
        hue: "#ecfff7",
    },
    ServiceEntry {
        slug: Slug::GrowthMarketing,
        title: "Growth Marketing",
        subtitle: "Acquire, activate, retain — and measure what matters.",
        icon: IconName::BarChart,
        bullets: &[
            "Full‑funnel strategy (paid, organic, PLG)",
            "Lifecycle automation (email, push, in‑app)",
            "Analytics instrumentation & dashboards",
            "Experiment design & rapid iteration",
        ],
        packages: &[
            Package {
                name: "Traction",
                price: "₹99k",
                items: &["Channel tests", "Landing pages", "Attribution setup"],
            },
            Package {
                name: "Lifecycle",
                price: "₹1.5L",
                items: &["Drip campaigns", "CRM automation", "Churn playbooks"],
            },
        ],
        outcomes: &["Lower CAC", "Higher activation", "Clear metrics"],
        process: &["Baseline & goals", "Experiments", "Scale winners", "Ops & reporting"],
        nav_label: "Growth Marketing",
        nav_blurb: "Acquisition & lifecycle",
        card_title: "Growth Marketing",
        card_blurb: "Acquisition sprints, lifecycle automation & analytics to unlock traction.",
        hue: "#f5f0ff",
    },
    ServiceEntry {
        slug: Slug::Mentorship,
        title: "1:1 Mentorship",
        subtitle: "Operator coaching for product, GTM and leadership.",
        icon: IconName::Users,
        bullets: &[
            "Weekly/bi‑weekly sessions with seasoned operators",
            "OKR planning, roadmapping & stakeholder mgmt",
            "Founder mindset & resilience coaching",
            "Access to community & office hours",
        ],
        packages: &[
            Package {
                name: "Coach",
                price: "₹29k/mo",
                items: &["2 sessions/mo", "Slack support", "Resources"],
            },
            Package {
                name: "Advisor",
                price: "₹55k/mo",
                items: &["4 sessions/mo", "Reviews & docs", "Warm intros"],
            },
        ],
        outcomes: &["Sharper decisions", "Better execution", "Less founder stress"],
        process: &["Goal setting", "Cadence", "Reviews", "Reflections"],
        nav_label: "1:1 Mentorship",
        nav_blurb: "Operator coaching",
        card_title: "1:1 Mentorship",
        card_blurb: "Operator‑led coaching on product, GTM, org design and founder mindset.",
        hue: "#effcf9",
    },
    ServiceEntry {
        slug: Slug::WebAppDev,
        title: "Web & App Development",
        subtitle: "Build v1 fast, scale with confidence.",
        icon: IconName::Code,
        bullets: &[
            "Design systems, frontend, backend & DevOps",
            "MVP builds, integrations & API development",
            "Cloud infra, CI/CD & security best practices",
            "Fractional CTO & product management",
        ],
        packages: &[
            Package {
                name: "MVP Sprint",
                price: "₹3.5L+",
                items: &["4–6 week build", "Design + FE/BE", "Testing & deploy"],
            },
            Package {
                name: "Scale",
                price: "Custom",
                items: &["Performance", "Observability", "Security hardening"],
            },
        ],
        outcomes: &["Ship sooner", "Stable releases", "Scalable stack"],
        process: &["Scope", "Design & arch", "Build & QA", "Launch & iterate"],
        nav_label: "Web & App Development",
        nav_blurb: "MVP to scale",
        card_title: "Web & App Development",
        card_blurb: "Design, frontend, backend & infra to build v1 fast and scale safely.",
        hue: "#f0fff4",
    },
    ServiceEntry {
        slug: Slug::TechSupport,
        title: "Technical Support",
        subtitle: "Your on‑call engineering team, when it matters.",
        icon: IconName::Wrench,
        bullets: &[
            "24/7 incident response & on‑call",
            "Performance tuning & cost optimization",
            "Security hardening & audits",
            "SLA‑backed support plans",
        ],
        packages: &[
            Package {
                name: "Essentials",
                price: "₹49k/mo",
                items: &["Business hours", "Incident playbooks", "Monthly review"],
            },
            Package {
                name: "SLA+",
                price: "₹1.2L/mo",
                items: &["24/7 on‑call", "SLOs", "Compliance checks"],
            },
        ],
        outcomes: &["Lower downtime", "Faster MTTR", "Happier users"],
        process: &["Onboarding", "Runbooks", "Monitoring", "Reviews"],
        nav_label: "Technical Support",
        nav_blurb: "On‑call engineers",
        card_title: "Tech Support",
        card_blurb: "On‑call engineers for incidents, performance & security hardening.",
        hue: "#eef2ff",
    },
    ServiceEntry {
        slug: Slug::FinanceAccounting,
        title: "Financial & Accounting",
        subtitle: "Clarity on runway, budgets and reporting.",
        icon: IconName::Calculator,
        bullets: &[
            "Book‑keeping & monthly closes",
            "Runway modeling & scenario planning",
            "Budgeting & cost controls",
            "Investor updates & board reporting",
        ],
        packages: &[
            Package {
                name: "Books",
                price: "₹35k/mo",
                items: &["Monthly closes", "GST & filings", "Reports"],
            },
            Package {
                name: "FP&A",
                price: "₹85k/mo",
                items: &["Budget & forecast", "Unit economics", "Board pack"],
            },
        ],
        outcomes: &["Clean books", "Extend runway", "Confident decisions"],
        process: &["Setup", "Monthly close", "Forecast", "Reporting"],
        nav_label: "Finance & Accounting",
        nav_blurb: "Runway & reporting",
        card_title: "Finance & Accounting",
        card_blurb: "Book‑keeping, runway modeling, budgeting & investor reporting.",
        hue: "#fff7e6",
    },
];
