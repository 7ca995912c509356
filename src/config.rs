//! Brand identity and site-wide constants.
//!
//! Everything here is compile-time configuration; the site reads no
//! environment variables and no config files.

/// Theme palette used for accents that the stylesheet cannot express by class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub purple: &'static str,
    pub gold: &'static str,
    pub green: &'static str,
    pub indigo: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
}

/// Brand name, domain, palette and public contact details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub domain: &'static str,
    pub palette: Palette,
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "Launch & Lift",
    domain: "launchandlift.com",
    palette: Palette {
        purple: "#8B78F3",
        gold: "#E9C46A",
        green: "#2A9D8F",
        indigo: "#6C63FF",
        bg: "#faf8ff",
        text: "#1f2937",
    },
    phone: "+91 00000 00000",
    email: "hello@launchandlift.com",
    location: "Remote‑first • Global",
};

/// CSS class applied to a page when it mounts; drives the enter transition.
pub const PAGE_ENTER_CLASS: &str = "page page--enter";
