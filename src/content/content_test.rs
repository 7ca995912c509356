use std::collections::HashSet;

use super::*;

// =============================================================
// Table shape
// =============================================================

#[test]
fn table_has_one_entry_per_slug_in_menu_order() {
    assert_eq!(SERVICES.len(), Slug::ALL.len());
    for (entry, slug) in SERVICES.iter().zip(Slug::ALL) {
        assert_eq!(entry.slug, slug);
    }
}

#[test]
fn entry_is_total_over_slugs() {
    for slug in Slug::ALL {
        assert_eq!(slug.entry().slug, slug);
    }
}

#[test]
fn menu_entries_match_table_keys_exactly() {
    let menu: HashSet<Slug> = menu_entries().map(|entry| entry.slug).collect();
    let keys: HashSet<Slug> = Slug::ALL.into_iter().collect();
    assert_eq!(menu, keys);
    assert_eq!(menu_entries().count(), 8);
}

#[test]
fn every_entry_has_content() {
    for entry in &SERVICES {
        assert!(!entry.title.is_empty(), "{}", entry.slug);
        assert!(!entry.bullets.is_empty(), "{}", entry.slug);
        assert!(!entry.packages.is_empty(), "{}", entry.slug);
        assert!(!entry.outcomes.is_empty(), "{}", entry.slug);
        assert!(!entry.process.is_empty(), "{}", entry.slug);
        assert!(entry.hue.starts_with('#'), "{}", entry.slug);
    }
}

// =============================================================
// Slug
// =============================================================

#[test]
fn slug_strings_are_unique() {
    let strings: HashSet<&str> = Slug::ALL.iter().map(|slug| slug.as_str()).collect();
    assert_eq!(strings.len(), Slug::COUNT);
}

#[test]
fn slug_parse_accepts_every_known_slug() {
    for slug in Slug::ALL {
        assert_eq!(Slug::parse(slug.as_str()), Some(slug));
    }
}

#[test]
fn slug_parse_is_exact() {
    assert_eq!(Slug::parse(""), None);
    assert_eq!(Slug::parse("Mentorship"), None);
    assert_eq!(Slug::parse("mentorship/"), None);
    assert_eq!(Slug::parse(" mentorship"), None);
    assert_eq!(Slug::parse("consulting"), None);
}

#[test]
fn slug_path_uses_services_prefix() {
    assert_eq!(Slug::WebAppDev.path(), "/services/web-app-dev");
    assert_eq!(Slug::Mentorship.to_string(), "mentorship");
}

// =============================================================
// lookup
// =============================================================

#[test]
fn lookup_mentorship() {
    let entry = lookup("mentorship").expect("mentorship entry");
    assert_eq!(entry.title, "1:1 Mentorship");
    let names: Vec<&str> = entry.packages.iter().map(|p| p.name).collect();
    assert_eq!(names, ["Coach", "Advisor"]);
    assert_eq!(entry.packages[0].price, "₹29k/mo");
}

#[test]
fn lookup_unknown_slug_is_absent() {
    assert!(lookup("nonexistent").is_none());
    assert!(lookup("").is_none());
}

#[test]
fn investor_connects_has_three_packages() {
    let entry = Slug::InvestorConnects.entry();
    assert_eq!(entry.packages.len(), 3);
    assert_eq!(entry.packages[2].price, "Talk to us");
}

#[test]
fn icon_classes_are_prefixed() {
    assert_eq!(IconName::Handshake.class(), "icon icon-handshake");
    assert_eq!(IconName::Close.name(), "x");
}

#[test]
fn display_copy_keeps_typographic_punctuation() {
    let investors = Slug::InvestorConnects.entry();
    assert_eq!(investors.subtitle, "Warm intros to the right money \u{2014} not just any money.");
    assert!(investors.bullets[0].starts_with("Data\u{2011}backed"));
    assert_eq!(crate::config::BRAND.location, "Remote\u{2011}first \u{2022} Global");
    assert!(super::copy::ABOUT_SUBTITLE.starts_with("We\u{2019}re"));
}
