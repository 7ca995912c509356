//! Icon references resolved by the external icon stylesheet.

/// Named glyph from the icon set. Rendered as `<i class="icon icon-<name>">`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    Rocket,
    ChevronRight,
    Menu,
    Close,
    Phone,
    Mail,
    MapPin,
    CheckCircle,
    ArrowRight,
    Building,
    Handshake,
    Presentation,
    BarChart,
    Users,
    Code,
    Wrench,
    Calculator,
}

impl IconName {
    pub const fn name(self) -> &'static str {
        match self {
            IconName::Rocket => "rocket",
            IconName::ChevronRight => "chevron-right",
            IconName::Menu => "menu",
            IconName::Close => "x",
            IconName::Phone => "phone",
            IconName::Mail => "mail",
            IconName::MapPin => "map-pin",
            IconName::CheckCircle => "check-circle-2",
            IconName::ArrowRight => "arrow-right",
            IconName::Building => "building-2",
            IconName::Handshake => "handshake",
            IconName::Presentation => "presentation",
            IconName::BarChart => "bar-chart-4",
            IconName::Users => "users",
            IconName::Code => "code-2",
            IconName::Wrench => "wrench",
            IconName::Calculator => "calculator",
        }
    }

    pub fn class(self) -> String {
        format!("icon icon-{}", self.name())
    }
}
