//! Navigation menu chrome state (desktop dropdowns, mobile drawer).
//!
//! DESIGN
//! ======
//! At most one dropdown is open at a time. `navigation::on_route_change`
//! calls `close_all` on every route change and nav links call it on click,
//! so following any link leaves every menu closed.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Desktop dropdown menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMenu {
    Services,
    Company,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub mobile_open: bool,
    pub open_menu: Option<NavMenu>,
}

impl MenuState {
    pub fn is_open(&self, menu: NavMenu) -> bool {
        self.open_menu == Some(menu)
    }

    pub fn any_open(&self) -> bool {
        self.mobile_open || self.open_menu.is_some()
    }

    /// Hover or focus on a trigger.
    pub fn open(&mut self, menu: NavMenu) {
        self.open_menu = Some(menu);
    }

    /// Click on a trigger.
    pub fn toggle(&mut self, menu: NavMenu) {
        self.open_menu = if self.is_open(menu) { None } else { Some(menu) };
    }

    /// Pointer left `menu`'s dropdown; another menu's state is left alone.
    pub fn close(&mut self, menu: NavMenu) {
        if self.is_open(menu) {
            self.open_menu = None;
        }
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_all(&mut self) {
        self.mobile_open = false;
        self.open_menu = None;
    }
}
