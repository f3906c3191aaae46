use crate::domain::models::Section;

/// Local view state of the navbar. Lives only while the navbar is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    /// Page scrolled beyond the background threshold.
    pub scrolled: bool,
    /// Mobile link list is shown.
    pub menu_open: bool,
}

impl NavbarState {
    /// Returns true when the flag changed, i.e. the header needs a re-render.
    pub fn set_scrolled(&mut self, scrolled: bool) -> bool {
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A nav entry was clicked: the menu closes and the clicked section is
    /// what the owner's setter receives.
    pub fn navigate(&mut self, section: Section) -> Option<Section> {
        self.close_menu();
        Some(section)
    }

    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "c-navbar c-navbar--scrolled"
        } else {
            "c-navbar c-navbar--top"
        }
    }

    /// Label describes what activating the button will do.
    pub fn menu_button_label(&self) -> &'static str {
        if self.menu_open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}
