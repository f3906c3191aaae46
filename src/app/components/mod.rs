pub mod icons;
pub mod nav_link;
pub mod theme_toggle;

pub use icons::{CloseIcon, MenuIcon};
pub use nav_link::{NavLink, NavLinkVariant};
pub use theme_toggle::ThemeToggle;
