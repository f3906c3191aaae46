use dioxus::prelude::*;

use crate::domain::models::Section;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavLinkVariant {
    Desktop,
    Mobile,
}

impl NavLinkVariant {
    fn class(&self) -> &'static str {
        match self {
            NavLinkVariant::Desktop => "c-navbar__link--desktop",
            NavLinkVariant::Mobile => "c-navbar__link--mobile",
        }
    }
}

/// One navbar entry. The anchor keeps a real `href` for no-JS and
/// middle-click, but a plain click is handed to `onselect` instead of
/// jumping.
#[component]
pub fn NavLink(
    section: Section,
    active: bool,
    variant: NavLinkVariant,
    onselect: EventHandler<Section>,
) -> Element {
    let variant_class = variant.class();
    let active_class = if active { " c-navbar__link--active" } else { "" };
    let aria_current = active.then_some("page");

    rsx! {
        a {
            class: "c-navbar__link {variant_class}{active_class}",
            href: section.anchor(),
            "aria-current": aria_current,
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                onselect.call(section);
            },
            "{section.label()}"
        }
    }
}
