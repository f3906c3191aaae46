use dioxus::prelude::*;

use crate::app::components::{CloseIcon, MenuIcon, NavLink, NavLinkVariant, ThemeToggle};
use crate::config::NavbarConfig;
use crate::domain::models::{NavbarState, Section};
use crate::domain::services::{ScrollSnapshot, scroll_spy};
use crate::shared::dom;
use crate::shared::hooks::use_scroll_spy;
use crate::shared::logging::{self, LogOperation};

/// Fixed site header.
///
/// The active section is owned by the parent: the navbar reports changes
/// through `on_section_change`, both when a link is clicked and when
/// scrolling brings another section under the probe line. Scroll geometry
/// settings are read once, on mount.
#[component]
pub fn Navbar(
    active_section: Option<Section>,
    on_section_change: EventHandler<Option<Section>>,
    #[props(default)] config: NavbarConfig,
    /// Start with the mobile list expanded.
    #[props(default)]
    initial_menu_open: bool,
) -> Element {
    let mut state = use_signal(|| NavbarState {
        menu_open: initial_menu_open,
        ..NavbarState::default()
    });

    let spy_config = config.clone();
    use_scroll_spy(move |snapshot: ScrollSnapshot| {
        let outcome = scroll_spy::observe(&snapshot, &spy_config);

        let mut next = *state.peek();
        if next.set_scrolled(outcome.scrolled) {
            state.set(next);
        }
        if let Some(active) = outcome.active {
            logging::log_section_in_view(active, snapshot.scroll_y);
            on_section_change.call(active);
        }
    });

    let on_navigate = use_callback(move |section: Section| {
        logging::log_nav_click(section);
        let selected = state.write().navigate(section);
        on_section_change.call(selected);
        if let Err(err) = dom::scroll_into_view(section.id()) {
            logging::log_dom_miss(LogOperation::Navigation, &err);
        }
    });

    let current = state();
    let header_class = current.header_class();
    let menu_label = current.menu_button_label();
    let menu_open = current.menu_open;
    let brand = config.brand.clone();

    rsx! {
        header { class: "{header_class}",
            div { class: "c-navbar__container",
                div { class: "c-navbar__row",
                    a {
                        class: "c-navbar__brand",
                        href: Section::Home.anchor(),
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(Section::Home);
                        },
                        "{brand}"
                    }

                    div { class: "c-navbar__actions",
                        div { class: "c-navbar__toggle-slot",
                            ThemeToggle {}
                        }

                        nav { class: "c-navbar__links c-navbar__links--desktop",
                            for section in Section::ALL {
                                NavLink {
                                    key: "{section.id()}",
                                    section,
                                    active: active_section == Some(section),
                                    variant: NavLinkVariant::Desktop,
                                    onselect: on_navigate,
                                }
                            }
                        }

                        button {
                            class: "c-navbar__menu-button",
                            r#type: "button",
                            aria_label: "{menu_label}",
                            "aria-expanded": "{menu_open}",
                            onclick: move |_| {
                                state.write().toggle_menu();
                                logging::log_menu_toggled(state.peek().menu_open);
                            },
                            if menu_open {
                                CloseIcon {}
                            } else {
                                MenuIcon {}
                            }
                        }
                    }
                }

                if menu_open {
                    div { class: "c-navbar__mobile",
                        nav { class: "c-navbar__links c-navbar__links--mobile",
                            for section in Section::ALL {
                                NavLink {
                                    key: "{section.id()}",
                                    section,
                                    active: active_section == Some(section),
                                    variant: NavLinkVariant::Mobile,
                                    onselect: on_navigate,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn skills_active() -> Element {
        let mut active = use_signal(|| Some(Section::Skills));
        rsx! {
            Navbar {
                active_section: active(),
                on_section_change: move |next: Option<Section>| active.set(next),
            }
        }
    }

    fn nothing_active() -> Element {
        rsx! {
            Navbar {
                active_section: None,
                on_section_change: move |_: Option<Section>| {},
            }
        }
    }

    fn custom_brand() -> Element {
        rsx! {
            Navbar {
                active_section: Some(Section::Home),
                on_section_change: move |_: Option<Section>| {},
                config: NavbarConfig {
                    brand: "Portfolio".to_string(),
                    ..NavbarConfig::default()
                },
            }
        }
    }

    fn menu_open() -> Element {
        rsx! {
            Navbar {
                active_section: Some(Section::Contact),
                on_section_change: move |_: Option<Section>| {},
                initial_menu_open: true,
            }
        }
    }

    #[test]
    fn test_open_menu_renders_mobile_list() {
        let html = render(menu_open);
        assert!(html.contains("c-navbar__mobile"));
        assert!(html.contains(r#"aria-label="Close menu""#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("c-icon--close"));
        assert!(!html.contains("c-icon--menu"));

        // Every entry appears once in each list
        assert_eq!(html.matches("c-navbar__link--mobile").count(), Section::ALL.len());
        assert_eq!(html.matches("c-navbar__link--desktop").count(), Section::ALL.len());
        // The active entry is highlighted in both lists
        assert_eq!(html.matches(r##"c-navbar__link--active" href="#contact""##).count(), 2);
    }

    #[test]
    fn test_initial_render_is_transparent_with_closed_menu() {
        let html = render(skills_active);
        assert!(html.contains(r#"class="c-navbar c-navbar--top""#));
        assert!(html.contains(r#"aria-label="Open menu""#));
        assert!(html.contains("c-icon--menu"));
        assert!(!html.contains("c-navbar__mobile"));
        assert!(!html.contains("c-icon--close"));
    }

    #[test]
    fn test_desktop_links_in_order() {
        let html = render(skills_active);
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|section| {
                html.find(&format!(r#"href="{}""#, section.anchor()))
                    .unwrap_or_else(|| panic!("missing link for {section}"))
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_only_active_section_is_highlighted() {
        let html = render(skills_active);
        assert_eq!(html.matches("c-navbar__link--active").count(), 1);
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert!(html.contains(r##"c-navbar__link--active" href="#skills""##));
    }

    #[test]
    fn test_empty_default_highlights_nothing() {
        let html = render(nothing_active);
        assert!(!html.contains("c-navbar__link--active"));
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn test_brand_comes_from_config() {
        let html = render(custom_brand);
        assert!(html.contains("Portfolio"));
        assert!(!html.contains("Chard"));
        assert!(html.contains(r##"class="c-navbar__brand" href="#home""##));
    }

    #[test]
    fn test_theme_toggle_is_mounted() {
        let html = render(nothing_active);
        assert!(html.contains("c-theme-toggle"));
    }
}
