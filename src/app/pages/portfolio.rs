use dioxus::prelude::*;

use crate::app::layouts::Navbar;
use crate::domain::models::Section;

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Portfolio app initialized");
    });

    rsx! {
        PortfolioPage {}
    }
}

/// One-page portfolio. Owns the active section shared with the navbar.
#[component]
fn PortfolioPage() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let mut active_section = use_signal(|| Some(Section::Home));

    let on_section_change = move |next: Option<Section>| {
        // Scroll fires continuously; only re-render on an actual change
        if *active_section.peek() != next {
            active_section.set(next);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }

        Navbar {
            active_section: active_section(),
            on_section_change,
        }

        main { class: "c-page",
            for section in Section::ALL {
                PageSection { key: "{section.id()}", section }
            }
        }
    }
}

#[component]
fn PageSection(section: Section) -> Element {
    rsx! {
        section { id: section.id(), class: "c-section",
            h2 { class: "c-section__title", "{section.label()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_renders_a_section_per_entry() {
        let mut dom = VirtualDom::new(PortfolioPage);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        for section in Section::ALL {
            assert!(
                html.contains(&format!(r#"<section id="{}""#, section.id())),
                "missing <section> for {section}"
            );
        }
        // Home is active on first load
        assert!(html.contains(r##"c-navbar__link--active" href="#home""##));
    }
}
