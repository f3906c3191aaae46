//! Thin, fallible wrappers over the browser DOM.
//!
//! On native targets (SSR, desktop, tests) every call reports
//! [`AppError::WindowUnavailable`]; callers treat errors as a no-op.

use crate::domain::services::ScrollSnapshot;
use crate::shared::errors::{AppError, Result};

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use crate::domain::services::SectionBounds;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

    pub fn window() -> Result<Window> {
        web_sys::window().ok_or(AppError::WindowUnavailable)
    }

    pub fn document() -> Result<Document> {
        window()?.document().ok_or(AppError::DocumentUnavailable)
    }

    pub fn scroll_into_view(id: &str) -> Result<()> {
        let element = document()?
            .get_element_by_id(id)
            .ok_or_else(|| AppError::ElementNotFound(id.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    pub fn scroll_snapshot() -> Result<ScrollSnapshot> {
        let scroll_y = window()?.scroll_y()?;
        let nodes = document()?.query_selector_all("section")?;

        let mut sections = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            sections.push(SectionBounds::new(
                element.get_attribute("id").unwrap_or_default(),
                f64::from(element.offset_top()),
                f64::from(element.offset_height()),
            ));
        }

        Ok(ScrollSnapshot { scroll_y, sections })
    }

    pub fn set_root_class(class: &str, all: &[&str]) -> Result<()> {
        let root = document()?
            .document_element()
            .ok_or(AppError::DocumentUnavailable)?;
        let classes = root.class_list();
        for name in all {
            classes.remove_1(name)?;
        }
        classes.add_1(class)?;
        Ok(())
    }

    pub fn local_storage_get(key: &str) -> Result<Option<String>> {
        match window()?.local_storage()? {
            Some(storage) => Ok(storage.get_item(key)?),
            None => Ok(None),
        }
    }

    pub fn local_storage_set(key: &str, value: &str) -> Result<()> {
        if let Some(storage) = window()?.local_storage()? {
            storage.set_item(key, value)?;
        }
        Ok(())
    }

    pub fn media_matches(query: &str) -> Result<bool> {
        Ok(window()?
            .match_media(query)?
            .map(|list| list.matches())
            .unwrap_or(false))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;

    pub fn scroll_into_view(_id: &str) -> Result<()> {
        Err(AppError::WindowUnavailable)
    }

    pub fn scroll_snapshot() -> Result<ScrollSnapshot> {
        Err(AppError::WindowUnavailable)
    }

    pub fn set_root_class(_class: &str, _all: &[&str]) -> Result<()> {
        Err(AppError::WindowUnavailable)
    }

    pub fn local_storage_get(_key: &str) -> Result<Option<String>> {
        Err(AppError::WindowUnavailable)
    }

    pub fn local_storage_set(_key: &str, _value: &str) -> Result<()> {
        Err(AppError::WindowUnavailable)
    }

    pub fn media_matches(_query: &str) -> Result<bool> {
        Err(AppError::WindowUnavailable)
    }
}

pub use imp::*;
