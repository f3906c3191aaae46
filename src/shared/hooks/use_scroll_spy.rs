use dioxus::prelude::*;
use std::rc::Rc;

use crate::domain::services::ScrollSnapshot;
use crate::shared::errors::Result;
use crate::shared::logging::{self, LogOperation};

/// Subscribe to window scroll for the lifetime of the calling component.
///
/// The browser listener only captures geometry and forwards it over a
/// channel; `handler` runs inside a task owned by the component, so it may
/// write signals and call event handlers. The listener is removed when the
/// component unmounts. Only the handler passed on the first render is used.
pub fn use_scroll_spy(handler: impl FnMut(ScrollSnapshot) + 'static) {
    use_hook(move || match attach_listener(handler) {
        Ok(listener) => Some(Rc::new(listener)),
        Err(err) => {
            logging::log_dom_miss(LogOperation::ScrollSpy, &err);
            None
        }
    });
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener {
    window: web_sys::Window,
    closure: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
fn attach_listener(mut handler: impl FnMut(ScrollSnapshot) + 'static) -> Result<ScrollListener> {
    use crate::shared::dom;
    use futures::StreamExt;
    use futures::channel::mpsc::unbounded;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = dom::window()?;
    let (tx, mut rx) = unbounded::<ScrollSnapshot>();

    let closure = Closure::<dyn FnMut()>::new(move || match dom::scroll_snapshot() {
        Ok(snapshot) => {
            // Receiver gone means the component is unmounting
            let _ = tx.unbounded_send(snapshot);
        }
        Err(err) => logging::log_dom_miss(LogOperation::ScrollSpy, &err),
    });
    window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    logging::log_scroll_listener_attached();

    spawn(async move {
        while let Some(snapshot) = rx.next().await {
            handler(snapshot);
        }
    });

    Ok(ScrollListener { window, closure })
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        logging::log_scroll_listener_detached();
    }
}

// Native targets (SSR, tests) have no window to listen on
#[cfg(not(target_arch = "wasm32"))]
fn attach_listener(_handler: impl FnMut(ScrollSnapshot) + 'static) -> Result<()> {
    Err(crate::shared::errors::AppError::WindowUnavailable)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[test]
    fn test_native_attach_reports_missing_window() {
        let result = attach_listener(|_snapshot: ScrollSnapshot| {});
        assert!(matches!(result, Err(AppError::WindowUnavailable)));
    }
}
