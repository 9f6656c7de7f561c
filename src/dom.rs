//! Thin readers over the browser window. All of these are only meaningful
//! in the browser; they return `DomError` instead of panicking elsewhere.

use leptos::web_sys;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("No window available")]
    NoWindow,
    #[error("No document element")]
    NoDocument,
    #[error("Browser call failed: {0}")]
    Js(String),
}

fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Scroll progress for a page of `document_height` seen through a viewport
/// of `viewport_height`, clamped to `[0, 1]`.
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn read_scroll_progress() -> Result<f64, DomError> {
    let window = window()?;
    let scroll_y = window
        .scroll_y()
        .map_err(|e| DomError::Js(format!("{e:?}")))?;
    let viewport = viewport_height(&window)?;
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .ok_or(DomError::NoDocument)?
        .scroll_height() as f64;
    Ok(scroll_fraction(scroll_y, document_height, viewport))
}

fn viewport_height(window: &web_sys::Window) -> Result<f64, DomError> {
    window
        .inner_height()
        .map_err(|e| DomError::Js(format!("{e:?}")))?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerHeight is not a number".into()))
}

pub fn viewport_width() -> Result<f64, DomError> {
    window()?
        .inner_width()
        .map_err(|e| DomError::Js(format!("{e:?}")))?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerWidth is not a number".into()))
}

/// `class` attributes of `element` and each of its ancestors, nearest first.
pub fn class_chain(element: web_sys::Element) -> Vec<String> {
    std::iter::successors(Some(element), |el| el.parent_element())
        .filter_map(|el| el.get_attribute("class"))
        .collect()
}

/// A live `IntersectionObserver` and the callback it invokes. Dropping it
/// disconnects the observer before the callback is released.
#[cfg(feature = "hydrate")]
pub struct ElementObserver {
    observer: ::web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<
        dyn FnMut(js_sys::Array, ::web_sys::IntersectionObserver),
    >,
}

#[cfg(feature = "hydrate")]
impl Drop for ElementObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_intersect` with each intersection report for `element` until it
/// returns true, then disconnects the observer. The observer stays registered
/// for as long as the returned handle is alive.
#[cfg(feature = "hydrate")]
pub fn observe_until(
    element: &::web_sys::Element,
    on_intersect: impl Fn(bool) -> bool + 'static,
) -> Result<ElementObserver, DomError> {
    use ::web_sys::{IntersectionObserver, IntersectionObserverEntry};
    use wasm_bindgen::{closure::Closure, JsCast};

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if on_intersect(entry.is_intersecting()) {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| DomError::Js(format!("{e:?}")))?;
    observer.observe(element);
    Ok(ElementObserver {
        observer,
        _callback: callback,
    })
}
