//! Event wiring between a `DomSurface` and the core controller.
//!
//! - `input` on the editor recomputes suggestions
//! - `blur` on the editor schedules the delayed hide
//! - `click` on the list (delegated to entries) applies a suggestion

use std::cell::RefCell;
use std::rc::Rc;

use autosuggest_core::{
    AutoSuggest, AutoSuggestEntry, PlatformError, SmolStr, SuggestConfig, SuggestHost,
};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_time::Instant;

use crate::surface::{DomSurface, ITEM_INDEX_ATTR};

struct Inner<H> {
    auto: AutoSuggest<web_sys::Node, H>,
    surface: DomSurface,
    /// Pending blur hide. Replacing it drops (and clears) the previous one.
    blur_timeout: Option<Timeout>,
}

/// A live autosuggest text box. Dropping it detaches all listeners.
pub struct AutoSuggestBinding<H> {
    inner: Rc<RefCell<Inner<H>>>,
    _listeners: Vec<EventListener>,
}

impl<H> AutoSuggestBinding<H>
where
    H: SuggestHost<web_sys::Node> + 'static,
{
    /// Attach to an existing editor/list pair.
    pub fn attach(surface: DomSurface, host: H, config: SuggestConfig) -> Self {
        let editor = surface.editor().clone();
        let list = surface.list().clone();
        let item_selector = format!(".{}", surface.item_class());

        let inner = Rc::new(RefCell::new(Inner {
            auto: AutoSuggest::new(host, config),
            surface,
            blur_timeout: None,
        }));

        let on_input = {
            let inner = Rc::clone(&inner);
            EventListener::new(&editor, "input", move |_| {
                // insertText from a selection re-enters here while the click
                // handler still holds the state; it hides on its own.
                let Ok(mut inner) = inner.try_borrow_mut() else {
                    return;
                };
                let Inner { auto, surface, .. } = &mut *inner;
                auto.on_input(surface);
            })
        };

        let on_blur = {
            let inner = Rc::clone(&inner);
            EventListener::new(&editor, "blur", move |_| {
                let Ok(mut guard) = inner.try_borrow_mut() else {
                    return;
                };
                guard.auto.on_blur(Instant::now());
                let delay = u32::try_from(guard.auto.config().focus_leave_delay.as_millis())
                    .unwrap_or(u32::MAX);
                let weak = Rc::downgrade(&inner);
                guard.blur_timeout = Some(Timeout::new(delay, move || {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    let Ok(mut inner) = inner.try_borrow_mut() else {
                        return;
                    };
                    let Inner { auto, surface, .. } = &mut *inner;
                    auto.flush_blur_hide(surface);
                }));
            })
        };

        let on_click = {
            let inner = Rc::clone(&inner);
            EventListener::new(&list, "click", move |event| {
                let Some(index) = clicked_item_index(event, &item_selector) else {
                    return;
                };
                let Ok(mut inner) = inner.try_borrow_mut() else {
                    return;
                };
                let Inner { auto, surface, .. } = &mut *inner;
                if let Err(err) = auto.select_index(surface, index) {
                    tracing::warn!(target: "autosuggest::dom", error = %err, index, "applying suggestion failed");
                }
            })
        };

        Self {
            inner,
            _listeners: vec![on_input, on_blur, on_click],
        }
    }

    /// Run a suggestion pass now, as if the user had typed.
    pub fn suggest(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Inner { auto, surface, .. } = &mut *inner;
        auto.on_input(surface)
    }

    /// Hide the suggestion list now.
    pub fn hide(&self) {
        let mut inner = self.inner.borrow_mut();
        let Inner { auto, surface, .. } = &mut *inner;
        auto.hide(surface);
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().auto.is_visible()
    }

    pub fn matches(&self) -> Vec<SmolStr> {
        self.inner.borrow().auto.matches().to_vec()
    }
}

/// Render `entry` into `container` and attach autosuggest behaviour to it.
pub fn mount<C, H>(
    container: &web_sys::Element,
    entry: &AutoSuggestEntry<C>,
    host: H,
    config: SuggestConfig,
) -> Result<AutoSuggestBinding<H>, PlatformError>
where
    H: SuggestHost<web_sys::Node> + 'static,
{
    container.set_inner_html(&entry.markup());
    let surface = DomSurface::from_entry(container, &config)?;
    tracing::debug!(target: "autosuggest::dom", id = entry.id(), "mounted autosuggest entry");
    Ok(AutoSuggestBinding::attach(surface, host, config))
}

/// Match index of the list entry an event landed on.
fn clicked_item_index(event: &web_sys::Event, item_selector: &str) -> Option<usize> {
    let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let item = target.closest(item_selector).ok()??;
    item.get_attribute(ITEM_INDEX_ATTR)?.parse().ok()
}
