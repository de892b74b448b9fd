//! Scoped browser event subscriptions. Each helper returns a [`Subscription`]
//! that detaches its listener or observer when dropped.

use std::cell::Cell;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, Window,
};

use crate::error::DomError;

thread_local! {
    static LIVE: Cell<usize> = Cell::new(0);
}

/// Number of subscriptions currently attached on this thread.
pub fn live_subscriptions() -> usize {
    LIVE.with(Cell::get)
}

#[must_use = "the subscription is released as soon as it is dropped"]
pub struct Subscription {
    name: &'static str,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(name: &'static str, release: impl FnOnce() + 'static) -> Self {
        LIVE.with(|live| live.set(live.get() + 1));
        debug!("Attached {} subscription", name);
        Self {
            name,
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
            LIVE.with(|live| live.set(live.get().saturating_sub(1)));
            debug!("Detached {} subscription", self.name);
        }
    }
}

fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// What the page needs from the browser window to track scrolling and the
/// pricing section.
pub trait Viewport {
    type Anchor;

    fn scroll_offset(&self) -> Result<f64, DomError>;
    fn attach_scroll(&self, handler: Box<dyn FnMut(f64)>) -> Result<Subscription, DomError>;
    fn anchor(&self, id: &str) -> Option<Self::Anchor>;
    fn observe(
        &self,
        anchor: Self::Anchor,
        threshold: f64,
        handler: Box<dyn FnMut(bool)>,
    ) -> Result<Subscription, DomError>;
}

pub struct BrowserWindow(Window);

impl BrowserWindow {
    pub fn current() -> Result<Self, DomError> {
        window().map(Self)
    }
}

impl Viewport for BrowserWindow {
    type Anchor = Element;

    fn scroll_offset(&self) -> Result<f64, DomError> {
        Ok(self.0.scroll_y()?)
    }

    fn attach_scroll(&self, mut handler: Box<dyn FnMut(f64)>) -> Result<Subscription, DomError> {
        let listener = {
            let window = self.0.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Ok(offset) = window.scroll_y() {
                    handler(offset);
                }
            })
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        attach_window_listener("scroll", self.0.clone(), "scroll", listener, &options)
    }

    fn anchor(&self, id: &str) -> Option<Element> {
        self.0.document()?.get_element_by_id(id)
    }

    fn observe(
        &self,
        anchor: Element,
        threshold: f64,
        mut handler: Box<dyn FnMut(bool)>,
    ) -> Result<Subscription, DomError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let visibility = (0..entries.length()).filter_map(|i| {
                    entries
                        .get(i)
                        .dyn_into::<IntersectionObserverEntry>()
                        .ok()
                        .map(|entry| entry.is_intersecting())
                });
                if let Some(visible) = latest_visibility(visibility) {
                    handler(visible);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&anchor);

        Ok(Subscription::new("anchor intersection", move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

/// Batched observer entries arrive oldest first; only the newest counts.
fn latest_visibility(entries: impl Iterator<Item = bool>) -> Option<bool> {
    entries.last()
}

fn attach_window_listener<T: ?Sized + 'static>(
    name: &'static str,
    window: Window,
    event: &'static str,
    handler: Closure<T>,
    options: &AddEventListenerOptions,
) -> Result<Subscription, DomError> {
    window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        handler.as_ref().unchecked_ref(),
        options,
    )?;
    Ok(Subscription::new(name, move || {
        if let Err(e) =
            window.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", event, e);
        }
    }))
}

/// Passive `scroll` listener reporting the scroll offset. The handler runs
/// once immediately so callers never start from a stale offset.
pub fn listen_scroll<V, F>(viewport: &V, mut on_scroll: F) -> Result<Subscription, DomError>
where
    V: Viewport,
    F: FnMut(f64) + 'static,
{
    on_scroll(viewport.scroll_offset()?);
    viewport.attach_scroll(Box::new(on_scroll))
}

/// Reports whether the element with `id` intersects the viewport.
///
/// Returns [`DomError::AnchorMissing`] when the element is not in the
/// document.
pub fn observe_anchor<V, F>(
    viewport: &V,
    id: &str,
    threshold: f64,
    on_change: F,
) -> Result<Subscription, DomError>
where
    V: Viewport,
    F: FnMut(bool) + 'static,
{
    let anchor = viewport
        .anchor(id)
        .ok_or_else(|| DomError::AnchorMissing(id.to_string()))?;
    viewport.observe(anchor, threshold, Box::new(on_change))
}

/// Like [`observe_anchor`], but a missing anchor or a failing observer only
/// logs a warning and leaves the page without observation.
pub fn observe_anchor_if_present<V, F>(
    viewport: &V,
    id: &str,
    threshold: f64,
    on_change: F,
) -> Option<Subscription>
where
    V: Viewport,
    F: FnMut(bool) + 'static,
{
    match observe_anchor(viewport, id, threshold, on_change) {
        Ok(subscription) => Some(subscription),
        Err(DomError::AnchorMissing(id)) => {
            warn!("Anchor #{} not rendered, skipping observation", id);
            None
        }
        Err(e) => {
            warn!("Failed to observe #{}: {}", id, e);
            None
        }
    }
}

/// Fires `on_escape` whenever the Escape key is pressed.
pub fn listen_escape<F>(mut on_escape: F) -> Result<Subscription, DomError>
where
    F: FnMut() + 'static,
{
    let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            on_escape();
        }
    });
    attach_window_listener(
        "escape key",
        window()?,
        "keydown",
        handler,
        &AddEventListenerOptions::new(),
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory window: a fixed scroll offset, a set of element ids and the
    /// handlers attached to it.
    #[derive(Default)]
    pub struct FakeViewport {
        pub offset: f64,
        pub anchors: Vec<&'static str>,
        pub scroll_handler: Rc<RefCell<Option<Box<dyn FnMut(f64)>>>>,
        pub anchor_handler: Rc<RefCell<Option<Box<dyn FnMut(bool)>>>>,
    }

    impl FakeViewport {
        pub fn scroll_to(&self, offset: f64) {
            if let Some(handler) = self.scroll_handler.borrow_mut().as_mut() {
                handler(offset);
            }
        }

        pub fn set_anchor_visible(&self, visible: bool) {
            if let Some(handler) = self.anchor_handler.borrow_mut().as_mut() {
                handler(visible);
            }
        }
    }

    impl Viewport for FakeViewport {
        type Anchor = &'static str;

        fn scroll_offset(&self) -> Result<f64, DomError> {
            Ok(self.offset)
        }

        fn attach_scroll(&self, handler: Box<dyn FnMut(f64)>) -> Result<Subscription, DomError> {
            *self.scroll_handler.borrow_mut() = Some(handler);
            let slot = self.scroll_handler.clone();
            Ok(Subscription::new("scroll", move || {
                slot.borrow_mut().take();
            }))
        }

        fn anchor(&self, id: &str) -> Option<&'static str> {
            self.anchors.iter().copied().find(|anchor| *anchor == id)
        }

        fn observe(
            &self,
            _anchor: &'static str,
            _threshold: f64,
            handler: Box<dyn FnMut(bool)>,
        ) -> Result<Subscription, DomError> {
            *self.anchor_handler.borrow_mut() = Some(handler);
            let slot = self.anchor_handler.clone();
            Ok(Subscription::new("anchor intersection", move || {
                slot.borrow_mut().take();
            }))
        }
    }

    #[test]
    fn drop_runs_release_once_and_updates_count() {
        let released = Rc::new(Cell::new(0));
        let before = live_subscriptions();

        let subscription = {
            let released = released.clone();
            Subscription::new("test", move || released.set(released.get() + 1))
        };
        assert_eq!(live_subscriptions(), before + 1);
        assert_eq!(released.get(), 0);

        drop(subscription);
        assert_eq!(live_subscriptions(), before);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn options_of_subscriptions_release_on_drop() {
        let before = live_subscriptions();
        let subscriptions: Vec<Option<Subscription>> = vec![
            Some(Subscription::new("a", || ())),
            None,
            Some(Subscription::new("b", || ())),
        ];
        assert_eq!(live_subscriptions(), before + 2);
        drop(subscriptions);
        assert_eq!(live_subscriptions(), before);
    }

    #[test]
    fn scroll_handler_runs_once_before_any_event() {
        let viewport = FakeViewport {
            offset: 640.0,
            ..FakeViewport::default()
        };
        let seen = Rc::new(RefCell::new(Vec::new()));

        let subscription = {
            let seen = seen.clone();
            listen_scroll(&viewport, move |offset| seen.borrow_mut().push(offset))
        }
        .expect("listen");
        assert_eq!(*seen.borrow(), vec![640.0]);

        viewport.scroll_to(10.0);
        assert_eq!(*seen.borrow(), vec![640.0, 10.0]);

        drop(subscription);
        viewport.scroll_to(20.0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn missing_anchor_is_reported_without_subscribing() {
        let viewport = FakeViewport::default();
        let before = live_subscriptions();

        let result = observe_anchor(&viewport, "price", 0.1, |_| ());
        assert!(matches!(result, Err(DomError::AnchorMissing(id)) if id == "price"));
        assert_eq!(live_subscriptions(), before);

        assert!(observe_anchor_if_present(&viewport, "price", 0.1, |_| ()).is_none());
        assert_eq!(live_subscriptions(), before);
        assert!(viewport.anchor_handler.borrow().is_none());
    }

    #[test]
    fn present_anchor_reports_visibility() {
        let viewport = FakeViewport {
            anchors: vec!["price"],
            ..FakeViewport::default()
        };
        let visible = Rc::new(Cell::new(false));

        let subscription = {
            let visible = visible.clone();
            observe_anchor_if_present(&viewport, "price", 0.1, move |v| visible.set(v))
        };
        assert!(subscription.is_some());

        viewport.set_anchor_visible(true);
        assert!(visible.get());
    }

    #[test]
    fn latest_batched_entry_wins() {
        assert_eq!(latest_visibility([false, true].into_iter()), Some(true));
        assert_eq!(latest_visibility([true, false].into_iter()), Some(false));
        assert_eq!(latest_visibility(std::iter::empty()), None);
    }
}
