//! One-shot entrance animation for page sections.
//!
//! A section starts visible if it is already on screen when mounted. Otherwise
//! it is hidden and revealed the first time it intersects the viewport, after
//! which the watch is dropped and the section never hides again.

use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn overlaps_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchControl {
    Continue,
    Detach,
}

pub type IntersectionCallback = Box<dyn FnMut(bool) -> WatchControl>;

/// Whatever renders the section: reports geometry and delivers
/// intersection changes. Dropping a watch stops delivery.
pub trait IntersectionHost {
    type Watch;

    fn bounds(&self) -> Bounds;
    fn viewport_height(&self) -> f64;
    fn watch(&self, threshold: f64, on_change: IntersectionCallback) -> Option<Self::Watch>;
}

pub enum Attachment<W> {
    AlreadyVisible,
    Watching(W),
    /// The host could not watch; the section was revealed right away.
    Unwatchable,
}

/// Latch that flips to revealed on the first intersection and stays there.
#[derive(Debug, Default)]
struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Returns true only on the hidden-to-revealed transition.
    fn trip(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

pub fn attach<H: IntersectionHost>(
    host: &H,
    threshold: f64,
    set_revealed: Rc<dyn Fn(bool)>,
) -> Attachment<H::Watch> {
    if host.bounds().overlaps_viewport(host.viewport_height()) {
        set_revealed(true);
        return Attachment::AlreadyVisible;
    }

    set_revealed(false);
    let mut latch = RevealLatch::default();
    let on_reveal = set_revealed.clone();
    let on_change: IntersectionCallback = Box::new(move |intersecting| {
        if latch.trip(intersecting) {
            on_reveal(true);
        }
        if latch.revealed {
            WatchControl::Detach
        } else {
            WatchControl::Continue
        }
    });

    match host.watch(threshold, on_change) {
        Some(watch) => Attachment::Watching(watch),
        None => {
            warn!("Intersection watch unavailable, revealing section immediately");
            set_revealed(true);
            Attachment::Unwatchable
        }
    }
}

struct DomHost {
    element: Element,
}

/// Live `IntersectionObserver`; disconnects when dropped.
pub struct DomWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for DomWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl IntersectionHost for DomHost {
    type Watch = DomWatch;

    fn bounds(&self) -> Bounds {
        let rect = self.element.get_bounding_client_rect();
        Bounds {
            top: rect.top(),
            bottom: rect.bottom(),
        }
    }

    fn viewport_height(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn watch(&self, threshold: f64, mut on_change: IntersectionCallback) -> Option<DomWatch> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = match entry.dyn_into() {
                        Ok(entry) => entry,
                        Err(_) => continue,
                    };
                    if on_change(entry.is_intersecting()) == WatchControl::Detach {
                        observer.unobserve(&entry.target());
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| warn!("IntersectionObserver unavailable: {:?}", e))
            .ok()?;
        observer.observe(&self.element);

        Some(DomWatch {
            observer,
            _callback: callback,
        })
    }
}

/// Returns the ref to put on the section root and whether it is revealed.
#[hook]
pub fn use_viewport_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    // Visible until measured so pre-rendered content never flashes hidden.
    let revealed = use_state(|| true);

    {
        let node = node.clone();
        let setter = revealed.setter();
        use_effect_with_deps(
            move |threshold| {
                let attachment = node.cast::<Element>().map(|element| {
                    let set_revealed: Rc<dyn Fn(bool)> = Rc::new(move |value| setter.set(value));
                    attach(&DomHost { element }, *threshold, set_revealed)
                });
                move || drop(attachment)
            },
            threshold,
        );
    }

    (node, *revealed)
}

#[hook]
pub fn use_section_reveal() -> (NodeRef, bool) {
    use_viewport_reveal(config::REVEAL_THRESHOLD)
}

/// CSS classes for a block that fades and slides in.
pub fn reveal_classes(revealed: bool) -> Classes {
    classes!("reveal", revealed.then(|| "revealed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Registry {
        registrations: Cell<usize>,
        threshold: Cell<f64>,
        callback: RefCell<Option<IntersectionCallback>>,
    }

    struct FakeHost {
        bounds: Bounds,
        viewport_height: f64,
        supports_watch: bool,
        registry: Rc<Registry>,
    }

    struct FakeWatch {
        registry: Rc<Registry>,
    }

    impl Drop for FakeWatch {
        fn drop(&mut self) {
            self.registry.callback.borrow_mut().take();
        }
    }

    impl FakeHost {
        fn at(top: f64, bottom: f64) -> Self {
            Self {
                bounds: Bounds { top, bottom },
                viewport_height: 800.0,
                supports_watch: true,
                registry: Rc::new(Registry::default()),
            }
        }

        /// Delivers one intersection change; returns false once detached.
        fn fire(&self, intersecting: bool) -> bool {
            let mut slot = self.registry.callback.borrow_mut();
            let detach = match slot.as_mut() {
                Some(callback) => callback(intersecting) == WatchControl::Detach,
                None => return false,
            };
            if detach {
                slot.take();
            }
            true
        }
    }

    impl IntersectionHost for FakeHost {
        type Watch = FakeWatch;

        fn bounds(&self) -> Bounds {
            self.bounds
        }

        fn viewport_height(&self) -> f64 {
            self.viewport_height
        }

        fn watch(&self, threshold: f64, on_change: IntersectionCallback) -> Option<FakeWatch> {
            if !self.supports_watch {
                return None;
            }
            self.registry.registrations.set(self.registry.registrations.get() + 1);
            self.registry.threshold.set(threshold);
            *self.registry.callback.borrow_mut() = Some(on_change);
            Some(FakeWatch {
                registry: self.registry.clone(),
            })
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, Rc<dyn Fn(bool)>) {
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = states.clone();
        (states, Rc::new(move |value| sink.borrow_mut().push(value)))
    }

    #[test]
    fn on_screen_section_reveals_without_watching() {
        let host = FakeHost::at(100.0, 500.0);
        let (states, set) = recorder();

        let attachment = attach(&host, 0.15, set);

        assert!(matches!(attachment, Attachment::AlreadyVisible));
        assert_eq!(*states.borrow(), vec![true]);
        assert_eq!(host.registry.registrations.get(), 0);
    }

    #[test]
    fn off_screen_section_hides_until_first_intersection() {
        let host = FakeHost::at(1200.0, 1600.0);
        let (states, set) = recorder();

        let _attachment = attach(&host, 0.15, set);
        assert_eq!(*states.borrow(), vec![false]);
        assert_eq!(host.registry.registrations.get(), 1);
        assert_eq!(host.registry.threshold.get(), 0.15);

        assert!(host.fire(false));
        assert_eq!(*states.borrow(), vec![false]);

        assert!(host.fire(true));
        assert_eq!(*states.borrow(), vec![false, true]);

        // Detached after revealing; later changes are never delivered.
        assert!(!host.fire(false));
        assert!(!host.fire(true));
        assert_eq!(*states.borrow(), vec![false, true]);
    }

    #[test]
    fn section_above_viewport_is_watched() {
        let host = FakeHost::at(-900.0, -10.0);
        let (states, set) = recorder();
        let attachment = attach(&host, 0.15, set);
        assert!(matches!(attachment, Attachment::Watching(_)));
        assert_eq!(*states.borrow(), vec![false]);
    }

    #[test]
    fn dropping_the_attachment_releases_the_watch() {
        let host = FakeHost::at(1200.0, 1600.0);
        let (states, set) = recorder();

        let attachment = attach(&host, 0.15, set);
        drop(attachment);

        assert!(!host.fire(true));
        assert_eq!(*states.borrow(), vec![false]);
    }

    #[test]
    fn latch_ignores_repeat_intersections() {
        let mut latch = RevealLatch::default();
        assert!(!latch.trip(false));
        assert!(latch.trip(true));
        assert!(!latch.trip(true));
        assert!(!latch.trip(false));
        assert!(latch.revealed);
    }

    #[test]
    fn unwatchable_host_reveals_immediately() {
        let mut host = FakeHost::at(1200.0, 1600.0);
        host.supports_watch = false;
        let (states, set) = recorder();

        let attachment = attach(&host, 0.15, set);

        assert!(matches!(attachment, Attachment::Unwatchable));
        assert_eq!(*states.borrow(), vec![false, true]);
    }

    #[test]
    fn viewport_overlap_is_strict_at_both_edges() {
        assert!(!Bounds { top: 800.0, bottom: 1000.0 }.overlaps_viewport(800.0));
        assert!(!Bounds { top: -200.0, bottom: 0.0 }.overlaps_viewport(800.0));
        assert!(Bounds { top: 799.0, bottom: 1000.0 }.overlaps_viewport(800.0));
        assert!(Bounds { top: -200.0, bottom: 1.0 }.overlaps_viewport(800.0));
    }
}
