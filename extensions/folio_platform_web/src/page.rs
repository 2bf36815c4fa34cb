//! Mounted page
//!
//! Owns the application, the DOM host and renderer, and every listener and
//! observer feeding them. State lives in an `Rc<RefCell<_>>`; callbacks
//! hold a `Weak` so dropping the page detaches everything.

use crate::dom::{position_of, query_all, WebDock};
use crate::frame::RafScheduler;
use crate::input::{convert_click, convert_key, convert_pointer, convert_visibility};
use crate::markup;
use crate::renderer::DomRenderer;
use crate::storage::LocalStore;
use folio_app::{AppConfig, FolioApp};
use folio_platform::{
    Event, FocusEvent, InputEvent, ObserverKind, PlatformError, Result, ViewportEvent,
};
use gloo::events::EventListener;
use js_sys::Array;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An intersection observer and the callback it calls
struct Observer {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// The enhanced portfolio page
pub struct WebPage {
    app: FolioApp<LocalStore>,
    dock: WebDock,
    renderer: DomRenderer,
    listeners: Vec<EventListener>,
    observers: Vec<Observer>,
}

impl WebPage {
    /// Attach to the current document
    pub fn mount(config: AppConfig) -> Result<Rc<RefCell<Self>>> {
        let window = web_sys::window()
            .ok_or_else(|| PlatformError::InitFailed("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PlatformError::InitFailed("no document".to_string()))?;

        let store = LocalStore::open(&window);
        let renderer = DomRenderer::query(&document, &config.page);
        let links = renderer.link_hrefs();
        let reveal_targets = renderer.reveal_targets().len();

        let page = Rc::new_cyclic(|weak: &Weak<RefCell<Self>>| {
            let dock = WebDock::query(&window, &document, RafScheduler::new(weak.clone()));
            let app = FolioApp::new(config, store)
                .with_links(links)
                .with_reveal_targets(reveal_targets);
            RefCell::new(Self {
                app,
                dock,
                renderer,
                listeners: Vec::new(),
                observers: Vec::new(),
            })
        });

        {
            let mut guard = page.borrow_mut();
            let this = &mut *guard;
            this.app.start(&mut this.dock, &mut this.renderer);
        }

        let listeners = install_listeners(&page, &window, &document);
        let observers = install_observers(&page, &document)?;
        {
            let mut this = page.borrow_mut();
            tracing::info!(
                "WebPage: mounted with {} listeners and {} observers",
                listeners.len(),
                observers.len()
            );
            this.listeners = listeners;
            this.observers = observers;
        }
        Ok(page)
    }

    /// Run `f` on a mounted page
    ///
    /// Returns None if the page is gone or already borrowed.
    pub fn with<R>(page: &Weak<RefCell<Self>>, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        let page = page.upgrade()?;
        let Ok(mut this) = page.try_borrow_mut() else {
            tracing::warn!("WebPage: re-entrant callback dropped");
            return None;
        };
        Some(f(&mut this))
    }

    /// Deliver an event to a mounted page
    pub fn dispatch(page: &Weak<RefCell<Self>>, event: Event) -> bool {
        Self::with(page, |this| this.handle_event(&event)).unwrap_or(false)
    }

    pub fn handle_event(&mut self, event: &Event) -> bool {
        if let Event::Frame(handle) = event {
            self.dock.frames_mut().fired(*handle);
        }
        let Self {
            app, dock, renderer, ..
        } = self;
        app.handle_event(dock, renderer, event)
    }

    pub fn app(&self) -> &FolioApp<LocalStore> {
        &self.app
    }
}

/// Element an event was dispatched to
fn target_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn install_listeners(
    page: &Rc<RefCell<WebPage>>,
    window: &Window,
    document: &Document,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let container = page.borrow().dock.container().cloned();
    if let Some(container) = container {
        for event_type in ["pointerenter", "pointermove", "pointerleave"] {
            let weak = Rc::downgrade(page);
            listeners.push(EventListener::new(&container, event_type, move |event| {
                let Some(pointer) = event.dyn_ref::<web_sys::PointerEvent>() else {
                    return;
                };
                WebPage::with(&weak, |this| {
                    let item = target_element(event)
                        .and_then(|target| this.dock.item_containing(&target));
                    let converted = convert_pointer(
                        event_type,
                        f64::from(pointer.client_x()),
                        f64::from(pointer.client_y()),
                        &pointer.pointer_type(),
                        item,
                    );
                    if let Some(converted) = converted {
                        this.handle_event(&Event::Input(InputEvent::Pointer(converted)));
                    }
                });
            }));
        }

        let weak = Rc::downgrade(page);
        listeners.push(EventListener::new(&container, "focusin", move |event| {
            WebPage::with(&weak, |this| {
                let item = target_element(event).and_then(|target| this.dock.item_index(&target));
                this.handle_event(&Event::Input(InputEvent::Focus(FocusEvent::In { item })))
            });
        }));

        let weak = Rc::downgrade(page);
        listeners.push(EventListener::new(&container, "focusout", move |_event| {
            WebPage::dispatch(&weak, Event::Input(InputEvent::Focus(FocusEvent::Out)));
        }));
    }

    let weak = Rc::downgrade(page);
    let resized = window.clone();
    listeners.push(EventListener::new(window, "resize", move |_event| {
        let size = |value: std::result::Result<JsValue, JsValue>| {
            value.ok().and_then(|value| value.as_f64()).unwrap_or(0.0) as f32
        };
        let event = ViewportEvent::Resized {
            width: size(resized.inner_width()),
            height: size(resized.inner_height()),
        };
        WebPage::dispatch(&weak, Event::Viewport(event));
    }));

    let weak = Rc::downgrade(page);
    let scrolled = window.clone();
    listeners.push(EventListener::new(window, "scroll", move |_event| {
        let scroll_y = scrolled.scroll_y().unwrap_or(0.0) as f32;
        WebPage::dispatch(&weak, Event::Viewport(ViewportEvent::Scrolled { scroll_y }));
    }));

    let weak = Rc::downgrade(page);
    listeners.push(EventListener::new(document, "click", move |event| {
        let Some(target) = target_element(event) else {
            return;
        };
        let link = target.closest("a[href]").ok().flatten();
        let click = match link {
            Some(link) => convert_click(None, link.get_attribute("href")),
            None => target
                .closest("[id]")
                .ok()
                .flatten()
                .and_then(|element| convert_click(Some(element.id()), None)),
        };
        if let Some(click) = click {
            WebPage::dispatch(&weak, Event::Input(InputEvent::Click(click)));
        }
    }));

    let weak = Rc::downgrade(page);
    listeners.push(EventListener::new(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            let converted = convert_key(&key.key());
            WebPage::dispatch(&weak, Event::Input(InputEvent::Keyboard(converted)));
        }
    }));

    listeners
}

fn install_observers(page: &Rc<RefCell<WebPage>>, document: &Document) -> Result<Vec<Observer>> {
    let (reveal_targets, settings) = {
        let this = page.borrow();
        (
            this.renderer.reveal_targets().to_vec(),
            this.app.page().settings().clone(),
        )
    };

    let reveal_init = IntersectionObserverInit::new();
    reveal_init.set_threshold(&JsValue::from_f64(f64::from(settings.reveal_threshold)));
    let reveal = observe(page, ObserverKind::Reveal, reveal_targets, &reveal_init)?;
    page.borrow_mut()
        .renderer
        .set_reveal_observer(reveal.observer.clone());

    let section_init = IntersectionObserverInit::new();
    section_init.set_threshold(&JsValue::from_f64(f64::from(settings.section_threshold)));
    section_init.set_root_margin(&settings.section_root_margin);
    let sections = query_all::<Element>(document, markup::SECTIONS);
    let section = observe(page, ObserverKind::Section, sections, &section_init)?;

    Ok(vec![reveal, section])
}

/// Observe `targets`, reporting entries as visibility events
fn observe(
    page: &Rc<RefCell<WebPage>>,
    kind: ObserverKind,
    targets: Vec<Element>,
    init: &IntersectionObserverInit,
) -> Result<Observer> {
    let weak = Rc::downgrade(page);
    let watched = targets.clone();
    let callback: ObserverCallback = Closure::new(move |entries: Array, _observer| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = position_of(&watched, &target) else {
                continue;
            };
            let event = convert_visibility(
                kind,
                index,
                Some(target.id()),
                entry.is_intersecting(),
                entry.intersection_ratio(),
            );
            WebPage::dispatch(&weak, Event::Visibility(event));
        }
    });

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)
        .map_err(|err| PlatformError::Subscription(format!("{kind:?} observer: {err:?}")))?;
    for target in &targets {
        observer.observe(target);
    }
    tracing::debug!("WebPage: {:?} observer watching {} elements", kind, targets.len());

    Ok(Observer {
        observer,
        _callback: callback,
    })
}
