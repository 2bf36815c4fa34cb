//! End-to-end behaviour of the page application over headless hosts.

use folio_app::prelude::*;
use folio_core::{MemoryStore, PreferenceStore};
use folio_dock::HeadlessDock;
use folio_page::{ColorScheme, Language, RecordingPageRenderer};

const CENTERS: [f32; 5] = [40.0, 120.0, 200.0, 280.0, 360.0];
const LINKS: [&str; 5] = ["#home", "#profile", "#articles", "#code", "#layers"];

struct Page {
    host: HeadlessDock,
    renderer: RecordingPageRenderer,
    app: FolioApp<MemoryStore>,
}

impl Page {
    fn new(store: MemoryStore) -> Self {
        Self::with_host(HeadlessDock::with_centers(&CENTERS), store)
    }

    fn with_host(mut host: HeadlessDock, store: MemoryStore) -> Self {
        let mut renderer = RecordingPageRenderer::with_keys(["hero.title"], ["dock.home"]);
        let mut app = FolioApp::new(AppConfig::default(), store)
            .with_links(LINKS)
            .with_reveal_targets(4);
        app.start(&mut host, &mut renderer);
        Self {
            host,
            renderer,
            app,
        }
    }

    fn send(&mut self, event: Event) -> bool {
        self.app
            .handle_event(&mut self.host, &mut self.renderer, &event)
    }

    /// Deliver due frames through the application, as a backend would
    fn tick(&mut self) -> usize {
        let due = self.host.take_due_frames();
        due.into_iter()
            .filter(|&handle| self.send(Event::Frame(handle)))
            .count()
    }

    fn pointer(&mut self, event: PointerEvent) -> bool {
        self.send(Event::Input(InputEvent::Pointer(event)))
    }
}

#[test]
fn pointer_wave_and_page_toggles_are_independent() {
    let mut page = Page::new(MemoryStore::new());
    let line = page.host.center_line();

    page.pointer(PointerEvent::Entered {
        x: 200.0,
        y: line,
        kind: PointerKind::Mouse,
    });
    page.tick();
    assert_eq!(page.app.dock().hot_item(), Some(2));

    // Toggling theme and language mid-wave leaves the dock alone
    page.send(Event::Input(InputEvent::Click(ClickEvent::on_id("dock-theme"))));
    page.send(Event::Input(InputEvent::Click(ClickEvent::on_id("dock-lang"))));
    assert!(page.app.dock().is_active());
    assert_eq!(page.renderer.scheme(), ColorScheme::Light);
    assert_eq!(page.app.page().language(), Language::En);
    assert_eq!(page.renderer.aria_label("dock.home"), Some("Home"));

    page.tick();
    assert_eq!(page.app.dock().hot_item(), Some(2));
}

#[test]
fn leaving_the_dock_stops_all_frames() {
    let mut page = Page::new(MemoryStore::new());
    let line = page.host.center_line();
    page.pointer(PointerEvent::Entered {
        x: 120.0,
        y: line,
        kind: PointerKind::Mouse,
    });
    for _ in 0..5 {
        assert_eq!(page.tick(), 1);
    }

    page.pointer(PointerEvent::Left);
    assert_eq!(page.tick(), 0);
    assert!(page.host.items().all(|item| item.is_rest()));
    assert!(page.host.hot_items().is_empty());
}

#[test]
fn frame_events_route_through_the_app() {
    let mut page = Page::new(MemoryStore::new());
    let line = page.host.center_line();
    page.pointer(PointerEvent::Entered {
        x: 280.0,
        y: line,
        kind: PointerKind::Mouse,
    });

    let handle = page.app.dock().pending_frame().unwrap();
    assert!(page.host.frames().is_pending(handle));
    // A backend delivers the fired frame as an event
    assert!(page.send(Event::Frame(handle)));
    assert_eq!(page.app.dock().hot_item(), Some(3));

    // Delivering the same handle twice does nothing
    assert!(!page.send(Event::Frame(handle)));
}

#[test]
fn preferences_survive_a_reload() {
    let mut page = Page::new(MemoryStore::new());
    page.send(Event::Input(InputEvent::Click(ClickEvent::on_id("dock-theme"))));
    page.send(Event::Input(InputEvent::Click(ClickEvent::on_id("dock-lang"))));

    let store = page.app.page().store().clone();
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(store.get("lang").as_deref(), Some("en"));

    let reloaded = Page::new(store);
    assert_eq!(reloaded.renderer.scheme(), ColorScheme::Light);
    assert_eq!(reloaded.renderer.language(), Some("en"));
    assert_eq!(
        reloaded.renderer.text("hero.title"),
        Some("I build clear, fast digital experiences focused on business impact.")
    );
}

#[test]
fn reduced_motion_page_still_handles_page_events() {
    let mut host = HeadlessDock::with_centers(&CENTERS);
    host.set_reduced_motion(true);
    let mut page = Page::with_host(host, MemoryStore::new());
    let line = page.host.center_line();

    assert!(!page.pointer(PointerEvent::Entered {
        x: 200.0,
        y: line,
        kind: PointerKind::Mouse,
    }));
    assert_eq!(page.host.pending_frames(), 0);

    assert!(page.send(Event::Input(InputEvent::Click(ClickEvent::on_link("#code")))));
    assert_eq!(page.renderer.active_link(), Some(3));
}

#[test]
fn sections_and_reveals_flow_to_the_page() {
    let mut page = Page::new(MemoryStore::new());

    assert!(page.send(Event::Visibility(VisibilityEvent {
        observer: ObserverKind::Section,
        index: 2,
        id: Some("articles".to_string()),
        intersecting: true,
        ratio: 0.3,
    })));
    assert_eq!(page.renderer.active_link(), Some(2));

    assert!(page.send(Event::Visibility(VisibilityEvent {
        observer: ObserverKind::Reveal,
        index: 1,
        id: None,
        intersecting: true,
        ratio: 0.2,
    })));
    assert_eq!(page.renderer.revealed(), &[1]);
    assert_eq!(page.app.event_count(), 2);
}

#[test]
fn viewport_changes_refresh_dock_geometry() {
    let mut page = Page::new(MemoryStore::new());
    page.host.move_layout(0.0, -120.0);
    assert!(page.send(Event::Viewport(ViewportEvent::Scrolled { scroll_y: 120.0 })));

    let line = page.host.center_line();
    page.pointer(PointerEvent::Entered {
        x: 40.0,
        y: line,
        kind: PointerKind::Mouse,
    });
    page.tick();
    assert_eq!(page.app.dock().hot_item(), Some(0));
    assert_eq!(page.host.item(0).lift, "20.00px");
}
