//! Page collaborator scenarios

use crate::harness::Setup;
use crate::runner::TestSuite;
use folio_core::{MemoryStore, PreferenceStore};
use folio_page::ColorScheme;
use folio_platform::prelude::*;

fn visibility(observer: ObserverKind, index: usize, id: Option<&str>, ratio: f32) -> Event {
    Event::Visibility(VisibilityEvent {
        observer,
        index,
        id: id.map(str::to_string),
        intersecting: ratio > 0.0,
        ratio,
    })
}

pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("page");

    suite.add("defaults_dark_spanish", |ctx| {
        let renderer = ctx.renderer.clone();
        ctx.check_eq(renderer.scheme(), ColorScheme::Dark, "scheme");
        ctx.check_eq(renderer.language(), Some("es"), "document language");
        ctx.check_eq(renderer.aria_label("dock.home"), Some("Inicio"), "aria label");
        ctx.check_eq(renderer.title(), Some("Tu Nombre — Portafolio"), "title");
    });

    suite.add("theme_toggle_persists", |ctx| {
        ctx.click_id("dock-theme");
        ctx.check_eq(ctx.renderer.scheme(), ColorScheme::Light, "scheme after toggle");
        let stored = ctx.app.page().store().get("theme");
        ctx.check_eq(stored.as_deref(), Some("light"), "stored theme");

        ctx.click_id("dock-theme");
        let stored = ctx.app.page().store().get("theme");
        ctx.check_eq(stored.as_deref(), Some("dark"), "stored theme after second toggle");
    });

    suite.add("language_toggle_translates", |ctx| {
        ctx.click_id("dock-lang");
        let renderer = ctx.renderer.clone();
        ctx.check_eq(renderer.language(), Some("en"), "document language");
        ctx.check_eq(renderer.text("projects.title"), Some("Projects"), "text");
        ctx.check_eq(renderer.aria_label("dock.theme"), Some("Toggle theme"), "aria label");
        ctx.check_eq(
            renderer.meta_description(),
            Some("Portfolio of a UI/UX designer and frontend developer."),
            "meta description",
        );
        let stored = ctx.app.page().store().get("lang");
        ctx.check_eq(stored.as_deref(), Some("en"), "stored language");
    });

    suite.add_with(
        "stored_preferences_applied",
        Setup::with_store(MemoryStore::with_values([("theme", "light"), ("lang", "en")])),
        |ctx| {
            let renderer = ctx.renderer.clone();
            ctx.check_eq(renderer.scheme(), ColorScheme::Light, "scheme");
            ctx.check_eq(renderer.text("footer.title"), Some("Shall we work together?"), "text");
        },
    );

    suite.add_with(
        "unknown_stored_values_fall_back",
        Setup::with_store(MemoryStore::with_values([("theme", "sepia"), ("lang", "fr")])),
        |ctx| {
            ctx.check_eq(ctx.renderer.scheme(), ColorScheme::Dark, "scheme");
            let language = ctx.renderer.language().map(str::to_string);
            ctx.check_eq(language.as_deref(), Some("es"), "document language");
        },
    );

    suite.add("reveal_once_above_threshold", |ctx| {
        ctx.send(visibility(ObserverKind::Reveal, 0, None, 0.1));
        ctx.check(ctx.renderer.revealed().is_empty(), "nothing revealed below threshold");

        ctx.send(visibility(ObserverKind::Reveal, 0, None, 0.5));
        ctx.send(visibility(ObserverKind::Reveal, 0, None, 0.9));
        ctx.send(visibility(ObserverKind::Reveal, 2, None, 0.18));
        ctx.check_eq(ctx.renderer.revealed().to_vec(), vec![0, 2], "revealed in order, once each");
        ctx.check_eq(ctx.app.page().reveal().pending(), 2, "still watched");
    });

    suite.add("active_link_follows_clicks_and_sections", |ctx| {
        ctx.click_link("#code");
        ctx.check_eq(ctx.renderer.active_link(), Some(3), "after click");

        ctx.send(visibility(ObserverKind::Section, 1, Some("profile"), 0.4));
        ctx.check_eq(ctx.renderer.active_link(), Some(1), "after section");

        ctx.send(visibility(ObserverKind::Section, 7, Some("contact"), 0.4));
        ctx.check_eq(ctx.renderer.active_link(), Some(1), "unknown section");
    });

    suite.add("sound_toggle", |ctx| {
        ctx.click_id("dock-sound");
        ctx.check(ctx.renderer.is_muted(), "muted");
        ctx.click_id("dock-sound");
        ctx.check(!ctx.renderer.is_muted(), "unmuted");
    });

    suite.add("drawer_closes_on_escape_and_links", |ctx| {
        ctx.click_id("menu-toggle");
        ctx.check(ctx.renderer.is_drawer_open(), "open after toggle");
        ctx.send(Event::Input(InputEvent::Keyboard(KeyboardEvent { key: Key::Escape })));
        ctx.check(!ctx.renderer.is_drawer_open(), "closed by Escape");

        ctx.click_id("menu-toggle");
        ctx.click_link("#articles");
        ctx.check(!ctx.renderer.is_drawer_open(), "closed by a link");
        ctx.check_eq(ctx.renderer.active_link(), Some(2), "link activated");
    });

    suite.add("page_events_leave_dock_alone", |ctx| {
        let line = ctx.center_line();
        ctx.pointer_enter(120.0, line);
        ctx.tick();
        ctx.click_id("dock-theme");
        ctx.click_id("dock-lang");
        ctx.tick();
        ctx.check(ctx.dock().is_active(), "wave still active");
        ctx.check_eq(ctx.dock().hot_item(), Some(1), "hot item unchanged");
    });

    suite
}
