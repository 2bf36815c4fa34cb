//! Scenario harness
//!
//! Builds a headless page (dock host, page renderer, preference store and
//! the application) for each scenario, and collects check failures instead
//! of aborting on the first one.

use folio_app::{AppConfig, FolioApp};
use folio_core::MemoryStore;
use folio_dock::{DockEngine, HeadlessDock};
use folio_page::RecordingPageRenderer;
use folio_platform::prelude::*;
use std::panic::{self, AssertUnwindSafe};

/// Result of a scenario
#[derive(Debug)]
pub enum TestResult {
    /// Every check held
    Passed,
    /// At least one check failed
    Failed { failures: Vec<String> },
    /// Scenario was not run
    Skipped { reason: String },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestResult::Passed | TestResult::Skipped { .. })
    }
}

/// Dock links of the portfolio page
pub const LINKS: [&str; 5] = ["#home", "#profile", "#articles", "#code", "#layers"];

/// Initial state of a scenario's page
#[derive(Clone, Debug)]
pub struct Setup {
    /// Item centers; None builds a page without a dock
    pub centers: Option<Vec<f32>>,
    pub reduced_motion: bool,
    pub store: MemoryStore,
    pub config: AppConfig,
    pub reveal_targets: usize,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            centers: Some(vec![40.0, 120.0, 200.0, 280.0, 360.0]),
            reduced_motion: false,
            store: MemoryStore::new(),
            config: AppConfig::default(),
            reveal_targets: 4,
        }
    }
}

impl Setup {
    pub fn reduced_motion() -> Self {
        Self {
            reduced_motion: true,
            ..Self::default()
        }
    }

    pub fn without_dock() -> Self {
        Self {
            centers: None,
            ..Self::default()
        }
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }
}

/// Context for a single scenario
pub struct TestContext {
    /// Headless dock host
    pub host: HeadlessDock,
    /// Recording page renderer
    pub renderer: RecordingPageRenderer,
    /// The application under test
    pub app: FolioApp<MemoryStore>,
    /// Scenario name
    pub name: String,
    failures: Vec<String>,
}

impl TestContext {
    /// Build and start the page described by `setup`
    pub fn new(name: &str, setup: Setup) -> Self {
        let mut host = match &setup.centers {
            Some(centers) => HeadlessDock::with_centers(centers),
            None => HeadlessDock::without_container(),
        };
        host.set_reduced_motion(setup.reduced_motion);

        let mut renderer = RecordingPageRenderer::with_keys(
            ["hero.title", "projects.title", "footer.title"],
            ["dock.home", "dock.theme", "dock.language"],
        );
        let mut app = FolioApp::new(setup.config, setup.store)
            .with_links(LINKS)
            .with_reveal_targets(setup.reveal_targets);
        app.start(&mut host, &mut renderer);

        Self {
            host,
            renderer,
            app,
            name: name.to_string(),
            failures: Vec::new(),
        }
    }

    pub fn dock(&self) -> &DockEngine {
        self.app.dock()
    }

    /// Y coordinate of the dock's center line
    pub fn center_line(&self) -> f32 {
        self.host.center_line()
    }

    /// Send an event through the application
    pub fn send(&mut self, event: Event) -> bool {
        self.app.handle_event(&mut self.host, &mut self.renderer, &event)
    }

    pub fn pointer_enter(&mut self, x: f32, y: f32) -> bool {
        self.pointer_enter_with(x, y, PointerKind::Mouse)
    }

    pub fn pointer_enter_with(&mut self, x: f32, y: f32, kind: PointerKind) -> bool {
        self.send(Event::Input(InputEvent::Pointer(PointerEvent::Entered { x, y, kind })))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, item: Option<usize>) -> bool {
        self.send(Event::Input(InputEvent::Pointer(PointerEvent::Moved {
            x,
            y,
            kind: PointerKind::Mouse,
            item,
        })))
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.send(Event::Input(InputEvent::Pointer(PointerEvent::Left)))
    }

    pub fn focus_in(&mut self, item: usize) -> bool {
        self.send(Event::Input(InputEvent::Focus(FocusEvent::In { item: Some(item) })))
    }

    pub fn focus_out(&mut self) -> bool {
        self.send(Event::Input(InputEvent::Focus(FocusEvent::Out)))
    }

    pub fn click_id(&mut self, id: &str) -> bool {
        self.send(Event::Input(InputEvent::Click(ClickEvent::on_id(id))))
    }

    pub fn click_link(&mut self, href: &str) -> bool {
        self.send(Event::Input(InputEvent::Click(ClickEvent::on_link(href))))
    }

    /// Deliver every due frame as a frame event; returns how many ran
    pub fn tick(&mut self) -> usize {
        let due = self.host.take_due_frames();
        due.into_iter()
            .filter(|&handle| self.send(Event::Frame(handle)))
            .count()
    }

    /// Run `count` ticks; returns the total frames run
    pub fn ticks(&mut self, count: usize) -> usize {
        (0..count).map(|_| self.tick()).sum()
    }

    /// Record a failure unless `condition` holds
    pub fn check(&mut self, condition: bool, message: impl Into<String>) {
        if !condition {
            let message = message.into();
            tracing::debug!("{}: check failed: {}", self.name, message);
            self.failures.push(message);
        }
    }

    /// Record a failure unless `actual == expected`
    pub fn check_eq<T: PartialEq + std::fmt::Debug>(&mut self, actual: T, expected: T, what: &str) {
        if actual != expected {
            self.check(false, format!("{what}: expected {expected:?}, got {actual:?}"));
        }
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Runs scenarios in isolated contexts
#[derive(Debug, Default)]
pub struct TestHarness {
    runs: usize,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scenarios run so far
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Run one scenario
    ///
    /// A panic inside the scenario counts as a failure.
    pub fn run_test<F>(&mut self, name: &str, setup: Setup, test_fn: F) -> TestResult
    where
        F: FnOnce(&mut TestContext),
    {
        self.runs += 1;
        let mut ctx = TestContext::new(name, setup);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| test_fn(&mut ctx)));

        let mut failures = ctx.failures;
        if let Err(payload) = outcome {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "scenario panicked".to_string());
            failures.push(format!("panic: {message}"));
        }

        if failures.is_empty() {
            TestResult::Passed
        } else {
            TestResult::Failed { failures }
        }
    }
}
