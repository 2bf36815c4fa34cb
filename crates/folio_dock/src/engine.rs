//! Dock engine
//!
//! Owns every piece of dock state for one page: the geometry cache, the
//! wave (styles and hot item), the animation driver and the tooltip. Host
//! capabilities are borrowed per call, so a single engine can be driven by
//! the browser backend or by [`crate::HeadlessDock`] in tests.
//!
//! # Lifecycle
//!
//! ```text
//!            pointer enter/move (mouse), focus in on item
//!   Idle ───────────────────────────────────────────────▶ Active
//!    ▲                                                      │ frame: ease,
//!    │   pointer leave, focus out (nothing focused inside)  │ apply wave,
//!    └──────────────────────────────────────────────────────┘ request next
//! ```
//!
//! An engine attached to a page that prefers reduced motion, or that has no
//! dock container, stays disabled: the wave is reset once and every later
//! event is ignored.

use crate::config::DockConfig;
use crate::driver::AnimationDriver;
use crate::geometry::GeometryCache;
use crate::host::{DockHost, DockRenderer, DockSurface};
use crate::influence::InfluenceField;
use crate::tooltip::{TooltipCommand, TooltipPositioner};
use crate::wave::{ItemStyle, WaveApplier};
use folio_core::Point;
use folio_platform::{
    Event, FocusEvent, FrameHandle, InputEvent, PointerEvent, ViewportEvent,
};

/// The dock magnifier
#[derive(Debug)]
pub struct DockEngine {
    config: DockConfig,
    geometry: GeometryCache,
    wave: WaveApplier,
    driver: AnimationDriver,
    tooltip: TooltipPositioner,
    enabled: bool,
}

impl DockEngine {
    /// Create an engine
    ///
    /// `config` must pass [`DockConfig::validate`]; configs parsed from TOML
    /// always do.
    pub fn new(config: DockConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid dock config: {config:?}");
        let driver = AnimationDriver::new(config.pursuit());
        Self {
            config,
            geometry: GeometryCache::new(),
            wave: WaveApplier::new(),
            driver,
            tooltip: TooltipPositioner::new(),
            enabled: true,
        }
    }

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    /// Whether the engine reacts to events
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the wave is animating
    pub fn is_active(&self) -> bool {
        self.driver.is_active()
    }

    pub fn hot_item(&self) -> Option<usize> {
        self.wave.hot()
    }

    /// Frame request currently in flight
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.driver.pending()
    }

    /// Eased pointer position
    pub fn pointer(&self) -> Point {
        self.driver.pointer()
    }

    /// Styles written by the last frame or reset
    pub fn styles(&self) -> &[ItemStyle] {
        self.wave.styles()
    }

    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip.is_visible()
    }

    /// Bind the engine to a page
    ///
    /// Reads the initial geometry, or disables the engine (resetting the
    /// wave and hiding the tooltip once) if the page prefers reduced motion
    /// or has no dock container.
    pub fn attach<H: DockHost + ?Sized>(&mut self, host: &mut H) {
        if host.prefers_reduced_motion() || host.container_rect().is_none() {
            if host.prefers_reduced_motion() {
                tracing::debug!("DockEngine: reduced motion requested, wave disabled");
            } else {
                tracing::warn!("DockEngine: no dock container, wave disabled");
            }
            self.enabled = false;
            self.driver.stop(host);
            self.reset_wave(host);
            self.apply_tooltip(host, Some(TooltipCommand::Hide));
            return;
        }

        self.enabled = true;
        self.geometry.recompute(host);
        tracing::debug!("DockEngine: attached to {} items", self.geometry.len());
    }

    /// Re-read item geometry (after resize or scroll)
    pub fn refresh<S: DockSurface + ?Sized>(&mut self, surface: &S) {
        self.geometry.recompute(surface);
    }

    /// Drop cached geometry; the next frame re-reads it
    pub fn invalidate(&mut self) {
        self.geometry.invalidate();
    }

    /// Route a platform event
    ///
    /// Returns true if the event was consumed by the dock.
    pub fn handle_event<H: DockHost + ?Sized>(&mut self, host: &mut H, event: &Event) -> bool {
        if !self.enabled {
            return false;
        }

        match event {
            Event::Input(InputEvent::Pointer(pointer)) => self.handle_pointer(host, pointer),
            Event::Input(InputEvent::Focus(focus)) => self.handle_focus(host, *focus),
            Event::Viewport(ViewportEvent::Resized { .. } | ViewportEvent::Scrolled { .. }) => {
                self.refresh(host);
                true
            }
            Event::Frame(handle) => self.on_frame(host, *handle),
            _ => false,
        }
    }

    fn handle_pointer<H: DockHost + ?Sized>(&mut self, host: &mut H, event: &PointerEvent) -> bool {
        match *event {
            PointerEvent::Entered { x, y, kind } => {
                if !kind.hovers() {
                    return false;
                }
                self.start(host, Point::new(x, y))
            }
            PointerEvent::Moved { x, y, kind, item } => {
                if !kind.hovers() {
                    return false;
                }
                let started = self.start(host, Point::new(x, y));
                if let Some(item) = item {
                    let command = self.tooltip.place(host, item);
                    self.apply_tooltip(host, command);
                }
                started
            }
            PointerEvent::Left => {
                self.stop(host);
                true
            }
        }
    }

    fn handle_focus<H: DockHost + ?Sized>(&mut self, host: &mut H, event: FocusEvent) -> bool {
        match event {
            FocusEvent::In { item: Some(item) } => {
                let Some(rect) = host.item_rect(item) else {
                    return false;
                };
                self.start(host, rect.center());
                let command = self.tooltip.place(host, item);
                self.apply_tooltip(host, command);
                true
            }
            FocusEvent::In { item: None } => false,
            FocusEvent::Out => {
                if host.focus_within() {
                    return false;
                }
                self.stop(host);
                true
            }
        }
    }

    fn start<H: DockHost + ?Sized>(&mut self, host: &mut H, target: Point) -> bool {
        if !target.is_finite() {
            tracing::trace!("DockEngine: ignoring non-finite pointer");
            return false;
        }
        self.driver.start(host, target);
        true
    }

    /// Return to Idle: cancel the pending frame, reset the wave, hide the
    /// tooltip
    pub fn stop<H: DockHost + ?Sized>(&mut self, host: &mut H) {
        self.driver.stop(host);
        self.reset_wave(host);
        let command = self.tooltip.hide();
        self.apply_tooltip(host, Some(command));
    }

    /// Run one animation frame
    ///
    /// Returns false without touching any style if `handle` is not the
    /// pending frame.
    pub fn on_frame<H: DockHost + ?Sized>(&mut self, host: &mut H, handle: FrameHandle) -> bool {
        let Some(pointer) = self.driver.advance(handle) else {
            return false;
        };

        if !self.geometry.is_computed() {
            self.geometry.recompute(host);
        }

        let field = InfluenceField::compute(&self.geometry, &self.config, pointer);
        for style in self.wave.apply(&field, &self.config) {
            host.apply_item(style);
        }
        tracing::trace!(
            "DockEngine: frame at ({:.1}, {:.1}), hot {:?}",
            pointer.x,
            pointer.y,
            self.wave.hot()
        );

        self.driver.schedule_next(host);
        true
    }

    fn reset_wave<H: DockHost + ?Sized>(&mut self, host: &mut H) {
        let count = host.item_count();
        for style in self.wave.reset(count) {
            host.apply_item(style);
        }
    }

    fn apply_tooltip<R: DockRenderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        command: Option<TooltipCommand>,
    ) {
        match command {
            Some(TooltipCommand::Show(placement)) => renderer.show_tooltip(&placement),
            Some(TooltipCommand::Hide) => renderer.hide_tooltip(),
            None => {}
        }
    }
}

impl Default for DockEngine {
    fn default() -> Self {
        Self::new(DockConfig::default())
    }
}
