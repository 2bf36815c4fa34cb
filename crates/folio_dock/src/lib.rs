//! Folio Dock Engine
//!
//! Drives the magnifying dock navigation bar: items near the pointer lift,
//! grow and rise in stacking order, the most influenced item is marked
//! "hot", and a tooltip follows the hovered or focused item.
//!
//! # Pipeline
//!
//! - [`GeometryCache`] - horizontal center of every item, refreshed on
//!   resize and scroll
//! - [`InfluenceField`] - 2D Gaussian influence of the pointer on each item
//! - [`WaveApplier`] - influence to lift/scale/stacking, plus hot item
//!   selection with hysteresis
//! - [`AnimationDriver`] - eases the pointer toward its latest position on
//!   every animation frame while the wave is active
//! - [`TooltipPositioner`] - places the floating label under an item
//!
//! [`DockEngine`] ties them together behind a host that provides the
//! page's geometry, rendering and frame scheduling ([`DockHost`]).
//!
//! # Example
//!
//! ```rust
//! use folio_dock::{DockConfig, DockEngine, HeadlessDock};
//! use folio_platform::prelude::*;
//!
//! let mut host = HeadlessDock::with_centers(&[40.0, 120.0, 200.0, 280.0, 360.0]);
//! let mut engine = DockEngine::new(DockConfig::default());
//! engine.attach(&mut host);
//!
//! let (x, y) = (200.0, host.center_line());
//! engine.handle_event(
//!     &mut host,
//!     &Event::Input(InputEvent::Pointer(PointerEvent::Entered { x, y, kind: PointerKind::Mouse })),
//! );
//! host.pump_frame(&mut engine);
//!
//! assert_eq!(engine.hot_item(), Some(2));
//! ```

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod host;
pub mod influence;
pub mod tooltip;
pub mod wave;

pub use config::DockConfig;
pub use driver::AnimationDriver;
pub use engine::DockEngine;
pub use error::{DockError, Result};
pub use geometry::GeometryCache;
pub use headless::{HeadlessDock, RenderedItem, RenderedTooltip};
pub use host::{DockHost, DockRenderer, DockSurface};
pub use influence::{gaussian, InfluenceField};
pub use tooltip::{TooltipCommand, TooltipPlacement, TooltipPositioner};
pub use wave::{HotSelector, ItemStyle, WaveApplier};
