//! Folio Scenario Suite
//!
//! Headless scenarios for the dock engine and the page collaborators. Each
//! scenario starts from a fresh page (headless dock host, recording page
//! renderer, in-memory preference store) and drives it with platform
//! events, the way a browser backend would.
//!
//! # Scenario Suites
//!
//! - **influence**: Gaussian falloff bounds and the five-item dock
//! - **wave**: style bounds, hot item hysteresis, reset idempotence
//! - **lifecycle**: frame loop start/stop, stale frames, reduced motion
//! - **tooltip**: label placement on hover and focus
//! - **page**: theme, language, reveal, active link, sound and drawer
//! - **config**: TOML round-trip and validation

pub mod harness;
pub mod runner;
pub mod scenarios;

pub use harness::{Setup, TestContext, TestHarness, TestResult};
pub use runner::TestRunner;
