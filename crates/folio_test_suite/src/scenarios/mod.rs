//! Scenarios organized by area

pub mod config;
pub mod influence;
pub mod lifecycle;
pub mod page;
pub mod tooltip;
pub mod wave;

use crate::runner::TestSuite;

/// Create all scenario suites
pub fn all_suites() -> Vec<TestSuite> {
    vec![
        influence::suite(),
        wave::suite(),
        lifecycle::suite(),
        tooltip::suite(),
        page::suite(),
        config::suite(),
    ]
}
