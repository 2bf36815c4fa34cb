//! Folio Animation System
//!
//! Small, frame-driven animation primitives for page decorations.
//!
//! # Features
//!
//! - **Exponential Pursuit**: a value chases a moving target by a fixed
//!   fraction of the remaining distance each frame (no overshoot)
//! - **Frame Loop**: Idle/Active lifecycle with at most one pending frame
//!   request, cancelled synchronously on stop
//! - **Manual Scheduler**: deterministic frame pump for tests and headless
//!   hosts
//! - **Interpolate**: lerp for scalars and points

pub mod frame_loop;
pub mod manual;
pub mod pursuit;
pub mod values;

pub use frame_loop::{FrameLoop, LoopState};
pub use manual::ManualScheduler;
pub use pursuit::{Pursuit, PursuitConfig};
pub use values::Interpolate;
