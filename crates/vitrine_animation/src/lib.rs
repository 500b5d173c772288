//! Vitrine Animation System
//!
//! Timer-driven page animations.
//!
//! # Features
//!
//! - **Typing text**: cycles phrases by typing and deleting one character per tick
//! - **Counters**: count up to an integer target once the element is visible
//! - **Reveals**: one-shot style transitions on first visibility
//! - **Scrolling**: eased scroll tweens toward a target offset
//!
//! Every animation advances through the context's [`Scheduler`](vitrine_core::Scheduler)
//! and schedules its next tick only after the current one finished, so ticks of
//! one animation never overlap. `vitrine_core::testing::ManualScheduler` replaces
//! the wall clock in tests.

pub mod counter;
pub mod easing;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod typing;

pub use counter::{CounterAnimation, CounterRegistration, CounterTiming};
pub use easing::Easing;
pub use reveal::{HidePhase, RevealRegistration, RevealSpec, StyleChange};
pub use scheduler::AnimationHandle;
pub use scroll::ScrollTween;
pub use typing::{TypingState, TypingTimings, Typewriter};
