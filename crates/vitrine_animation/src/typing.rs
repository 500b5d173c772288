//! Typing text effect
//!
//! Cycles through phrases, typing one character per tick, holding the full
//! phrase, deleting one character per tick, then holding the empty line before
//! moving on to the next phrase.

use crate::scheduler::{drive, AnimationHandle};
use std::time::Duration;
use vitrine_core::config::TypingConfig;
use vitrine_core::{ElementId, Result, UiContext, UiError};

/// Position of the typewriter within its phrase list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    pub phrase_index: usize,
    /// Characters currently shown, `0..=len(phrase)`
    pub char_index: usize,
    pub deleting: bool,
}

/// Delays between ticks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub typing: Duration,
    pub deleting: Duration,
    pub hold_full: Duration,
    pub hold_empty: Duration,
}

impl From<&TypingConfig> for TypingTimings {
    fn from(config: &TypingConfig) -> Self {
        Self {
            typing: config.typing_interval(),
            deleting: config.deleting_interval(),
            hold_full: config.hold_full(),
            hold_empty: config.hold_empty(),
        }
    }
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self::from(&TypingConfig::default())
    }
}

/// Output of one tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    /// Delay before the next tick
    pub delay: Duration,
}

/// The typing state machine, independent of any timer
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    /// Phrase lengths in characters
    lengths: Vec<usize>,
    state: TypingState,
    timings: TypingTimings,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timings: TypingTimings) -> Result<Self> {
        if phrases.is_empty() {
            return Err(UiError::NoPhrases);
        }
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self {
            phrases,
            lengths,
            state: TypingState::default(),
            timings,
        })
    }

    pub fn from_config(config: &TypingConfig) -> Result<Self> {
        Self::new(config.phrases.clone(), TypingTimings::from(config))
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    /// Length in characters of the current phrase
    pub fn phrase_len(&self) -> usize {
        self.lengths[self.state.phrase_index]
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Advance one character and report what to display
    pub fn tick(&mut self) -> TypingFrame {
        let len = self.phrase_len();
        let state = &mut self.state;

        let mut delay = if state.deleting {
            state.char_index = state.char_index.saturating_sub(1);
            self.timings.deleting
        } else {
            state.char_index = (state.char_index + 1).min(len);
            self.timings.typing
        };

        let text: String = self.phrases[state.phrase_index]
            .chars()
            .take(state.char_index)
            .collect();

        if !state.deleting && state.char_index == len {
            state.deleting = true;
            delay = self.timings.hold_full;
        } else if state.deleting && state.char_index == 0 {
            state.deleting = false;
            state.phrase_index = (state.phrase_index + 1) % self.phrases.len();
            delay = self.timings.hold_empty;
        }

        TypingFrame { text, delay }
    }
}

/// Run `typewriter` against `target` until the returned handle is stopped
///
/// The first frame is written immediately. Fails with
/// [`UiError::MissingElement`], without scheduling anything, when the target
/// is not in the document.
pub fn start(ctx: &UiContext, target: &ElementId, typewriter: Typewriter) -> Result<AnimationHandle> {
    if !ctx.document().contains(target) {
        return Err(UiError::MissingElement(target.clone()));
    }

    let handle = AnimationHandle::new();
    let page = ctx.clone();
    let target = target.clone();
    let mut typewriter = typewriter;

    drive(ctx.scheduler().clone(), handle.clone(), None, move || {
        let frame = typewriter.tick();
        tracing::trace!(text = %frame.text, "typing tick");
        page.document().set_text(&target, &frame.text);
        Some(frame.delay)
    });

    Ok(handle)
}

/// Build the typewriter from configuration and start it
///
/// Configuration problems are logged and disable the effect.
pub fn start_configured(ctx: &UiContext, config: &TypingConfig) -> Option<AnimationHandle> {
    let started = Typewriter::from_config(config)
        .and_then(|typewriter| start(ctx, &ElementId::new(config.target.as_str()), typewriter));

    match started {
        Ok(handle) => Some(handle),
        Err(err @ UiError::MissingElement(_)) => {
            tracing::debug!("typing effect disabled: {}", err);
            None
        }
        Err(err) => {
            tracing::warn!("typing effect disabled: {}", err);
            None
        }
    }
}
