//! Animations driven against the in-memory page
//!
//! These tests verify that:
//! - Counters start once on visibility, end on their exact target, and skip bad input
//! - The typing effect writes frames on schedule and stops on request
//! - Reveals apply their styles once
//! - Scroll tweens move the document and can be stopped

use std::rc::Rc;
use std::time::Duration;
use vitrine_animation::counter::{self, CounterTiming};
use vitrine_animation::reveal::{self, RevealSpec};
use vitrine_animation::typing::{self, Typewriter, TypingTimings};
use vitrine_animation::{scroll, Easing};
use vitrine_core::config::{CounterConfig, SkillBarConfig, TimelineConfig};
use vitrine_core::testing::{ManualScheduler, ManualVisibility, MemoryDocument};
use vitrine_core::{Capability, Document, ElementId, ObserveOptions, UiContext, UiError};

struct Page {
    document: Rc<MemoryDocument>,
    scheduler: ManualScheduler,
    visibility: ManualVisibility,
    ctx: UiContext,
}

fn page(with_visibility: bool) -> Page {
    let document = Rc::new(MemoryDocument::new());
    let scheduler = ManualScheduler::new();
    let visibility = ManualVisibility::new();
    let observer = if with_visibility {
        Capability::Available(Rc::new(visibility.clone()) as Rc<dyn vitrine_core::VisibilityObserver>)
    } else {
        Capability::Unavailable
    };
    let ctx = UiContext::new(document.clone(), Rc::new(scheduler.clone())).with_visibility(observer);
    Page {
        document,
        scheduler,
        visibility,
        ctx,
    }
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_counter_waits_for_visibility_then_reaches_target() {
    let page = page(true);
    let stat = page.document.insert("#projects");

    let registration = counter::register(
        &page.ctx,
        &stat,
        "100",
        CounterTiming::default(),
        &ObserveOptions::new(0.5),
    )
    .unwrap();

    // Nothing happens while the element is off screen
    page.scheduler.advance(ms(5000));
    assert!(!registration.is_activated());
    assert!(page.document.text_history(&stat).is_empty());

    assert_eq!(page.visibility.reveal(&stat), 1);
    assert!(registration.is_activated());
    page.scheduler.advance(ms(2100));

    let history = page.document.text_history(&stat);
    assert_eq!(history.len(), 60);
    assert_eq!(history.last().map(String::as_str), Some("100"));
    let values: Vec<i64> = history.iter().map(|v| v.parse().unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert!(registration.animation().unwrap().is_finished());
    assert_eq!(page.scheduler.pending_count(), 0);
}

#[test]
fn test_counter_activates_once() {
    let page = page(true);
    let stat = page.document.insert("#clients");
    counter::register(&page.ctx, &stat, "40", CounterTiming::default(), &ObserveOptions::new(0.5)).unwrap();

    page.visibility.reveal(&stat);
    page.scheduler.advance(ms(500));
    // Watcher detached on first notification
    assert_eq!(page.visibility.reveal(&stat), 0);
    assert_eq!(page.visibility.watcher_count(&stat), 0);

    page.scheduler.advance(ms(5000));
    assert_eq!(page.document.text_history(&stat).len(), 60);
    assert_eq!(page.document.text(&stat).as_deref(), Some("40"));
}

#[test]
fn test_counter_with_invalid_target_is_skipped() {
    let page = page(true);
    let stat = page.document.insert("#awards");

    let registration = counter::register(
        &page.ctx,
        &stat,
        "lots",
        CounterTiming::default(),
        &ObserveOptions::new(0.5),
    );

    assert!(registration.is_none());
    assert_eq!(page.visibility.watcher_count(&stat), 0);
    assert_eq!(page.scheduler.pending_count(), 0);
}

#[test]
fn test_counter_without_visibility_starts_immediately() {
    let page = page(false);
    let stat = page.document.insert("#years");

    let registration = counter::register(
        &page.ctx,
        &stat,
        "5",
        CounterTiming::new(ms(600), 6).unwrap(),
        &ObserveOptions::new(0.5),
    )
    .unwrap();

    assert!(registration.is_activated());
    assert_eq!(page.scheduler.pending_count(), 1);
    page.scheduler.advance(ms(600));
    assert_eq!(page.document.text(&stat).as_deref(), Some("5"));
}

#[test]
fn test_register_all_reads_data_attribute() {
    let page = page(true);
    let config = CounterConfig::default();
    let good = page.document.insert_matching("#good", &config.selector);
    page.document.set_attribute(&good, "data-count", "12");
    let bad = page.document.insert_matching("#bad", &config.selector);
    page.document.set_attribute(&bad, "data-count", "n/a");

    let registrations = counter::register_all(&page.ctx, &config);

    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].element(), &good);
    assert_eq!(registrations[0].target(), 12);
    let options = page.visibility.options(&good).unwrap();
    assert_eq!(options.root_margin, "0px 0px -100px 0px");
}

#[test]
fn test_cancelled_counter_stops_mid_animation() {
    let page = page(false);
    let stat = page.document.insert("#stars");
    let registration =
        counter::register(&page.ctx, &stat, "600", CounterTiming::default(), &ObserveOptions::new(0.5)).unwrap();

    page.scheduler.advance(ms(1000));
    registration.cancel();
    let written = page.document.text_history(&stat).len();
    page.scheduler.advance(ms(5000));

    assert_eq!(page.document.text_history(&stat).len(), written);
    assert_ne!(page.document.text(&stat).as_deref(), Some("600"));
}

#[test]
fn test_typing_writes_frames_until_stopped() {
    let page = page(false);
    let subtitle = page.document.insert(".hero-subtitle");
    let typewriter = Typewriter::new(vec!["Hi".to_string()], TypingTimings::default()).unwrap();

    let handle = typing::start(&page.ctx, &subtitle, typewriter).unwrap();
    assert_eq!(page.document.text(&subtitle).as_deref(), Some("H"));

    page.scheduler.advance(ms(100));
    assert_eq!(page.document.text(&subtitle).as_deref(), Some("Hi"));
    // Holding the full phrase
    page.scheduler.advance(ms(1999));
    assert_eq!(page.document.text(&subtitle).as_deref(), Some("Hi"));
    page.scheduler.advance(ms(1));
    assert_eq!(page.document.text(&subtitle).as_deref(), Some("H"));

    handle.stop();
    let written = page.document.text_history(&subtitle).len();
    page.scheduler.advance(ms(10_000));
    assert_eq!(page.document.text_history(&subtitle).len(), written);
    assert_eq!(page.scheduler.pending_count(), 0);
}

#[test]
fn test_typing_without_target_is_disabled() {
    let page = page(false);
    let typewriter = Typewriter::new(vec!["Hi".to_string()], TypingTimings::default()).unwrap();

    let result = typing::start(&page.ctx, &ElementId::new(".hero-subtitle"), typewriter);
    assert!(matches!(result, Err(UiError::MissingElement(ref el)) if el.selector() == ".hero-subtitle"));
    assert_eq!(page.scheduler.pending_count(), 0);
}

#[test]
fn test_skill_bar_collapses_then_restores_width() {
    let page = page(true);
    let config = SkillBarConfig::default();
    let bar = page.document.insert_matching("#rust-bar", &config.selector);
    page.document.set_style(&bar, "width", "85%");

    let registrations = reveal::register_skill_bars(&page.ctx, &config);
    assert_eq!(registrations.len(), 1);
    assert_eq!(page.document.style(&bar, "width").as_deref(), Some("85%"));

    page.visibility.reveal(&bar);
    assert_eq!(page.document.style(&bar, "width").as_deref(), Some("0%"));
    page.scheduler.advance(ms(100));
    assert_eq!(page.document.style(&bar, "width").as_deref(), Some("85%"));
    assert_eq!(page.visibility.watcher_count(&bar), 0);
}

#[test]
fn test_skill_bar_without_inline_width_returns_to_stylesheet() {
    let page = page(true);
    let config = SkillBarConfig::default();
    let bar = page.document.insert_matching("#css-bar", &config.selector);

    reveal::register_skill_bars(&page.ctx, &config);
    assert_eq!(page.document.style(&bar, "width"), None);

    page.visibility.reveal(&bar);
    assert_eq!(page.document.style(&bar, "width").as_deref(), Some("0%"));
    page.scheduler.advance(ms(100));
    assert_eq!(page.document.style(&bar, "width"), None);
}

#[test]
fn test_timeline_items_start_hidden() {
    let page = page(true);
    let config = TimelineConfig::default();
    let item = page.document.insert_matching("#job-1", &config.selector);

    reveal::register_timeline(&page.ctx, &config);
    assert_eq!(page.document.style(&item, "opacity").as_deref(), Some("0"));
    assert_eq!(page.document.style(&item, "transition").as_deref(), Some("all 0.5s ease-out"));

    page.visibility.reveal(&item);
    assert_eq!(page.document.style(&item, "opacity").as_deref(), Some("1"));
    assert_eq!(page.document.style(&item, "transform").as_deref(), Some("translateY(0)"));
}

#[test]
fn test_reveal_without_visibility_shows_immediately() {
    let page = page(false);
    let item = page.document.insert("#job-2");

    let registration = reveal::register(&page.ctx, &item, RevealSpec::fade_up(&TimelineConfig::default())).unwrap();

    assert!(registration.is_activated());
    assert_eq!(page.document.style(&item, "opacity").as_deref(), Some("1"));
}

#[test]
fn test_scroll_to_moves_document() {
    let page = page(false);
    page.document.set_scroll_offset(900.0);

    let handle = scroll::scroll_to(&page.ctx, 0.0, ms(1500), ms(16), Easing::EaseInOutExpo);
    page.scheduler.advance(ms(2000));

    assert!(handle.is_finished());
    assert_eq!(page.document.scroll_offset(), 0.0);
    let history = page.document.scroll_history();
    assert!(history.windows(2).all(|w| w[0] >= w[1]));
}
