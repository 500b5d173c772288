//! Page bootstrap

use vitrine_animation::counter::{self, CounterRegistration};
use vitrine_animation::reveal::{self, RevealRegistration};
use vitrine_animation::typing;
use vitrine_animation::AnimationHandle;
use vitrine_core::config::NavConfig;
use vitrine_core::{ElementId, TimerHandle, UiContext, VitrineConfig};
use vitrine_nav::{anchor, spy, AnchorScroller, NavbarState};
use vitrine_theme::{ThemeManager, ThemeMode};

/// Every behavior of the portfolio page, wired to one [`UiContext`]
pub struct Portfolio {
    ctx: UiContext,
    config: VitrineConfig,
    theme: ThemeManager,
    typing: Option<AnimationHandle>,
    counters: Vec<CounterRegistration>,
    reveals: Vec<RevealRegistration>,
    scroller: AnchorScroller,
    preloader: Option<TimerHandle>,
}

impl Portfolio {
    /// Start every behavior in page-load order
    ///
    /// Theme first so nothing renders in the wrong mode, then the navbar
    /// state for the restored scroll position, then the animations.
    pub fn init(ctx: UiContext, config: VitrineConfig) -> Self {
        let theme = ThemeManager::new(ctx.clone(), config.theme.clone());
        let navbar_ctx = ctx.clone();
        let nav = config.nav.clone();
        theme.set_change_callback(move |mode| refresh_navbar(&navbar_ctx, &nav, mode));
        let mode = theme.initialize();
        tracing::info!("portfolio starting in {} mode", mode);

        let mut reveals = reveal::register_skill_bars(&ctx, &config.skill_bars);
        reveals.extend(reveal::register_timeline(&ctx, &config.timeline));
        let counters = counter::register_all(&ctx, &config.counters);
        let typing = typing::start_configured(&ctx, &config.typing);
        tracing::debug!(
            "registered {} reveals, {} counters, typing {}",
            reveals.len(),
            counters.len(),
            if typing.is_some() { "on" } else { "off" }
        );

        let scroller = AnchorScroller::new(config.scroll.clone(), &config.nav);
        let portfolio = Self {
            ctx,
            config,
            theme,
            typing,
            counters,
            reveals,
            scroller,
            preloader: None,
        };
        portfolio.on_scroll();
        portfolio
    }

    pub fn context(&self) -> &UiContext {
        &self.ctx
    }

    pub fn config(&self) -> &VitrineConfig {
        &self.config
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn counters(&self) -> &[CounterRegistration] {
        &self.counters
    }

    pub fn reveals(&self) -> &[RevealRegistration] {
        &self.reveals
    }

    pub fn typing(&self) -> Option<&AnimationHandle> {
        self.typing.as_ref()
    }

    /// Recompute navbar styling and the highlighted section
    pub fn on_scroll(&self) {
        let offset = self.ctx.document().scroll_offset();
        refresh_navbar(&self.ctx, &self.config.nav, self.theme.current());

        let sections = spy::collect_sections(&self.ctx, &self.config.nav);
        let active = spy::active_section(offset, &sections, self.config.nav.spy_offset);
        spy::highlight(&self.ctx, &self.config.nav, active);
    }

    /// Flip the theme; the navbar colors follow through the change callback
    pub fn on_theme_toggle(&self) -> ThemeMode {
        self.theme.toggle()
    }

    /// Smooth-scroll to an in-page anchor
    ///
    /// Returns `true` for every in-page link, including a bare `#` or one
    /// whose target is missing, so the caller suppresses the browser's own
    /// jump. Only links with a target scroll.
    pub fn on_anchor_click(&self, href: &str) -> bool {
        if !anchor::is_in_page(href) {
            return false;
        }
        self.scroller.scroll_to_anchor(&self.ctx, href);
        true
    }

    pub fn on_back_to_top(&self) {
        self.scroller.scroll_to_top(&self.ctx);
    }

    /// Fade out and then hide the preloader once the page has loaded
    pub fn on_load(&mut self) {
        let preloader = ElementId::new(self.config.preloader.selector.as_str());
        let document = self.ctx.document();
        if !document.contains(&preloader) {
            return;
        }

        document.set_style(&preloader, "opacity", "0");
        let page = self.ctx.clone();
        let timer = self.ctx.scheduler().schedule(
            self.config.preloader.fade(),
            Box::new(move || page.document().set_style(&preloader, "display", "none")),
        );
        self.preloader = Some(timer);
    }

    /// Cancel every pending timer and detach every watcher
    pub fn shutdown(&mut self) {
        if let Some(typing) = self.typing.take() {
            typing.stop();
        }
        for counter in self.counters.drain(..) {
            counter.cancel();
        }
        for reveal in self.reveals.drain(..) {
            reveal.cancel();
        }
        if let Some(timer) = self.preloader.take() {
            timer.cancel();
        }
        self.scroller.stop();
        tracing::debug!("portfolio shut down");
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn refresh_navbar(ctx: &UiContext, config: &NavConfig, mode: ThemeMode) {
    let offset = ctx.document().scroll_offset();
    NavbarState::at(offset, config).apply(ctx, config, mode);
}
