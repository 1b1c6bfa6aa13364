//! Page-level container that owns the loading screen's lifecycle.
//!
//! Content becomes ready at `max(simulator completion, activation +
//! minimum duration)`: the loader never disappears early, even when the
//! simulator finishes quickly. Once ready the simulator is unmounted, and
//! content is shown after a short reveal delay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_time::{Duration, Instant};

use super::simulator::{LoaderEvent, LoadingSimulator};
use super::timer::Timeout;
use crate::options::{LoaderOptions, PageOptions};

/// Where the page is in its reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    /// Loader mounted.
    Loading,
    /// Loader unmounted, waiting for the reveal delay.
    Revealing,
    /// Content visible (fading in).
    ContentShown,
}

/// Something that changed during [`PageLoader::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// Forwarded from the mounted simulator.
    Loader(LoaderEvent),
    /// The page became ready and the loader was unmounted.
    LoaderUnmounted,
    /// Content is now shown.
    ContentShown,
}

/// Owns at most one [`LoadingSimulator`] and gates content on it.
pub struct PageLoader<R: Rng = StdRng> {
    activated_at: Instant,
    minimum_duration: Duration,
    reveal_delay: Duration,
    content_fade: Duration,
    simulator: Option<LoadingSimulator<R>>,
    simulator_done_at: Option<Instant>,
    phase: PagePhase,
    reveal: Timeout,
    ready_at: Option<Instant>,
    shown_at: Option<Instant>,
    torn_down: bool,
}

impl PageLoader<StdRng> {
    /// Activate at `now` with an OS-seeded simulator.
    pub fn new(
        loader: &LoaderOptions,
        page: &PageOptions,
        now: Instant,
    ) -> Self {
        Self::with_rng(loader, page, StdRng::from_os_rng(), now)
    }
}

impl<R: Rng> PageLoader<R> {
    /// Activate at `now`, mounting a simulator that draws from `rng`.
    pub fn with_rng(
        loader: &LoaderOptions,
        page: &PageOptions,
        rng: R,
        now: Instant,
    ) -> Self {
        log::info!(
            "page activated, minimum loader time {:?}",
            page.minimum_duration()
        );
        Self {
            activated_at: now,
            minimum_duration: page.minimum_duration(),
            reveal_delay: page.reveal_delay(),
            content_fade: page.content_fade(),
            simulator: Some(LoadingSimulator::with_rng(loader, rng, now)),
            simulator_done_at: None,
            phase: PagePhase::Loading,
            reveal: Timeout::idle(),
            ready_at: None,
            shown_at: None,
            torn_down: false,
        }
    }

    /// Pump the mounted simulator and the reveal sequence.
    pub fn update(&mut self, now: Instant) -> Vec<PageEvent> {
        let mut events = Vec::new();
        if self.torn_down {
            return events;
        }

        if let Some(sim) = self.simulator.as_mut() {
            for event in sim.update(now) {
                events.push(PageEvent::Loader(event));
            }
            if self.simulator_done_at.is_none() {
                self.simulator_done_at = sim.completed_at();
            }
        }

        if self.phase == PagePhase::Loading {
            if let Some(done) = self.simulator_done_at {
                let ready = done.max(self.activated_at + self.minimum_duration);
                if now >= ready {
                    self.unmount_loader();
                    self.ready_at = Some(ready);
                    self.phase = PagePhase::Revealing;
                    self.reveal.schedule(ready + self.reveal_delay);
                    events.push(PageEvent::LoaderUnmounted);
                }
            }
        }

        if let Some(due) = self.reveal.poll(now) {
            self.phase = PagePhase::ContentShown;
            self.shown_at = Some(due);
            log::info!(
                "content shown {:?} after activation",
                due.saturating_duration_since(self.activated_at)
            );
            events.push(PageEvent::ContentShown);
        }

        events
    }

    fn unmount_loader(&mut self) {
        if let Some(mut sim) = self.simulator.take() {
            sim.teardown();
        }
    }

    /// Tear everything down (page unmount). Further updates do nothing.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.unmount_loader();
        self.reveal.cancel();
    }

    /// Current phase.
    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    /// The mounted simulator, while loading.
    pub fn loader(&self) -> Option<&LoadingSimulator<R>> {
        self.simulator.as_ref()
    }

    /// When the page became ready, once it has.
    pub fn ready_at(&self) -> Option<Instant> {
        self.ready_at
    }

    /// Whether the minimum duration and the simulator have both finished.
    pub fn is_ready(&self) -> bool {
        self.ready_at.is_some()
    }

    /// Whether content is shown.
    pub fn is_content_shown(&self) -> bool {
        self.phase == PagePhase::ContentShown
    }

    /// Content opacity at `now`: 0 until shown, then linear to 1.
    pub fn content_opacity(&self, now: Instant) -> f32 {
        let Some(shown) = self.shown_at else {
            return 0.0;
        };
        if self.content_fade.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(shown).as_secs_f32();
        (elapsed / self.content_fade.as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl<R: Rng> std::fmt::Debug for PageLoader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageLoader")
            .field("phase", &self.phase)
            .field("loader_mounted", &self.simulator.is_some())
            .field("ready_at", &self.ready_at)
            .finish_non_exhaustive()
    }
}
