//! Fake loading-progress simulator.
//!
//! Every tick adds a random increment to the progress percentage and maps
//! the new value onto the ordered status messages. At 100% the recurring
//! tick is cancelled, the overlay starts fading after a fixed delay, and the
//! completion signal fires after a second fixed delay. The tail latency is
//! the same however progress got to 100%.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_time::{Duration, Instant};

use super::completion::Completion;
use super::particles::ParticleField;
use super::status::StatusTracker;
use super::timer::{RepeatingTimer, Timeout};
use crate::options::LoaderOptions;

/// Observable loader state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadingState {
    /// Progress in `[0, 100]`, non-decreasing.
    pub progress_percent: f32,
    /// Index of the displayed status message.
    pub status_index: usize,
    /// Whether the completion signal has fired.
    pub is_complete: bool,
    /// Whether the overlay fade-out has started.
    pub is_fading_out: bool,
}

/// Something that changed during [`LoadingSimulator::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoaderEvent {
    /// Progress moved to the given percentage.
    Progress(f32),
    /// The displayed status message changed to the given index.
    StatusChanged(usize),
    /// The overlay started fading out.
    FadeOutStarted,
    /// Loading finished. Emitted exactly once.
    Completed,
}

/// Simulated loading screen driven by the host's clock.
pub struct LoadingSimulator<R: Rng = StdRng> {
    state: LoadingState,
    messages: Vec<String>,
    status: StatusTracker,
    increment_range: [f32; 2],
    fade_delay: Duration,
    completion_delay: Duration,
    fade_duration: Duration,
    rng: R,
    tick: RepeatingTimer,
    fade: Timeout,
    finish: Timeout,
    completion: Completion,
    fade_started_at: Option<Instant>,
    completed_at: Option<Instant>,
    particles: ParticleField,
    torn_down: bool,
}

impl LoadingSimulator<StdRng> {
    /// Start a simulator at `now` with an OS-seeded random source.
    pub fn new(options: &LoaderOptions, now: Instant) -> Self {
        Self::with_rng(options, StdRng::from_os_rng(), now)
    }
}

impl<R: Rng> LoadingSimulator<R> {
    /// Start a simulator at `now` drawing increments from `rng`.
    pub fn with_rng(options: &LoaderOptions, mut rng: R, now: Instant) -> Self {
        let particles =
            ParticleField::generate(options.particle_count, &mut rng);
        log::debug!(
            "loader started: {} status messages, tick every {:?}",
            options.status_messages.len(),
            options.tick_interval()
        );
        Self {
            state: LoadingState::default(),
            messages: options.status_messages.clone(),
            status: StatusTracker::new(options.status_messages.len()),
            increment_range: options.increment_bounds(),
            fade_delay: options.fade_delay(),
            completion_delay: options.completion_delay(),
            fade_duration: options.fade_duration(),
            rng,
            tick: RepeatingTimer::start(now, options.tick_interval()),
            fade: Timeout::idle(),
            finish: Timeout::idle(),
            completion: Completion::new(),
            fade_started_at: None,
            completed_at: None,
            particles,
            torn_down: false,
        }
    }

    /// Run `listener` when loading completes. Replaces any earlier listener.
    pub fn on_complete(&mut self, listener: impl FnOnce() + 'static) {
        self.completion.set_listener(listener);
    }

    /// Fire every timer due at `now` and report what changed.
    ///
    /// After [`teardown`](Self::teardown) this is a no-op.
    pub fn update(&mut self, now: Instant) -> Vec<LoaderEvent> {
        let mut events = Vec::new();
        if self.torn_down {
            return events;
        }

        while let Some(due) = self.tick.poll(now) {
            self.on_tick(due, &mut events);
        }

        if let Some(due) = self.fade.poll(now) {
            self.state.is_fading_out = true;
            self.fade_started_at = Some(due);
            self.finish.schedule(due + self.completion_delay);
            events.push(LoaderEvent::FadeOutStarted);
        }

        if let Some(due) = self.finish.poll(now) {
            if self.completion.resolve() {
                self.state.is_complete = true;
                self.completed_at = Some(due);
                log::info!("loading complete");
                events.push(LoaderEvent::Completed);
            }
        }

        events
    }

    fn on_tick(&mut self, due: Instant, events: &mut Vec<LoaderEvent>) {
        let [min, max] = self.increment_range;
        let increment = if max > min {
            self.rng.random_range(min..max)
        } else {
            min
        };
        let progress = (self.state.progress_percent + increment).min(100.0);
        if progress > self.state.progress_percent {
            self.state.progress_percent = progress;
            events.push(LoaderEvent::Progress(progress));
        }

        if progress >= 100.0 {
            self.tick.cancel();
            self.fade.schedule(due + self.fade_delay);
            log::debug!("loader reached 100%, fading in {:?}", self.fade_delay);
            return;
        }

        if let Some(index) = self.status.advance(progress) {
            self.state.status_index = index;
            events.push(LoaderEvent::StatusChanged(index));
        }
    }

    /// Cancel every pending timer and drop the completion listener.
    /// Idempotent; also runs on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.tick.cancel();
        self.fade.cancel();
        self.finish.cancel();
        self.completion.discard();
        log::debug!(
            "loader torn down at {:.0}% (complete: {})",
            self.state.progress_percent,
            self.state.is_complete
        );
    }

    /// Current state snapshot.
    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    /// Displayed status line.
    pub fn status_message(&self) -> &str {
        self.messages
            .get(self.state.status_index)
            .map_or("", String::as_str)
    }

    /// Progress rounded for display.
    pub fn display_percent(&self) -> u32 {
        self.state.progress_percent.round() as u32
    }

    /// Overlay opacity at `now`: 1.0 until the fade starts, then linear to 0.
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(start) = self.fade_started_at else {
            return 1.0;
        };
        if self.fade_duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        1.0 - (elapsed / self.fade_duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// When the completion signal fired (its scheduled instant).
    pub fn completed_at(&self) -> Option<Instant> {
        self.completed_at
    }

    /// Whether any timer is still armed.
    pub fn has_pending_timers(&self) -> bool {
        self.tick.is_active()
            || self.fade.is_pending()
            || self.finish.is_pending()
    }

    /// Whether [`teardown`](Self::teardown) has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Background particle layout.
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }
}

impl<R: Rng> Drop for LoadingSimulator<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<R: Rng> std::fmt::Debug for LoadingSimulator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingSimulator")
            .field("state", &self.state)
            .field("tick_active", &self.tick.is_active())
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn seeded(
        options: &LoaderOptions,
        seed: u64,
        t0: Instant,
    ) -> LoadingSimulator {
        LoadingSimulator::with_rng(options, StdRng::seed_from_u64(seed), t0)
    }

    /// Pump at 50ms steps for `total_ms`, collecting every event.
    fn run(
        sim: &mut LoadingSimulator,
        t0: Instant,
        total_ms: u32,
    ) -> Vec<(u32, LoaderEvent)> {
        let mut log = Vec::new();
        for ms in (0..=total_ms).step_by(50) {
            for e in sim.update(t0 + MS * ms) {
                log.push((ms, e));
            }
        }
        log
    }

    #[test]
    fn test_progress_monotonic_and_bounded() {
        let options = LoaderOptions::default();
        for seed in 0..25 {
            let t0 = Instant::now();
            let mut sim = seeded(&options, seed, t0);
            let mut prev = 0.0;
            for (_, e) in run(&mut sim, t0, 6000) {
                if let LoaderEvent::Progress(p) = e {
                    assert!(p >= prev, "seed {seed}: {p} < {prev}");
                    assert!((0.0..=100.0).contains(&p));
                    prev = p;
                }
            }
            assert_eq!(sim.state().progress_percent, 100.0);
        }
    }

    #[test]
    fn test_completion_fires_once_after_full_progress() {
        let options = LoaderOptions::default();
        let t0 = Instant::now();
        let mut sim = seeded(&options, 11, t0);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        sim.on_complete(move || counter.set(counter.get() + 1));

        let events = run(&mut sim, t0, 8000);
        let completed: Vec<_> = events
            .iter()
            .filter(|(_, e)| *e == LoaderEvent::Completed)
            .collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(calls.get(), 1);

        let reached_full = events
            .iter()
            .find(|(_, e)| *e == LoaderEvent::Progress(100.0))
            .map(|(ms, _)| *ms);
        let completed_ms = completed[0].0;
        assert!(reached_full.is_some_and(|full| completed_ms >= full + 1000));
        assert!(sim.state().is_complete);
        assert!(!sim.has_pending_timers());
    }

    #[test]
    fn test_tail_latency_is_fixed() {
        let options = LoaderOptions {
            increment_range: [100.0, 101.0],
            ..LoaderOptions::default()
        };
        let t0 = Instant::now();
        let mut sim = seeded(&options, 0, t0);

        assert_eq!(
            sim.update(t0 + MS * 200),
            vec![LoaderEvent::Progress(100.0)]
        );
        assert!(sim.update(t0 + MS * 699).is_empty());
        assert_eq!(
            sim.update(t0 + MS * 700),
            vec![LoaderEvent::FadeOutStarted]
        );
        assert!(sim.state().is_fading_out);
        assert!(sim.update(t0 + MS * 1199).is_empty());
        assert_eq!(sim.update(t0 + MS * 1200), vec![LoaderEvent::Completed]);
        assert_eq!(sim.completed_at(), Some(t0 + MS * 1200));
    }

    #[test]
    fn test_single_late_pump_catches_up() {
        let options = LoaderOptions {
            increment_range: [50.0, 51.0],
            ..LoaderOptions::default()
        };
        let t0 = Instant::now();
        let mut sim = seeded(&options, 0, t0);
        let events = sim.update(t0 + MS * 5000);
        assert_eq!(events.last(), Some(&LoaderEvent::Completed));
        // Completion is timed from the tick that reached 100%, not the pump.
        assert_eq!(sim.completed_at(), Some(t0 + MS * 1400));
    }

    #[test]
    fn test_zero_increment_range_still_completes() {
        let options = LoaderOptions {
            increment_range: [0.0, 0.0],
            ..LoaderOptions::default()
        };
        let t0 = Instant::now();
        let mut sim = seeded(&options, 0, t0);
        let events = sim.update(t0 + Duration::from_secs(3600));

        assert_eq!(events.last(), Some(&LoaderEvent::Completed));
        assert!(sim.state().is_complete);
        assert_eq!(sim.state().progress_percent, 100.0);
        let ticks = events
            .iter()
            .filter(|e| matches!(e, LoaderEvent::Progress(_)))
            .count();
        assert!(ticks <= 1100, "{ticks} progress events");
        assert!(!sim.has_pending_timers());
    }

    #[test]
    fn test_status_index_steps_forward_within_bounds() {
        let options = LoaderOptions::default();
        let count = options.status_messages.len();
        for seed in 0..25 {
            let t0 = Instant::now();
            let mut sim = seeded(&options, seed, t0);
            let mut prev = 0;
            for (_, e) in run(&mut sim, t0, 6000) {
                if let LoaderEvent::StatusChanged(i) = e {
                    assert!(i > prev);
                    assert!(i < count);
                    prev = i;
                }
            }
            assert_eq!(sim.state().status_index, prev);
        }
    }

    #[test]
    fn test_status_message_text() {
        let options = LoaderOptions {
            increment_range: [30.0, 30.0],
            ..LoaderOptions::default()
        };
        let t0 = Instant::now();
        let mut sim = seeded(&options, 0, t0);
        assert_eq!(sim.status_message(), "Initializing XR Experience...");
        let _ = sim.update(t0 + MS * 200);
        assert_eq!(sim.status_message(), "Loading 3D Models...");
        assert_eq!(sim.display_percent(), 30);
    }

    #[test]
    fn test_teardown_before_completion_stops_mutation() {
        let options = LoaderOptions::default();
        let t0 = Instant::now();
        let mut sim = seeded(&options, 5, t0);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        sim.on_complete(move || counter.set(counter.get() + 1));

        let _ = sim.update(t0 + MS * 400);
        let snapshot = *sim.state();
        sim.teardown();
        assert!(!sim.has_pending_timers());
        assert!(sim.is_torn_down());

        for ms in (400..10_000).step_by(100) {
            assert!(sim.update(t0 + MS * ms).is_empty());
        }
        assert_eq!(*sim.state(), snapshot);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_opacity_fades_after_fade_start() {
        let options = LoaderOptions {
            increment_range: [100.0, 101.0],
            ..LoaderOptions::default()
        };
        let t0 = Instant::now();
        let mut sim = seeded(&options, 0, t0);
        let _ = sim.update(t0 + MS * 700);
        assert_eq!(sim.opacity(t0 + MS * 700), 1.0);
        assert!((sim.opacity(t0 + MS * 950) - 0.5).abs() < 1e-3);
        assert_eq!(sim.opacity(t0 + MS * 2000), 0.0);
    }

    #[test]
    fn test_particles_generated_once() {
        let options = LoaderOptions::default();
        let t0 = Instant::now();
        let mut sim = seeded(&options, 2, t0);
        let before = sim.particles().particles().to_vec();
        let _ = run(&mut sim, t0, 3000);
        assert_eq!(sim.particles().particles(), before.as_slice());
        assert_eq!(before.len(), options.particle_count);
    }
}
