//! Top-level dashboard controller.
//!
//! [`Dashboard`] owns every piece of application state: statistics, animated
//! numbers, layout selector, fullscreen controller and host, wall clock,
//! simulator, timers and render tracking. The binary drives it with three
//! calls per frame:
//!
//! ```text
//! for input in window events { running = dashboard.handle(input, now) }
//! dashboard.advance(now)            // timers, host notifications, animations
//! dashboard.draw(&mut display, now) // dirty-tracked redraw
//! ```
//!
//! `now` is monotonic time since start; wall-clock time comes from the
//! injected [`WallClock`].

use core::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{debug, info, trace};
use rand::Rng;

use crate::animations::{AnimatedNumber, ColorTransition, Direction, badge_bounce_offset};
use crate::clock::WallClock;
use crate::colors::{BACKGROUND, CARD_FACE, GREEN, RED};
use crate::config::{
    CATEGORY_ANIMATION,
    CLOCK_TICK_PERIOD,
    LAYOUT_POLL_PERIOD,
    SIMULATION_PERIOD,
    STATS_AREA_FULLSCREEN,
    STATS_AREA_WINDOWED,
    TOTAL_ANIMATION,
};
use crate::error::{ConfigError, Result};
use crate::format::{ClockText, format_clock};
use crate::fullscreen::{FullscreenController, FullscreenHost, FullscreenKey};
use crate::input::{HitTarget, Input, Key, hit_test};
use crate::layout::{DisplayMode, LayoutId, LayoutMode, LayoutSelector, Schedule, day_index};
use crate::render::{CARD_COUNT, RenderState, ViewSignature, card_idx};
use crate::scheduler::{Scheduler, TimerHandle, TimerKind};
use crate::simulation::{DataSimulator, RescalePolicy};
use crate::stats::{Category, DashboardStats};
use crate::widgets::{Badge, CardView, draw_control_bar, draw_footer, draw_header, draw_schedule_panel, draw_stats};

/// Runtime settings. [`Default`] reproduces the reference behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub schedule: Schedule,
    /// Start in Manual mode with this layout.
    pub manual_layout: Option<LayoutId>,
    pub rescale: RescalePolicy,
    pub clock_period: Duration,
    pub simulation_period: Duration,
    pub layout_poll_period: Duration,
    pub initial_stats: DashboardStats,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            schedule: Schedule::DEFAULT,
            manual_layout: None,
            rescale: RescalePolicy::default(),
            clock_period: CLOCK_TICK_PERIOD,
            simulation_period: SIMULATION_PERIOD,
            layout_poll_period: LAYOUT_POLL_PERIOD,
            initial_stats: DashboardStats::INITIAL,
        }
    }
}

impl DashboardConfig {
    /// Reject settings the timers cannot run with.
    pub fn validate(&self) -> Result<()> {
        for (name, period) in [
            ("clock", self.clock_period),
            ("simulation", self.simulation_period),
            ("layout poll", self.layout_poll_period),
        ] {
            if period.is_zero() {
                return Err(ConfigError::ZeroPeriod(name));
            }
        }
        Ok(())
    }
}

/// Animation duration per card.
const fn card_duration(card: usize) -> Duration {
    if card == card_idx::TOTAL { TOTAL_ANIMATION } else { CATEGORY_ANIMATION }
}

/// Card values in [`card_idx`] order.
fn card_values(stats: &DashboardStats) -> [u32; CARD_COUNT] {
    [
        stats.total_inside,
        stats.get(Category::KaryawanPkc),
        stats.get(Category::PhlKontraktor),
        stats.get(Category::Praktikan),
        stats.get(Category::Visitor),
    ]
}

/// The whole application, generic over its host environment.
pub struct Dashboard<H, C, R> {
    stats: DashboardStats,
    numbers: [AnimatedNumber; CARD_COUNT],
    badge_since: [Option<Duration>; CARD_COUNT],
    badge_colors: ColorTransition,
    selector: LayoutSelector,
    fullscreen: FullscreenController,
    host: H,
    clock: C,
    clock_text: ClockText,
    today: usize,
    simulator: DataSimulator<R>,
    scheduler: Scheduler,
    timers: [Option<TimerHandle>; 3],
    panel_open: bool,
    render: RenderState,
}

impl<H, C, R> Dashboard<H, C, R>
where
    H: FullscreenHost,
    C: WallClock,
    R: Rng,
{
    /// Build the dashboard and start its timers at `now`.
    ///
    /// Initial values are shown immediately, without animation.
    pub fn new(
        config: DashboardConfig,
        host: H,
        clock: C,
        rng: R,
        now: Duration,
    ) -> Result<Self> {
        config.validate()?;

        let wall = clock.now();
        let weekday = clock.weekday();
        let mut selector = LayoutSelector::new(config.schedule, weekday);
        if let Some(layout) = config.manual_layout {
            selector.force_manual(layout);
        }

        let mut scheduler = Scheduler::new();
        let timers = [
            scheduler.every(TimerKind::ClockTick, config.clock_period, now),
            scheduler.every(TimerKind::Simulation, config.simulation_period, now),
            scheduler.every(TimerKind::LayoutPoll, config.layout_poll_period, now),
        ];

        let mut numbers: [AnimatedNumber; CARD_COUNT] =
            core::array::from_fn(|card| AnimatedNumber::new(card_duration(card)));
        for (number, value) in numbers.iter_mut().zip(card_values(&config.initial_stats)) {
            number.set_target(Some(i64::from(value)), now);
        }

        info!(
            "dashboard started: schedule {}, layout {} ({:?}), rescale {}",
            config.schedule,
            selector.effective_layout(),
            selector.mode(),
            config.rescale
        );

        Ok(Self {
            stats: config.initial_stats,
            numbers,
            badge_since: [None; CARD_COUNT],
            badge_colors: ColorTransition::new(CARD_FACE),
            selector,
            fullscreen: FullscreenController::new(),
            host,
            clock,
            clock_text: format_clock(&wall),
            today: day_index(weekday),
            simulator: DataSimulator::new(rng, config.rescale),
            scheduler,
            timers,
            panel_open: false,
            render: RenderState::new(),
        })
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Dispatch one input event. Returns `false` once the app should exit.
    pub fn handle(&mut self, input: Input, now: Duration) -> bool {
        match input {
            Input::Quit => {
                self.shutdown();
                return false;
            }
            Input::Key(key) => self.handle_key(key),
            Input::Click(point) => self.handle_click(point),
        }
        self.sync_host();
        self.update_animations(now);
        true
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::ToggleFullscreen => {
                self.fullscreen.on_key(FullscreenKey::Toggle, &mut self.host);
            }
            Key::Escape => {
                if !self.fullscreen.on_key(FullscreenKey::Exit, &mut self.host) && self.panel_open {
                    self.panel_open = false;
                }
            }
            Key::ToggleMode => self.toggle_mode(),
            Key::PickLayout(layout) => {
                if !self.selector.pick_manual(layout) && self.selector.mode() == LayoutMode::Automatic {
                    debug!("layout {layout} picked in Automatic mode, ignored");
                }
            }
            Key::ToggleSettings => self.toggle_panel(),
        }
    }

    fn handle_click(&mut self, point: Point) {
        let target = hit_test(point, self.fullscreen.is_fullscreen(), self.panel_open, self.selector.mode());
        debug!("click {point:?} -> {target:?}");
        match target {
            HitTarget::PanelChip { day, layout } => {
                self.selector.set_schedule_entry(day, layout);
            }
            HitTarget::PanelClose => self.panel_open = false,
            HitTarget::ModeSwitch => self.toggle_mode(),
            HitTarget::ManualPick(layout) => {
                self.selector.pick_manual(layout);
            }
            HitTarget::ScheduleButton => self.toggle_panel(),
            HitTarget::FullscreenButton => self.fullscreen.toggle(&mut self.host),
            HitTarget::StatsArea => {
                self.fullscreen.on_stats_click(&mut self.host);
            }
            HitTarget::PanelBody | HitTarget::Nothing => {}
        }
    }

    fn toggle_mode(&mut self) {
        self.selector.toggle_mode();
        if self.selector.mode() == LayoutMode::Manual {
            self.panel_open = false;
        }
    }

    /// Schedule panel exists only while windowed and in Automatic mode.
    fn toggle_panel(&mut self) {
        if self.selector.mode() != LayoutMode::Automatic || self.fullscreen.is_fullscreen() {
            debug!("schedule panel unavailable");
            return;
        }
        self.panel_open = !self.panel_open;
        info!("schedule panel {}", if self.panel_open { "opened" } else { "closed" });
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Run due timers, adopt host notifications and advance animations.
    pub fn advance(&mut self, now: Duration) {
        for kind in self.scheduler.due(now) {
            match kind {
                TimerKind::ClockTick => self.clock_text = format_clock(&self.clock.now()),
                TimerKind::Simulation => {
                    self.stats = self.simulator.tick(&self.stats);
                    self.push_targets(now);
                }
                TimerKind::LayoutPoll => {
                    let weekday = self.clock.weekday();
                    self.today = day_index(weekday);
                    self.selector.reevaluate(weekday);
                }
            }
        }
        self.sync_host();
        self.update_animations(now);
    }

    fn push_targets(&mut self, now: Duration) {
        for (card, value) in card_values(&self.stats).into_iter().enumerate() {
            if self.numbers[card].set_target(Some(i64::from(value)), now) {
                self.badge_since[card] = Some(now);
            }
        }
    }

    fn sync_host(&mut self) {
        if self.fullscreen.sync(&mut self.host) && self.fullscreen.is_fullscreen() {
            self.panel_open = false;
        }
    }

    fn update_animations(&mut self, now: Duration) {
        for (card, number) in self.numbers.iter_mut().enumerate() {
            number.update(now);
            let target = match number.direction() {
                Some(Direction::Up) => GREEN,
                Some(Direction::Down) => RED,
                None => CARD_FACE,
            };
            self.badge_colors.set_target(card, target);
            if number.direction().is_none() {
                self.badge_since[card] = None;
            }
        }
        self.badge_colors.update();
    }

    /// Cancel the dashboard's timers and stop the scheduler. Safe to call
    /// more than once.
    pub fn shutdown(&mut self) {
        if !self.scheduler.is_shut_down() {
            info!("dashboard shutting down after {} simulation tick(s)", self.simulator.ticks());
        }
        for handle in self.timers.iter_mut().filter_map(Option::take) {
            self.scheduler.cancel(handle);
        }
        self.scheduler.shutdown();
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw the current frame.
    pub fn draw<D>(&mut self, display: &mut D, now: Duration)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let fullscreen = self.fullscreen.is_fullscreen();
        let panel_open = self.panel_open && !fullscreen;
        let view = ViewSignature {
            layout: self.selector.effective_layout(),
            fullscreen,
            panel_open,
            mode: self.selector.mode(),
            manual_layout: self.selector.manual_layout(),
            day: self.today,
        };

        if self.render.update_view(view) {
            debug!("full redraw: {view:?}");
            display.clear(BACKGROUND).ok();
        }

        if !fullscreen {
            if self.render.check_header_dirty(&self.clock_text) {
                trace!("header redraw: {}", self.clock_text);
                draw_header(display, &self.clock_text);
            }
            if self.render.need_chrome() {
                draw_control_bar(display, view.mode, view.manual_layout, panel_open);
                draw_footer(display, self.today, &self.display_mode());
                self.render.mark_chrome_drawn();
            }
        }

        let area = if fullscreen { STATS_AREA_FULLSCREEN } else { STATS_AREA_WINDOWED };
        let views = self.card_views(now);
        draw_stats(display, view.layout, area, &views);

        if panel_open {
            draw_schedule_panel(display, self.selector.schedule(), self.today);
        }

        self.render.end_frame();
    }

    fn card_views(&self, now: Duration) -> [CardView; CARD_COUNT] {
        core::array::from_fn(|card| {
            let number = &self.numbers[card];
            let direction = number.direction();
            let badge = (direction.is_some() || self.badge_colors.is_transitioning(card)).then(|| Badge {
                rising: direction.map(|d| d == Direction::Up),
                color: self.badge_colors.get_current(card),
                bounce: self.badge_since[card].map_or(0, |since| badge_bounce_offset(now.saturating_sub(since))),
            });
            CardView {
                value: number.value(),
                badge,
            }
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Latest simulated statistics.
    #[inline]
    pub const fn stats(&self) -> &DashboardStats { &self.stats }

    /// Value currently shown on a card.
    #[inline]
    pub const fn displayed(&self, card: usize) -> i64 { self.numbers[card].value() }

    /// Change direction currently signalled on a card.
    #[inline]
    pub const fn direction(&self, card: usize) -> Option<Direction> { self.numbers[card].direction() }

    #[inline]
    pub const fn selector(&self) -> &LayoutSelector { &self.selector }

    #[inline]
    pub const fn is_fullscreen(&self) -> bool { self.fullscreen.is_fullscreen() }

    #[inline]
    pub const fn panel_open(&self) -> bool { self.panel_open }

    #[inline]
    pub const fn clock_text(&self) -> &ClockText { &self.clock_text }

    /// Day index shown in the footer (0 = Sunday).
    #[inline]
    pub const fn today(&self) -> usize { self.today }

    #[inline]
    pub const fn clock(&self) -> &C { &self.clock }

    /// Host access, for hosts that report changes made outside the dashboard.
    #[inline]
    pub const fn host_mut(&mut self) -> &mut H { &mut self.host }

    #[inline]
    pub const fn is_shut_down(&self) -> bool { self.scheduler.is_shut_down() }

    /// Derived presentation state.
    pub const fn display_mode(&self) -> DisplayMode { self.selector.display_mode(self.fullscreen.is_fullscreen()) }
}
