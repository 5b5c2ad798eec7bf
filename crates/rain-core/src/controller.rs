use crate::constants::*;
use crate::filter::{FilterState, ParamRange, BLUR_RANGE, DISTORT_RANGE, GRID_SIZE_RANGE};
use glam::Vec2;

/// Last known pointer position in stage pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn delta_to(&self, other: PointerSample) -> Vec2 {
        Vec2::new(other.x, other.y) - Vec2::new(self.x, self.y)
    }
}

/// How a frame tick advances `time`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickMode {
    /// Constant increment per tick, independent of the frame rate.
    Fixed(f64),
    /// Real elapsed seconds since the previous tick. Opt-in only.
    Elapsed,
}

impl Default for TickMode {
    fn default() -> Self {
        TickMode::Fixed(TIME_STEP)
    }
}

#[derive(Clone, Debug)]
pub struct ControllerConfig {
    pub initial: FilterState,
    pub grid_size_per_px: f32,
    pub distort_per_px: f32,
    pub blur_per_px: f32,
    pub grid_size_range: ParamRange,
    pub distort_range: ParamRange,
    pub blur_range: ParamRange,
    pub tick_mode: TickMode,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial: FilterState::default(),
            grid_size_per_px: GRID_SIZE_PER_PX,
            distort_per_px: DISTORT_PER_PX,
            blur_per_px: BLUR_PER_PX,
            grid_size_range: GRID_SIZE_RANGE,
            distort_range: DISTORT_RANGE,
            blur_range: BLUR_RANGE,
            tick_mode: TickMode::default(),
        }
    }
}

/// Maps frame ticks and drag input onto the filter uniforms.
///
/// A drag session runs from `on_pointer_down` to `on_pointer_up`; move events
/// outside of it are ignored so deltas never accumulate between drags.
pub struct FilterController {
    config: ControllerConfig,
    state: FilterState,
    pointer: Option<PointerSample>,
    last_time: Option<f64>,
    last_delta: f64,
}

impl FilterController {
    pub fn new(config: ControllerConfig) -> Self {
        let state = config.initial;
        Self {
            config,
            state,
            pointer: None,
            last_time: None,
            last_delta: 0.0,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Pointer position of the active drag session, if any.
    pub fn pointer(&self) -> Option<PointerSample> {
        self.pointer
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    /// Seconds between the two most recent frame ticks.
    pub fn last_delta(&self) -> f64 {
        self.last_delta
    }

    /// Returns true when `time` advanced.
    pub fn on_frame_tick(&mut self, current_time_sec: f64) -> bool {
        let Some(last) = self.last_time.replace(current_time_sec) else {
            return false;
        };
        self.last_delta = current_time_sec - last;
        let step = match self.config.tick_mode {
            TickMode::Fixed(step) => step,
            TickMode::Elapsed => self.last_delta,
        };
        if step <= 0.0 || !step.is_finite() {
            return false;
        }
        let before = self.state.time;
        self.state.time = before + step;
        self.state.time != before
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.pointer = Some(PointerSample::new(x, y));
    }

    /// Applies the drag delta since the previous sample. Returns true when a
    /// parameter changed; false outside a drag session.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        let Some(prev) = self.pointer else {
            return false;
        };
        let next = PointerSample::new(x, y);
        let delta = prev.delta_to(next);
        self.pointer = Some(next);

        let before = self.state;
        let cfg = &self.config;
        let s = &mut self.state;
        s.grid_size = cfg
            .grid_size_range
            .clamp(s.grid_size + delta.x * cfg.grid_size_per_px);
        s.distort = cfg
            .distort_range
            .clamp(s.distort + delta.y * cfg.distort_per_px);
        s.blur = cfg.blur_range.clamp(s.blur + delta.y * cfg.blur_per_px);
        self.state != before
    }

    pub fn on_pointer_up(&mut self) {
        if self.pointer.take().is_some() {
            log::debug!(
                "[drag] end grid={:.2} distort={:.2} blur={:.3}",
                self.state.grid_size,
                self.state.distort,
                self.state.blur
            );
        }
    }
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
