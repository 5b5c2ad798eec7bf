use crate::controller::FilterController;
use crate::filter::{FilterState, FilterUniforms};
use crate::lifecycle::Ticker;

/// Host-assigned pointer identity (touch id, DOM `pointerId`).
pub type PointerId = u64;

/// Id used for the mouse, kept clear of touch ids.
pub const MOUSE_POINTER: PointerId = u64::MAX;

/// Host events the scene listens to. Coordinates are stage pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    Frame { now_sec: f64 },
    PointerDown { id: PointerId, x: f32, y: f32 },
    PointerMove { id: PointerId, x: f32, y: f32 },
    PointerUp { id: PointerId },
    Pause,
    Resume,
}

/// Routes host events to the filter controller, one at a time.
///
/// Only the pointer that started the drag session drives it; other pointers
/// are ignored until that one is released.
pub struct RainScene<T: Ticker> {
    controller: FilterController,
    ticker: T,
    active_pointer: Option<PointerId>,
}

impl<T: Ticker> RainScene<T> {
    pub fn new(controller: FilterController, ticker: T) -> Self {
        Self {
            controller,
            ticker,
            active_pointer: None,
        }
    }

    pub fn controller(&self) -> &FilterController {
        &self.controller
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    pub fn state(&self) -> &FilterState {
        self.controller.state()
    }

    /// Pointer that owns the current drag session.
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    /// Returns true when the filter state changed.
    pub fn handle(&mut self, event: SceneEvent) -> bool {
        match event {
            SceneEvent::Frame { now_sec } => {
                if self.ticker.is_paused() {
                    return false;
                }
                self.controller.on_frame_tick(now_sec)
            }
            SceneEvent::PointerDown { id, x, y } => {
                if self.active_pointer.is_some_and(|active| active != id) {
                    log::debug!("[drag] ignoring pointer {id} during another drag");
                    return false;
                }
                self.active_pointer = Some(id);
                self.controller.on_pointer_down(x, y);
                false
            }
            SceneEvent::PointerMove { id, x, y } => {
                if self.active_pointer != Some(id) {
                    return false;
                }
                self.controller.on_pointer_move(x, y)
            }
            SceneEvent::PointerUp { id } => {
                if self.active_pointer == Some(id) {
                    self.active_pointer = None;
                    self.controller.on_pointer_up();
                }
                false
            }
            SceneEvent::Pause => {
                self.ticker.pause();
                false
            }
            SceneEvent::Resume => {
                self.ticker.resume();
                false
            }
        }
    }

    pub fn uniforms(&self, resolution: [f32; 2], image_size: [f32; 2]) -> FilterUniforms {
        self.controller.state().to_uniforms(resolution, image_size)
    }
}
