// Host-side tests for event dispatch and the injected ticker.

use rain_core::*;

#[derive(Default)]
struct RecordingTicker {
    paused: bool,
    pauses: usize,
    resumes: usize,
}

impl Ticker for RecordingTicker {
    fn pause(&mut self) {
        self.paused = true;
        self.pauses += 1;
    }
    fn resume(&mut self) {
        self.paused = false;
        self.resumes += 1;
    }
    fn is_paused(&self) -> bool {
        self.paused
    }
}

fn scene() -> RainScene<RecordingTicker> {
    RainScene::new(FilterController::default(), RecordingTicker::default())
}

#[test]
fn frame_events_drive_time() {
    let mut s = scene();
    assert!(!s.handle(SceneEvent::Frame { now_sec: 0.0 }));
    assert!(s.handle(SceneEvent::Frame { now_sec: 0.016 }));
    assert!(s.handle(SceneEvent::Frame { now_sec: 0.033 }));
    assert!((s.state().time - 2.0 * TIME_STEP).abs() < 1e-6);
}

#[test]
fn drag_events_reach_controller() {
    let mut s = scene();
    assert!(!s.handle(SceneEvent::PointerDown { id: MOUSE_POINTER, x: 100.0, y: 100.0 }));
    assert!(s.handle(SceneEvent::PointerMove { id: MOUSE_POINTER, x: 300.0, y: 100.0 }));
    assert!((s.state().grid_size - 10.0).abs() < 1e-5);
    s.handle(SceneEvent::PointerUp { id: MOUSE_POINTER });
    assert!(!s.controller().is_dragging());
    assert!(!s.handle(SceneEvent::PointerMove { id: MOUSE_POINTER, x: 0.0, y: 0.0 }));
    assert!((s.state().grid_size - 10.0).abs() < 1e-5);
}

#[test]
fn pause_and_resume_forward_to_ticker() {
    let mut s = scene();
    s.handle(SceneEvent::Pause);
    assert!(s.ticker().is_paused());
    s.handle(SceneEvent::Resume);
    assert!(!s.ticker().is_paused());
    assert_eq!(s.ticker().pauses, 1);
    assert_eq!(s.ticker().resumes, 1);
}

#[test]
fn frames_are_dropped_while_paused() {
    let mut s = scene();
    s.handle(SceneEvent::Frame { now_sec: 0.0 });
    s.handle(SceneEvent::Frame { now_sec: 0.016 });
    let before = s.state().time;

    s.handle(SceneEvent::Pause);
    for i in 0..10 {
        assert!(!s.handle(SceneEvent::Frame {
            now_sec: 0.1 + i as f64
        }));
    }
    assert_eq!(s.state().time, before);

    s.handle(SceneEvent::Resume);
    assert!(s.handle(SceneEvent::Frame { now_sec: 20.0 }));
    assert!((s.state().time - before - TIME_STEP).abs() < 1e-6);
}

#[test]
fn drag_still_applies_while_paused() {
    let mut s = scene();
    s.handle(SceneEvent::Pause);
    s.handle(SceneEvent::PointerDown { id: MOUSE_POINTER, x: 0.0, y: 0.0 });
    assert!(s.handle(SceneEvent::PointerMove { id: MOUSE_POINTER, x: 40.0, y: 0.0 }));
    assert!((s.state().grid_size - 6.0).abs() < 1e-5);
}

#[test]
fn time_never_decreases() {
    let mut s = scene();
    let mut prev = s.state().time;
    for i in 0..200 {
        let ev = match i % 7 {
            0 => SceneEvent::PointerDown { id: MOUSE_POINTER, x: i as f32, y: 0.0 },
            1 | 2 => SceneEvent::PointerMove {
                id: MOUSE_POINTER,
                x: (i * 13) as f32,
                y: (i * 7) as f32,
            },
            3 => SceneEvent::PointerUp { id: MOUSE_POINTER },
            4 => SceneEvent::Pause,
            5 => SceneEvent::Resume,
            _ => SceneEvent::Frame {
                now_sec: i as f64 * 0.016,
            },
        };
        s.handle(ev);
        assert!(s.state().time >= prev);
        prev = s.state().time;
    }
}

#[test]
fn uniforms_carry_state_and_sizes() {
    let mut s = scene();
    s.handle(SceneEvent::PointerDown { id: MOUSE_POINTER, x: 0.0, y: 0.0 });
    s.handle(SceneEvent::PointerMove { id: MOUSE_POINTER, x: 40.0, y: 0.0 });
    let u = s.uniforms([800.0, 600.0], [512.0, 256.0]);
    assert!((u.grid_size - 6.0).abs() < 1e-5);
    assert_eq!(u.distort, INITIAL_DISTORT);
    assert_eq!(u.resolution, [800.0, 600.0]);
    assert_eq!(u.image_size, [512.0, 256.0]);
}

#[test]
fn frame_clock_is_a_ticker() {
    let mut clock = FrameClock::new();
    assert!(!clock.is_paused());
    let t0 = clock.now_seconds();
    assert!(t0 >= 0.0);
    clock.pause();
    clock.pause();
    assert!(clock.is_paused());
    clock.resume();
    assert!(!clock.is_paused());
    assert!(clock.now_seconds() >= t0);
}

#[test]
fn second_pointer_cannot_hijack_a_drag() {
    let mut s = scene();
    s.handle(SceneEvent::PointerDown { id: 1, x: 0.0, y: 0.0 });
    assert_eq!(s.active_pointer(), Some(1));

    // a second finger lands far away: no reset of the drag origin
    assert!(!s.handle(SceneEvent::PointerDown { id: 2, x: 900.0, y: 0.0 }));
    assert!(!s.handle(SceneEvent::PointerMove { id: 2, x: 950.0, y: 0.0 }));
    assert_eq!(s.state().grid_size, INITIAL_GRID_SIZE);
    assert_eq!(s.controller().pointer(), Some(PointerSample::new(0.0, 0.0)));

    assert!(s.handle(SceneEvent::PointerMove { id: 1, x: 40.0, y: 0.0 }));
    assert!((s.state().grid_size - 6.0).abs() < 1e-5);

    // lifting the other finger keeps the session alive
    s.handle(SceneEvent::PointerUp { id: 2 });
    assert!(s.controller().is_dragging());
    assert!(s.handle(SceneEvent::PointerMove { id: 1, x: 80.0, y: 0.0 }));
    assert!((s.state().grid_size - 7.0).abs() < 1e-5);

    s.handle(SceneEvent::PointerUp { id: 1 });
    assert!(!s.controller().is_dragging());
    assert_eq!(s.active_pointer(), None);
}

#[test]
fn any_pointer_may_start_the_next_drag() {
    let mut s = scene();
    s.handle(SceneEvent::PointerDown { id: 1, x: 0.0, y: 0.0 });
    s.handle(SceneEvent::PointerUp { id: 1 });
    s.handle(SceneEvent::PointerDown { id: 7, x: 100.0, y: 0.0 });
    assert_eq!(s.active_pointer(), Some(7));
    assert!(!s.handle(SceneEvent::PointerMove { id: 1, x: 500.0, y: 0.0 }));
    assert!(s.handle(SceneEvent::PointerMove { id: 7, x: 140.0, y: 0.0 }));
    assert!((s.state().grid_size - 6.0).abs() < 1e-5);
}

#[test]
fn repeated_down_from_the_same_pointer_restarts_its_drag() {
    let mut s = scene();
    s.handle(SceneEvent::PointerDown { id: MOUSE_POINTER, x: 0.0, y: 0.0 });
    s.handle(SceneEvent::PointerDown { id: MOUSE_POINTER, x: 200.0, y: 0.0 });
    assert!(s.handle(SceneEvent::PointerMove { id: MOUSE_POINTER, x: 240.0, y: 0.0 }));
    assert!((s.state().grid_size - 6.0).abs() < 1e-5);
}
