// Host-side tests for the autoplay timer lifecycle and hover pause.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod autoplay {
        include!("../src/core/autoplay.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod gallery {
        include!("../src/core/gallery.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod rotation {
        include!("../src/core/rotation.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod velocity {
        include!("../src/core/velocity.rs");
    }
}

use crate::core::autoplay::*;
use crate::core::config::GalleryConfig;
use crate::core::gallery::GalleryState;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct HostLog {
    next: u32,
    live: Vec<u32>,
    starts: usize,
    stops: usize,
}

/// In-memory interval host; the log outlives the `Autoplay` that owns the host.
#[derive(Clone, Default)]
struct FakeHost {
    log: Rc<RefCell<HostLog>>,
}

impl FakeHost {
    fn live(&self) -> usize {
        self.log.borrow().live.len()
    }

    /// Advance time by `ticks` intervals; every live interval fires once per tick.
    fn run(&self, ticks: usize, state: &mut GalleryState) {
        for _ in 0..ticks {
            for _ in 0..self.live() {
                state.autoplay_tick();
            }
        }
    }
}

impl IntervalHost for FakeHost {
    type Handle = u32;

    fn start(&mut self, period_ms: i32) -> anyhow::Result<u32> {
        assert_eq!(period_ms, 16);
        let mut log = self.log.borrow_mut();
        log.next += 1;
        let handle = log.next;
        log.live.push(handle);
        log.starts += 1;
        Ok(handle)
    }

    fn stop(&mut self, handle: u32) {
        let mut log = self.log.borrow_mut();
        log.live.retain(|h| *h != handle);
        log.stops += 1;
    }
}

fn setup(autoplay: bool, pause_on_hover: bool) -> (FakeHost, Autoplay<FakeHost>, GalleryState) {
    let host = FakeHost::default();
    let config = GalleryConfig {
        autoplay,
        pause_on_hover,
        images: None,
    };
    let timer = Autoplay::new(host.clone(), &config);
    let state = GalleryState::new(&GalleryConfig::default(), 1280.0);
    (host, timer, state)
}

#[test]
fn disabled_autoplay_never_starts() {
    let (host, mut timer, mut state) = setup(false, true);
    timer.resume().unwrap();
    timer.pointer_enter();
    timer.pointer_leave().unwrap();
    assert!(!timer.is_running());
    assert_eq!(host.log.borrow().starts, 0);
    host.run(10, &mut state);
    assert_eq!(state.angle(), 0.0);
}

#[test]
fn hover_pause_follows_config_rule() {
    let (host, mut timer, _state) = setup(false, true);
    timer.pointer_enter();
    assert!(!timer.is_paused());

    let (_host, mut timer, _state) = setup(true, false);
    timer.pointer_enter();
    assert!(!timer.is_paused());

    let (_host2, mut timer, _state) = setup(true, true);
    timer.pointer_enter();
    assert!(timer.is_paused());
    assert_eq!(host.log.borrow().starts, 0);
}

#[test]
fn n_ticks_rotate_by_half_degree_each() {
    let (host, mut timer, mut state) = setup(true, false);
    timer.resume().unwrap();
    assert!(timer.is_running());
    host.run(25, &mut state);
    assert!((state.angle() - -12.5).abs() < 1e-12);
}

#[test]
fn hover_pauses_and_leave_resumes() {
    let (host, mut timer, mut state) = setup(true, true);
    timer.resume().unwrap();
    host.run(5, &mut state);
    assert!((state.angle() - -2.5).abs() < 1e-12);

    timer.pointer_enter();
    assert!(timer.is_paused());
    assert!(!timer.is_running());
    host.run(10, &mut state);
    assert!((state.angle() - -2.5).abs() < 1e-12);

    timer.pointer_leave().unwrap();
    assert!(timer.is_running());
    host.run(4, &mut state);
    assert!((state.angle() - -4.5).abs() < 1e-12);
    assert_eq!(host.live(), 1);
}

#[test]
fn hover_is_ignored_without_pause_on_hover() {
    let (host, mut timer, mut state) = setup(true, false);
    timer.resume().unwrap();
    timer.pointer_enter();
    assert!(timer.is_running());
    host.run(2, &mut state);
    timer.pointer_leave().unwrap();
    assert_eq!(host.live(), 1);
    assert_eq!(host.log.borrow().starts, 1);
    assert!((state.angle() - -1.0).abs() < 1e-12);
}

#[test]
fn never_schedules_twice() {
    let (host, mut timer, mut state) = setup(true, true);
    timer.resume().unwrap();
    timer.resume().unwrap();
    assert_eq!(host.live(), 1);

    // Leave without a preceding enter, and a doubled enter/leave pair
    timer.pointer_leave().unwrap();
    timer.pointer_enter();
    timer.pointer_enter();
    timer.pointer_leave().unwrap();
    timer.pointer_leave().unwrap();
    assert_eq!(host.live(), 1);

    host.run(4, &mut state);
    assert!((state.angle() - -2.0).abs() < 1e-12);
}

#[test]
fn resize_leaves_timer_alone() {
    let (host, mut timer, mut state) = setup(true, false);
    timer.resume().unwrap();
    assert!(state.resize(480.0));
    assert!(state.resize(1440.0));
    assert_eq!(host.live(), 1);
    assert_eq!(host.log.borrow().starts, 1);
    assert!(timer.is_running());
}

#[test]
fn shutdown_stops_all_further_rotation() {
    let (host, mut timer, mut state) = setup(true, true);
    timer.resume().unwrap();
    host.run(3, &mut state);
    timer.shutdown();
    assert!(!timer.is_running());
    assert_eq!(host.live(), 0);

    let before = state.angle();
    host.run(50, &mut state);
    timer.pointer_enter();
    timer.pointer_leave().unwrap();
    host.run(50, &mut state);
    assert_eq!(host.live(), 0);
    assert_eq!(state.angle(), before);
}

#[test]
fn drop_releases_interval() {
    let (host, mut timer, _state) = setup(true, false);
    timer.resume().unwrap();
    assert_eq!(host.live(), 1);
    drop(timer);
    assert_eq!(host.live(), 0);
    let log = host.log.borrow();
    assert_eq!(log.starts, log.stops);
}
