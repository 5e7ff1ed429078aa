use crate::core::{GalleryState, Phase};
use crate::render::GalleryDom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<GalleryState>>,
    pub dom: Rc<RefCell<GalleryDom>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;

        let mut state = self.state.borrow_mut();
        state.advance(dt_sec);
        let mut dom = self.dom.borrow_mut();
        dom.set_dragging(state.phase() == Phase::Dragging);
        dom.apply_rotation(&state);
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that can be stopped again.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: FrameContext) -> Self {
        let frame_ctx = Rc::new(RefCell::new(frame_ctx));
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            frame_ctx.borrow_mut().frame();
            pending_clone.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        pending.set(request_frame(&tick));

        Self { tick, pending }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's reference to its own slot
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    web::window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
