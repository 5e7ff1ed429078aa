use crate::core::{Autoplay, GalleryState};
use crate::dom::Listener;
use crate::timer::WebIntervalHost;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub cylinder: web::HtmlElement,
    pub state: Rc<RefCell<GalleryState>>,
    pub autoplay: Rc<RefCell<Autoplay<WebIntervalHost>>>,
}

/// Attach drag and hover handlers to the cylinder. The returned listeners
/// detach when dropped.
pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointerdown(w)?,
        wire_pointermove(w)?,
        wire_pointerup(w)?,
        wire_pointercancel(w)?,
        wire_lostpointercapture(w)?,
        wire_pointerenter(w)?,
        wire_pointerleave(w)?,
    ])
}

fn wire_pointerdown(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::attach(&w.cylinder, "pointerdown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        // Primary button only for mice; touch and pen report button 0 as well
        if ev.button() != 0 {
            return;
        }
        w2.state
            .borrow_mut()
            .press(ev.pointer_id(), ev.client_x() as f64, ev.time_stamp());
        if let Err(e) = w2.cylinder.set_pointer_capture(ev.pointer_id()) {
            log::debug!("[drag] pointer capture unavailable: {:?}", e);
        }
        ev.prevent_default();
    })
}

fn wire_pointermove(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::attach(&w.cylinder, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let mut state = w2.state.borrow_mut();
        // Released somewhere we never heard about
        if ev.buttons() == 0 {
            state.cancel(ev.pointer_id());
            return;
        }
        state.move_to(ev.pointer_id(), ev.client_x() as f64, ev.time_stamp());
    })
}

fn wire_pointerup(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::attach(&w.cylinder, "pointerup", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        w2.state
            .borrow_mut()
            .release(ev.pointer_id(), ev.time_stamp());
        _ = w2.cylinder.release_pointer_capture(ev.pointer_id());
    })
}

fn wire_pointercancel(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::attach(&w.cylinder, "pointercancel", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            w2.state.borrow_mut().cancel(ev.pointer_id());
        }
    })
}

// Fires after pointerup too, by which point the session is already closed
fn wire_lostpointercapture(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::attach(&w.cylinder, "lostpointercapture", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            w2.state.borrow_mut().cancel(ev.pointer_id());
        }
    })
}

fn wire_pointerenter(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::attach(&w.cylinder, "pointerenter", move |_ev| {
        w2.autoplay.borrow_mut().pointer_enter();
    })
}

fn wire_pointerleave(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::attach(&w.cylinder, "pointerleave", move |_ev| {
        if let Err(e) = w2.autoplay.borrow_mut().pointer_leave() {
            log::error!("[autoplay] resume failed: {:?}", e);
        }
    })
}
