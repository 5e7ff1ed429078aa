use crate::core::GalleryState;
use crate::dom::{self, Listener};
use crate::render::GalleryDom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Re-layout the gallery whenever the window crosses the small-viewport
/// breakpoint. The rotation and autoplay timer are left untouched.
pub fn wire_resize(
    window: &web::Window,
    state: Rc<RefCell<GalleryState>>,
    dom_tree: Rc<RefCell<GalleryDom>>,
) -> anyhow::Result<Listener> {
    Listener::attach(window, "resize", move |_ev| {
        let mut state = state.borrow_mut();
        if !state.resize(dom::viewport_width()) {
            return;
        }
        log::debug!(
            "[gallery] viewport now {:?}, cylinder width {}",
            state.viewport(),
            state.layout().cylinder_width
        );
        if let Err(e) = dom_tree.borrow_mut().apply_layout(&state) {
            log::error!("[gallery] relayout failed: {:?}", e);
        }
    })
}
