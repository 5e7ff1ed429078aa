use crate::core::{Autoplay, GalleryConfig, GalleryState};
use crate::dom::{self, Listener};
use crate::events;
use crate::frame::{FrameContext, FrameLoop};
use crate::render::GalleryDom;
use crate::styles;
use crate::timer::WebIntervalHost;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// One live gallery: its state, DOM, timer, frame loop and listeners.
///
/// Everything is released by [`Gallery::unmount`], which also runs on drop.
pub struct Gallery {
    state: Rc<RefCell<GalleryState>>,
    autoplay: Rc<RefCell<Autoplay<WebIntervalHost>>>,
    dom: Rc<RefCell<GalleryDom>>,
    frames: FrameLoop,
    listeners: Vec<Listener>,
    mounted: bool,
}

impl Gallery {
    pub fn mount(host: &web::Element, config: &GalleryConfig) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        styles::ensure_installed(&document)?;

        let state = Rc::new(RefCell::new(GalleryState::new(config, dom::viewport_width())));
        let dom_tree = Rc::new(RefCell::new(GalleryDom::build(
            &document,
            host,
            &state.borrow(),
        )?));

        let (autoplay, listeners, frames) = match Self::wire(&window, &state, &dom_tree, config) {
            Ok(parts) => parts,
            Err(e) => {
                dom_tree.borrow_mut().remove();
                return Err(e);
            }
        };

        {
            let s = state.borrow();
            log::info!(
                "[gallery] mounted faces={} viewport={:?} radius={:.1}px autoplay={} pauseOnHover={}",
                s.images().len(),
                s.viewport(),
                s.layout().radius,
                config.autoplay,
                config.pause_on_hover
            );
        }

        Ok(Self {
            state,
            autoplay,
            dom: dom_tree,
            frames,
            listeners,
            mounted: true,
        })
    }

    fn wire(
        window: &web::Window,
        state: &Rc<RefCell<GalleryState>>,
        dom_tree: &Rc<RefCell<GalleryDom>>,
        config: &GalleryConfig,
    ) -> anyhow::Result<(Rc<RefCell<Autoplay<WebIntervalHost>>>, Vec<Listener>, FrameLoop)> {
        let state_tick = state.clone();
        let host_timer = WebIntervalHost::new(move || state_tick.borrow_mut().autoplay_tick())?;
        let autoplay = Rc::new(RefCell::new(Autoplay::new(host_timer, config)));

        let mut listeners = events::wire_input_handlers(&events::InputWiring {
            cylinder: dom_tree.borrow().cylinder().clone(),
            state: state.clone(),
            autoplay: autoplay.clone(),
        })?;
        listeners.push(events::wire_resize(window, state.clone(), dom_tree.clone())?);

        autoplay.borrow_mut().resume()?;
        let frames = FrameLoop::start(FrameContext {
            state: state.clone(),
            dom: dom_tree.clone(),
            last_instant: Instant::now(),
        });
        Ok((autoplay, listeners, frames))
    }

    pub fn angle(&self) -> f64 {
        self.state.borrow().angle()
    }

    pub fn face_count(&self) -> usize {
        self.dom.borrow().face_count()
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.autoplay.borrow_mut().shutdown();
        self.frames.stop();
        self.listeners.clear();
        self.dom.borrow_mut().remove();
        log::info!("[gallery] unmounted");
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        self.unmount();
    }
}
