#![cfg(target_arch = "wasm32")]
use crate::core::GalleryConfig;
use crate::mount::Gallery;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod mount;
mod render;
mod styles;
mod timer;

thread_local! {
    // Galleries discovered through `data-rolling-gallery` on start
    static AUTO_MOUNTED: RefCell<Vec<Gallery>> = RefCell::new(Vec::new());
}

/// A mounted gallery owned by JavaScript. Dropping or destroying it unmounts.
#[wasm_bindgen]
pub struct GalleryHandle {
    inner: Option<Gallery>,
}

#[wasm_bindgen]
impl GalleryHandle {
    /// Current rotation in degrees (unbounded).
    pub fn angle(&self) -> f64 {
        self.inner.as_ref().map(Gallery::angle).unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = faceCount)]
    pub fn face_count(&self) -> usize {
        self.inner.as_ref().map(Gallery::face_count).unwrap_or(0)
    }

    /// Remove the gallery and release its timer, frame loop and listeners.
    pub fn destroy(&mut self) {
        self.inner.take();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rolling-gallery starting");

    if let Err(e) = auto_mount() {
        log::error!("[gallery] auto-mount error: {:?}", e);
    }
    Ok(())
}

/// Mount a gallery inside the element with id `element_id`.
///
/// `config_json` takes `{"autoplay", "pauseOnHover", "images"}`; omitted
/// fields use their defaults.
#[wasm_bindgen(js_name = mountGallery)]
pub fn mount_gallery(element_id: &str, config_json: Option<String>) -> Result<GalleryHandle, JsValue> {
    mount_by_id(element_id, config_json.as_deref().unwrap_or(""))
        .map(|gallery| GalleryHandle {
            inner: Some(gallery),
        })
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Tear down every gallery mounted from `data-rolling-gallery` markup.
#[wasm_bindgen(js_name = unmountAll)]
pub fn unmount_all() {
    let galleries = AUTO_MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    log::info!("[gallery] unmounting {} auto-mounted galleries", galleries.len());
    drop(galleries);
}

fn mount_by_id(element_id: &str, config_json: &str) -> anyhow::Result<Gallery> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let host = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?;
    let config = GalleryConfig::from_json(config_json)?;
    Gallery::mount(&host, &config)
}

fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let nodes = document
        .query_selector_all(constants::AUTO_MOUNT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..nodes.length() {
        let Some(host) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        match mount_from_attributes(&host) {
            Ok(gallery) => AUTO_MOUNTED.with(|m| m.borrow_mut().push(gallery)),
            Err(e) => log::error!("[gallery] skipping element {}: {:#}", i, e),
        }
    }
    Ok(())
}

fn mount_from_attributes(host: &web::Element) -> anyhow::Result<Gallery> {
    let autoplay = host.get_attribute(constants::ATTR_AUTOPLAY);
    let pause = host.get_attribute(constants::ATTR_PAUSE_ON_HOVER);
    let images = host.get_attribute(constants::ATTR_IMAGES);
    let config = GalleryConfig::from_attributes(
        autoplay.as_deref(),
        pause.as_deref(),
        images.as_deref(),
    )?;
    Gallery::mount(host, &config)
}
