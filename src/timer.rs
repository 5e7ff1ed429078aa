use crate::core::IntervalHost;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setInterval`-backed host for the autoplay tick.
pub struct WebIntervalHost {
    window: web::Window,
    tick: Closure<dyn FnMut()>,
}

impl WebIntervalHost {
    pub fn new(tick: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        Ok(Self {
            window,
            tick: Closure::wrap(Box::new(tick) as Box<dyn FnMut()>),
        })
    }
}

impl IntervalHost for WebIntervalHost {
    type Handle = i32;

    fn start(&mut self, period_ms: i32) -> anyhow::Result<i32> {
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.tick.as_ref().unchecked_ref::<js_sys::Function>(),
                period_ms,
            )
            .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))
    }

    fn stop(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}
