use super::config::GalleryConfig;
use super::constants::AUTOPLAY_TICK_MS;

/// Something that can run a repeating callback and cancel it again.
///
/// The browser implementation wraps `setInterval`/`clearInterval`; tests use
/// an in-memory host.
pub trait IntervalHost {
    type Handle;

    fn start(&mut self, period_ms: i32) -> anyhow::Result<Self::Handle>;
    fn stop(&mut self, handle: Self::Handle);
}

/// Owns the autoplay interval and the hover pause.
///
/// At most one interval is ever live: every start first clears any handle it
/// already holds.
pub struct Autoplay<H: IntervalHost> {
    host: H,
    handle: Option<H::Handle>,
    enabled: bool,
    pause_on_hover: bool,
    hovered: bool,
}

impl<H: IntervalHost> Autoplay<H> {
    pub fn new(host: H, config: &GalleryConfig) -> Self {
        Self {
            host,
            handle: None,
            enabled: config.autoplay,
            pause_on_hover: config.pauses_on_hover(),
            hovered: false,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.pause_on_hover && self.hovered
    }

    /// Start ticking if enabled and not hover-paused.
    pub fn resume(&mut self) -> anyhow::Result<()> {
        self.halt();
        if !self.enabled || self.is_paused() {
            return Ok(());
        }
        self.handle = Some(self.host.start(AUTOPLAY_TICK_MS)?);
        log::debug!("[autoplay] interval started ({} ms)", AUTOPLAY_TICK_MS);
        Ok(())
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.pause_on_hover && self.is_running() {
            self.halt();
            log::debug!("[autoplay] paused on hover");
        }
    }

    pub fn pointer_leave(&mut self) -> anyhow::Result<()> {
        let was_paused = self.is_paused();
        self.hovered = false;
        if was_paused && self.enabled {
            self.resume()?;
        }
        Ok(())
    }

    /// Release the interval for good; later hover changes do not restart it.
    pub fn shutdown(&mut self) {
        self.halt();
        self.enabled = false;
    }

    fn halt(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.stop(handle);
        }
    }
}

impl<H: IntervalHost> Drop for Autoplay<H> {
    fn drop(&mut self) {
        self.halt();
    }
}
