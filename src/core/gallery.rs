use super::config::GalleryConfig;
use super::constants::{AUTOPLAY_STEP_DEG, DRAG_FACTOR, DRAG_THRESHOLD_PX};
use super::layout::{cylinder_transform, CylinderLayout, ViewportClass};
use super::rotation::Rotation;
use super::spring::SettleAnimation;
use super::velocity::VelocityTracker;

/// Where the gallery is in its drag/settle cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Pointer down, not yet moved past the drag threshold.
    Pressed,
    Dragging,
    Settling,
}

#[derive(Clone, Copy, Debug)]
struct DragSession {
    pointer_id: i32,
    origin_x: f64,
    applied_offset: f64,
    dragging: bool,
}

/// Platform-free state of one mounted gallery.
///
/// Every input (pointer, autoplay tick, frame step, resize) is a method here;
/// the browser layer only translates DOM events into these calls and renders
/// the result.
#[derive(Clone, Debug)]
pub struct GalleryState {
    images: Vec<String>,
    viewport: ViewportClass,
    layout: CylinderLayout,
    rotation: Rotation,
    settle: SettleAnimation,
    velocity: VelocityTracker,
    drag: Option<DragSession>,
}

impl GalleryState {
    pub fn new(config: &GalleryConfig, viewport_width: f64) -> Self {
        let images = config.image_urls();
        let viewport = ViewportClass::from_width(viewport_width);
        Self {
            layout: CylinderLayout::compute(images.len(), viewport),
            images,
            viewport,
            rotation: Rotation::default(),
            settle: SettleAnimation::new(),
            velocity: VelocityTracker::new(),
            drag: None,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn layout(&self) -> &CylinderLayout {
        &self.layout
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.rotation.angle()
    }

    pub fn settle_target(&self) -> Option<f64> {
        self.settle.target()
    }

    pub fn phase(&self) -> Phase {
        match self.drag {
            Some(DragSession { dragging: true, .. }) => Phase::Dragging,
            Some(_) => Phase::Pressed,
            None if self.settle.is_active() => Phase::Settling,
            None => Phase::Idle,
        }
    }

    pub fn container_transform(&self) -> String {
        cylinder_transform(self.rotation.angle())
    }

    /// Reclassify the viewport. Returns `true` when the layout changed.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let class = ViewportClass::from_width(viewport_width);
        if class == self.viewport {
            return false;
        }
        self.viewport = class;
        self.layout = CylinderLayout::compute(self.images.len(), class);
        true
    }

    /// Pointer went down on the cylinder. Interrupts any settle in progress.
    pub fn press(&mut self, pointer_id: i32, x: f64, t_ms: f64) {
        if self.drag.is_some() {
            return;
        }
        self.settle.cancel();
        self.velocity.reset();
        self.velocity.push(t_ms, x);
        self.drag = Some(DragSession {
            pointer_id,
            origin_x: x,
            applied_offset: 0.0,
            dragging: false,
        });
    }

    /// Pointer moved. Only the horizontal coordinate is consulted. Returns
    /// `true` if the rotation changed.
    pub fn move_to(&mut self, pointer_id: i32, x: f64, t_ms: f64) -> bool {
        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        if session.pointer_id != pointer_id {
            return false;
        }
        self.velocity.push(t_ms, x);
        let offset = x - session.origin_x;
        if !session.dragging {
            if offset.abs() < DRAG_THRESHOLD_PX {
                return false;
            }
            session.dragging = true;
            log::debug!("[drag] start pointer={}", pointer_id);
        }
        let delta = (offset - session.applied_offset) * DRAG_FACTOR;
        session.applied_offset = offset;
        self.rotation.apply(delta);
        delta != 0.0
    }

    /// Pointer released. A real drag hands over to the settle spring, aimed
    /// at the current angle plus the release velocity contribution.
    pub fn release(&mut self, pointer_id: i32, t_ms: f64) -> Option<f64> {
        match self.drag {
            Some(session) if session.pointer_id == pointer_id => {
                self.drag = None;
                if !session.dragging {
                    return None;
                }
                let velocity_x = self.velocity.velocity_at(t_ms);
                let target = self.rotation.angle() + velocity_x * DRAG_FACTOR;
                self.settle.start(target);
                log::debug!(
                    "[drag] release vx={:.1}px/s target={:.2}deg",
                    velocity_x,
                    target
                );
                Some(target)
            }
            _ => None,
        }
    }

    /// The browser took the pointer away; keep the angle where it is.
    pub fn cancel(&mut self, pointer_id: i32) {
        if matches!(self.drag, Some(s) if s.pointer_id == pointer_id) {
            self.drag = None;
            self.velocity.reset();
        }
    }

    pub fn autoplay_tick(&mut self) {
        self.rotation.apply(-AUTOPLAY_STEP_DEG);
        self.settle.shift_target(-AUTOPLAY_STEP_DEG);
    }

    /// Step the settle animation. Returns `true` while it is still running.
    pub fn advance(&mut self, dt_sec: f64) -> bool {
        self.settle.step(dt_sec, &mut self.rotation)
    }
}
