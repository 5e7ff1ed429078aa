use super::constants::{
    SPRING_DAMPING, SPRING_MASS, SPRING_MAX_FRAME_SEC, SPRING_REST_DELTA_DEG,
    SPRING_REST_SPEED_DEG, SPRING_STIFFNESS, SPRING_SUBSTEP_SEC,
};
use super::rotation::Rotation;

/// Damped spring constants. The settle animation always uses
/// [`SpringParams::SETTLE`]; they are not configurable per gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringParams {
    pub const SETTLE: SpringParams = SpringParams {
        stiffness: SPRING_STIFFNESS,
        damping: SPRING_DAMPING,
        mass: SPRING_MASS,
    };

    /// Damping ratio; above 1.0 the spring approaches its target without overshoot.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Spring-driven ease of the rotation toward a resting angle after a release.
///
/// Advanced explicitly by [`SettleAnimation::step`] from the frame loop. The
/// spring reads the live angle every sub-step and writes only deltas, so other
/// writers (autoplay) are never overwritten.
#[derive(Clone, Debug)]
pub struct SettleAnimation {
    params: SpringParams,
    target: f64,
    velocity: f64,
    active: bool,
}

impl Default for SettleAnimation {
    fn default() -> Self {
        Self {
            params: SpringParams::SETTLE,
            target: 0.0,
            velocity: 0.0,
            active: false,
        }
    }
}

impl SettleAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, target_deg: f64) {
        self.target = target_deg;
        self.velocity = 0.0;
        self.active = true;
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.velocity = 0.0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn target(&self) -> Option<f64> {
        self.active.then_some(self.target)
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Move the resting point along with an external writer.
    pub fn shift_target(&mut self, delta_deg: f64) {
        if self.active {
            self.target += delta_deg;
        }
    }

    /// Advance by `dt_sec` of wall time. Returns whether still animating.
    pub fn step(&mut self, dt_sec: f64, rotation: &mut Rotation) -> bool {
        if !self.active {
            return false;
        }
        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;
        let mut remaining = dt_sec.clamp(0.0, SPRING_MAX_FRAME_SEC);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let displacement = rotation.angle() - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += accel * h;
            rotation.apply(self.velocity * h);
            remaining -= h;
        }

        let offset = self.target - rotation.angle();
        if offset.abs() < SPRING_REST_DELTA_DEG && self.velocity.abs() < SPRING_REST_SPEED_DEG {
            rotation.apply(offset);
            self.cancel();
        }
        self.active
    }
}
