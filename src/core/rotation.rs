/// The cylinder orientation in degrees, unbounded.
///
/// Drag, settle and autoplay all write through [`Rotation::apply`], so every
/// writer composes onto the current value instead of replacing it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    angle_deg: f64,
}

impl Rotation {
    pub fn new(angle_deg: f64) -> Self {
        Self { angle_deg }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle_deg
    }

    #[inline]
    pub fn apply(&mut self, delta_deg: f64) -> f64 {
        if delta_deg.is_finite() {
            self.angle_deg += delta_deg;
        }
        self.angle_deg
    }
}
