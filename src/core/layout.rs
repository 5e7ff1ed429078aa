use super::constants::{CYLINDER_WIDTH_LARGE, CYLINDER_WIDTH_SMALL, SMALL_VIEWPORT_MAX_PX};
use std::f64::consts::PI;

/// Coarse viewport size bucket that drives the cylinder width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Small,
    Large,
}

impl ViewportClass {
    #[inline]
    pub fn from_width(width_px: f64) -> Self {
        if width_px <= SMALL_VIEWPORT_MAX_PX {
            ViewportClass::Small
        } else {
            ViewportClass::Large
        }
    }

    #[inline]
    pub fn cylinder_width(self) -> f64 {
        match self {
            ViewportClass::Small => CYLINDER_WIDTH_SMALL,
            ViewportClass::Large => CYLINDER_WIDTH_LARGE,
        }
    }
}

/// Derived placement of faces around the cylinder.
///
/// `angle_per_face` is `None` when there are no faces; callers render
/// nothing in that case instead of emitting a non-finite transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderLayout {
    pub face_count: usize,
    pub cylinder_width: f64,
    pub radius: f64,
    pub angle_per_face: Option<f64>,
}

impl CylinderLayout {
    pub fn compute(face_count: usize, viewport: ViewportClass) -> Self {
        let cylinder_width = viewport.cylinder_width();
        let angle_per_face = (face_count > 0).then(|| 360.0 / face_count as f64);
        Self {
            face_count,
            cylinder_width,
            radius: cylinder_width / (2.0 * PI),
            angle_per_face,
        }
    }

    /// Rotation of face `index` around the Y axis, in degrees.
    #[inline]
    pub fn face_angle(&self, index: usize) -> Option<f64> {
        if index >= self.face_count {
            return None;
        }
        self.angle_per_face.map(|a| a * index as f64)
    }

    /// Static CSS transform placing face `index` on the cylinder.
    pub fn face_transform(&self, index: usize) -> Option<String> {
        self.face_angle(index)
            .map(|deg| format!("rotateY({}deg) translateZ({}px)", deg, self.radius))
    }

    pub fn face_transforms(&self) -> Vec<String> {
        (0..self.face_count)
            .filter_map(|i| self.face_transform(i))
            .collect()
    }

    /// Pivot for the cylinder container so it spins around its own axis.
    pub fn transform_origin(&self) -> String {
        format!("50% 50% -{}px", self.radius)
    }
}

/// Live transform applied to the cylinder container.
#[inline]
pub fn cylinder_transform(angle_deg: f64) -> String {
    format!("rotate3d(0, 1, 0, {}deg)", angle_deg)
}
