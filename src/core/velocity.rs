use super::constants::VELOCITY_WINDOW_MS;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    t_ms: f64,
    x: f64,
}

/// Horizontal pointer velocity over a short trailing window.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn push(&mut self, t_ms: f64, x: f64) {
        // Event timestamps can repeat or step backwards across coalesced events
        if let Some(last) = self.samples.back() {
            if t_ms < last.t_ms {
                return;
            }
        }
        self.samples.push_back(Sample { t_ms, x });
        while let Some(front) = self.samples.front() {
            if t_ms - front.t_ms > VELOCITY_WINDOW_MS && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Velocity in px/s as seen at `now_ms`. A pointer that has been still
    /// for longer than the window reports zero.
    pub fn velocity_at(&self, now_ms: f64) -> f64 {
        let Some(newest) = self.samples.back() else {
            return 0.0;
        };
        if now_ms - newest.t_ms > VELOCITY_WINDOW_MS {
            return 0.0;
        }
        let oldest = self
            .samples
            .iter()
            .find(|s| newest.t_ms - s.t_ms <= VELOCITY_WINDOW_MS)
            .unwrap_or(newest);
        let dt_sec = (newest.t_ms - oldest.t_ms) / 1000.0;
        if dt_sec <= 0.0 {
            return 0.0;
        }
        (newest.x - oldest.x) / dt_sec
    }
}
