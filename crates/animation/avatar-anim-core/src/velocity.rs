//! Frame-to-frame velocity derivation from sampled position.

/// Differentiates position once per frame. The first sample after a reset
/// yields zero velocity; there is no previous position to difference
/// against.
#[derive(Clone, Debug, Default)]
pub struct VelocityProbe {
    last_position: Option<[f32; 3]>,
    velocity: [f32; 3],
}

impl VelocityProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity(&self) -> [f32; 3] {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        let [x, y, z] = self.velocity;
        (x * x + y * y + z * z).sqrt()
    }

    /// Record `position` for this frame and return the derived velocity.
    pub fn sample(&mut self, position: [f32; 3], dt: f32) -> [f32; 3] {
        if let Some(last) = self.last_position {
            if dt > 0.0 {
                self.velocity = [
                    (position[0] - last[0]) / dt,
                    (position[1] - last[1]) / dt,
                    (position[2] - last[2]) / dt,
                ];
            }
        }
        self.last_position = Some(position);
        self.velocity
    }

    /// Forget the previous sample (teleports, re-attach).
    pub fn reset(&mut self) {
        self.last_position = None;
        self.velocity = [0.0; 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_yields_zero() {
        let mut probe = VelocityProbe::new();
        assert_eq!(probe.sample([5.0, 0.0, 0.0], 0.016), [0.0; 3]);
        assert_eq!(probe.speed(), 0.0);
    }

    #[test]
    fn differentiates_position() {
        let mut probe = VelocityProbe::new();
        probe.sample([0.0, 0.0, 0.0], 0.5);
        let v = probe.sample([1.0, 0.0, 0.0], 0.5);
        assert_eq!(v, [2.0, 0.0, 0.0]);
        assert_eq!(probe.speed(), 2.0);
    }

    #[test]
    fn reset_clears_history() {
        let mut probe = VelocityProbe::new();
        probe.sample([0.0, 0.0, 0.0], 0.5);
        probe.sample([1.0, 0.0, 0.0], 0.5);
        probe.reset();
        assert_eq!(probe.sample([9.0, 0.0, 0.0], 0.5), [0.0; 3]);
    }
}
