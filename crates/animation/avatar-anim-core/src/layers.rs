//! Smoothed combat-layer weight, decoupled from discrete transitions.

/// Exponential chase of the combat layer weight toward 0 or 1. Runs every
/// frame in the late phase, including frames with no discrete events; this
/// is what makes equip/unequip a blend instead of a snap.
#[derive(Clone, Debug)]
pub struct LayerWeightBlender {
    weight: f32,
    rate: f32,
}

impl LayerWeightBlender {
    pub fn new(rate: f32) -> Self {
        Self { weight: 0.0, rate }
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Resume smoothing from the playback service's actual weight so an
    /// instant layer flip never produces a visible weight jump.
    pub fn sync(&mut self, weight: f32) {
        self.weight = weight.clamp(0.0, 1.0);
    }

    /// Advance one frame toward `target`. The blend factor is clamped so a
    /// large `dt * rate` converges instead of overshooting.
    pub fn step(&mut self, dt: f32, target: f32) -> f32 {
        let t = (dt * self.rate).clamp(0.0, 1.0);
        self.weight += (target - self.weight) * t;
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_converges_without_overshoot() {
        let mut blender = LayerWeightBlender::new(10.0);
        let mut previous = 0.0;
        for _ in 0..120 {
            let w = blender.step(1.0 / 60.0, 1.0);
            assert!(w >= previous);
            assert!(w <= 1.0);
            previous = w;
        }
        assert!((1.0 - previous).abs() < 1e-3);
    }

    #[test]
    fn oversized_factor_is_clamped() {
        let mut blender = LayerWeightBlender::new(10.0);
        // dt * rate = 5.0 would overshoot past the target unclamped.
        assert_eq!(blender.step(0.5, 1.0), 1.0);
    }

    #[test]
    fn sync_clamps_into_unit_range() {
        let mut blender = LayerWeightBlender::new(10.0);
        blender.sync(1.5);
        assert_eq!(blender.weight(), 1.0);
    }
}
