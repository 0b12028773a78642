//! Effect parameters and the per-render coefficients derived from them.

use serde::{Deserialize, Serialize};

/// Slider state for the three effects.
///
/// The UI drives each field over `0..=100`, but values are plain floats and
/// are never validated here: out-of-range input extrapolates the effect
/// (negative curvature pushes outward instead of pulling inward, contrast
/// beyond the transfer-function pole flips sign) rather than erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectParams {
    /// Blend weight toward the sepia-toned reinterpretation of the pixel.
    pub sepia: f32,
    /// Contrast adjustment strength (0 = identity).
    pub contrast: f32,
    /// Strength of the inverse-radial lens warp (0 = no warp).
    pub curvature: f32,
}

impl EffectParams {
    pub fn new(sepia: f32, contrast: f32, curvature: f32) -> Self {
        Self {
            sepia,
            contrast,
            curvature,
        }
    }

    /// True when all three sliders sit at their identity position.
    pub fn is_identity(&self) -> bool {
        self.sepia == 0.0 && self.contrast == 0.0 && self.curvature == 0.0
    }
}

/// Coefficients derived once per render from the slider values.
#[derive(Debug, Clone, Copy)]
pub struct Coefficients {
    pub curvature_strength: f32,
    pub sepia_intensity: f32,
    pub contrast_factor: f32,
}

impl Coefficients {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            curvature_strength: params.curvature / 50.0,
            sepia_intensity: params.sepia / 100.0,
            // Standard photographic contrast transfer. The pole at
            // contrast = 259 yields a non-finite factor that flows through
            // the pixel math unguarded and saturates at the 8-bit store.
            contrast_factor: (259.0 * (params.contrast + 255.0))
                / (255.0 * (259.0 - params.contrast)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_identity() {
        let p = EffectParams::default();
        assert!(p.is_identity());
        let c = Coefficients::from_params(&p);
        assert_eq!(c.curvature_strength, 0.0);
        assert_eq!(c.sepia_intensity, 0.0);
        assert_eq!(c.contrast_factor, 1.0);
    }

    #[test]
    fn slider_maximums() {
        let c = Coefficients::from_params(&EffectParams::new(100.0, 0.0, 50.0));
        assert_eq!(c.sepia_intensity, 1.0);
        assert_eq!(c.curvature_strength, 1.0);
    }

    #[test]
    fn contrast_factor_grows_with_contrast() {
        let mut prev = Coefficients::from_params(&EffectParams::new(0.0, 0.0, 0.0)).contrast_factor;
        for contrast in [25.0, 50.0, 75.0, 100.0] {
            let f = Coefficients::from_params(&EffectParams::new(0.0, contrast, 0.0))
                .contrast_factor;
            assert!(f > prev, "factor should increase at contrast {contrast}");
            prev = f;
        }
    }

    #[test]
    fn contrast_pole_is_not_guarded() {
        let c = Coefficients::from_params(&EffectParams::new(0.0, 259.0, 0.0));
        assert!(!c.contrast_factor.is_finite());
        // Past the pole the denominator goes negative and the sign flips.
        let c = Coefficients::from_params(&EffectParams::new(0.0, 300.0, 0.0));
        assert!(c.contrast_factor < 0.0);
    }
}
