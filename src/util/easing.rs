//! Easing curves applied to hard-snap progress.

/// Easing function variants for snap interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    /// Progress is used as-is.
    Linear,
    /// Hermite smoothstep: `3t² - 2t³`.
    SmoothStep,
}

impl EasingFunction {
    /// Curve used by the hard-snap controller for a given smoothing flag.
    #[must_use]
    pub fn for_smoothing(smooth: bool) -> Self {
        if smooth {
            Self::SmoothStep
        } else {
            Self::Linear
        }
    }

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::SmoothStep
    }
}
