/// Easing curves available to transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Quadratic ease-in for the first half of the duration, ease-out for the second.
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Apply the easing curve to a linear fraction, clamped to `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseInOutQuad => {
                // Progress measured in half-durations.
                let t = fraction * 2.0;
                if t < 1.0 {
                    0.5 * t * t
                } else {
                    let t = t - 1.0;
                    -0.5 * (t * (t - 2.0) - 1.0)
                }
            }
        }
    }

    /// Value between `from` and `to` after `elapsed_millis` of a tween lasting
    /// `duration_millis`. Elapsed time past the duration pins the value to `to`.
    pub fn interpolate(&self, elapsed_millis: u64, from: f32, to: f32, duration_millis: u64) -> f32 {
        if elapsed_millis >= duration_millis {
            return to;
        }
        let fraction = elapsed_millis as f32 / duration_millis as f32;
        from + (to - from) * self.transform(fraction)
    }
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
