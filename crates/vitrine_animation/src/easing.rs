//! Easing curves for scroll animations

/// Maps linear progress onto an eased progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// Exponential ease in and out, used for anchor and back-to-top scrolling
    EaseInOutExpo,
}

impl Easing {
    /// Apply the curve to a progress value in `0.0..=1.0`
    ///
    /// Input outside the range is clamped; endpoints map exactly to 0.0 and 1.0.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutExpo => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expo_endpoints_and_midpoint() {
        let expo = Easing::EaseInOutExpo;
        assert_eq!(expo.apply(0.0), 0.0);
        assert_eq!(expo.apply(1.0), 1.0);
        assert!((expo.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_expo_is_slow_at_the_edges() {
        let expo = Easing::EaseInOutExpo;
        assert!(expo.apply(0.1) < 0.01);
        assert!(expo.apply(0.9) > 0.99);
    }

    #[test]
    fn test_expo_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let value = Easing::EaseInOutExpo.apply(i as f64 / 100.0);
            assert!(value + 1e-12 >= last, "decreased at step {i}");
            last = value;
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInOutExpo.apply(2.0), 1.0);
    }
}
