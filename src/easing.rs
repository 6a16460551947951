//! Easing curves for slide transitions

/// Curve applied to the normalized progress of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Maps progress `t` in `[0, 1]` onto the curve. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => linear(t),
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::EaseInOutCubic => ease_in_out(t),
        }
    }
}

#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic];

    proptest! {
        #[test]
        fn easing_bounded_output(t in 0.0f32..=1.0) {
            for easing in ALL {
                let result = easing.apply(t);
                prop_assert!((0.0..=1.0).contains(&result), "{:?}({}) = {}", easing, t, result);
            }
        }

        #[test]
        fn easing_monotonic(t1 in 0.0f32..=1.0, t2 in 0.0f32..=1.0) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            for easing in ALL {
                prop_assert!(
                    easing.apply(lo) <= easing.apply(hi) + 0.001,
                    "{:?} not monotonic: f({}) > f({})",
                    easing, lo, hi
                );
            }
        }
    }
}
