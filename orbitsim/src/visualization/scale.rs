//! Linear range remapping from physical coordinates to display coordinates.

use crate::simulation::error::SimError;
use crate::simulation::states::NVec3;

/// `(value - source_min) * (target_max - target_min) / (source_max - source_min) + target_min`
pub fn linear_scale(
    value: f64,
    source_min: f64,
    source_max: f64,
    target_min: f64,
    target_max: f64,
) -> Result<f64, SimError> {
    LinearScale::new((source_min, source_max), (target_min, target_max)).map(|s| s.apply(value))
}

/// A validated pair of ranges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    source: (f64, f64),
    target: (f64, f64),
}

impl LinearScale {
    /// Fails if the source range has zero width
    pub fn new(source: (f64, f64), target: (f64, f64)) -> Result<Self, SimError> {
        if source.1 == source.0 {
            return Err(SimError::DegenerateRange { min: source.0, max: source.1 });
        }
        Ok(Self { source, target })
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (s0, s1) = self.source;
        let (t0, t1) = self.target;
        (value - s0) * (t1 - t0) / (s1 - s0) + t0
    }

    /// Map a target-range value back into the source range
    pub fn invert(&self, value: f64) -> Result<f64, SimError> {
        LinearScale::new(self.target, self.source).map(|s| s.apply(value))
    }
}

/// Projects the x/y plane of physical space onto a pixel grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Viewport {
    /// Square window of `pixels` on a side covering `[-half_extent, half_extent]` metres
    pub fn square(half_extent: f64, pixels: f64) -> Result<Self, SimError> {
        let scale = LinearScale::new((-half_extent, half_extent), (0.0, pixels))?;
        Ok(Self { x: scale, y: scale })
    }

    pub fn project(&self, position: &NVec3) -> [f64; 2] {
        [self.x.apply(position.x), self.y.apply(position.y)]
    }
}

impl Default for Viewport {
    /// 1000 px covering +-2.5e11 m, roughly the orbit of Mars
    fn default() -> Self {
        let scale = LinearScale {
            source: (-2.5e11, 2.5e11),
            target: (0.0, 1000.0),
        };
        Self { x: scale, y: scale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_and_midpoint() {
        assert_relative_eq!(linear_scale(-2.5e11, -2.5e11, 2.5e11, 0.0, 1000.0).unwrap(), 0.0);
        assert_relative_eq!(linear_scale(2.5e11, -2.5e11, 2.5e11, 0.0, 1000.0).unwrap(), 1000.0);
        assert_relative_eq!(linear_scale(0.0, -2.5e11, 2.5e11, 0.0, 1000.0).unwrap(), 500.0);
    }

    #[test]
    fn reversed_target_range_flips() {
        assert_relative_eq!(linear_scale(1.0, 0.0, 4.0, 10.0, 0.0).unwrap(), 7.5);
    }

    #[test]
    fn round_trip_returns_original() {
        let (a, b, c, d) = (-3.0, 7.0, 100.0, -20.0);
        for v in [-3.0, -1.25, 0.0, 2.5, 6.999, 7.0] {
            let there = linear_scale(v, a, b, c, d).unwrap();
            let back = linear_scale(there, c, d, a, b).unwrap();
            assert_relative_eq!(back, v, epsilon = 1e-12);
        }

        let s = LinearScale::new((a, b), (c, d)).unwrap();
        assert_relative_eq!(s.invert(s.apply(1.5)).unwrap(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_width_source_is_an_error() {
        let err = linear_scale(1.0, 2.0, 2.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err, SimError::DegenerateRange { min: 2.0, max: 2.0 });

        let collapsed = LinearScale::new((0.0, 1.0), (5.0, 5.0)).unwrap();
        assert!(collapsed.invert(5.0).is_err());
    }

    #[test]
    fn viewport_centres_origin() {
        let vp = Viewport::default();
        assert_eq!(vp.project(&NVec3::zeros()), [500.0, 500.0]);
        assert_eq!(Viewport::square(2.5e11, 1000.0).unwrap(), vp);
    }
}
