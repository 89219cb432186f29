use thiserror::Error;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;
pub const DEFAULT_SPEED_MPS: f64 = 20.0;

/// Launch angle that maximizes flat-ground range for any speed.
pub const OPTIMAL_ANGLE_DEG: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("gravity must be positive, got {0} m/s^2")]
    Gravity(f64),
    #[error("initial speed must be finite, got {0} m/s")]
    Speed(f64),
    #[error("an angle sweep needs at least 2 samples, got {0}")]
    SampleCount(usize),
    #[error("invalid angle interval [{lo}, {hi}]: bounds must be finite with lo <= hi")]
    AngleInterval { lo: f64, hi: f64 },
}

fn check_gravity(gravity_mps2: f64) -> Result<(), DomainError> {
    // NaN fails the comparison as well.
    if gravity_mps2 > 0.0 {
        Ok(())
    } else {
        Err(DomainError::Gravity(gravity_mps2))
    }
}

fn range_unchecked(angle_deg: f64, speed_mps: f64, gravity_mps2: f64) -> f64 {
    let two_theta = 2.0 * angle_deg.to_radians();
    (speed_mps * speed_mps * two_theta.sin()) / gravity_mps2
}

/// Horizontal distance covered before returning to launch height, in meters.
///
/// Any angle and speed is accepted; only a non-positive gravity is rejected.
pub fn range(angle_deg: f64, speed_mps: f64, gravity_mps2: f64) -> Result<f64, DomainError> {
    check_gravity(gravity_mps2)?;
    Ok(range_unchecked(angle_deg, speed_mps, gravity_mps2))
}

/// Element-wise [`range`] over `angles`, preserving order and length.
pub fn sample_ranges(
    angles: &[f64],
    speed_mps: f64,
    gravity_mps2: f64,
) -> Result<Vec<f64>, DomainError> {
    check_gravity(gravity_mps2)?;
    Ok(angles
        .iter()
        .map(|&angle_deg| range_unchecked(angle_deg, speed_mps, gravity_mps2))
        .collect())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    gravity_mps2: f64,
    speed_mps: f64,
}

impl PhysicalConstants {
    /// Negative speeds are allowed (range is sign-invariant); an infinite or
    /// NaN speed would poison every sample and is rejected.
    pub fn new(gravity_mps2: f64, speed_mps: f64) -> Result<Self, DomainError> {
        check_gravity(gravity_mps2)?;
        if !speed_mps.is_finite() {
            return Err(DomainError::Speed(speed_mps));
        }
        Ok(Self {
            gravity_mps2,
            speed_mps,
        })
    }

    pub fn gravity_mps2(&self) -> f64 {
        self.gravity_mps2
    }

    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    pub fn range_at(&self, angle_deg: f64) -> f64 {
        range_unchecked(angle_deg, self.speed_mps, self.gravity_mps2)
    }

    pub fn max_range(&self) -> f64 {
        (self.speed_mps * self.speed_mps) / self.gravity_mps2
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravity_mps2: EARTH_GRAVITY_MPS2,
            speed_mps: DEFAULT_SPEED_MPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn forty_five_degrees_gives_maximum_range() {
        let r = range(45.0, 20.0, 9.81).expect("gravity is valid");
        assert_close(r, 40.77, 0.01);
        assert_close(r, 400.0 / 9.81, 1e-12);
    }

    #[test]
    fn thirty_degrees_matches_known_value() {
        let r = range(30.0, 20.0, 9.81).expect("gravity is valid");
        assert_close(r, 35.31, 0.01);
    }

    #[test]
    fn level_and_reversed_launches_land_at_origin() {
        assert_close(range(0.0, 20.0, 9.81).unwrap(), 0.0, 1e-12);
        assert_close(range(180.0, 20.0, 9.81).unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn zero_speed_has_zero_range() {
        for angle in [0.0, 12.5, 45.0, 77.0, 90.0] {
            assert_eq!(range(angle, 0.0, 9.81).unwrap(), 0.0);
        }
    }

    #[test]
    fn negative_speed_is_sign_invariant() {
        let forward = range(30.0, 20.0, 9.81).unwrap();
        let backward = range(30.0, -20.0, 9.81).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn rejects_non_positive_gravity() {
        assert_eq!(range(45.0, 20.0, 0.0), Err(DomainError::Gravity(0.0)));
        assert_eq!(range(45.0, 20.0, -9.81), Err(DomainError::Gravity(-9.81)));
        assert!(matches!(
            range(45.0, 20.0, f64::NAN),
            Err(DomainError::Gravity(g)) if g.is_nan()
        ));
        assert!(PhysicalConstants::new(0.0, 20.0).is_err());
        assert!(sample_ranges(&[0.0, 45.0], 20.0, -1.0).is_err());
    }

    #[test]
    fn constants_reject_non_finite_speed() {
        assert_eq!(
            PhysicalConstants::new(9.81, f64::INFINITY),
            Err(DomainError::Speed(f64::INFINITY))
        );
        assert!(matches!(
            PhysicalConstants::new(9.81, f64::NAN),
            Err(DomainError::Speed(v)) if v.is_nan()
        ));
        assert!(PhysicalConstants::new(9.81, -20.0).is_ok());
    }

    #[test]
    fn sample_ranges_keeps_alignment() {
        let angles = [0.0, 30.0, 45.0, 60.0, 90.0];
        let ranges = sample_ranges(&angles, 20.0, 9.81).unwrap();
        assert_eq!(ranges.len(), angles.len());
        for (angle, r) in angles.iter().zip(&ranges) {
            assert_eq!(*r, range(*angle, 20.0, 9.81).unwrap());
        }
        assert_close(ranges[1], ranges[3], 1e-9);
    }

    #[test]
    fn constants_default_to_earth_and_twenty_mps() {
        let constants = PhysicalConstants::default();
        assert_eq!(constants.gravity_mps2(), 9.81);
        assert_eq!(constants.speed_mps(), 20.0);
        assert_close(constants.range_at(OPTIMAL_ANGLE_DEG), constants.max_range(), 1e-12);
    }

    proptest! {
        #[test]
        fn complementary_angles_share_range(
            angle in 0.0f64..=90.0,
            speed in 0.0f64..500.0,
            gravity in 0.1f64..50.0,
        ) {
            let a = range(angle, speed, gravity).unwrap();
            let b = range(90.0 - angle, speed, gravity).unwrap();
            let tolerance = 1e-9 * (speed * speed / gravity).max(1.0);
            prop_assert!((a - b).abs() <= tolerance, "{a} vs {b}");
        }

        #[test]
        fn peak_is_speed_squared_over_gravity(
            speed in 0.0f64..500.0,
            gravity in 0.1f64..50.0,
        ) {
            let r = range(45.0, speed, gravity).unwrap();
            let expected = speed * speed / gravity;
            prop_assert!((r - expected).abs() <= 1e-9 * expected.max(1.0));
        }

        #[test]
        fn endpoints_are_zero(speed in 0.0f64..500.0, gravity in 0.1f64..50.0) {
            let tolerance = 1e-9 * (speed * speed / gravity).max(1.0);
            prop_assert!(range(0.0, speed, gravity).unwrap().abs() <= tolerance);
            prop_assert!(range(180.0, speed, gravity).unwrap().abs() <= tolerance);
        }

        #[test]
        fn repeated_calls_are_bit_identical(
            angle in -360.0f64..360.0,
            speed in -500.0f64..500.0,
            gravity in 0.1f64..50.0,
        ) {
            let a = range(angle, speed, gravity).unwrap();
            let b = range(angle, speed, gravity).unwrap();
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }

        #[test]
        fn sampling_preserves_length(angles in prop::collection::vec(-180.0f64..180.0, 0..64)) {
            let ranges = sample_ranges(&angles, 20.0, 9.81).unwrap();
            prop_assert_eq!(ranges.len(), angles.len());
        }
    }
}
