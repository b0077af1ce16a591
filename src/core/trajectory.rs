use tracing::debug;

use crate::core::error::DomainError;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81; // m/s^2

// cos(theta) for a 90-degree input is ~6e-17, never exactly zero, so
// vertical launches are detected against a small threshold instead.
const MIN_HORIZONTAL_COS: f64 = 1e-12;

// Upper bound on unit-step samples; no plottable flight comes close.
const MAX_SAMPLE_POINTS: i64 = 1_000_000;

/// An idealized point-mass trajectory: uniform gravity, no drag.
///
/// The launch angle is stored in radians; the public accessors speak degrees,
/// so the unit conversion happens exactly once per mutation.
#[derive(Clone, Copy, Debug)]
pub struct Trajectory {
    speed_mps: f64,
    height_m: f64,
    angle_rad: f64,
}

impl Trajectory {
    /// Builds a trajectory from launch speed (m/s), launch height (m) and
    /// elevation angle (degrees). Nothing is validated here; formulas that
    /// become undefined report a [`DomainError`] when evaluated.
    pub fn new(speed_mps: f64, height_m: f64, angle_deg: f64) -> Self {
        Self {
            speed_mps,
            height_m,
            angle_rad: angle_deg.to_radians(),
        }
    }

    /// Horizontal distance at which the projectile returns to y = 0:
    /// `v*cos(theta) * (v*sin(theta) + sqrt(disc)) / g`.
    pub fn displacement(&self) -> Result<f64, DomainError> {
        self.check_finite()?;
        let cos_theta = self.horizontal_cos()?;
        let vx = self.speed_mps * cos_theta;
        let vy = self.speed_mps * self.angle_rad.sin();
        let disc = self.discriminant(vy)?;
        Ok(vx * (vy + disc.sqrt()) / EARTH_GRAVITY_MPS2)
    }

    /// Time until the projectile returns to y = 0.
    pub fn time_of_flight(&self) -> Result<f64, DomainError> {
        self.check_finite()?;
        let vy = self.speed_mps * self.angle_rad.sin();
        let disc = self.discriminant(vy)?;
        Ok((vy + disc.sqrt()) / EARTH_GRAVITY_MPS2)
    }

    /// Height of the path at horizontal offset `x`:
    /// `y(x) = h + x*tan(theta) - g*x^2 / (2*v^2*cos^2(theta))`.
    pub fn height_at(&self, x: f64) -> Result<f64, DomainError> {
        self.check_finite()?;
        if self.speed_mps == 0.0 {
            return Err(DomainError::ZeroSpeed);
        }
        let cos_theta = self.horizontal_cos()?;
        let rise = x * self.angle_rad.tan();
        let drop = EARTH_GRAVITY_MPS2 * x * x
            / (2.0 * self.speed_mps * self.speed_mps * cos_theta * cos_theta);
        Ok(self.height_m + rise - drop)
    }

    /// Samples the path at unit horizontal steps: one point per integer x in
    /// `0..ceil(displacement)`. Empty when the displacement is not positive;
    /// displacements past the sampling bound are rejected.
    pub fn sample_trajectory(&self) -> Result<Vec<(f64, f64)>, DomainError> {
        let displacement = self.displacement()?;
        if !displacement.is_finite() {
            return Err(DomainError::NonFiniteInput);
        }

        let count = displacement.ceil() as i64;
        if count > MAX_SAMPLE_POINTS {
            return Err(DomainError::DisplacementTooLarge { displacement });
        }

        let mut points = Vec::with_capacity(count.max(0) as usize);
        for x in 0..count {
            let x = x as f64;
            points.push((x, self.height_at(x)?));
        }
        debug!(displacement, points = points.len(), "sampled trajectory");
        Ok(points)
    }

    /// Multi-line launch summary: speed, height, angle in whole degrees and
    /// displacement to one decimal place.
    pub fn summary(&self) -> Result<String, DomainError> {
        let displacement = self.displacement()?;
        Ok(format!(
            "\nProjectile details:\nspeed: {} m/s\nheight: {} m\nangle: {}°\ndisplacement: {:.1} m\n",
            self.speed_mps,
            self.height_m,
            self.angle(),
            displacement,
        ))
    }

    pub fn speed(&self) -> f64 {
        self.speed_mps
    }

    pub fn set_speed(&mut self, speed_mps: f64) {
        self.speed_mps = speed_mps;
    }

    pub fn height(&self) -> f64 {
        self.height_m
    }

    pub fn set_height(&mut self, height_m: f64) {
        self.height_m = height_m;
    }

    /// Elevation angle in whole degrees, rounded for display.
    pub fn angle(&self) -> f64 {
        // round() keeps the sign of -0.0; adding zero folds it back to +0.0.
        self.angle_rad.to_degrees().round() + 0.0
    }

    /// Sets the elevation angle from an exact degree value.
    pub fn set_angle(&mut self, angle_deg: f64) {
        self.angle_rad = angle_deg.to_radians();
    }

    fn check_finite(&self) -> Result<(), DomainError> {
        if !self.speed_mps.is_finite() || !self.height_m.is_finite() || !self.angle_rad.is_finite()
        {
            return Err(DomainError::NonFiniteInput);
        }
        Ok(())
    }

    fn horizontal_cos(&self) -> Result<f64, DomainError> {
        let cos_theta = self.angle_rad.cos();
        if cos_theta.abs() < MIN_HORIZONTAL_COS {
            return Err(DomainError::VerticalLaunch {
                angle_deg: self.angle(),
            });
        }
        Ok(cos_theta)
    }

    fn discriminant(&self, vy: f64) -> Result<f64, DomainError> {
        let disc = vy * vy + 2.0 * EARTH_GRAVITY_MPS2 * self.height_m;
        if disc < 0.0 {
            return Err(DomainError::NegativeDiscriminant { discriminant: disc });
        }
        Ok(disc)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angle_round_trips_in_whole_degrees() {
        let mut trajectory = Trajectory::new(20.0, 0.0, 45.0);
        assert_eq!(trajectory.angle(), 45.0);

        trajectory.set_angle(45.7);
        assert_eq!(trajectory.angle(), 46.0);

        // Feeding the rounded value back must not drift.
        for _ in 0..10 {
            let angle = trajectory.angle();
            trajectory.set_angle(angle);
            assert_eq!(trajectory.angle(), 46.0);
        }
    }

    #[test]
    fn slightly_downhill_angle_rounds_to_plain_zero() {
        let trajectory = Trajectory::new(5.0, 3.0, -0.4);
        assert!(trajectory.angle().is_sign_positive());
        assert_eq!(
            trajectory.summary().unwrap(),
            "\nProjectile details:\nspeed: 5 m/s\nheight: 3 m\nangle: 0°\ndisplacement: 3.9 m\n"
        );
    }

    #[test]
    fn displacement_matches_flat_ground_range() {
        // With h = 0 the range reduces to v^2*sin(2*theta)/g.
        let trajectory = Trajectory::new(20.0, 0.0, 45.0);
        let expected = 20.0f64.powi(2) * (2.0 * 45.0f64.to_radians()).sin() / EARTH_GRAVITY_MPS2;
        let displacement = trajectory.displacement().unwrap();
        assert_relative_eq!(displacement, expected, max_relative = 1e-12);
        assert_relative_eq!(displacement, 40.77, max_relative = 1e-3);
    }

    #[test]
    fn flat_ground_flight_time_and_range() {
        let trajectory = Trajectory::new(10.0, 0.0, 45.0);
        assert_relative_eq!(
            trajectory.time_of_flight().unwrap(),
            1.4416,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            trajectory.displacement().unwrap(),
            10.1937,
            max_relative = 1e-3
        );
    }

    #[test]
    fn dropped_from_height_still_lands() {
        let trajectory = Trajectory::new(0.0, 2.0, 10.0);
        assert_relative_eq!(
            trajectory.time_of_flight().unwrap(),
            0.6386,
            max_relative = 1e-3
        );
    }

    #[test]
    fn samples_cover_each_unit_step() {
        let trajectory = Trajectory::new(20.0, 0.0, 45.0);
        let points = trajectory.sample_trajectory().unwrap();
        assert_eq!(points.len(), 41);
        for (i, &(x, _)) in points.iter().enumerate() {
            assert_eq!(x, i as f64);
        }
        // The first sample sits at the launch height.
        assert_eq!(points[0].1, 0.0);
    }

    #[test]
    fn height_follows_the_trajectory_equation() {
        let trajectory = Trajectory::new(5.0, 0.0, 45.0);
        assert_relative_eq!(trajectory.height_at(1.0).unwrap(), 0.6076, max_relative = 1e-3);
        assert_relative_eq!(trajectory.height_at(2.0).unwrap(), 0.4304, max_relative = 1e-3);
    }

    #[test]
    fn rejects_negative_discriminant() {
        // Launched flat from below the reference plane: never reaches y = 0.
        let trajectory = Trajectory::new(1.0, -10.0, 0.0);
        assert!(matches!(
            trajectory.displacement(),
            Err(DomainError::NegativeDiscriminant { .. })
        ));
        assert!(matches!(
            trajectory.time_of_flight(),
            Err(DomainError::NegativeDiscriminant { .. })
        ));
    }

    #[test]
    fn rejects_vertical_launch() {
        let trajectory = Trajectory::new(20.0, 0.0, 90.0);
        assert!(matches!(
            trajectory.displacement(),
            Err(DomainError::VerticalLaunch { .. })
        ));
        assert!(matches!(
            trajectory.height_at(0.0),
            Err(DomainError::VerticalLaunch { .. })
        ));
    }

    #[test]
    fn zero_speed_degenerates() {
        let trajectory = Trajectory::new(0.0, 5.0, 30.0);
        // The path equation divides by v^2, the range formula does not.
        assert_eq!(trajectory.height_at(1.0), Err(DomainError::ZeroSpeed));
        assert_eq!(trajectory.displacement(), Ok(0.0));
        assert!(trajectory.sample_trajectory().unwrap().is_empty());
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let trajectory = Trajectory::new(f64::NAN, 0.0, 45.0);
        assert_eq!(trajectory.displacement(), Err(DomainError::NonFiniteInput));

        let trajectory = Trajectory::new(20.0, f64::INFINITY, 45.0);
        assert_eq!(trajectory.height_at(1.0), Err(DomainError::NonFiniteInput));
    }

    #[test]
    fn absurd_speeds_cannot_be_sampled() {
        // Finite on paper, far past any plottable flight.
        let trajectory = Trajectory::new(1.0e9, 0.0, 45.0);
        assert!(matches!(
            trajectory.sample_trajectory(),
            Err(DomainError::DisplacementTooLarge { .. })
        ));
    }

    #[test]
    fn displacement_is_pure() {
        let trajectory = Trajectory::new(12.5, 1.5, 30.0);
        assert_eq!(
            trajectory.displacement().unwrap(),
            trajectory.displacement().unwrap()
        );
    }

    #[test]
    fn mutators_feed_the_formulas() {
        let mut trajectory = Trajectory::new(1.0, 10.0, 5.0);
        trajectory.set_speed(20.0);
        trajectory.set_height(0.0);
        trajectory.set_angle(45.0);
        assert_eq!(trajectory.speed(), 20.0);
        assert_eq!(trajectory.height(), 0.0);
        assert_relative_eq!(trajectory.displacement().unwrap(), 40.77, max_relative = 1e-3);
    }

    #[test]
    fn summary_reports_rounded_values() {
        let trajectory = Trajectory::new(5.0, 0.0, 45.0);
        assert_eq!(
            trajectory.summary().unwrap(),
            "\nProjectile details:\nspeed: 5 m/s\nheight: 0 m\nangle: 45°\ndisplacement: 2.5 m\n"
        );
    }
}
