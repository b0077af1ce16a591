//! Closed-form projectile kinematics with plain-text rendering.
//!
//! A launch is described by speed, height and elevation angle; the crate
//! derives the horizontal displacement, samples the path at unit steps and
//! renders the samples as a coordinate table and an ASCII plot.

pub mod core;

pub use crate::core::error::{DomainError, EmptyInputError, ProjectileError, Result};
pub use crate::core::render::{PROJECTILE_MARKER, Renderer, X_AXIS_TICK, Y_AXIS_TICK};
pub use crate::core::trajectory::{EARTH_GRAVITY_MPS2, Trajectory};

use tracing::debug;

/// Composes the full report for one launch: summary, coordinate table and
/// plot, with the same bytes [`run`] prints.
pub fn report(speed_mps: f64, height_m: f64, angle_deg: f64) -> Result<String> {
    let trajectory = Trajectory::new(speed_mps, height_m, angle_deg);
    let summary = trajectory.summary()?;
    let renderer = Renderer::new(trajectory.sample_trajectory()?);
    let table = renderer.coordinate_table();
    let plot = renderer.trajectory_plot()?;
    Ok(format!("{summary}\n{table}\n{plot}\n"))
}

/// Builds the trajectory for the given launch parameters and prints the
/// summary, the coordinate table and the plot to standard output, in that
/// order. Blocks print as they are produced, so a degenerate trajectory
/// still shows its summary and table before the plot reports the failure.
pub fn run(speed_mps: f64, height_m: f64, angle_deg: f64) -> Result<()> {
    let trajectory = Trajectory::new(speed_mps, height_m, angle_deg);
    println!("{}", trajectory.summary()?);

    let coordinates = trajectory.sample_trajectory()?;
    debug!(points = coordinates.len(), "rendering trajectory");
    let renderer = Renderer::new(coordinates);
    println!("{}", renderer.coordinate_table());
    println!("{}", renderer.trajectory_plot()?);
    Ok(())
}
