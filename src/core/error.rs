use thiserror::Error;

/// Top-level error type for the projectile plotting crate.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProjectileError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
}

/// Errors raised when a kinematics formula is mathematically undefined for
/// the launch parameters it was given.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("no real landing point: vy^2 + 2*g*h is negative ({discriminant})")]
    NegativeDiscriminant { discriminant: f64 },

    #[error("angle of {angle_deg}° has no horizontal velocity component")]
    VerticalLaunch { angle_deg: f64 },

    #[error("speed is zero: the trajectory equation divides by v^2")]
    ZeroSpeed,

    #[error("launch parameters must be finite numbers")]
    NonFiniteInput,

    #[error("displacement of {displacement} m is too large to sample at unit steps")]
    DisplacementTooLarge { displacement: f64 },
}

/// Error raised when the renderer is asked to plot zero sample points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no trajectory points to plot")]
pub struct EmptyInputError;

/// Convenience type alias for results using [`ProjectileError`].
pub type Result<T> = std::result::Result<T, ProjectileError>;
