//! Orbital state solver: days since perihelion in, heliocentric Cartesian
//! position out.
//!
//! The pipeline is the classical elliptical-orbit chain — mean anomaly,
//! eccentric anomaly, radial distance, true anomaly, position — with the
//! eccentric anomaly obtained from a single first-order step by default.
//! A Newton strategy exists for callers who want tighter convergence, but it
//! is opt-in so the default output never drifts.

use std::f64::consts::TAU;

use thiserror::Error;

use crate::calendar::Date;

/// Fixed per-body orbital elements, set once at load time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub period_days: f64,
    pub perihelion: Date,
}

/// Element validation failures; always configuration errors, reported before
/// any state is computed.
#[derive(Debug, Error)]
pub enum ElementsError {
    #[error("eccentricity {0} is outside [0, 1): only elliptical orbits are supported")]
    Eccentricity(f64),
    #[error("orbital period {0} days must be positive")]
    Period(f64),
    #[error("semi-major axis {0} AU must be positive")]
    SemiMajorAxis(f64),
}

impl OrbitalElements {
    pub fn new(
        semi_major_axis_au: f64,
        eccentricity: f64,
        period_days: f64,
        perihelion: Date,
    ) -> Result<Self, ElementsError> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(ElementsError::Eccentricity(eccentricity));
        }
        if !(period_days > 0.0) {
            return Err(ElementsError::Period(period_days));
        }
        if !(semi_major_axis_au > 0.0) {
            return Err(ElementsError::SemiMajorAxis(semi_major_axis_au));
        }
        Ok(Self {
            semi_major_axis_au,
            eccentricity,
            period_days,
            perihelion,
        })
    }

    /// Semi-minor axis `a * sqrt(1 - e^2)`, used when tracing the orbit
    /// ellipse.
    pub fn semi_minor_axis_au(&self) -> f64 {
        self.semi_major_axis_au * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }
}

/// Strategy for inverting Kepler's equation `M = E - e sin E`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeplerSolver {
    /// `E ≈ M + e sin M`. The reference precision tradeoff and the default.
    FirstOrder,
    /// Newton-Raphson from `E0 = M` until the residual drops below
    /// `tolerance` or `max_iterations` is reached.
    Newton { tolerance: f64, max_iterations: u32 },
}

impl KeplerSolver {
    /// Newton strategy with the customary tolerance for ephemeris-grade
    /// double math.
    pub fn newton() -> Self {
        Self::Newton {
            tolerance: 1e-12,
            max_iterations: 32,
        }
    }

    fn eccentric_anomaly(&self, mean_anomaly: f64, eccentricity: f64) -> f64 {
        match *self {
            Self::FirstOrder => mean_anomaly + eccentricity * mean_anomaly.sin(),
            Self::Newton {
                tolerance,
                max_iterations,
            } => {
                let mut e_anom = mean_anomaly;
                for _ in 0..max_iterations {
                    let residual = e_anom - eccentricity * e_anom.sin() - mean_anomaly;
                    if residual.abs() < tolerance {
                        break;
                    }
                    e_anom -= residual / (1.0 - eccentricity * e_anom.cos());
                }
                e_anom
            }
        }
    }
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self::FirstOrder
    }
}

/// Heliocentric position in the orbital plane, AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x_au: f64,
    pub y_au: f64,
}

/// The derived state of a body for one target date. All fields are produced
/// together; none is valid in isolation for a different date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    pub days_since_perihelion: i64,
    pub mean_anomaly: f64,
    pub eccentric_anomaly: f64,
    pub true_anomaly: f64,
    pub radial_distance_au: f64,
    pub position: Position,
}

/// Run the anomaly pipeline for one body.
///
/// The mean anomaly is left unnormalized; it only feeds trigonometric
/// functions downstream.
pub fn propagate(
    elements: &OrbitalElements,
    days_since_perihelion: i64,
    solver: KeplerSolver,
) -> OrbitalState {
    let e = elements.eccentricity;
    let mean_anomaly = TAU * days_since_perihelion as f64 / elements.period_days;
    let eccentric_anomaly = solver.eccentric_anomaly(mean_anomaly, e);
    let radial_distance_au = elements.semi_major_axis_au * (1.0 - e * eccentric_anomaly.cos());
    let true_anomaly = ((1.0 - e * e).sqrt() * eccentric_anomaly.sin())
        .atan2(eccentric_anomaly.cos() - e);

    OrbitalState {
        days_since_perihelion,
        mean_anomaly,
        eccentric_anomaly,
        true_anomaly,
        radial_distance_au,
        position: Position {
            x_au: radial_distance_au * true_anomaly.cos(),
            y_au: radial_distance_au * true_anomaly.sin(),
        },
    }
}
