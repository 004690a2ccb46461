//! Inverse Compton (back-scatter) estimate.
//!
//! The electron is taken as ultra-relativistic with `β = 1`. An exact treatment
//! needs the measured electron velocity, which this estimate does not use, so
//! results are only meaningful when the electron energy dwarfs its rest energy.

use crate::common::constants::{PI, degrees_to_radians};
use crate::domain::{
    ComputeOutcome, ComputeRequest, ComputeResult, InverseComptonResult, KinematicsError,
    KinematicsResult, PhotokinError,
};
use crate::modules::ModuleExecutor;

pub const BETA_ULTRA_RELATIVISTIC: f64 = 1.0;

/// Returns `(θ1, θ2)` in radians, with `θ1 = π − α` measured from the electron
/// direction and `θ2` the angle taken by the back-scattered photon.
pub fn back_scatter_angles(
    incidence_angle_deg: f64,
    scatter_angle_deg: f64,
) -> KinematicsResult<(f64, f64)> {
    for (field, value) in [
        ("incidence_angle_deg", incidence_angle_deg),
        ("scatter_angle_deg", scatter_angle_deg),
    ] {
        if !value.is_finite() {
            return Err(KinematicsError::NonFiniteAngle { field, value });
        }
    }

    let theta1 = PI - degrees_to_radians(incidence_angle_deg);
    let theta2 = degrees_to_radians(scatter_angle_deg);
    Ok((theta1, theta2))
}

pub fn compute_inverse(
    electron_energy_j: f64,
    incident_photon_energy_j: f64,
    incidence_angle_deg: f64,
    scatter_angle_deg: f64,
) -> KinematicsResult<f64> {
    for (field, value) in [
        ("electron_energy_j", electron_energy_j),
        ("incident_photon_energy_j", incident_photon_energy_j),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(KinematicsError::InvalidEnergy { field, value });
        }
    }
    let (theta1, theta2) = back_scatter_angles(incidence_angle_deg, scatter_angle_deg)?;

    let beta = BETA_ULTRA_RELATIVISTIC;
    let numerator = incident_photon_energy_j * (1.0 - beta * theta1.cos());
    let denominator = (1.0 - beta * theta2.cos())
        + (1.0 - (theta2 - theta1).cos()) * (incident_photon_energy_j / electron_energy_j);
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(KinematicsError::NonFiniteResult {
            quantity: "inverse_compton_denominator",
        });
    }

    let scattered = numerator / denominator;
    if !scattered.is_finite() {
        return Err(KinematicsError::NonFiniteResult {
            quantity: "scattered_photon_energy_j",
        });
    }
    Ok(scattered)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InverseComptonModule;

impl ModuleExecutor for InverseComptonModule {
    fn execute(&self, request: &ComputeRequest) -> ComputeResult<ComputeOutcome> {
        let ComputeRequest::InverseCompton(input) = request else {
            return Err(PhotokinError::input_validation(
                "INPUT.INVERSE_COMPTON_REQUEST",
                format!(
                    "INVERSE_COMPTON module cannot execute a {} request",
                    request.mode()
                ),
            ));
        };

        let (theta1_rad, theta2_rad) =
            back_scatter_angles(input.incidence_angle_deg, input.scatter_angle_deg)?;
        let scattered_photon_energy_j = compute_inverse(
            input.electron_energy_j,
            input.incident_photon_energy_j,
            input.incidence_angle_deg,
            input.scatter_angle_deg,
        )?;

        Ok(ComputeOutcome::InverseCompton(InverseComptonResult {
            theta1_rad,
            theta2_rad,
            scattered_photon_energy_j,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{InverseComptonModule, back_scatter_angles, compute_inverse};
    use crate::common::constants::PI;
    use crate::domain::{ComputeOutcome, ComputeRequest, InverseComptonInput, KinematicsError};
    use crate::modules::ModuleExecutor;

    fn relative_diff(actual: f64, expected: f64) -> f64 {
        (actual - expected).abs() / expected.abs()
    }

    #[test]
    fn head_on_back_scatter_saturates_at_electron_energy() {
        let electron = 8.0e-11;
        let photon = 3.0e-19;
        let scattered = compute_inverse(electron, photon, 0.0, 0.0).expect("valid inputs");
        assert!(relative_diff(scattered, electron) <= 1.0e-12, "got {scattered}");
    }

    #[test]
    fn perpendicular_geometry_leaves_photon_energy_unchanged() {
        let photon = 3.0e-19;
        let scattered = compute_inverse(8.0e-11, photon, 90.0, 90.0).expect("valid inputs");
        assert!(relative_diff(scattered, photon) <= 1.0e-12, "got {scattered}");
    }

    #[test]
    fn oblique_scatter_boosts_soft_photons() {
        let photon = 3.0e-19;
        let scattered = compute_inverse(1.6e-9, photon, 30.0, 10.0).expect("valid inputs");
        assert!(scattered > photon);
        assert!(scattered < 1.6e-9);
    }

    #[test]
    fn angles_are_measured_from_the_electron_direction() {
        let (theta1, theta2) = back_scatter_angles(30.0, 45.0).expect("finite angles");
        assert!((theta1 - 5.0 * PI / 6.0).abs() <= 1.0e-12);
        assert!((theta2 - PI / 4.0).abs() <= 1.0e-12);
    }

    #[test]
    fn non_positive_energies_are_rejected() {
        assert!(matches!(
            compute_inverse(0.0, 1.0e-19, 10.0, 10.0),
            Err(KinematicsError::InvalidEnergy {
                field: "electron_energy_j",
                ..
            })
        ));
        assert!(matches!(
            compute_inverse(1.0e-10, -1.0, 10.0, 10.0),
            Err(KinematicsError::InvalidEnergy {
                field: "incident_photon_energy_j",
                ..
            })
        ));
        assert!(matches!(
            compute_inverse(1.0e-10, 1.0e-19, f64::INFINITY, 10.0),
            Err(KinematicsError::NonFiniteAngle { .. })
        ));
    }

    #[test]
    fn module_reports_angles_with_energy() {
        let request = ComputeRequest::InverseCompton(InverseComptonInput {
            electron_energy_j: 8.0e-11,
            incident_photon_energy_j: 3.0e-19,
            incidence_angle_deg: 0.0,
            scatter_angle_deg: 0.0,
        });
        let outcome = InverseComptonModule.execute(&request).expect("valid request");
        let ComputeOutcome::InverseCompton(result) = outcome else {
            panic!("expected an inverse Compton outcome, got {outcome:?}");
        };
        assert!((result.theta1_rad - PI).abs() <= f64::EPSILON);
        assert_eq!(result.theta2_rad, 0.0);
        assert!(relative_diff(result.scattered_photon_energy_j, 8.0e-11) <= 1.0e-12);
    }
}
