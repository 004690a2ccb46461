//! Forward Compton scattering of a photon on an electron at rest, plus the
//! ultra-relativistic back-scatter estimate in [`inverse`].

mod inverse;

pub use inverse::{BETA_ULTRA_RELATIVISTIC, InverseComptonModule, back_scatter_angles, compute_inverse};

use super::ModuleExecutor;
use crate::common::constants::{COMPTON_WAVELENGTH, ELECTRON_REST_ENERGY, SPEED_OF_LIGHT};
use crate::domain::{
    ComptonResult, ComputeOutcome, ComputeRequest, ComputeResult, KinematicsError,
    KinematicsResult, PhotokinError, PhotonState, ScatteringAngle,
};

/// Compton shift `Δλ = λ_C (1 − cos φ)` in m.
pub fn compton_shift(angle: ScatteringAngle) -> f64 {
    COMPTON_WAVELENGTH * (1.0 - angle.radians().cos())
}

/// Scatters a photon of wavelength `incident_wavelength_m` through `phi_rad`
/// and derives the scattered photon and the recoiling electron.
pub fn compute_forward(incident_wavelength_m: f64, phi_rad: f64) -> KinematicsResult<ComptonResult> {
    let scattering_angle = ScatteringAngle::from_radians(phi_rad)?;
    let incident = PhotonState::from_wavelength(incident_wavelength_m)?;

    let wavelength_shift_m = compton_shift(scattering_angle);
    let scattered = PhotonState::from_wavelength(incident.wavelength_m + wavelength_shift_m)?;

    let half_angle_tan = (scattering_angle.radians() / 2.0).tan();
    let electron_recoil_angle_rad =
        -(1.0 / ((1.0 + incident.energy_j / ELECTRON_REST_ENERGY) * half_angle_tan)).atan();

    let relativistic_factor = (ELECTRON_REST_ENERGY
        / (ELECTRON_REST_ENERGY + incident.energy_j - scattered.energy_j))
        .powi(2);
    if !relativistic_factor.is_finite() || !(0.0..=1.0).contains(&relativistic_factor) {
        return Err(KinematicsError::NonPhysicalRecoil {
            factor: relativistic_factor,
        });
    }
    let electron_speed_m_s = SPEED_OF_LIGHT * (1.0 - relativistic_factor).sqrt();

    Ok(ComptonResult {
        scattering_angle,
        incident,
        scattered,
        wavelength_shift_m,
        electron_recoil_angle_rad,
        relativistic_factor,
        electron_speed_m_s,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComptonModule;

impl ModuleExecutor for ComptonModule {
    fn execute(&self, request: &ComputeRequest) -> ComputeResult<ComputeOutcome> {
        let ComputeRequest::Compton(input) = request else {
            return Err(PhotokinError::input_validation(
                "INPUT.COMPTON_REQUEST",
                format!("COMPTON module cannot execute a {} request", request.mode()),
            ));
        };

        let angle = ScatteringAngle::from_degrees(input.scattering_angle_deg)?;
        let result = compute_forward(input.incident_wavelength_m, angle.radians())?;
        Ok(ComputeOutcome::Compton(result))
    }
}
