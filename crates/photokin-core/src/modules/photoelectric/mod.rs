use super::ModuleExecutor;
use crate::common::constants::{ELECTRON_MASS, ELEMENTARY_CHARGE};
use crate::common::materials::Material;
use crate::domain::{
    ComputeOutcome, ComputeRequest, ComputeResult, KinematicsError, KinematicsResult,
    PhotoelectricResult, PhotokinError, PhotonState,
};

/// Illuminates `material` with light of wavelength `wavelength_m`.
pub fn compute(wavelength_m: f64, material: &Material) -> KinematicsResult<PhotoelectricResult> {
    let photon = PhotonState::from_wavelength(wavelength_m)?;
    illuminate(photon, material)
}

/// Emission requires the photon energy to exceed the work function strictly.
pub fn compute_for_photon_energy(
    photon_energy_j: f64,
    material: &Material,
) -> KinematicsResult<PhotoelectricResult> {
    let photon = PhotonState::from_energy(photon_energy_j)?;
    illuminate(photon, material)
}

fn illuminate(photon: PhotonState, material: &Material) -> KinematicsResult<PhotoelectricResult> {
    validate_work_function(material)?;
    let photon_energy_j = photon.energy_j;

    let work_function_j = material.work_function_j();
    if photon_energy_j <= work_function_j {
        return Ok(PhotoelectricResult::NoEmission {
            photon_energy_j,
            work_function_j,
        });
    }

    let kinetic_energy_j = photon_energy_j - work_function_j;
    let electron_speed_m_s = (2.0 * kinetic_energy_j / ELECTRON_MASS).sqrt();
    let stopping_voltage_v = -kinetic_energy_j / ELEMENTARY_CHARGE.abs();

    Ok(PhotoelectricResult::Emission {
        kinetic_energy_j,
        electron_speed_m_s,
        stopping_voltage_v,
    })
}

/// Longest wavelength (m) that can still extract an electron from `material`.
pub fn threshold_wavelength_m(material: &Material) -> KinematicsResult<f64> {
    validate_work_function(material)?;
    Ok(PhotonState::from_energy(material.work_function_j())?.wavelength_m)
}

fn validate_work_function(material: &Material) -> KinematicsResult<()> {
    if !material.work_function_ev.is_finite() || material.work_function_ev <= 0.0 {
        return Err(KinematicsError::InvalidEnergy {
            field: "work_function_ev",
            value: material.work_function_ev,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoelectricModule;

impl ModuleExecutor for PhotoelectricModule {
    fn execute(&self, request: &ComputeRequest) -> ComputeResult<ComputeOutcome> {
        let ComputeRequest::Photoelectric(input) = request else {
            return Err(PhotokinError::input_validation(
                "INPUT.PHOTOELECTRIC_REQUEST",
                format!(
                    "PHOTOELECTRIC module cannot execute a {} request",
                    request.mode()
                ),
            ));
        };

        let result = compute(input.wavelength_m, &input.material)?;
        Ok(ComputeOutcome::Photoelectric {
            material: input.material,
            result,
        })
    }
}
