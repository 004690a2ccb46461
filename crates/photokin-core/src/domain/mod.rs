pub mod errors;

pub use errors::{
    ComputeResult, KinematicsError, KinematicsResult, PhotokinError, PhotokinErrorCategory,
    PhotokinResult,
};

use crate::common::constants::{
    PI, degrees_to_radians, photon_energy_from_wavelength, radians_to_degrees,
    wavelength_from_photon_energy,
};
use crate::common::materials::Material;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMode {
    Compton,
    Photoelectric,
    InverseCompton,
}

impl SimulationMode {
    pub const ALL: [SimulationMode; 3] = [
        SimulationMode::Compton,
        SimulationMode::Photoelectric,
        SimulationMode::InverseCompton,
    ];

    pub const fn index(self) -> i64 {
        match self {
            Self::Compton => 0,
            Self::Photoelectric => 1,
            Self::InverseCompton => 2,
        }
    }

    pub fn from_index(index: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.index() == index)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compton => "COMPTON",
            Self::Photoelectric => "PHOTOELECTRIC",
            Self::InverseCompton => "INVERSE_COMPTON",
        }
    }
}

impl Display for SimulationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// A photon described by its wavelength (m) and the energy (J) derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhotonState {
    pub wavelength_m: f64,
    pub energy_j: f64,
}

impl PhotonState {
    pub fn from_wavelength(wavelength_m: f64) -> KinematicsResult<Self> {
        if !wavelength_m.is_finite() || wavelength_m <= 0.0 {
            return Err(KinematicsError::InvalidWavelength { wavelength_m });
        }
        Ok(Self {
            wavelength_m,
            energy_j: photon_energy_from_wavelength(wavelength_m),
        })
    }

    pub fn from_energy(energy_j: f64) -> KinematicsResult<Self> {
        if !energy_j.is_finite() || energy_j <= 0.0 {
            return Err(KinematicsError::InvalidEnergy {
                field: "photon_energy_j",
                value: energy_j,
            });
        }
        Ok(Self {
            wavelength_m: wavelength_from_photon_energy(energy_j),
            energy_j,
        })
    }
}

/// Photon scattering angle φ, restricted to the open interval (0, π).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct ScatteringAngle(f64);

impl ScatteringAngle {
    pub fn from_radians(angle_rad: f64) -> KinematicsResult<Self> {
        if !angle_rad.is_finite() {
            return Err(KinematicsError::NonFiniteAngle {
                field: "phi_rad",
                value: angle_rad,
            });
        }
        if angle_rad <= 0.0 || angle_rad >= PI {
            return Err(KinematicsError::InvalidAngle { angle_rad });
        }
        Ok(Self(angle_rad))
    }

    pub fn from_degrees(angle_deg: f64) -> KinematicsResult<Self> {
        if !angle_deg.is_finite() {
            return Err(KinematicsError::NonFiniteAngle {
                field: "phi_deg",
                value: angle_deg,
            });
        }
        // 180° does not always round to exactly PI, so reject it before converting.
        if angle_deg <= 0.0 || angle_deg >= 180.0 {
            return Err(KinematicsError::InvalidAngle {
                angle_rad: degrees_to_radians(angle_deg),
            });
        }
        Self::from_radians(degrees_to_radians(angle_deg))
    }

    pub const fn radians(self) -> f64 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        radians_to_degrees(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComptonResult {
    pub scattering_angle: ScatteringAngle,
    pub incident: PhotonState,
    pub scattered: PhotonState,
    pub wavelength_shift_m: f64,
    /// Negative when the electron recoils on the opposite side of the
    /// incidence axis from the scattered photon.
    pub electron_recoil_angle_rad: f64,
    pub relativistic_factor: f64,
    pub electron_speed_m_s: f64,
}

impl ComptonResult {
    pub fn scattered_wavelength_m(&self) -> f64 {
        self.scattered.wavelength_m
    }

    pub fn scattered_energy_j(&self) -> f64 {
        self.scattered.energy_j
    }

    pub fn electron_recoil_angle_deg(&self) -> f64 {
        radians_to_degrees(self.electron_recoil_angle_rad)
    }

    pub fn electron_kinetic_energy_j(&self) -> f64 {
        self.incident.energy_j - self.scattered.energy_j
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PhotoelectricResult {
    NoEmission {
        photon_energy_j: f64,
        work_function_j: f64,
    },
    Emission {
        kinetic_energy_j: f64,
        electron_speed_m_s: f64,
        stopping_voltage_v: f64,
    },
}

impl PhotoelectricResult {
    pub const fn emits(&self) -> bool {
        matches!(self, Self::Emission { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InverseComptonResult {
    pub theta1_rad: f64,
    pub theta2_rad: f64,
    pub scattered_photon_energy_j: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComptonInput {
    pub incident_wavelength_m: f64,
    /// Checked through [`ScatteringAngle::from_degrees`] when executed.
    pub scattering_angle_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoelectricInput {
    pub wavelength_m: f64,
    pub material: Material,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseComptonInput {
    pub electron_energy_j: f64,
    pub incident_photon_energy_j: f64,
    pub incidence_angle_deg: f64,
    pub scatter_angle_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComputeRequest {
    Compton(ComptonInput),
    Photoelectric(PhotoelectricInput),
    InverseCompton(InverseComptonInput),
}

impl ComputeRequest {
    pub const fn mode(&self) -> SimulationMode {
        match self {
            Self::Compton(_) => SimulationMode::Compton,
            Self::Photoelectric(_) => SimulationMode::Photoelectric,
            Self::InverseCompton(_) => SimulationMode::InverseCompton,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ComputeOutcome {
    Compton(ComptonResult),
    Photoelectric {
        material: Material,
        result: PhotoelectricResult,
    },
    InverseCompton(InverseComptonResult),
}

impl ComputeOutcome {
    pub const fn mode(&self) -> SimulationMode {
        match self {
            Self::Compton(_) => SimulationMode::Compton,
            Self::Photoelectric { .. } => SimulationMode::Photoelectric,
            Self::InverseCompton(_) => SimulationMode::InverseCompton,
        }
    }
}
