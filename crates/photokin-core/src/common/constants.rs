//! Physical constants and unit conversions shared by the Compton and
//! photoelectric engines.
//!
//! Values are CODATA 2018 (exact where the 2019 SI redefinition fixes them).

pub const PI: f64 = std::f64::consts::PI;
pub const RADDEG: f64 = 180.0 / PI;
pub const DEGRAD: f64 = PI / 180.0;

/// Planck constant `h` in J·s (exact).
pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;
/// Speed of light in vacuum `c` in m/s (exact).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Electron rest mass `mₑ` in kg.
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;
/// Elementary charge `e` in C (exact).
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
/// Compton wavelength of the electron `h / (mₑ c)` in m.
pub const COMPTON_WAVELENGTH: f64 = 2.426_310_238_67e-12;

/// Electron rest energy `mₑ c²` in J.
pub const ELECTRON_REST_ENERGY: f64 = ELECTRON_MASS * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
/// `h c` in J·m.
pub const HC: f64 = PLANCK_CONSTANT * SPEED_OF_LIGHT;

/// Joules per electron-volt.
pub const ELECTRON_VOLT: f64 = ELEMENTARY_CHARGE;
pub const KILO_ELECTRON_VOLT: f64 = 1.0e3 * ELECTRON_VOLT;
pub const NANOMETER: f64 = 1.0e-9;
pub const PICOMETER: f64 = 1.0e-12;

pub fn ev_to_joules(energy_ev: f64) -> f64 {
    energy_ev * ELECTRON_VOLT
}

pub fn joules_to_ev(energy_j: f64) -> f64 {
    energy_j / ELECTRON_VOLT
}

pub fn joules_to_kev(energy_j: f64) -> f64 {
    energy_j / KILO_ELECTRON_VOLT
}

pub fn nanometers_to_meters(length_nm: f64) -> f64 {
    length_nm * NANOMETER
}

pub fn picometers_to_meters(length_pm: f64) -> f64 {
    length_pm * PICOMETER
}

pub fn degrees_to_radians(angle_deg: f64) -> f64 {
    angle_deg * DEGRAD
}

pub fn radians_to_degrees(angle_rad: f64) -> f64 {
    angle_rad * RADDEG
}

/// `E = h c / λ`, wavelength in m, energy in J.
pub fn photon_energy_from_wavelength(wavelength_m: f64) -> f64 {
    HC / wavelength_m
}

/// `λ = h c / E`, energy in J, wavelength in m.
pub fn wavelength_from_photon_energy(energy_j: f64) -> f64 {
    HC / energy_j
}
