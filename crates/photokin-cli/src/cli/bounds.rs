use super::CliError;

/// Closed interval accepted for one user-supplied quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct InputBounds {
    pub(super) min: f64,
    pub(super) max: f64,
}

impl InputBounds {
    pub(super) const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub(super) fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub(super) fn check(self, option: &str, value: f64) -> Result<f64, CliError> {
        if self.contains(value) {
            return Ok(value);
        }
        Err(CliError::Usage(format!(
            "{} must lie between {} and {}, got {}",
            option, self.min, self.max, value
        )))
    }
}

pub(super) const COMPTON_ANGLE_DEG: InputBounds = InputBounds::new(1.0, 175.0);
/// Incident wavelength as a multiple of 10^-12 m.
pub(super) const COMPTON_WAVELENGTH_PM: InputBounds = InputBounds::new(1.0, 1.0e3);
pub(super) const PHOTOELECTRIC_WAVELENGTH_NM: InputBounds = InputBounds::new(100.0, 1.0e3);
pub(super) const INVERSE_ENERGY_J: InputBounds = InputBounds::new(0.0, 1.0e20);
pub(super) const INVERSE_ANGLE_DEG: InputBounds = InputBounds::new(0.0, 90.0);

pub(super) const MODE_INDEX_MIN: i64 = 0;
pub(super) const MODE_INDEX_MAX: i64 = 2;
