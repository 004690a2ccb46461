use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PhotokinResult<T> = Result<T, PhotokinError>;
pub type ComputeResult<T> = PhotokinResult<T>;
pub type KinematicsResult<T> = Result<T, KinematicsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotokinErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl PhotokinErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotokinError {
    category: PhotokinErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl PhotokinError {
    pub fn new(
        category: PhotokinErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            PhotokinErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(PhotokinErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(PhotokinErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(PhotokinErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> PhotokinErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for PhotokinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for PhotokinError {}

/// Failures raised by the kinematics engines when an input lies outside the
/// domain where the closed-form formulas are defined.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KinematicsError {
    #[error("scattering angle {angle_rad} rad must lie strictly between 0 and pi")]
    InvalidAngle { angle_rad: f64 },
    #[error("'{field}' must be finite, got {value}")]
    NonFiniteAngle { field: &'static str, value: f64 },
    #[error("wavelength must be finite and > 0 m, got {wavelength_m}")]
    InvalidWavelength { wavelength_m: f64 },
    #[error("'{field}' must be finite and > 0, got {value}")]
    InvalidEnergy { field: &'static str, value: f64 },
    #[error("relativistic factor K={factor} lies outside [0, 1]; inputs are not physically consistent")]
    NonPhysicalRecoil { factor: f64 },
    #[error("'{quantity}' evaluated to a non-finite value")]
    NonFiniteResult { quantity: &'static str },
}

impl KinematicsError {
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::InvalidAngle { .. } | Self::NonFiniteAngle { .. } => "INPUT.INVALID_ANGLE",
            Self::InvalidWavelength { .. } => "INPUT.INVALID_WAVELENGTH",
            Self::InvalidEnergy { .. } => "INPUT.INVALID_ENERGY",
            Self::NonPhysicalRecoil { .. } => "RUN.NON_PHYSICAL_RECOIL",
            Self::NonFiniteResult { .. } => "RUN.NON_FINITE_RESULT",
        }
    }

    pub const fn category(&self) -> PhotokinErrorCategory {
        match self {
            Self::InvalidAngle { .. }
            | Self::NonFiniteAngle { .. }
            | Self::InvalidWavelength { .. }
            | Self::InvalidEnergy { .. } => PhotokinErrorCategory::InputValidationError,
            Self::NonPhysicalRecoil { .. } | Self::NonFiniteResult { .. } => {
                PhotokinErrorCategory::ComputationError
            }
        }
    }
}

impl From<KinematicsError> for PhotokinError {
    fn from(error: KinematicsError) -> Self {
        PhotokinError::new(error.category(), error.placeholder(), error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{KinematicsError, PhotokinError, PhotokinErrorCategory};

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (PhotokinErrorCategory::Success, 0, "Success"),
            (
                PhotokinErrorCategory::InputValidationError,
                2,
                "InputValidationError",
            ),
            (PhotokinErrorCategory::IoSystemError, 3, "IoSystemError"),
            (PhotokinErrorCategory::ComputationError, 4, "ComputationError"),
            (PhotokinErrorCategory::InternalError, 5, "InternalError"),
        ];

        for (category, exit_code, name) in cases {
            assert_eq!(category.exit_code(), exit_code);
            assert_eq!(category.as_str(), name);
        }
        assert!(!PhotokinErrorCategory::Success.is_fatal());
    }

    #[test]
    fn fatal_error_renders_diagnostic_lines() {
        let error = PhotokinError::input_validation(
            "INPUT.UNKNOWN_MATERIAL",
            "unknown material 'Au'",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.UNKNOWN_MATERIAL] unknown material 'Au'"
        );
        assert_eq!(
            error.fatal_exit_line().as_deref(),
            Some("FATAL EXIT CODE: 2")
        );
    }

    #[test]
    fn kinematics_errors_map_to_categories() {
        let angle: PhotokinError = KinematicsError::InvalidAngle { angle_rad: 0.0 }.into();
        assert_eq!(angle.category(), PhotokinErrorCategory::InputValidationError);
        assert_eq!(angle.placeholder(), "INPUT.INVALID_ANGLE");

        let non_finite: PhotokinError = KinematicsError::NonFiniteAngle {
            field: "scatter_angle_deg",
            value: f64::NAN,
        }
        .into();
        assert_eq!(non_finite.placeholder(), "INPUT.INVALID_ANGLE");
        assert_eq!(non_finite.exit_code(), 2);
        assert!(non_finite.message().contains("scatter_angle_deg"));

        let recoil: PhotokinError = KinematicsError::NonPhysicalRecoil { factor: 1.5 }.into();
        assert_eq!(recoil.category(), PhotokinErrorCategory::ComputationError);
        assert_eq!(recoil.exit_code(), 4);
        assert!(recoil.message().contains("K=1.5"));
    }
}
