use super::ModuleExecutor;
use super::compton::{ComptonModule, InverseComptonModule};
use super::photoelectric::PhotoelectricModule;
use crate::domain::{ComputeOutcome, ComputeRequest, ComputeResult, SimulationMode};

static COMPTON: ComptonModule = ComptonModule;
static PHOTOELECTRIC: PhotoelectricModule = PhotoelectricModule;
static INVERSE_COMPTON: InverseComptonModule = InverseComptonModule;

pub fn executor_for_mode(mode: SimulationMode) -> &'static dyn ModuleExecutor {
    match mode {
        SimulationMode::Compton => &COMPTON,
        SimulationMode::Photoelectric => &PHOTOELECTRIC,
        SimulationMode::InverseCompton => &INVERSE_COMPTON,
    }
}

pub fn execute_request(request: &ComputeRequest) -> ComputeResult<ComputeOutcome> {
    executor_for_mode(request.mode()).execute(request)
}

#[cfg(test)]
mod tests {
    use super::execute_request;
    use crate::common::materials::material_for_symbol;
    use crate::domain::{
        ComptonInput, ComputeRequest, InverseComptonInput, PhotoelectricInput,
        PhotokinErrorCategory, SimulationMode,
    };

    #[test]
    fn every_mode_dispatches_to_its_own_engine() {
        let requests = [
            ComputeRequest::Compton(ComptonInput {
                incident_wavelength_m: 1.0e-12,
                scattering_angle_deg: 45.0,
            }),
            ComputeRequest::Photoelectric(PhotoelectricInput {
                wavelength_m: 400.0e-9,
                material: material_for_symbol("Cs").expect("cesium should be listed"),
            }),
            ComputeRequest::InverseCompton(InverseComptonInput {
                electron_energy_j: 8.0e-11,
                incident_photon_energy_j: 3.0e-19,
                incidence_angle_deg: 10.0,
                scatter_angle_deg: 20.0,
            }),
        ];

        for (request, mode) in requests.iter().zip(SimulationMode::ALL) {
            let outcome = execute_request(request).expect("request should compute");
            assert_eq!(outcome.mode(), mode);
        }
    }

    #[test]
    fn engine_failures_surface_with_categories() {
        let request = ComputeRequest::Compton(ComptonInput {
            incident_wavelength_m: 1.0e-12,
            scattering_angle_deg: 0.0,
        });
        let error = execute_request(&request).expect_err("zero angle is degenerate");
        assert_eq!(error.category(), PhotokinErrorCategory::InputValidationError);
        assert_eq!(error.placeholder(), "INPUT.INVALID_ANGLE");
    }
}
