use crate::domain::{ComputeOutcome, ComputeRequest, ComputeResult};

pub trait ModuleExecutor {
    fn execute(&self, request: &ComputeRequest) -> ComputeResult<ComputeOutcome>;
}

#[cfg(test)]
mod tests {
    use super::ModuleExecutor;
    use crate::domain::{
        ComptonInput, ComputeOutcome, ComputeRequest, ComputeResult, PhotokinError,
        PhotokinErrorCategory,
    };

    struct FailingExecutor;

    impl ModuleExecutor for FailingExecutor {
        fn execute(&self, _request: &ComputeRequest) -> ComputeResult<ComputeOutcome> {
            Err(PhotokinError::computation(
                "RUN.MODULE",
                "module execution failed",
            ))
        }
    }

    #[test]
    fn module_executor_uses_shared_error_types() {
        let request = ComputeRequest::Compton(ComptonInput {
            incident_wavelength_m: 1.0e-12,
            scattering_angle_deg: 60.0,
        });
        let error = FailingExecutor
            .execute(&request)
            .expect_err("executor should fail");
        assert_eq!(error.category(), PhotokinErrorCategory::ComputationError);
        assert_eq!(error.exit_code(), 4);
        assert_eq!(error.placeholder(), "RUN.MODULE");
    }
}
