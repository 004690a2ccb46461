use super::CliError;
use anyhow::Context;
use photokin_core::common::constants::{NANOMETER, joules_to_ev, joules_to_kev};
use photokin_core::common::materials::Material;
use photokin_core::domain::{
    ComptonResult, ComputeOutcome, InverseComptonResult, PhotoelectricResult,
};
use photokin_core::modules::photoelectric::threshold_wavelength_m;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(super) fn render_outcome(
    outcome: &ComputeOutcome,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_outcome_text(outcome)),
        OutputFormat::Json => render_json(outcome),
    }
}

pub(super) fn render_outcome_text(outcome: &ComputeOutcome) -> String {
    match outcome {
        ComputeOutcome::Compton(result) => render_compton(result),
        ComputeOutcome::Photoelectric { material, result } => {
            render_photoelectric(material, result)
        }
        ComputeOutcome::InverseCompton(result) => render_inverse_compton(result),
    }
}

fn render_compton(result: &ComptonResult) -> String {
    let incident_kev = joules_to_kev(result.incident.energy_j).floor();
    format!(
        "Énergie du photon incident E0 = {} keV\n\
         Longueur d'onde du photon diffusé λ' = {:e} m\n\
         Angle de l'électron ψ = {}°\n\
         Vitesse de l'électron Ve = {} m/s\n",
        incident_kev,
        result.scattered_wavelength_m(),
        result.electron_recoil_angle_deg(),
        result.electron_speed_m_s
    )
}

fn render_photoelectric(material: &Material, result: &PhotoelectricResult) -> String {
    let header = format!(
        "Matériau : {} (W0 = {} eV)\n",
        material.symbol, material.work_function_ev
    );
    match result {
        PhotoelectricResult::NoEmission { .. } => {
            format!("{header}Il n'y a pas d'émission d'électrons\n")
        }
        PhotoelectricResult::Emission {
            electron_speed_m_s,
            stopping_voltage_v,
            ..
        } => format!(
            "{header}Il y a émission d'électrons\n\
             Vitesse des électrons émis : {} m/s\n\
             Tension à appliquer entre le métal émissif et l'anode pour annuler le courant photoélectrique :\n\
             {} V\n",
            electron_speed_m_s, stopping_voltage_v
        ),
    }
}

fn render_inverse_compton(result: &InverseComptonResult) -> String {
    format!(
        "Énergie du photon diffusé : {:e} J\n",
        result.scattered_photon_energy_j
    )
}

#[derive(Debug, Clone, Serialize)]
struct MaterialListing {
    symbol: &'static str,
    work_function_ev: f64,
    threshold_wavelength_nm: Option<f64>,
}

pub(super) fn render_materials(
    materials: &[Material],
    format: OutputFormat,
) -> Result<String, CliError> {
    let listings = materials
        .iter()
        .map(|material| MaterialListing {
            symbol: material.symbol,
            work_function_ev: material.work_function_ev,
            threshold_wavelength_nm: threshold_wavelength_m(material)
                .ok()
                .map(|wavelength| wavelength / NANOMETER),
        })
        .collect::<Vec<_>>();

    match format {
        OutputFormat::Json => render_json(&listings),
        OutputFormat::Text => Ok(listings
            .iter()
            .map(|listing| match listing.threshold_wavelength_nm {
                Some(threshold) => format!(
                    "{:<3} W0 = {:.2} eV  λ0 = {:.1} nm\n",
                    listing.symbol, listing.work_function_ev, threshold
                ),
                None => format!(
                    "{:<3} W0 = {:.2} eV\n",
                    listing.symbol, listing.work_function_ev
                ),
            })
            .collect()),
    }
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut rendered =
        serde_json::to_string_pretty(value).context("failed to serialize result as JSON")?;
    rendered.push('\n');
    Ok(rendered)
}

/// Kinetic energy carried off by the electron, in eV, for log lines.
pub(super) fn electron_energy_ev(outcome: &ComputeOutcome) -> Option<f64> {
    match outcome {
        ComputeOutcome::Compton(result) => Some(joules_to_ev(result.electron_kinetic_energy_j())),
        ComputeOutcome::Photoelectric {
            result: PhotoelectricResult::Emission {
                kinetic_energy_j, ..
            },
            ..
        } => Some(joules_to_ev(*kinetic_energy_j)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputFormat, electron_energy_ev, render_materials, render_outcome};
    use photokin_core::common::constants::PI;
    use photokin_core::common::materials::{material_catalog, material_for_symbol};
    use photokin_core::domain::ComputeOutcome;
    use photokin_core::modules::compton::compute_forward;
    use photokin_core::modules::photoelectric::compute;
    use serde_json::Value;

    #[test]
    fn compton_report_floors_incident_energy_in_kev() {
        let outcome = ComputeOutcome::Compton(compute_forward(1.0e-12, PI / 2.0).expect("valid"));
        let text = render_outcome(&outcome, OutputFormat::Text).expect("text renders");
        assert!(text.contains("Énergie du photon incident E0 = 1239 keV"), "{text}");
        assert!(text.contains("λ' = 3.4263"), "{text}");
        assert!(text.contains("Angle de l'électron ψ = -"), "{text}");
        assert!(text.ends_with("m/s\n"));
    }

    #[test]
    fn photoelectric_report_distinguishes_outcomes() {
        let cesium = material_for_symbol("Cs").expect("cesium should be listed");
        let emitted = ComputeOutcome::Photoelectric {
            material: cesium,
            result: compute(400.0e-9, &cesium).expect("valid"),
        };
        let text = render_outcome(&emitted, OutputFormat::Text).expect("text renders");
        assert!(text.contains("Il y a émission d'électrons"));
        assert!(text.contains("Vitesse des électrons émis : "));
        assert!(text.contains(" V\n"));

        let zinc = material_for_symbol("Zn").expect("zinc should be listed");
        let blocked = ComputeOutcome::Photoelectric {
            material: zinc,
            result: compute(800.0e-9, &zinc).expect("valid"),
        };
        let text = render_outcome(&blocked, OutputFormat::Text).expect("text renders");
        assert!(text.contains("Matériau : Zn (W0 = 4.3 eV)"));
        assert!(text.contains("Il n'y a pas d'émission d'électrons"));
        assert!(electron_energy_ev(&blocked).is_none());
    }

    #[test]
    fn json_report_carries_engine_values_unchanged() {
        let result = compute_forward(2.0e-12, 1.0).expect("valid");
        let outcome = ComputeOutcome::Compton(result);
        let json = render_outcome(&outcome, OutputFormat::Json).expect("json renders");
        let parsed: Value = serde_json::from_str(&json).expect("output should be JSON");
        assert_eq!(parsed["mode"], "compton");
        let speed = parsed["electron_speed_m_s"].as_f64().expect("speed");
        assert!((speed - result.electron_speed_m_s).abs() <= 1.0e-12 * result.electron_speed_m_s);
        let scattered = parsed["scattered"]["wavelength_m"].as_f64().expect("wavelength");
        let expected = result.scattered_wavelength_m();
        assert!((scattered - expected).abs() <= 1.0e-12 * expected);
    }

    #[test]
    fn materials_listing_includes_threshold_wavelengths() {
        let text = render_materials(material_catalog(), OutputFormat::Text).expect("renders");
        assert_eq!(text.lines().count(), material_catalog().len());
        assert!(text.starts_with("Cs  W0 = 1.19 eV"));

        let json = render_materials(material_catalog(), OutputFormat::Json).expect("renders");
        let parsed: Value = serde_json::from_str(&json).expect("output should be JSON");
        let threshold = parsed[0]["threshold_wavelength_nm"]
            .as_f64()
            .expect("cesium threshold");
        assert!((threshold - 1041.9).abs() <= 0.5, "got {threshold}");
    }
}
