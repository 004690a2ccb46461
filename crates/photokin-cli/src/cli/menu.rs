use super::bounds::{
    COMPTON_ANGLE_DEG, COMPTON_WAVELENGTH_PM, INVERSE_ANGLE_DEG, INVERSE_ENERGY_J, MODE_INDEX_MAX,
    MODE_INDEX_MIN, PHOTOELECTRIC_WAVELENGTH_NM,
};
use super::prompt::{BoundedPrompt, PromptError};
use super::report::{OutputFormat, electron_energy_ev, render_outcome};
use photokin_core::common::constants::{nanometers_to_meters, picometers_to_meters};
use photokin_core::common::materials::{material_catalog, material_symbols};
use photokin_core::domain::{
    ComptonInput, ComputeRequest, InverseComptonInput, PhotoelectricInput, PhotokinError,
    SimulationMode,
};
use photokin_core::modules::execute_request;
use std::io::{BufRead, Write};

const MENU_TEXT: &str = "Tapez :\n\
0 pour l'effet Compton\n\
1 pour l'effet photoélectrique\n\
2 pour l'effet Compton inverse";

/// Runs menu rounds until the input stream closes.
pub(super) fn run_session<R: BufRead, W: Write>(
    prompt: &mut BoundedPrompt<R, W>,
    format: OutputFormat,
) -> Result<(), PromptError> {
    loop {
        match run_round(prompt, format) {
            Ok(()) => {}
            Err(PromptError::EndOfInput) => {
                tracing::debug!("input closed, leaving interactive menu");
                return Ok(());
            }
            Err(error) => return Err(error),
        }
    }
}

fn run_round<R: BufRead, W: Write>(
    prompt: &mut BoundedPrompt<R, W>,
    format: OutputFormat,
) -> Result<(), PromptError> {
    prompt.say(MENU_TEXT)?;
    let index = prompt.get_int(MODE_INDEX_MIN, MODE_INDEX_MAX, "")?;
    let Some(mode) = SimulationMode::from_index(index) else {
        return Ok(());
    };

    let request = match mode {
        SimulationMode::Compton => prompt_compton(prompt)?,
        SimulationMode::Photoelectric => prompt_photoelectric(prompt)?,
        SimulationMode::InverseCompton => prompt_inverse_compton(prompt)?,
    };
    tracing::debug!(%mode, ?request, "dispatching interactive request");

    match execute_request(&request) {
        Ok(outcome) => {
            tracing::debug!(
                %mode,
                electron_energy_ev = ?electron_energy_ev(&outcome),
                "interactive computation finished"
            );
            match render_outcome(&outcome, format) {
                Ok(report) => prompt.say(report.trim_end())?,
                Err(error) => prompt.say(&format!("{error:#}"))?,
            }
        }
        Err(error) => report_engine_error(prompt, &error)?,
    }
    Ok(())
}

fn report_engine_error<R: BufRead, W: Write>(
    prompt: &mut BoundedPrompt<R, W>,
    error: &PhotokinError,
) -> Result<(), PromptError> {
    tracing::warn!(placeholder = error.placeholder(), "interactive computation rejected");
    prompt.say(&error.diagnostic_line())
}

fn prompt_compton<R: BufRead, W: Write>(
    prompt: &mut BoundedPrompt<R, W>,
) -> Result<ComputeRequest, PromptError> {
    prompt.say("Choisissez l'angle du photon diffusé en degré")?;
    let angle_deg = prompt.get_float(COMPTON_ANGLE_DEG.min, COMPTON_ANGLE_DEG.max, "")?;
    prompt.say("Choisissez la longueur d'onde du photon incident :")?;
    let wavelength_pm = prompt.get_float(
        COMPTON_WAVELENGTH_PM.min,
        COMPTON_WAVELENGTH_PM.max,
        "facteur 10^-12 m : ",
    )?;

    Ok(ComputeRequest::Compton(ComptonInput {
        incident_wavelength_m: picometers_to_meters(wavelength_pm),
        scattering_angle_deg: angle_deg,
    }))
}

fn prompt_photoelectric<R: BufRead, W: Write>(
    prompt: &mut BoundedPrompt<R, W>,
) -> Result<ComputeRequest, PromptError> {
    prompt.say("Choisissez une longueur d'onde :")?;
    let wavelength_nm = prompt.get_float(
        PHOTOELECTRIC_WAVELENGTH_NM.min,
        PHOTOELECTRIC_WAVELENGTH_NM.max,
        "en nm : ",
    )?;

    prompt.say("Choisissez un matériau :")?;
    prompt.say(&material_symbols().collect::<Vec<_>>().join(","))?;
    let material = prompt.get_choice(material_catalog(), |material| material.symbol, "")?;

    Ok(ComputeRequest::Photoelectric(PhotoelectricInput {
        wavelength_m: nanometers_to_meters(wavelength_nm),
        material: *material,
    }))
}

fn prompt_inverse_compton<R: BufRead, W: Write>(
    prompt: &mut BoundedPrompt<R, W>,
) -> Result<ComputeRequest, PromptError> {
    prompt.say("Énergie de l'électron")?;
    let electron_energy_j = prompt.get_float(INVERSE_ENERGY_J.min, INVERSE_ENERGY_J.max, "J : ")?;
    prompt.say("Énergie du photon")?;
    let incident_photon_energy_j =
        prompt.get_float(INVERSE_ENERGY_J.min, INVERSE_ENERGY_J.max, "J : ")?;
    prompt.say("Angle du photon incident")?;
    let incidence_angle_deg =
        prompt.get_float(INVERSE_ANGLE_DEG.min, INVERSE_ANGLE_DEG.max, "degré : ")?;
    prompt.say("Angle pris par le photon rétro-diffusé")?;
    let scatter_angle_deg =
        prompt.get_float(INVERSE_ANGLE_DEG.min, INVERSE_ANGLE_DEG.max, "degré : ")?;

    Ok(ComputeRequest::InverseCompton(InverseComptonInput {
        electron_energy_j,
        incident_photon_energy_j,
        incidence_angle_deg,
        scatter_angle_deg,
    }))
}

#[cfg(test)]
mod tests {
    use super::run_session;
    use crate::cli::prompt::BoundedPrompt;
    use crate::cli::report::OutputFormat;
    use std::io::Cursor;

    fn run_transcript(input: &str) -> String {
        let mut prompt = BoundedPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_session(&mut prompt, OutputFormat::Text).expect("session should end cleanly");
        String::from_utf8(prompt.into_writer()).expect("transcript should be UTF-8")
    }

    #[test]
    fn compton_round_prints_report_then_menu_again() {
        let output = run_transcript("0\n90\n1\n");
        assert!(output.contains("Choisissez l'angle du photon diffusé en degré"));
        assert!(output.contains("Énergie du photon incident E0 = 1239 keV"));
        assert_eq!(output.matches("0 pour l'effet Compton").count(), 2);
    }

    #[test]
    fn photoelectric_round_retries_unknown_material() {
        let output = run_transcript("1\n400\nAu\nCs\n");
        assert!(output.contains("Cs,K,Na,Li,Zn,Co,Al,Pb,Fe,Cu,Ag"));
        assert!(output.contains("Au n'est pas dans la liste : Cs,K,Na"));
        assert!(output.contains("Il y a émission d'électrons"));
    }

    #[test]
    fn invalid_mode_is_asked_again() {
        let output = run_transcript("7\n1\n800\nZn\n");
        assert!(output.contains("7 n'est pas un nombre entier entre 0 et 2"));
        assert!(output.contains("Il n'y a pas d'émission d'électrons"));
    }

    #[test]
    fn inverse_round_reports_engine_rejection_and_continues() {
        let output = run_transcript("2\n0\n1e-19\n10\n10\n2\n8e-11\n3e-19\n0\n0\n");
        assert!(output.contains("ERROR: [INPUT.INVALID_ENERGY]"));
        assert_eq!(output.matches("Énergie du photon diffusé : ").count(), 1);
        assert!(output.trim_end().ends_with("Tapez :\n0 pour l'effet Compton\n1 pour l'effet photoélectrique\n2 pour l'effet Compton inverse"));
    }

    #[test]
    fn empty_input_ends_immediately() {
        let output = run_transcript("");
        assert!(output.contains("Tapez :"));
    }
}
