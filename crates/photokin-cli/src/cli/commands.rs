use super::CliError;
use super::bounds::{
    COMPTON_ANGLE_DEG, COMPTON_WAVELENGTH_PM, INVERSE_ANGLE_DEG, INVERSE_ENERGY_J,
    PHOTOELECTRIC_WAVELENGTH_NM,
};
use super::menu::run_session;
use super::prompt::BoundedPrompt;
use super::report::{OutputFormat, electron_energy_ev, render_materials, render_outcome};
use anyhow::Context;
use photokin_core::common::constants::{nanometers_to_meters, picometers_to_meters};
use photokin_core::common::materials::{material_catalog, material_for_symbol, material_symbols};
use photokin_core::domain::{
    ComptonInput, ComputeRequest, InverseComptonInput, PhotoelectricInput, PhotokinError,
};
use photokin_core::modules::execute_request;
use std::io::Write;

#[derive(clap::Args)]
pub(super) struct ComptonArgs {
    /// Scattering angle of the photon in degrees
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    angle_deg: f64,

    /// Incident photon wavelength in units of 10^-12 m
    #[arg(long, value_name = "PM", allow_negative_numbers = true)]
    wavelength_pm: f64,

    #[command(flatten)]
    output: OutputFlags,
}

#[derive(clap::Args)]
pub(super) struct PhotoelectricArgs {
    /// Incident light wavelength in nanometers
    #[arg(long, value_name = "NM", allow_negative_numbers = true)]
    wavelength_nm: f64,

    /// Element symbol of the photocathode (see `photokin materials`)
    #[arg(long, value_name = "SYMBOL")]
    material: String,

    #[command(flatten)]
    output: OutputFlags,
}

#[derive(clap::Args)]
pub(super) struct InverseComptonArgs {
    /// Electron energy in joules
    #[arg(long, value_name = "J", allow_negative_numbers = true)]
    electron_energy_j: f64,

    /// Incident photon energy in joules
    #[arg(long, value_name = "J", allow_negative_numbers = true)]
    photon_energy_j: f64,

    /// Incidence angle of the photon in degrees
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    incidence_deg: f64,

    /// Angle taken by the back-scattered photon in degrees
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    scatter_deg: f64,

    #[command(flatten)]
    output: OutputFlags,
}

#[derive(clap::Args)]
pub(super) struct MaterialsArgs {
    #[command(flatten)]
    output: OutputFlags,
}

#[derive(clap::Args)]
pub(super) struct OutputFlags {
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

pub(super) fn run_menu_command() -> Result<i32, CliError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompt = BoundedPrompt::new(stdin.lock(), stdout.lock());
    run_session(&mut prompt, OutputFormat::Text)
        .context("interactive session failed")
        .map_err(CliError::from)?;
    Ok(0)
}

pub(super) fn run_compton_command(args: ComptonArgs) -> Result<i32, CliError> {
    let angle_deg = COMPTON_ANGLE_DEG.check("--angle-deg", args.angle_deg)?;
    let wavelength_pm = COMPTON_WAVELENGTH_PM.check("--wavelength-pm", args.wavelength_pm)?;

    let request = ComputeRequest::Compton(ComptonInput {
        incident_wavelength_m: picometers_to_meters(wavelength_pm),
        scattering_angle_deg: angle_deg,
    });
    compute_and_print(&request, args.output.format)
}

pub(super) fn run_photoelectric_command(args: PhotoelectricArgs) -> Result<i32, CliError> {
    let wavelength_nm =
        PHOTOELECTRIC_WAVELENGTH_NM.check("--wavelength-nm", args.wavelength_nm)?;
    let material = material_for_symbol(&args.material).ok_or_else(|| {
        CliError::Compute(PhotokinError::input_validation(
            "INPUT.UNKNOWN_MATERIAL",
            format!(
                "unknown material '{}'; expected one of {}",
                args.material,
                material_symbols().collect::<Vec<_>>().join(",")
            ),
        ))
    })?;

    let request = ComputeRequest::Photoelectric(PhotoelectricInput {
        wavelength_m: nanometers_to_meters(wavelength_nm),
        material,
    });
    compute_and_print(&request, args.output.format)
}

pub(super) fn run_inverse_compton_command(args: InverseComptonArgs) -> Result<i32, CliError> {
    let request = ComputeRequest::InverseCompton(InverseComptonInput {
        electron_energy_j: INVERSE_ENERGY_J.check("--electron-energy-j", args.electron_energy_j)?,
        incident_photon_energy_j: INVERSE_ENERGY_J
            .check("--photon-energy-j", args.photon_energy_j)?,
        incidence_angle_deg: INVERSE_ANGLE_DEG.check("--incidence-deg", args.incidence_deg)?,
        scatter_angle_deg: INVERSE_ANGLE_DEG.check("--scatter-deg", args.scatter_deg)?,
    });
    compute_and_print(&request, args.output.format)
}

pub(super) fn run_materials_command(args: MaterialsArgs) -> Result<i32, CliError> {
    let rendered = render_materials(material_catalog(), args.output.format)?;
    write_stdout(&rendered)?;
    Ok(0)
}

fn compute_and_print(request: &ComputeRequest, format: OutputFormat) -> Result<i32, CliError> {
    let mode = request.mode();
    tracing::debug!(%mode, ?request, "dispatching request");

    let outcome = execute_request(request).map_err(CliError::Compute)?;
    tracing::debug!(
        %mode,
        electron_energy_ev = ?electron_energy_ev(&outcome),
        "computation finished"
    );

    let rendered = render_outcome(&outcome, format)?;
    write_stdout(&rendered)?;
    Ok(0)
}

fn write_stdout(rendered: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write report to stdout")?;
    Ok(())
}
