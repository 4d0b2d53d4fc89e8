use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nominal_orbits::{
    ClassicalElements, OrbitKind, StateVector, semi_latus_rectum_to_state_with_mu,
    semi_major_axis_to_state_with_mu, state_to_elements_detailed,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert between classical elements and inertial state vectors"
)]
pub struct ConvertArgs {
    /// Central body (case-insensitive)
    #[arg(long, global = true, default_value = "EARTH")]
    pub body: String,

    /// Custom body definitions added to the built-in table
    #[arg(long, global = true)]
    pub bodies: Option<PathBuf>,

    #[command(subcommand)]
    pub command: ConvertCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConvertCommand {
    /// Classical elements (km, degrees) to position (km) and velocity (km/s)
    ToState(ToStateArgs),
    /// Position (km) and velocity (km/s) to classical elements
    ToElements(ToElementsArgs),
}

#[derive(Args, Debug)]
pub struct ToStateArgs {
    /// Semi-major axis in km
    #[arg(long, required_unless_present = "semi_latus_rectum_km", conflicts_with = "semi_latus_rectum_km")]
    pub sma_km: Option<f64>,

    /// Semi-latus rectum in km (required for parabolic orbits)
    #[arg(long)]
    pub semi_latus_rectum_km: Option<f64>,

    #[arg(long, default_value_t = 0.0)]
    pub eccentricity: f64,

    #[arg(long, default_value_t = 0.0)]
    pub inclination_deg: f64,

    #[arg(long, default_value_t = 0.0)]
    pub raan_deg: f64,

    #[arg(long, default_value_t = 0.0)]
    pub arg_periapsis_deg: f64,

    #[arg(long, default_value_t = 0.0)]
    pub true_anomaly_deg: f64,
}

#[derive(Args, Debug)]
pub struct ToElementsArgs {
    /// Position x y z in km
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true, required = true)]
    pub position_km: Vec<f64>,

    /// Velocity vx vy vz in km/s
    #[arg(long, num_args = 3, value_names = ["VX", "VY", "VZ"], allow_negative_numbers = true, required = true)]
    pub velocity_km_s: Vec<f64>,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let catalog = crate::body_catalog(args.bodies.as_deref())?;
    let mu = catalog.mu(&args.body)?;
    match args.command {
        ConvertCommand::ToState(elements) => {
            let state = to_state(&elements, mu)?;
            print_state(&state);
        }
        ConvertCommand::ToElements(state) => {
            let position = km_vector(&state.position_km)?;
            let velocity = km_vector(&state.velocity_km_s)?;
            let (elements, kind) = state_to_elements_detailed(&position, &velocity, mu)?;
            print_elements(&elements, kind);
        }
    }
    Ok(())
}

fn to_state(args: &ToStateArgs, mu: f64) -> anyhow::Result<StateVector> {
    let inclination = args.inclination_deg.to_radians();
    let raan = args.raan_deg.to_radians();
    let arg_periapsis = args.arg_periapsis_deg.to_radians();
    let true_anomaly = args.true_anomaly_deg.to_radians();
    let state = match (args.semi_latus_rectum_km, args.sma_km) {
        (Some(p_km), _) => semi_latus_rectum_to_state_with_mu(
            p_km * 1_000.0,
            args.eccentricity,
            inclination,
            raan,
            arg_periapsis,
            true_anomaly,
            mu,
        )?,
        (None, Some(a_km)) => semi_major_axis_to_state_with_mu(
            a_km * 1_000.0,
            args.eccentricity,
            inclination,
            raan,
            arg_periapsis,
            true_anomaly,
            mu,
        )?,
        (None, None) => anyhow::bail!("either --sma-km or --semi-latus-rectum-km is required"),
    };
    Ok(state)
}

fn km_vector(values: &[f64]) -> anyhow::Result<[f64; 3]> {
    match values {
        [x, y, z] => Ok([x * 1_000.0, y * 1_000.0, z * 1_000.0]),
        _ => anyhow::bail!("expected three components, got {}", values.len()),
    }
}

fn print_state(state: &StateVector) {
    let [x, y, z] = state.position_m.map(|c| c / 1_000.0);
    let [vx, vy, vz] = state.velocity_m_s.map(|c| c / 1_000.0);
    println!("position_km: {x:.6} {y:.6} {z:.6}");
    println!("velocity_km_s: {vx:.9} {vy:.9} {vz:.9}");
}

fn print_elements(elements: &ClassicalElements, kind: OrbitKind) {
    println!("orbit: {}", kind.name());
    println!("semi_major_axis_km: {:.6}", elements.semi_major_axis_m / 1_000.0);
    println!("eccentricity: {:.9}", elements.eccentricity);
    println!("inclination_deg: {:.6}", elements.inclination_rad.to_degrees());
    println!("raan_deg: {:.6}", elements.raan_rad.to_degrees());
    println!("arg_periapsis_deg: {:.6}", elements.arg_periapsis_rad.to_degrees());
    println!("true_anomaly_deg: {:.6}", elements.true_anomaly_rad.to_degrees());
}
